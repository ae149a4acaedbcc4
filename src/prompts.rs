pub struct Prompts;

impl Prompts {
    pub const SUGGESTIONS: [&'static str; 3] = [
        "Increase top-of-funnel campaigns by 10% for A/B test",
        "Optimize pricing tiers based on elasticity",
        "Prioritize retention with targeted win-back emails",
    ];

    pub const FORECAST_NOTE: &'static str = "Mock forecast. Replace with your ML model later.";

    pub const INGEST_RECORDED: &'static str = "Dataset ingest recorded";

    pub const ROOT_GREETING: &'static str = "Hello from the Actix backend!";
    pub const API_GREETING: &'static str = "Hello from the backend API!";
}

/// Rule-based recommendations; the objective and constraints do not influence the list yet.
pub fn suggestions() -> Vec<String> {
    Prompts::SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Echo-style assistant reply.
pub fn chat_reply(message: &str) -> String {
    format!("You said: {}. For forecasting, try POST /api/forecast.", message)
}
