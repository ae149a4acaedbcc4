mod analytics;
mod chat;
mod status;

pub use analytics::*;
pub use chat::*;
pub use status::*;
