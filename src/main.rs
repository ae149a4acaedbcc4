use shuttle_actix_web::ShuttleActixWeb;
use shuttle_runtime::SecretStore;
use std::sync::Arc;

use actix_web::web::ServiceConfig;

mod config;
mod docs;
mod forecast;
mod middleware;
mod models;
mod prompts;
mod routes;
mod store;
mod types;

use config::AppConfig;
use store::DocumentStore;

/// Process-wide state, built once at startup and shared read-only by every handler.
pub struct AppState {
    pub config: AppConfig,
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secret_store: SecretStore,
) -> ShuttleActixWeb<impl FnOnce(&mut ServiceConfig) + Send + Clone + 'static> {
    let app_config = AppConfig::new(&secret_store);
    let store = store::connect(&app_config);

    let app_state = Arc::new(AppState {
        config: app_config,
        store,
    });

    Ok(routes::configure(app_state).into())
}

#[cfg(test)]
pub(crate) fn test_state(store: Option<Arc<dyn DocumentStore>>) -> Arc<AppState> {
    Arc::new(AppState {
        config: AppConfig::default(),
        store,
    })
}
