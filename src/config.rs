use shuttle_runtime::SecretStore;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl AppConfig {
    /// Both keys are optional; a missing key disables persistence instead of failing startup.
    pub fn new(secret_store: &SecretStore) -> Self {
        AppConfig {
            database_url: lookup(secret_store, "DATABASE_URL"),
            database_name: lookup(secret_store, "DATABASE_NAME"),
        }
    }

    /// Connection string and database name, only when both are configured.
    pub fn database(&self) -> Option<(&str, &str)> {
        match (&self.database_url, &self.database_name) {
            (Some(url), Some(name)) => Some((url.as_str(), name.as_str())),
            _ => None,
        }
    }
}

// Secrets.toml wins over the process environment
fn lookup(secret_store: &SecretStore, key: &str) -> Option<String> {
    let value = secret_store
        .get(key)
        .or_else(|| std::env::var(key).ok())
        .filter(|value| !value.trim().is_empty());

    debug!("Config key {} is {}", key, if value.is_some() { "set" } else { "unset" });
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_requires_both_keys() {
        let config = AppConfig {
            database_url: Some("postgres://localhost".to_string()),
            database_name: None,
        };
        assert!(config.database().is_none());

        let config = AppConfig {
            database_name: Some("analytics".to_string()),
            ..config
        };
        assert_eq!(
            config.database(),
            Some(("postgres://localhost", "analytics"))
        );
    }

    #[test]
    fn default_config_disables_persistence() {
        assert!(AppConfig::default().database().is_none());
    }
}
