use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::BoxFuture;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::{query, query_scalar, types::Json};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::Document;

/// A schema-less store that keeps JSON documents in named collections.
pub trait DocumentStore: Send + Sync {
    /// Database name the store writes to.
    fn name(&self) -> &str;

    fn insert_one<'a>(&'a self, collection: &'a str, document: Value) -> BoxFuture<'a, Result<Uuid>>;

    /// Collections that currently hold at least one document.
    fn list_collections(&self) -> BoxFuture<'_, Result<Vec<String>>>;
}

/// Opens the store when both database keys are configured.
///
/// The pool connects lazily, so an unreachable server does not fail startup;
/// individual writes fail instead and are absorbed by [`persist`].
pub fn connect(config: &AppConfig) -> Option<Arc<dyn DocumentStore>> {
    let Some((url, name)) = config.database() else {
        info!("DATABASE_URL or DATABASE_NAME not set, persistence disabled");
        return None;
    };

    match PgDocumentStore::connect_lazy(url, name) {
        Ok(store) => {
            info!("Persistence enabled for database {}", name);
            Some(Arc::new(store))
        }
        Err(e) => {
            warn!("Invalid database configuration, persistence disabled: {:?}", e);
            None
        }
    }
}

/// Best-effort write of one record to its collection.
///
/// Returns the new document id, or `None` when there is no store or the write failed.
/// Callers never treat `None` as a failed request.
pub async fn persist<T: Document>(store: Option<&dyn DocumentStore>, record: &T) -> Option<Uuid> {
    let store = store?;

    let document = match serde_json::to_value(record) {
        Ok(document) => document,
        Err(e) => {
            warn!("Failed to serialize {} document: {:?}", T::COLLECTION, e);
            return None;
        }
    };

    match store.insert_one(T::COLLECTION, document).await {
        Ok(id) => {
            debug!("Stored {} document {}", T::COLLECTION, id);
            Some(id)
        }
        Err(e) => {
            warn!("Failed to store {} document: {:?}", T::COLLECTION, e);
            None
        }
    }
}

pub struct PgDocumentStore {
    pool: PgPool,
    name: String,
    schema_ready: OnceCell<()>,
}

impl PgDocumentStore {
    pub fn connect_lazy(url: &str, name: &str) -> Result<Self> {
        let options = PgConnectOptions::from_str(url)
            .context("DATABASE_URL is not a valid Postgres connection string")?
            .database(name);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy_with(options);

        Ok(PgDocumentStore {
            pool,
            name: name.to_string(),
            schema_ready: OnceCell::new(),
        })
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.schema_ready
            .get_or_try_init(|| async {
                query(
                    r#"
                    CREATE TABLE IF NOT EXISTS documents (
                        id UUID PRIMARY KEY,
                        collection TEXT NOT NULL,
                        data JSONB NOT NULL,
                        created_at TIMESTAMPTZ NOT NULL,
                        updated_at TIMESTAMPTZ NOT NULL
                    )
                    "#,
                )
                .execute(&self.pool)
                .await?;

                query("CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection)")
                    .execute(&self.pool)
                    .await?;

                info!("Document table ready in {}", self.name);
                Ok::<(), anyhow::Error>(())
            })
            .await?;
        Ok(())
    }
}

impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn insert_one<'a>(&'a self, collection: &'a str, document: Value) -> BoxFuture<'a, Result<Uuid>> {
        Box::pin(async move {
            self.ensure_schema().await?;

            let start = Instant::now();
            let id = Uuid::new_v4();
            let now = Utc::now();

            query(
                r#"
                INSERT INTO documents (id, collection, data, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(id)
            .bind(collection)
            .bind(Json(stamped(document, now)))
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .with_context(|| format!("insert into {} failed", collection))?;

            debug!("Insert into {} took {:?}", collection, start.elapsed());
            Ok(id)
        })
    }

    fn list_collections(&self) -> BoxFuture<'_, Result<Vec<String>>> {
        Box::pin(async move {
            self.ensure_schema().await?;

            let collections = query_scalar::<_, String>(
                r#"
                SELECT DISTINCT collection FROM documents
                ORDER BY collection
                "#,
            )
            .fetch_all(&self.pool)
            .await?;

            Ok(collections)
        })
    }
}

/// Adds the creation and update timestamps every stored document carries.
fn stamped(mut document: Value, now: chrono::DateTime<Utc>) -> Value {
    if let Value::Object(map) = &mut document {
        map.insert("created_at".to_string(), Value::String(now.to_rfc3339()));
        map.insert("updated_at".to_string(), Value::String(now.to_rfc3339()));
    }
    document
}
