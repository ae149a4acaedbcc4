use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{lax_unsigned, null_as_empty, Document};

/// Metadata for a dataset that a client has ingested.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DatasetIngest {
    /// Dataset name
    pub name: String,
    /// Source of the data, e.g. "csv", "s3", "api"
    pub source: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<String>,
    /// Number of rows ingested
    #[serde(default, deserialize_with = "lax_unsigned")]
    pub rows: u64,
    pub notes: Option<String>,
}

impl Document for DatasetIngest {
    const COLLECTION: &'static str = "datasetingest";
    const FIELDS: &'static [&'static str] = &["name", "source", "fields", "rows", "notes"];
}
