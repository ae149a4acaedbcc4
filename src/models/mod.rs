use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

pub mod dataset_ingest;
pub mod forecast_request;
pub mod message;
pub mod recommendation_request;

pub use dataset_ingest::DatasetIngest;
pub use forecast_request::ForecastRequest;
pub use message::{ChatMessage, Role};
pub use recommendation_request::RecommendationRequest;

/// A record that is persisted verbatim as one document.
pub trait Document: Serialize {
    /// Lowercased entity name, also the collection it is stored under.
    const COLLECTION: &'static str;
    /// Declared field names, in declaration order.
    const FIELDS: &'static [&'static str];
}

/// Accepts an explicit `null` wherever an empty collection is the default.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unsigned integer that also accepts whole-number floats such as `3.0`.
pub(crate) fn lax_unsigned<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(u64),
        Float(f64),
    }

    let value = match Number::deserialize(deserializer)? {
        Number::Integer(value) => value,
        Number::Float(value) if value.fract() == 0.0 && value >= 0.0 && value <= u64::MAX as f64 => {
            value as u64
        }
        Number::Float(value) => {
            return Err(D::Error::custom(format!(
                "expected a non-negative whole number, got {}",
                value
            )))
        }
    };

    T::try_from(value).map_err(|_| D::Error::custom(format!("{} is out of range", value)))
}

#[cfg(test)]
pub(crate) fn serialized_keys<T: Document>(record: &T) -> Vec<String> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
        other => panic!("{} did not serialize to an object: {:?}", T::COLLECTION, other),
    }
}
