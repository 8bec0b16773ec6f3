//! Binding sections of a Wrangler configuration.
//!
//! Every field defaults to empty so partially written entries still load;
//! unknown keys are ignored and an explicit `null` reads as empty.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TriggersConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub crons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueuesConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub producers: Vec<QueueProducer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueueProducer {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub queue: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Workflow {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
}

/// Single-binding sections (`browser`, `images`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VpcService {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct R2Bucket {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bucket_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KvNamespace {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct D1Database {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pipeline {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pipeline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VectorizeIndex {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub index_name: String,
}

/// Several secrets may live in the same store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecretsStoreSecret {
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub store_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secret_name: String,
}
