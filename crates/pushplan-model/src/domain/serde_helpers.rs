use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` the same as an absent key.
///
/// Flag resolvers upstream commonly encode "not supplied" as an empty string.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
