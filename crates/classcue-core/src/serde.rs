use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Treats a missing or empty query value as `None`.
///
/// Browsers submit `?period_id=` when a select is cleared; without this the
/// extractor would reject the request instead of dropping the filter.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Query {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        id: Option<Uuid>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let q: Query = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert!(q.id.is_none());
    }

    #[test]
    fn test_missing_field_is_none() {
        let q: Query = serde_json::from_str("{}").unwrap();
        assert!(q.id.is_none());
    }

    #[test]
    fn test_valid_value_parses() {
        let id = Uuid::new_v4();
        let q: Query = serde_json::from_str(&format!(r#"{{"id":"{}"}}"#, id)).unwrap();
        assert_eq!(q.id, Some(id));
    }

    #[test]
    fn test_invalid_value_errors() {
        let q: Result<Query, _> = serde_json::from_str(r#"{"id":"not-a-uuid"}"#);
        assert!(q.is_err());
    }
}
