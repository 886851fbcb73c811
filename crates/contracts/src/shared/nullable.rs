//! `null` on the wire for a plain field.
//!
//! `#[serde(default)]` only covers a missing key; the orders API also sends
//! explicit `null` for empty fields. Use together with `default`:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "nullable::or_default")]
//! pub address: String,
//! ```

use serde::{Deserialize, Deserializer};

/// `null` → `T::default()`, anything else is decoded as `T`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "or_default")]
        name: String,
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let row: Row = serde_json::from_str(r#"{ "name": null }"#).unwrap();
        assert_eq!(row.name, "");
        assert!(row.tags.is_empty());
    }

    #[test]
    fn test_value_is_kept() {
        let row: Row = serde_json::from_str(r#"{ "name": "Team A", "tags": ["x"] }"#).unwrap();
        assert_eq!(row.name, "Team A");
        assert_eq!(row.tags, vec!["x".to_string()]);
    }

    #[test]
    fn test_wrong_type_still_fails() {
        assert!(serde_json::from_str::<Row>(r#"{ "name": 5 }"#).is_err());
    }
}
