use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Body of the data-item endpoint, keyed by the `data-item` marker value.
pub type DataItems = BTreeMap<String, ItemUpdate>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "attribute_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data: Vec<AttrUpdate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttrUpdate {
    #[serde(default)]
    pub key: String,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
}

/// Decodes an endpoint body. Only a body that is not a JSON object fails;
/// entries that are not update objects are dropped and the rest kept.
pub fn decode_items(body: &[u8]) -> Result<DataItems, serde_json::Error> {
    let raw: BTreeMap<String, Value> = serde_json::from_slice(body)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<ItemUpdate>(value) {
            Ok(update) => Some((key, update)),
            Err(err) => {
                debug!(%key, "skipping data item: {err}");
                None
            }
        })
        .collect())
}

/// Strings as-is, numbers and booleans in their JSON spelling, anything else
/// as absent.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

/// A non-list `data` is ignored, as is any malformed entry inside the list.
fn attribute_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<AttrUpdate>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}

impl ItemUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            data: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.data.push(AttrUpdate {
            key: key.into(),
            content: Some(content.into()),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let items: DataItems = serde_json::from_str(
            r#"{"foo":{"content":"bar"},"baz":{"data":[{"key":"data-seconds","content":"3"},{"key":"title"}]}}"#,
        )
        .unwrap();

        assert_eq!(items["foo"], ItemUpdate::content("bar"));
        assert_eq!(items["baz"].content, None);
        assert_eq!(items["baz"].data.len(), 2);
        assert_eq!(items["baz"].data[1].content, None);
    }

    #[test]
    fn bad_entries_are_dropped_alone() {
        let items = decode_items(
            br#"{"foo":{"content":"bar"},"nil":null,"word":"x","list":{"data":"x"},"num":{"content":21.5}}"#,
        )
        .unwrap();

        assert_eq!(items["foo"], ItemUpdate::content("bar"));
        assert!(!items.contains_key("nil"));
        assert!(!items.contains_key("word"));
        assert_eq!(items["list"], ItemUpdate::default());
        assert_eq!(items["num"].content.as_deref(), Some("21.5"));
    }

    #[test]
    fn malformed_attribute_entries_are_skipped() {
        let items = decode_items(
            br#"{"foo":{"data":[{"key":"data-seconds","content":7},{"key":3,"content":"x"},"junk"]}}"#,
        )
        .unwrap();

        assert_eq!(items["foo"], ItemUpdate::default().with_attribute("data-seconds", "7"));
    }

    #[test]
    fn only_non_object_bodies_fail() {
        assert!(decode_items(b"not json").is_err());
        assert!(decode_items(b"[1, 2]").is_err());
        assert_eq!(decode_items(b"{}").unwrap(), DataItems::new());
    }

    #[test]
    fn serializes_without_empty_fields() {
        let update = ItemUpdate::content("1m 0s").with_attribute("data-seconds", "60");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": "1m 0s", "data": [{"key": "data-seconds", "content": "60"}]})
        );
        assert_eq!(serde_json::to_string(&ItemUpdate::default()).unwrap(), "{}");
    }
}
