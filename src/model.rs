//! Item entity and its JSON wire representation.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored item. `id` is assigned by the storage engine and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Request body for create and update.
///
/// Decoding is lenient in the same places a stock JSON object decoder is:
/// keys match `name`/`id` ignoring ASCII case, `null` leaves a field at its
/// default, unknown keys are skipped, and anything after the first JSON value
/// is ignored. An `id` is type-checked as an integer but never used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
}

impl ItemPayload {
    /// Decode the first JSON value in a raw request body regardless of its declared content type.
    /// A bare `null` yields the default payload.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<ItemPayload>>();
        match values.next() {
            Some(first) => Ok(first?.unwrap_or_default()),
            None => Err(de::Error::custom("empty request body")),
        }
    }

    pub fn into_item(self, id: i64) -> Item {
        Item { id, name: self.name }
    }
}

impl<'de> Deserialize<'de> for ItemPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = ItemPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an item object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<ItemPayload, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = ItemPayload::default();
        // Keys apply in document order, so a repeated key keeps its last value.
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    payload.name = name;
                }
            } else if key.eq_ignore_ascii_case("id") {
                map.next_value::<Option<i64>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(body: &str) -> String {
        ItemPayload::from_body(body.as_bytes()).unwrap().name
    }

    #[test]
    fn item_serializes_as_id_and_name() {
        let item = Item { id: 7, name: "Widget".into() };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"id": 7, "name": "Widget"})
        );
    }

    #[test]
    fn empty_object_decodes_to_empty_name() {
        assert_eq!(name_of("{}"), "");
    }

    #[test]
    fn body_id_is_ignored() {
        let payload = ItemPayload::from_body(br#"{"id": 42, "name": "Gadget"}"#).unwrap();
        assert_eq!(payload.into_item(3), Item { id: 3, name: "Gadget".into() });
    }

    #[test]
    fn null_name_and_null_body_give_empty_name() {
        assert_eq!(name_of(r#"{"name": null}"#), "");
        assert_eq!(name_of("null"), "");
        assert_eq!(name_of(r#"{"id": null, "name": "x"}"#), "x");
    }

    #[test]
    fn only_first_value_is_read() {
        assert_eq!(name_of(r#"{"name":"a"} x"#), "a");
        assert_eq!(name_of(r#"{"name":"a"}{"name":"b"}"#), "a");
        assert_eq!(name_of("  {\"name\":\"a\"}\n"), "a");
    }

    #[test]
    fn keys_match_ignoring_case() {
        assert_eq!(name_of(r#"{"Name":"Cap"}"#), "Cap");
        assert_eq!(name_of(r#"{"NAME":"up"}"#), "up");
        assert_eq!(name_of(r#"{"name":"a","NAME":"b"}"#), "b");
        assert_eq!(name_of(r#"{"ID":5,"nAmE":"mixed"}"#), "mixed");
    }

    #[test]
    fn unknown_keys_are_skipped() {
        assert_eq!(name_of(r#"{"colour":[1,{"x":2}],"name":"kept"}"#), "kept");
    }

    #[test]
    fn rejects_malformed_and_mistyped_bodies() {
        for body in [
            "not json",
            "",
            "   ",
            r#"{"name": 5}"#,
            r#"{"name": "unterminated"#,
            r#"{"id": "seven"}"#,
            r#"{"id": 1.5}"#,
            "[1,2]",
            r#""just a string""#,
            "12",
        ] {
            assert!(ItemPayload::from_body(body.as_bytes()).is_err(), "{body:?}");
        }
    }
}
