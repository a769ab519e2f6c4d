//! Typed field values and the record lookup seam.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A single scorable field value on a candidate record.
///
/// The scalar-vs-list distinction is carried by the value itself, so a
/// condition declared over the wrong shape is detected instead of being
/// iterated by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-form text, compared after trimming and lowercasing.
    Text(String),
    /// Numeric value, compared through its decimal string form.
    Number(f64),
    /// Ordered sequence of strings, each element matched independently.
    List(Vec<String>),
}

impl FieldValue {
    /// Convert a raw JSON value into a scorable field value.
    ///
    /// Strings, numbers and all-string arrays map directly; everything else
    /// (null, booleans, objects, mixed arrays) is not scorable and returns
    /// `None`, which readers treat as an absent field.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(text) => Some(Self::Text(text.clone())),
            serde_json::Value::Number(number) => number.as_f64().map(Self::Number),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Field lookup seam between the scorer and candidate records.
///
/// Absent fields never match and never penalize. Implementations return
/// [`Cow`] so map-backed records lend their values while adapters (such as
/// raw JSON objects) build them on the fly.
pub trait Record {
    /// Look up a field by name.
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>>;
}

impl<S: BuildHasher> Record for HashMap<String, FieldValue, S> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Record for ahash::AHashMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Record for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

/// Raw JSON objects can be scored directly; fields that do not convert to a
/// [`FieldValue`] read as absent.
impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).and_then(FieldValue::from_json).map(Cow::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("text"), Some(FieldValue::Text("text".to_owned())))]
    #[case(json!(42), Some(FieldValue::Number(42.0)))]
    #[case(json!(1.5), Some(FieldValue::Number(1.5)))]
    #[case(json!(["a", "b"]), Some(FieldValue::List(vec!["a".to_owned(), "b".to_owned()])))]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    #[case(json!({"nested": 1}), None)]
    #[case(json!(["a", 1]), None)]
    fn from_json_conversion(
        #[case] value: serde_json::Value,
        #[case] expected: Option<FieldValue>,
    ) {
        check!(FieldValue::from_json(&value) == expected);
    }

    #[test]
    fn json_object_unscorable_field_reads_as_absent() {
        let object = json!({"name": "test", "private": true})
            .as_object()
            .cloned()
            .unwrap();
        check!(object.field("name").is_some());
        check!(object.field("private").is_none());
        check!(object.field("missing").is_none());
    }

    #[test]
    fn untagged_deserialization_covers_all_shapes() {
        let record: HashMap<String, FieldValue> =
            serde_json::from_str(r#"{"name": "x", "downloads": 7, "keywords": ["a"]}"#).unwrap();
        check!(record["name"] == FieldValue::Text("x".to_owned()));
        check!(record["downloads"] == FieldValue::Number(7.0));
        check!(record["keywords"] == FieldValue::List(vec!["a".to_owned()]));
    }
}
