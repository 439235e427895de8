//! Template document model and the renderer parameter naming convention.
//!
//! The skin hands the host's Mustache renderer a key-value document. Keys
//! encode the kind of their value in the leading segment:
//!
//! - `is-` / `has-` for booleans
//! - `msg-` for interface message text
//! - `html-` for raw HTML
//! - `data-` for nested parameters passed directly to a template partial
//! - `array-` for lists of any values
//!
//! Conditionally used values must be [`TemplateValue::Null`] to indicate
//! absence, never `false` or an empty string. Keys without a recognized
//! prefix carry no kind commitment.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CitizenError, Result};

/// Value kind a key prefix commits its entry to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `is-` / `has-` prefix.
    Bool,
    /// `html-` prefix.
    Html,
    /// `msg-` prefix.
    Message,
    /// `data-` prefix.
    Data,
    /// `array-` prefix.
    Array,
}

impl KeyKind {
    /// Parse the kind encoded in a parameter key, if any.
    pub fn of(key: &str) -> Option<KeyKind> {
        if key.starts_with("is-") || key.starts_with("has-") {
            Some(KeyKind::Bool)
        } else if key.starts_with("html-") {
            Some(KeyKind::Html)
        } else if key.starts_with("msg-") {
            Some(KeyKind::Message)
        } else if key.starts_with("data-") {
            Some(KeyKind::Data)
        } else if key.starts_with("array-") {
            Some(KeyKind::Array)
        } else {
            None
        }
    }

    fn describe(self) -> &'static str {
        match self {
            KeyKind::Bool => "a boolean",
            KeyKind::Html => "raw HTML",
            KeyKind::Message => "message text",
            KeyKind::Data => "nested data",
            KeyKind::Array => "a list",
        }
    }
}

/// A single template parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    /// Explicit absence marker for conditionally used values.
    Null,
    Bool(bool),
    String(String),
    Array(Vec<TemplateValue>),
    Data(TemplateData),
}

impl TemplateValue {
    /// Whether this value is non-empty under the host platform's notion of
    /// emptiness: null, `false`, `""`, `"0"`, and empty collections are
    /// all empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            TemplateValue::Null => false,
            TemplateValue::Bool(b) => *b,
            TemplateValue::String(s) => !s.is_empty() && s != "0",
            TemplateValue::Array(items) => !items.is_empty(),
            TemplateValue::Data(data) => !data.is_empty(),
        }
    }

    /// Whether this value satisfies the kind a key prefix demands.
    /// `Null` satisfies every kind (conditional absence).
    pub fn matches(&self, kind: KeyKind) -> bool {
        match (self, kind) {
            (TemplateValue::Null, _) => true,
            (TemplateValue::Bool(_), KeyKind::Bool) => true,
            (TemplateValue::String(_), KeyKind::Html | KeyKind::Message) => true,
            (TemplateValue::Data(_), KeyKind::Data) => true,
            (TemplateValue::Array(_), KeyKind::Array) => true,
            _ => false,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            TemplateValue::Null => "null",
            TemplateValue::Bool(_) => "bool",
            TemplateValue::String(_) => "string",
            TemplateValue::Array(_) => "array",
            TemplateValue::Data(_) => "nested data",
        }
    }
}

impl From<bool> for TemplateValue {
    fn from(b: bool) -> Self {
        TemplateValue::Bool(b)
    }
}

impl From<String> for TemplateValue {
    fn from(s: String) -> Self {
        TemplateValue::String(s)
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        TemplateValue::String(s.to_string())
    }
}

impl From<Vec<TemplateValue>> for TemplateValue {
    fn from(items: Vec<TemplateValue>) -> Self {
        TemplateValue::Array(items)
    }
}

impl From<TemplateData> for TemplateValue {
    fn from(data: TemplateData) -> Self {
        TemplateValue::Data(data)
    }
}

/// The key-value document handed to the renderer.
///
/// Backed by a `BTreeMap` so iteration and serialization are
/// deterministic. Inserts validate the naming convention: a key with a
/// recognized prefix must carry a matching value kind or `Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateData {
    entries: BTreeMap<String, TemplateValue>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, validating the key's kind commitment.
    pub fn insert(&mut self, key: impl Into<String>, value: TemplateValue) -> Result<()> {
        let key = key.into();
        if let Some(kind) = KeyKind::of(&key)
            && !value.matches(kind)
        {
            return Err(CitizenError::Template(format!(
                "key '{key}' expects {} or null, got {}",
                kind.describe(),
                value.kind_name()
            )));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TemplateValue> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TemplateValue)> {
        self.entries.iter()
    }

    /// A string entry the host guarantees to exist. Missing, null, or
    /// non-string entries are programming errors.
    pub fn expect_str(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(TemplateValue::String(s)) => Ok(s),
            Some(other) => Err(CitizenError::Template(format!(
                "key '{key}': expected a string, got {}",
                other.kind_name()
            ))),
            None => Err(CitizenError::Template(format!(
                "missing required key '{key}'"
            ))),
        }
    }

    /// A nested data entry the host guarantees to exist.
    pub fn expect_data(&self, key: &str) -> Result<&TemplateData> {
        match self.get(key) {
            Some(TemplateValue::Data(d)) => Ok(d),
            Some(other) => Err(CitizenError::Template(format!(
                "key '{key}': expected nested data, got {}",
                other.kind_name()
            ))),
            None => Err(CitizenError::Template(format!(
                "missing required key '{key}'"
            ))),
        }
    }

    /// Merge where `overlay` keys win; keys only present in `self` are
    /// preserved.
    pub fn overlaid_with(mut self, overlay: TemplateData) -> TemplateData {
        self.entries.extend(overlay.entries);
        self
    }

    /// Add only the entries of `other` whose keys are not already present.
    /// Existing entries are never overwritten.
    pub fn merge_missing(&mut self, other: TemplateData) {
        for (key, value) in other.entries {
            self.entries.entry(key).or_insert(value);
        }
    }

    /// Ingest a JSON object as produced by the host's own data-building
    /// step. Host documents are taken as-is, without convention checks;
    /// validation applies to what the skin writes. JSON numbers are
    /// coerced to their display string; the document model has no numeric
    /// kind and renderer output is text.
    pub fn from_json(value: serde_json::Value) -> Result<TemplateData> {
        match value {
            serde_json::Value::Object(map) => {
                let mut data = TemplateData::new();
                for (key, v) in map {
                    data.entries.insert(key, value_from_json(v));
                }
                Ok(data)
            }
            other => Err(CitizenError::Template(format!(
                "expected a JSON object at the document root, got {other}"
            ))),
        }
    }

    /// The JSON wire shape handed to the renderer.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn value_from_json(value: serde_json::Value) -> TemplateValue {
    match value {
        serde_json::Value::Null => TemplateValue::Null,
        serde_json::Value::Bool(b) => TemplateValue::Bool(b),
        serde_json::Value::Number(n) => {
            log::warn!("coercing numeric template value {n} to a string");
            TemplateValue::String(n.to_string())
        }
        serde_json::Value::String(s) => TemplateValue::String(s),
        serde_json::Value::Array(items) => {
            TemplateValue::Array(items.into_iter().map(value_from_json).collect())
        }
        serde_json::Value::Object(map) => {
            let mut data = TemplateData::new();
            for (key, v) in map {
                data.entries.insert(key, value_from_json(v));
            }
            TemplateValue::Data(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn doc(pairs: &[(&str, TemplateValue)]) -> TemplateData {
        let mut data = TemplateData::new();
        for (k, v) in pairs {
            data.insert(*k, v.clone()).unwrap();
        }
        data
    }

    // -- Key kind parsing --

    #[test]
    fn key_kind_of_prefixes() {
        assert_eq!(KeyKind::of("is-anon"), Some(KeyKind::Bool));
        assert_eq!(KeyKind::of("has-label"), Some(KeyKind::Bool));
        assert_eq!(KeyKind::of("html-tagline"), Some(KeyKind::Html));
        assert_eq!(KeyKind::of("msg-citizen-footer-desc"), Some(KeyKind::Message));
        assert_eq!(KeyKind::of("data-footer"), Some(KeyKind::Data));
        assert_eq!(KeyKind::of("array-portlets"), Some(KeyKind::Array));
    }

    #[test]
    fn key_kind_unprefixed_is_none() {
        assert_eq!(KeyKind::of("toc-enabled"), None);
        assert_eq!(KeyKind::of("island"), None);
        assert_eq!(KeyKind::of("hash"), None);
    }

    // -- Insert validation --

    #[test]
    fn insert_matching_kinds() {
        let mut data = TemplateData::new();
        data.insert("is-empty", TemplateValue::Bool(false)).unwrap();
        data.insert("html-tagline", "<p>hi</p>".into()).unwrap();
        data.insert("msg-greeting", "hello".into()).unwrap();
        data.insert("data-footer", TemplateData::new().into()).unwrap();
        data.insert("array-items", TemplateValue::Array(vec![])).unwrap();
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn insert_kind_mismatch_rejected() {
        let mut data = TemplateData::new();
        let err = data.insert("html-body", TemplateValue::Bool(true)).unwrap_err();
        assert!(format!("{err}").contains("raw HTML"));

        let err = data.insert("is-thing", "yes".into()).unwrap_err();
        assert!(format!("{err}").contains("boolean"));

        let err = data
            .insert("data-footer", TemplateValue::Array(vec![]))
            .unwrap_err();
        assert!(format!("{err}").contains("nested data"));
    }

    #[test]
    fn insert_null_satisfies_any_prefix() {
        let mut data = TemplateData::new();
        data.insert("is-empty", TemplateValue::Null).unwrap();
        data.insert("html-title", TemplateValue::Null).unwrap();
        data.insert("data-user", TemplateValue::Null).unwrap();
        data.insert("array-list", TemplateValue::Null).unwrap();
        data.insert("msg-text", TemplateValue::Null).unwrap();
    }

    #[test]
    fn insert_unprefixed_key_unconstrained() {
        let mut data = TemplateData::new();
        data.insert("toc-enabled", TemplateValue::Bool(true)).unwrap();
        data.insert("toc-enabled", "anything".into()).unwrap();
    }

    #[test]
    fn insert_overwrites_existing() {
        let mut data = TemplateData::new();
        data.insert("html-x", "old".into()).unwrap();
        data.insert("html-x", "new".into()).unwrap();
        assert_eq!(data.expect_str("html-x").unwrap(), "new");
    }

    // -- Emptiness semantics --

    #[test]
    fn truthiness_matches_host_emptiness() {
        assert!(!TemplateValue::Null.is_truthy());
        assert!(!TemplateValue::Bool(false).is_truthy());
        assert!(TemplateValue::Bool(true).is_truthy());
        assert!(!TemplateValue::String(String::new()).is_truthy());
        assert!(!TemplateValue::String("0".into()).is_truthy());
        assert!(TemplateValue::String("0.0".into()).is_truthy());
        assert!(TemplateValue::String("x".into()).is_truthy());
        assert!(!TemplateValue::Array(vec![]).is_truthy());
        assert!(TemplateValue::Array(vec![TemplateValue::Null]).is_truthy());
        assert!(!TemplateValue::Data(TemplateData::new()).is_truthy());
    }

    // -- Fail-fast accessors --

    #[test]
    fn expect_str_missing_key() {
        let data = TemplateData::new();
        let err = data.expect_str("msg-citizen-jumptotop").unwrap_err();
        assert!(format!("{err}").contains("missing required key"));
    }

    #[test]
    fn expect_str_wrong_kind() {
        let data = doc(&[("toc-enabled", TemplateValue::Bool(true))]);
        let err = data.expect_str("toc-enabled").unwrap_err();
        assert!(format!("{err}").contains("expected a string"));
    }

    #[test]
    fn expect_data_missing_and_wrong_kind() {
        let data = doc(&[("html-x", "text".into())]);
        assert!(data.expect_data("data-portlets").is_err());
        assert!(data.expect_data("html-x").is_err());
    }

    // -- Merging --

    #[test]
    fn overlay_keys_win_base_preserved() {
        let base = doc(&[
            ("html-tagline", "base".into()),
            ("msg-keepme", "kept".into()),
        ]);
        let overlay = doc(&[
            ("html-tagline", "overlay".into()),
            ("toc-enabled", TemplateValue::Bool(true)),
        ]);
        let merged = base.overlaid_with(overlay);
        assert_eq!(merged.expect_str("html-tagline").unwrap(), "overlay");
        assert_eq!(merged.expect_str("msg-keepme").unwrap(), "kept");
        assert_eq!(merged.get("toc-enabled"), Some(&TemplateValue::Bool(true)));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn merge_missing_never_overwrites() {
        let mut data = doc(&[("data-footer", TemplateData::new().into())]);
        let extra = doc(&[
            ("data-footer", TemplateValue::Null),
            ("data-page-tools", TemplateData::new().into()),
        ]);
        data.merge_missing(extra);
        // Existing entry untouched, new entry added.
        assert_eq!(
            data.get("data-footer"),
            Some(&TemplateValue::Data(TemplateData::new()))
        );
        assert!(data.contains_key("data-page-tools"));
    }

    // -- JSON bridging --

    #[test]
    fn from_json_object() {
        let data = TemplateData::from_json(json!({
            "toc-enabled": false,
            "html-tagline": "<p>t</p>",
            "data-footer": { "msg-text": "foot" },
            "array-langs": ["en", "de"],
            "html-missing": null,
        }))
        .unwrap();
        assert_eq!(data.get("toc-enabled"), Some(&TemplateValue::Bool(false)));
        assert_eq!(data.expect_str("html-tagline").unwrap(), "<p>t</p>");
        assert_eq!(
            data.expect_data("data-footer").unwrap().expect_str("msg-text").unwrap(),
            "foot"
        );
        assert_eq!(data.get("html-missing"), Some(&TemplateValue::Null));
    }

    #[test]
    fn from_json_numbers_coerced_to_strings() {
        let data = TemplateData::from_json(json!({ "edits": 1234 })).unwrap();
        assert_eq!(data.get("edits"), Some(&TemplateValue::String("1234".into())));
    }

    #[test]
    fn from_json_non_object_root_rejected() {
        assert!(TemplateData::from_json(json!(["a", "b"])).is_err());
        assert!(TemplateData::from_json(json!("text")).is_err());
    }

    #[test]
    fn to_json_wire_shape() {
        let mut inner = TemplateData::new();
        inner.insert("is-empty", TemplateValue::Bool(true)).unwrap();
        let data = doc(&[
            ("toc-enabled", TemplateValue::Bool(false)),
            ("html-title", TemplateValue::Null),
            ("data-variants", inner.into()),
        ]);
        assert_eq!(
            data.to_json().unwrap(),
            json!({
                "toc-enabled": false,
                "html-title": null,
                "data-variants": { "is-empty": true },
            })
        );
    }

    #[test]
    fn json_roundtrip_preserves_document() {
        let original = json!({
            "toc-enabled": true,
            "data-portlets": { "data-variants": { "is-empty": false } },
            "array-items": [true, "x", null],
        });
        let data = TemplateData::from_json(original.clone()).unwrap();
        assert_eq!(data.to_json().unwrap(), original);
    }

    // -- Properties --

    fn key_strategy() -> impl Strategy<Value = String> {
        "(is|has|html|msg|data|array)-[a-z]{1,8}"
    }

    proptest! {
        #[test]
        fn null_always_insertable(key in key_strategy()) {
            let mut data = TemplateData::new();
            prop_assert!(data.insert(key, TemplateValue::Null).is_ok());
        }

        #[test]
        fn overlay_contains_all_overlay_entries(
            base in proptest::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..8),
            overlay in proptest::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..8),
        ) {
            let mut base_doc = TemplateData::new();
            for (k, v) in &base {
                base_doc.insert(k.clone(), TemplateValue::Bool(*v)).unwrap();
            }
            let mut overlay_doc = TemplateData::new();
            for (k, v) in &overlay {
                overlay_doc.insert(k.clone(), TemplateValue::Bool(*v)).unwrap();
            }
            let merged = base_doc.overlaid_with(overlay_doc);
            for (k, v) in &overlay {
                prop_assert_eq!(merged.get(k), Some(&TemplateValue::Bool(*v)));
            }
            for (k, v) in &base {
                if !overlay.contains_key(k) {
                    prop_assert_eq!(merged.get(k), Some(&TemplateValue::Bool(*v)));
                }
            }
        }
    }
}
