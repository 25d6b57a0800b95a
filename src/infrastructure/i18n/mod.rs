use crate::domain::{
    error_classification::MessageLookup,
    errors::{AppError, AppResult},
};
use serde_json::Value;
use std::collections::BTreeMap;

const ENGLISH_CATALOG: &str = include_str!("en.json");

/// Flat key → text message catalog.
///
/// Missing keys resolve to the key itself, so lookups never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageCatalog {
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English messages for every `errors.*` key
    pub fn english() -> Self {
        // The embedded catalog is covered by tests; an empty catalog still echoes keys.
        Self::from_json(ENGLISH_CATALOG).unwrap_or_default()
    }

    /// Parse a JSON object; nested objects become dotted keys.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| AppError::CatalogError(format!("Failed to parse catalog: {}", e)))?;

        let Value::Object(root) = value else {
            return Err(AppError::CatalogError("Catalog root must be an object".to_string()));
        };

        let mut catalog = Self::new();
        for (key, value) in root {
            catalog.flatten_into(key, value)?;
        }
        Ok(catalog)
    }

    fn flatten_into(&mut self, prefix: String, value: Value) -> AppResult<()> {
        match value {
            Value::String(text) => {
                self.messages.insert(prefix, text);
                Ok(())
            }
            Value::Object(children) => {
                for (key, child) in children {
                    self.flatten_into(format!("{}.{}", prefix, key), child)?;
                }
                Ok(())
            }
            other => Err(AppError::CatalogError(format!(
                "Message '{}' must be a string, got {}",
                prefix, other
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    /// Layer `overrides` on top; their entries win
    pub fn merge(mut self, overrides: MessageCatalog) -> Self {
        self.messages.extend(overrides.messages);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl MessageLookup for MessageCatalog {
    fn lookup(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
