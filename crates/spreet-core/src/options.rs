//! Options passed to format handlers

use std::collections::BTreeMap;
use std::str::FromStr;

/// Configuration mapping for a read or write
///
/// `format` overrides handler resolution by file extension. Any other key is
/// handler-specific and kept as a string for the handler to interpret.
///
/// ```
/// use spreet_core::HandlerOptions;
///
/// let options = HandlerOptions::new()
///     .with_format("csv")
///     .with("delimiter", ";");
/// assert_eq!(options.format(), Some("csv"));
/// assert_eq!(options.get("delimiter"), Some(";"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlerOptions {
    /// Explicit format identifier
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub format: Option<String>,
    /// Handler-specific settings
    #[cfg_attr(feature = "serde", serde(flatten))]
    settings: BTreeMap<String, String>,
}

impl HandlerOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit format identifier
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set a handler-specific key
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Get the explicit format identifier
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Set a handler-specific key in place
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.settings.insert(key.into(), value.into());
    }

    /// Get a handler-specific key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Parse a handler-specific key; `None` if it is not set
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<std::result::Result<T, T::Err>> {
        self.get(key).map(str::parse)
    }

    /// Remove a handler-specific key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.settings.remove(key)
    }

    /// Iterate over handler-specific settings in key order
    pub fn settings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
