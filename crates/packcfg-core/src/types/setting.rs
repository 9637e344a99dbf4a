//! Resolved setting values with source tracking

use std::fmt;

use serde::Serialize;

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum SettingOrigin {
    /// A named property source in the metadata chain
    Source(String),
    /// Supplied directly by the caller (descriptor or command line)
    Caller,
    /// The compiled-in default
    Default,
}

impl fmt::Display for SettingOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingOrigin::Source(name) => f.write_str(name),
            SettingOrigin::Caller => f.write_str("caller"),
            SettingOrigin::Default => f.write_str("default"),
        }
    }
}

impl From<SettingOrigin> for String {
    fn from(origin: SettingOrigin) -> Self {
        origin.to_string()
    }
}

/// A typed value obtained by walking the fallback chain for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSetting<T> {
    /// The metadata key that was looked up
    pub key: String,
    /// The resolved value
    pub value: T,
    /// Which layer supplied the value
    pub origin: SettingOrigin,
}

impl<T> ResolvedSetting<T> {
    pub fn new(key: impl Into<String>, value: T, origin: SettingOrigin) -> Self {
        Self {
            key: key.into(),
            value,
            origin,
        }
    }

    /// Whether the compiled-in default was used
    pub fn is_default(&self) -> bool {
        self.origin == SettingOrigin::Default
    }
}

/// A type a metadata string can be parsed into
pub trait SettingValue: Sized {
    /// Name used in type-mismatch errors
    const TYPE_NAME: &'static str;

    /// Parse a raw property value, `None` if it is not a valid `Self`
    fn parse_value(raw: &str) -> Option<Self>;
}

impl SettingValue for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Signed 32-bit, the range the build toolchain accepts for these settings
impl SettingValue for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn parse_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}
