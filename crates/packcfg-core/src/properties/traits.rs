//! Core trait for key/value property lookup

/// A read-only source of string properties
///
/// Implementations:
/// - `PropertyStore`: loaded from a property file or built in memory
/// - `EnvPropertySource`: toolchain project properties exported as environment variables
/// - `ChainPropertySource`: ordered fallback over other sources
///
/// A key is "present" when `get` returns `Some`, even if the value is empty.
pub trait PropertySource: Send + Sync {
    /// Human-readable name of this source, used in error messages and origins
    fn name(&self) -> &str;

    /// Look up a property by key
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a property exists
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
