//! Chained property source with first-match-wins fallback

use super::traits::PropertySource;

/// A property source that chains other sources together
///
/// Lookups try each source in order and return the first match. An empty
/// chain is valid and finds nothing.
///
/// # Example
///
/// ```
/// use packcfg_core::properties::{ChainPropertySource, PropertySource, PropertyStore};
///
/// let cli = PropertyStore::from_pairs("command line", [("flutter.minSdkVersion", "26")]);
/// let file = PropertyStore::from_pairs("gradle.properties", [
///     ("flutter.minSdkVersion", "21"),
///     ("flutter.versionCode", "9"),
/// ]);
///
/// let chain = ChainPropertySource::new()
///     .with_source(Box::new(cli))
///     .with_source(Box::new(file));
///
/// assert_eq!(chain.get("flutter.minSdkVersion"), Some("26".to_string()));
/// assert_eq!(chain.get("flutter.versionCode"), Some("9".to_string()));
/// ```
#[derive(Default)]
pub struct ChainPropertySource {
    sources: Vec<Box<dyn PropertySource>>,
}

impl ChainPropertySource {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain from sources in priority order (highest first)
    pub fn from_sources(sources: Vec<Box<dyn PropertySource>>) -> Self {
        Self { sources }
    }

    /// Append a source with lower priority than every existing one
    pub fn with_source(mut self, source: Box<dyn PropertySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Get the sources in this chain
    pub fn sources(&self) -> &[Box<dyn PropertySource>] {
        &self.sources
    }

    /// Find the value and the name of the source that supplied it
    pub fn lookup(&self, key: &str) -> Option<(String, &str)> {
        self.sources
            .iter()
            .find_map(|source| source.get(key).map(|value| (value, source.name())))
    }

    /// Find which source has a key
    pub fn find_source(&self, key: &str) -> Option<&dyn PropertySource> {
        self.sources
            .iter()
            .find(|source| source.contains(key))
            .map(|source| &**source)
    }
}

impl PropertySource for ChainPropertySource {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.lookup(key).map(|(value, _)| value)
    }
}

// Implement Debug manually since Box<dyn PropertySource> doesn't implement Debug
impl std::fmt::Debug for ChainPropertySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainPropertySource")
            .field("sources", &names)
            .finish()
    }
}
