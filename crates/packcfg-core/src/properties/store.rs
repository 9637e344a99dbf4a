//! Immutable property store loaded from an optional file

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::parser;
use super::traits::PropertySource;
use crate::error::{ConfigError, ConfigResult};

/// An immutable string-to-string property map
///
/// Built once, either from a property file or from in-memory pairs, and
/// read-only afterwards. When a key repeats, the last assignment wins.
///
/// # Example
///
/// ```no_run
/// use packcfg_core::properties::{PropertySource, PropertyStore};
///
/// // Absent file yields an empty store, not an error
/// let signing = PropertyStore::load("key.properties").unwrap();
/// let alias = signing.get("keyAlias");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    name: String,
    entries: BTreeMap<String, String>,
}

impl PropertyStore {
    /// Create an empty store
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Create a store from key/value pairs (later pairs override earlier ones)
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse property text; `name` identifies the text in errors
    pub fn parse(name: impl Into<String>, text: &str) -> ConfigResult<Self> {
        let name = name.into();
        let entries = parser::parse(text)
            .map_err(|e| ConfigError::malformed(&name, e.line, e.message))?;
        Ok(Self::from_pairs(name, entries))
    }

    /// Load a property file
    ///
    /// The file is read as ISO-8859-1, so every byte sequence decodes;
    /// characters outside Latin-1 are written as `\uXXXX` escapes. A path
    /// that does not exist yields an empty store. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        if !path.exists() {
            return Ok(Self::new(name));
        }

        let bytes = fs::read(path).map_err(|e| ConfigError::io(path, e))?;
        let text = decode_latin1(&bytes);

        let entries = parser::parse(&text)
            .map_err(|e| ConfigError::malformed(path, e.line, e.message))?;
        Ok(Self::from_pairs(name, entries))
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no properties
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow a value without cloning
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// ISO-8859-1: each byte is the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

impl PropertySource for PropertyStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.properties");

        let store = PropertyStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.name(), path.display().to_string());
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.properties");
        fs::write(&path, "# release signing\nkeyAlias=release\nstoreFile=/ks.jks\n").unwrap();

        let store = PropertyStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("keyAlias"), Some("release".to_string()));
        assert_eq!(store.value("storeFile"), Some("/ks.jks"));
        assert!(!store.contains("keyPassword"));
    }

    #[test]
    fn test_last_assignment_wins() {
        let store = PropertyStore::parse("inline", "keyAlias=old\nkeyAlias=new\n").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.value("keyAlias"), Some("new"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let store = PropertyStore::parse("inline", "keyPassword=\n").unwrap();
        assert!(store.contains("keyPassword"));
        assert_eq!(store.value("keyPassword"), Some(""));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.properties");
        fs::write(&path, "keyAlias=release\nstorePassword=\\uZZZZ\n").unwrap();

        match PropertyStore::load(&path) {
            Err(ConfigError::Malformed { path: p, line, .. }) => {
                assert_eq!(p, path);
                assert_eq!(line, 2);
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reads_latin1() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.properties");
        fs::write(&path, b"storePassword=caf\xe9\rkeyAlias=release\n=orphan\n").unwrap();

        let store = PropertyStore::load(&path).unwrap();
        assert_eq!(store.value("storePassword"), Some("caf\u{e9}"));
        assert_eq!(store.value("keyAlias"), Some("release"));
        assert_eq!(store.value(""), Some("orphan"));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            PropertyStore::load(dir.path()),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_from_pairs_and_iter() {
        let store = PropertyStore::from_pairs("memory", [("b", "2"), ("a", "1")]);
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
