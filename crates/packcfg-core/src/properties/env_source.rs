//! Project properties exported through environment variables

use std::collections::BTreeMap;
use std::env;

use super::traits::PropertySource;

/// Prefix under which the build toolchain exports project properties
pub const GRADLE_PROJECT_PREFIX: &str = "ORG_GRADLE_PROJECT_";

/// Property source over `ORG_GRADLE_PROJECT_<key>` environment variables
///
/// The environment is captured once at construction, so later changes to the
/// process environment are not observed. Variables whose name or value is not
/// valid Unicode are skipped.
///
/// # Example
///
/// ```
/// use packcfg_core::properties::{EnvPropertySource, PropertySource};
///
/// let env = EnvPropertySource::from_vars([
///     ("ORG_GRADLE_PROJECT_flutter.versionCode", "42"),
///     ("PATH", "/usr/bin"),
/// ]);
/// assert_eq!(env.get("flutter.versionCode"), Some("42".to_string()));
/// assert_eq!(env.get("PATH"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvPropertySource {
    properties: BTreeMap<String, String>,
}

impl EnvPropertySource {
    /// Capture the current process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build from explicit variables (only prefixed names are kept)
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let properties = vars
            .into_iter()
            .filter_map(|(name, value)| {
                let key = name.as_ref().strip_prefix(GRADLE_PROJECT_PREFIX)?;
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.into()))
            })
            .collect();
        Self { properties }
    }

    /// Number of captured project properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertySource for EnvPropertySource {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_name() {
        assert_eq!(EnvPropertySource::default().name(), "environment");
    }

    #[test]
    fn test_env_source_strips_prefix() {
        let env = EnvPropertySource::from_vars([
            ("ORG_GRADLE_PROJECT_flutter.minSdkVersion", "24"),
            ("ORG_GRADLE_PROJECT_", "ignored"),
            ("HOME", "/home/dev"),
        ]);

        assert_eq!(env.len(), 1);
        assert_eq!(env.get("flutter.minSdkVersion"), Some("24".to_string()));
        assert!(!env.contains("HOME"));
        assert!(!env.contains(""));
    }

    #[test]
    fn test_env_source_keeps_empty_values() {
        let env = EnvPropertySource::from_vars([("ORG_GRADLE_PROJECT_flutter.versionName", "")]);
        assert_eq!(env.get("flutter.versionName"), Some(String::new()));
    }

    #[test]
    fn test_env_source_key_is_case_sensitive() {
        let env = EnvPropertySource::from_vars([("ORG_GRADLE_PROJECT_flutter.versionCode", "7")]);
        assert!(env.contains("flutter.versionCode"));
        assert!(!env.contains("FLUTTER.VERSIONCODE"));
    }
}
