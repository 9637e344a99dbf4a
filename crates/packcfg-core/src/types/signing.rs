//! Release signing credentials

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::secret::Secret;

/// Property keys read from the signing property file
pub mod keys {
    pub const KEY_ALIAS: &str = "keyAlias";
    pub const KEY_PASSWORD: &str = "keyPassword";
    pub const STORE_FILE: &str = "storeFile";
    pub const STORE_PASSWORD: &str = "storePassword";

    /// All signing keys in output order
    pub const ALL: [&str; 4] = [KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD];
}

/// Signing credentials, each field present only if its key was supplied
///
/// A partially populated profile is valid here. The downstream signer decides
/// whether it can sign with what is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_password: Option<Secret>,
}

impl SigningProfile {
    /// Property keys whose fields are set, in `keys::ALL` order
    pub fn present_keys(&self) -> Vec<&'static str> {
        let flags = [
            self.key_alias.is_some(),
            self.key_password.is_some(),
            self.store_file.is_some(),
            self.store_password.is_some(),
        ];
        keys::ALL
            .iter()
            .zip(flags)
            .filter_map(|(key, present)| present.then_some(*key))
            .collect()
    }

    /// Property keys whose fields are absent, in `keys::ALL` order
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let present = self.present_keys();
        keys::ALL
            .iter()
            .copied()
            .filter(|key| !present.contains(key))
            .collect()
    }

    /// No credential was supplied
    pub fn is_empty(&self) -> bool {
        self.present_keys().is_empty()
    }

    /// Every credential was supplied
    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Resolve a relative store file against `base_dir`; absolute paths are kept
    pub fn with_store_base(mut self, base_dir: &Path) -> Self {
        if let Some(path) = &self.store_file {
            if path.is_relative() {
                self.store_file = Some(base_dir.join(path));
            }
        }
        self
    }

    /// A copy with passwords replaced by the redaction marker
    pub fn redacted(&self) -> Self {
        Self {
            key_alias: self.key_alias.clone(),
            key_password: self.key_password.as_ref().map(Secret::redacted),
            store_file: self.store_file.clone(),
            store_password: self.store_password.as_ref().map(Secret::redacted),
        }
    }
}
