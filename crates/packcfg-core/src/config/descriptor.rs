//! Project descriptor file (YAML)
//!
//! Names what only the caller can know: the application namespace and where
//! the project keeps its signing properties.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default descriptor file name in the project root
pub const DESCRIPTOR_FILE: &str = "packcfg.yaml";

/// Default signing property file, relative to the project root
pub const SIGNING_PROPERTIES_FILE: &str = "key.properties";

/// Default application module directory, relative to the project root
pub const MODULE_DIR: &str = "app";

fn default_signing_properties() -> PathBuf {
    PathBuf::from(SIGNING_PROPERTIES_FILE)
}

fn default_module_dir() -> PathBuf {
    PathBuf::from(MODULE_DIR)
}

/// Descriptor file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDescriptor {
    /// Application namespace (required unless given on the command line)
    #[serde(default)]
    pub namespace: Option<String>,

    /// Application id, defaults to the namespace
    #[serde(default)]
    pub application_id: Option<String>,

    /// Signing property file, relative paths are taken from the project root
    #[serde(default = "default_signing_properties")]
    pub signing_properties: PathBuf,

    /// Application module directory, the base for a relative `storeFile`
    #[serde(default = "default_module_dir")]
    pub module_dir: PathBuf,
}

impl Default for ProjectDescriptor {
    fn default() -> Self {
        Self {
            namespace: None,
            application_id: None,
            signing_properties: default_signing_properties(),
            module_dir: default_module_dir(),
        }
    }
}

impl ProjectDescriptor {
    /// Load a descriptor; a missing or empty file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse descriptor YAML; `path` identifies the content in errors
    pub fn parse(path: &Path, content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ConfigError::Descriptor {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
