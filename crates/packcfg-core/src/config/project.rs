//! Project layout and metadata chain assembly
//!
//! Source priority for metadata (earlier sources win):
//! 1. Explicit `-P key=value` overrides
//! 2. `ORG_GRADLE_PROJECT_<key>` environment variables
//! 3. `gradle.properties` in the Gradle user home
//! 4. The project's `gradle.properties`
//! 5. The project's `local.properties`

use std::env;
use std::path::{Path, PathBuf};

use super::descriptor::{ProjectDescriptor, DESCRIPTOR_FILE};
use crate::error::{ConfigError, ConfigResult};
use crate::properties::{ChainPropertySource, EnvPropertySource, PropertyStore};
use crate::resolver::ResolveRequest;

pub const GRADLE_PROPERTIES: &str = "gradle.properties";
pub const LOCAL_PROPERTIES: &str = "local.properties";

/// Source name for explicit overrides
pub const OVERRIDES_SOURCE: &str = "command line";

/// The Gradle user home: `$GRADLE_USER_HOME`, else `~/.gradle`
pub fn gradle_user_home() -> Option<PathBuf> {
    match env::var_os("GRADLE_USER_HOME") {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir().map(|home| home.join(".gradle")),
    }
}

/// Split a `key=value` override argument
pub fn parse_override(arg: &str) -> ConfigResult<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ConfigError::InvalidOverride(arg.to_string())),
    }
}

/// Inputs for the metadata chain that come from outside the project tree
#[derive(Debug, Clone, Default)]
pub struct MetadataOptions {
    /// Explicit overrides in argument order (later ones win)
    pub overrides: Vec<(String, String)>,
    /// Captured environment, `None` to ignore the environment
    pub environment: Option<EnvPropertySource>,
    /// Gradle user home, `None` to skip the user-level properties file
    pub gradle_user_home: Option<PathBuf>,
}

/// A project root together with its descriptor
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    descriptor: ProjectDescriptor,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, descriptor: ProjectDescriptor) -> Self {
        Self {
            root: root.into(),
            descriptor,
        }
    }

    /// Open a project, reading `descriptor` or `<root>/packcfg.yaml`
    pub fn open(root: impl Into<PathBuf>, descriptor: Option<&Path>) -> ConfigResult<Self> {
        let root = root.into();
        let path = descriptor
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join(DESCRIPTOR_FILE));
        let descriptor = ProjectDescriptor::load(&path)?;
        Ok(Self::new(root, descriptor))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    /// Signing property file location
    pub fn signing_properties_path(&self) -> PathBuf {
        self.root.join(&self.descriptor.signing_properties)
    }

    /// Application module directory
    pub fn module_dir(&self) -> PathBuf {
        self.root.join(&self.descriptor.module_dir)
    }

    /// Load the signing properties (an absent file is an empty store)
    pub fn load_signing_store(&self) -> ConfigResult<PropertyStore> {
        PropertyStore::load(self.signing_properties_path())
    }

    /// Project-level metadata files, highest priority first
    pub fn metadata_files(&self) -> Vec<PathBuf> {
        vec![self.root.join(GRADLE_PROPERTIES), self.root.join(LOCAL_PROPERTIES)]
    }

    /// Build the ordered metadata chain
    pub fn metadata_chain(&self, options: MetadataOptions) -> ConfigResult<ChainPropertySource> {
        let mut chain = ChainPropertySource::new()
            .with_source(Box::new(PropertyStore::from_pairs(OVERRIDES_SOURCE, options.overrides)));

        if let Some(environment) = options.environment {
            chain = chain.with_source(Box::new(environment));
        }

        if let Some(home) = options.gradle_user_home {
            chain = chain.with_source(Box::new(PropertyStore::load(home.join(GRADLE_PROPERTIES))?));
        }

        for path in self.metadata_files() {
            chain = chain.with_source(Box::new(PropertyStore::load(&path)?));
        }

        Ok(chain)
    }

    /// Build a resolve request; explicit values win over the descriptor
    pub fn request(
        &self,
        namespace: Option<String>,
        application_id: Option<String>,
    ) -> ConfigResult<ResolveRequest> {
        Ok(ResolveRequest {
            namespace: namespace.or_else(|| self.descriptor.namespace.clone()),
            application_id: application_id.or_else(|| self.descriptor.application_id.clone()),
            signing_store: self.load_signing_store()?,
            module_dir: Some(self.module_dir()),
        })
    }
}
