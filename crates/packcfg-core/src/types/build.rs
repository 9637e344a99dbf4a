//! The resolved configuration handed to the packaging toolchain

use std::collections::BTreeMap;

use serde::Serialize;

use super::setting::SettingOrigin;
use super::signing::SigningProfile;
use super::variant::{BuildVariant, PackagingPolicy};
use crate::error::{ConfigError, ConfigResult};

/// Java/Kotlin language levels the module compiles with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    pub source_compatibility: u32,
    pub target_compatibility: u32,
    pub jvm_target: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            source_compatibility: 11,
            target_compatibility: 11,
            jvm_target: "11".to_string(),
        }
    }
}

/// Output encoding for a resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Complete resolved configuration for one build invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBuildConfig {
    pub namespace: String,
    pub application_id: String,
    pub compile_sdk: i32,
    pub min_sdk: i32,
    pub target_sdk: i32,
    pub version_code: i32,
    pub version_name: String,
    pub compile_options: CompileOptions,
    /// Release signing credentials, possibly partial
    pub signing: SigningProfile,
    /// Packaging policy per build variant
    pub build_types: BTreeMap<BuildVariant, PackagingPolicy>,
    /// Which layer supplied each setting, keyed by setting name
    pub resolved_from: BTreeMap<String, SettingOrigin>,
}

impl ResolvedBuildConfig {
    /// A copy with signing passwords replaced by the redaction marker
    pub fn redacted(&self) -> Self {
        Self {
            signing: self.signing.redacted(),
            ..self.clone()
        }
    }

    /// Keep only the policy of one variant
    pub fn only_variant(mut self, variant: BuildVariant) -> Self {
        self.build_types.retain(|v, _| *v == variant);
        self
    }

    /// Policy for a variant
    pub fn policy(&self, variant: BuildVariant) -> Option<&PackagingPolicy> {
        self.build_types.get(&variant)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> ConfigResult<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Yaml => self.to_yaml(),
        }
    }
}
