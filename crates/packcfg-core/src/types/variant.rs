//! Build variants and their fixed packaging policy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Platform-provided optimization rule set applied to release builds
pub const PLATFORM_OPTIMIZE_RULES: &str = "proguard-android-optimize.txt";

/// Project-specific rule file applied to release builds
pub const PROJECT_RULES: &str = "proguard-rules.pro";

/// A named build configuration profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    Debug,
    Profile,
    Release,
}

impl BuildVariant {
    pub const ALL: [BuildVariant; 3] = [BuildVariant::Debug, BuildVariant::Profile, BuildVariant::Release];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Profile => "profile",
            BuildVariant::Release => "release",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildVariant::Debug),
            "profile" => Ok(BuildVariant::Profile),
            "release" => Ok(BuildVariant::Release),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Reference to an optimization rule file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum RuleFile {
    /// Rule set shipped with the platform toolchain
    PlatformDefault(String),
    /// Rule file in the application module
    Project(String),
}

/// Which signing configuration a variant uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningConfigRef {
    /// Toolchain default (debug keystore)
    Default,
    /// The resolved release `SigningProfile`
    Release,
}

/// Shrinking and obfuscation settings for one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingPolicy {
    pub minify: bool,
    pub shrink_resources: bool,
    pub rule_files: Vec<RuleFile>,
    pub signing_config: SigningConfigRef,
}

impl Default for PackagingPolicy {
    fn default() -> Self {
        Self {
            minify: false,
            shrink_resources: false,
            rule_files: Vec::new(),
            signing_config: SigningConfigRef::Default,
        }
    }
}

impl PackagingPolicy {
    /// The fixed policy for a variant
    ///
    /// Only release builds shrink; the table is not influenced by properties.
    pub fn for_variant(variant: BuildVariant) -> Self {
        match variant {
            BuildVariant::Release => Self {
                minify: true,
                shrink_resources: true,
                rule_files: vec![
                    RuleFile::PlatformDefault(PLATFORM_OPTIMIZE_RULES.to_string()),
                    RuleFile::Project(PROJECT_RULES.to_string()),
                ],
                signing_config: SigningConfigRef::Release,
            },
            BuildVariant::Debug | BuildVariant::Profile => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_policy() {
        let policy = PackagingPolicy::for_variant(BuildVariant::Release);
        assert!(policy.minify);
        assert!(policy.shrink_resources);
        assert_eq!(
            policy.rule_files,
            vec![
                RuleFile::PlatformDefault("proguard-android-optimize.txt".to_string()),
                RuleFile::Project("proguard-rules.pro".to_string()),
            ]
        );
        assert_eq!(policy.signing_config, SigningConfigRef::Release);
    }

    #[test]
    fn test_non_release_policy_is_default() {
        for variant in [BuildVariant::Debug, BuildVariant::Profile] {
            let policy = PackagingPolicy::for_variant(variant);
            assert_eq!(policy, PackagingPolicy::default());
            assert!(!policy.minify);
            assert!(!policy.shrink_resources);
            assert!(policy.rule_files.is_empty());
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("release".parse::<BuildVariant>().unwrap(), BuildVariant::Release);
        assert_eq!("Debug".parse::<BuildVariant>().unwrap(), BuildVariant::Debug);
        assert!(matches!(
            "staging".parse::<BuildVariant>(),
            Err(ConfigError::UnknownVariant(name)) if name == "staging"
        ));
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_value(PackagingPolicy::for_variant(BuildVariant::Release)).unwrap();
        assert_eq!(json["shrinkResources"], true);
        assert_eq!(json["signingConfig"], "release");
        assert_eq!(json["ruleFiles"][0]["kind"], "platform_default");
        assert_eq!(json["ruleFiles"][1]["name"], "proguard-rules.pro");
    }
}
