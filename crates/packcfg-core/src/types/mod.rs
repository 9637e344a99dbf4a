//! Core types shared by the resolver and its callers

mod secret;
mod setting;
mod signing;
mod variant;
mod build;

pub use secret::{Secret, REDACTED};
pub use setting::{ResolvedSetting, SettingOrigin, SettingValue};
pub use signing::{keys as signing_keys, SigningProfile};
pub use variant::{
    BuildVariant, PackagingPolicy, RuleFile, SigningConfigRef, PLATFORM_OPTIMIZE_RULES, PROJECT_RULES,
};
pub use build::{CompileOptions, OutputFormat, ResolvedBuildConfig};
