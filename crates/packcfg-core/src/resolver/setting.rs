//! Single-setting resolution: metadata chain first, compiled-in default last

use crate::error::{ConfigError, ConfigResult};
use crate::properties::ChainPropertySource;
use crate::types::{ResolvedSetting, SettingOrigin, SettingValue};

/// Toolchain metadata keys
pub mod keys {
    pub const NAMESPACE: &str = "namespace";
    pub const APPLICATION_ID: &str = "applicationId";
    pub const COMPILE_SDK: &str = "flutter.compileSdkVersion";
    pub const MIN_SDK: &str = "flutter.minSdkVersion";
    pub const TARGET_SDK: &str = "flutter.targetSdkVersion";
    pub const VERSION_CODE: &str = "flutter.versionCode";
    pub const VERSION_NAME: &str = "flutter.versionName";
}

pub const DEFAULT_COMPILE_SDK: i32 = 35;
pub const DEFAULT_MIN_SDK: i32 = 23;
pub const DEFAULT_TARGET_SDK: i32 = 35;
pub const DEFAULT_VERSION_CODE: i32 = 13;
pub const DEFAULT_VERSION_NAME: &str = "0.1.1";

/// Description of one known setting, for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingInfo {
    /// Name in the resolved configuration
    pub name: &'static str,
    /// Metadata key, `None` for caller-supplied settings
    pub key: Option<&'static str>,
    /// Human-readable default
    pub default: &'static str,
}

/// Every setting the resolver produces, in output order
pub const KNOWN_SETTINGS: &[SettingInfo] = &[
    SettingInfo { name: "namespace", key: None, default: "(required)" },
    SettingInfo { name: "applicationId", key: None, default: "(namespace)" },
    SettingInfo { name: "compileSdk", key: Some(keys::COMPILE_SDK), default: "35" },
    SettingInfo { name: "minSdk", key: Some(keys::MIN_SDK), default: "23" },
    SettingInfo { name: "targetSdk", key: Some(keys::TARGET_SDK), default: "35" },
    SettingInfo { name: "versionCode", key: Some(keys::VERSION_CODE), default: "13" },
    SettingInfo { name: "versionName", key: Some(keys::VERSION_NAME), default: "0.1.1" },
];

/// Resolve `key` against `metadata`, falling back to `default`
///
/// A present value that does not parse as `T` is a `TypeMismatch`; it never
/// falls through to lower-priority sources or to the default.
pub fn resolve_setting<T: SettingValue>(
    metadata: &ChainPropertySource,
    key: &str,
    default: T,
) -> ConfigResult<ResolvedSetting<T>> {
    match metadata.lookup(key) {
        Some((raw, source)) => match T::parse_value(&raw) {
            Some(value) => Ok(ResolvedSetting::new(key, value, SettingOrigin::Source(source.to_string()))),
            None => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                value: raw,
                expected: T::TYPE_NAME,
                origin: source.to_string(),
            }),
        },
        None => Ok(ResolvedSetting::new(key, default, SettingOrigin::Default)),
    }
}

/// Resolve a caller-supplied setting that has no default
///
/// A blank value counts as not supplied.
pub fn resolve_required(key: &str, supplied: Option<&str>) -> ConfigResult<ResolvedSetting<String>> {
    supplied
        .filter(|value| !value.trim().is_empty())
        .map(|value| ResolvedSetting::new(key, value.to_string(), SettingOrigin::Caller))
        .ok_or_else(|| ConfigError::MissingRequiredValue(key.to_string()))
}
