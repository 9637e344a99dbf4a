//! Configuration resolution
//!
//! This module walks the metadata chain for each setting, assembles the
//! signing profile and produces the complete `ResolvedBuildConfig`.

mod setting;
mod signing;
mod config_resolver;

pub use setting::{
    keys, resolve_required, resolve_setting, SettingInfo, DEFAULT_COMPILE_SDK, DEFAULT_MIN_SDK,
    DEFAULT_TARGET_SDK, DEFAULT_VERSION_CODE, DEFAULT_VERSION_NAME, KNOWN_SETTINGS,
};
pub use signing::build_signing_profile;
pub use config_resolver::{ConfigResolver, ResolveRequest};
