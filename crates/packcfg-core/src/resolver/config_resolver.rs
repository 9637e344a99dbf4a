//! Resolution of the complete build configuration
//!
//! One pass, no retained state: every call builds its result from the
//! metadata chain it was given and the request passed in.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use super::setting::{self, keys, resolve_required, resolve_setting};
use super::signing::build_signing_profile;
use crate::error::ConfigResult;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::properties::{ChainPropertySource, PropertySource, PropertyStore};
use crate::types::{
    BuildVariant, CompileOptions, PackagingPolicy, ResolvedBuildConfig, ResolvedSetting, SettingOrigin,
    SettingValue, SigningProfile,
};
use crate::{log_debug, log_info};

/// Caller-supplied inputs for one resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    /// Application namespace, required
    pub namespace: Option<String>,
    /// Application id, defaults to the namespace
    pub application_id: Option<String>,
    /// Signing properties (empty when the property file is absent)
    pub signing_store: PropertyStore,
    /// Base directory for a relative `storeFile`, `None` keeps it as written
    pub module_dir: Option<PathBuf>,
}

impl ResolveRequest {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Default::default()
        }
    }

    pub fn with_signing_store(mut self, store: PropertyStore) -> Self {
        self.signing_store = store;
        self
    }
}

/// Resolves settings against an ordered metadata chain
///
/// # Example
///
/// ```
/// use packcfg_core::properties::{ChainPropertySource, PropertyStore};
/// use packcfg_core::resolver::{ConfigResolver, ResolveRequest};
///
/// let metadata = ChainPropertySource::new().with_source(Box::new(
///     PropertyStore::from_pairs("command line", [("flutter.versionCode", "42")]),
/// ));
/// let resolver = ConfigResolver::new(metadata);
///
/// let config = resolver.resolve_config(&ResolveRequest::new("com.example.app")).unwrap();
/// assert_eq!(config.version_code, 42);
/// assert_eq!(config.min_sdk, 23);
/// ```
pub struct ConfigResolver {
    metadata: ChainPropertySource,
    logger: SharedLogger,
}

impl ConfigResolver {
    /// Create a resolver over `metadata` with a silent logger
    pub fn new(metadata: ChainPropertySource) -> Self {
        Self {
            metadata,
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Resolve one key: first metadata source that has it, else `default`
    pub fn resolve<T: SettingValue>(&self, key: &str, default: T) -> ConfigResult<ResolvedSetting<T>> {
        let resolved = resolve_setting(&self.metadata, key, default)?;
        log_debug!(self.logger, "{} resolved from {}", key, resolved.origin);
        Ok(resolved)
    }

    /// Copy the signing credentials present in `store`
    pub fn build_signing_profile(&self, store: &PropertyStore) -> SigningProfile {
        let profile = build_signing_profile(store);
        if profile.is_empty() {
            log_info!(self.logger, "No signing properties in {}, release builds will be unsigned", store.name());
        } else if !profile.is_complete() {
            log_info!(
                self.logger,
                "Signing profile from {} is missing: {}",
                store.name(),
                profile.missing_keys().join(", ")
            );
        }
        profile
    }

    /// Resolve the complete configuration
    ///
    /// Fails on the first fatal condition; no partial configuration is returned.
    pub fn resolve_config(&self, request: &ResolveRequest) -> ConfigResult<ResolvedBuildConfig> {
        let mut resolved_from = BTreeMap::new();

        let namespace = resolve_required(keys::NAMESPACE, request.namespace.as_deref())?;
        resolved_from.insert("namespace".to_string(), namespace.origin.clone());

        let application_id = match &request.application_id {
            Some(id) => ResolvedSetting::new(keys::APPLICATION_ID, id.clone(), SettingOrigin::Caller),
            None => ResolvedSetting::new(keys::APPLICATION_ID, namespace.value.clone(), SettingOrigin::Default),
        };
        resolved_from.insert("applicationId".to_string(), application_id.origin.clone());

        let mut track = |name: &str, origin: &SettingOrigin| {
            resolved_from.insert(name.to_string(), origin.clone());
        };

        let compile_sdk = self.resolve(keys::COMPILE_SDK, setting::DEFAULT_COMPILE_SDK)?;
        track("compileSdk", &compile_sdk.origin);
        let min_sdk = self.resolve(keys::MIN_SDK, setting::DEFAULT_MIN_SDK)?;
        track("minSdk", &min_sdk.origin);
        let target_sdk = self.resolve(keys::TARGET_SDK, setting::DEFAULT_TARGET_SDK)?;
        track("targetSdk", &target_sdk.origin);
        let version_code = self.resolve(keys::VERSION_CODE, setting::DEFAULT_VERSION_CODE)?;
        track("versionCode", &version_code.origin);
        let version_name = self.resolve(keys::VERSION_NAME, setting::DEFAULT_VERSION_NAME.to_string())?;
        track("versionName", &version_name.origin);

        let mut signing = self.build_signing_profile(&request.signing_store);
        if let Some(module_dir) = &request.module_dir {
            signing = signing.with_store_base(module_dir);
        }

        let build_types = BuildVariant::ALL
            .iter()
            .map(|variant| (*variant, PackagingPolicy::for_variant(*variant)))
            .collect();

        Ok(ResolvedBuildConfig {
            namespace: namespace.value,
            application_id: application_id.value,
            compile_sdk: compile_sdk.value,
            min_sdk: min_sdk.value,
            target_sdk: target_sdk.value,
            version_code: version_code.value,
            version_name: version_name.value,
            compile_options: CompileOptions::default(),
            signing,
            build_types,
            resolved_from,
        })
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("metadata", &self.metadata)
            .finish()
    }
}
