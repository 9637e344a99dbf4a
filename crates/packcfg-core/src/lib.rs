//! packcfg Core
//!
//! Resolves the identity, SDK targeting and release-signing settings an
//! Android packaging run needs, before the toolchain is invoked.
//!
//! Every setting walks an ordered metadata chain and falls back to a
//! compiled-in default. Signing credentials are copied only when present, so
//! local builds without secrets still resolve.
//!
//! ```no_run
//! use packcfg_core::config::{MetadataOptions, Project};
//! use packcfg_core::resolver::ConfigResolver;
//!
//! let project = Project::open("android", None)?;
//! let metadata = project.metadata_chain(MetadataOptions::default())?;
//! let config = ConfigResolver::new(metadata).resolve_config(&project.request(None, None)?)?;
//! println!("{}", config.redacted().to_json()?);
//! # Ok::<(), packcfg_core::ConfigError>(())
//! ```

pub mod error;
pub mod types;
pub mod logging;
pub mod properties;
pub mod config;
pub mod resolver;

// Re-export commonly used types
pub use error::{ConfigError, ConfigResult};

pub use types::{
    BuildVariant, CompileOptions, OutputFormat, PackagingPolicy, ResolvedBuildConfig, ResolvedSetting,
    RuleFile, Secret, SettingOrigin, SigningConfigRef, SigningProfile,
};

pub use logging::{Logger, MemoryLogger, NoOpLogger, SharedLogger, TracingLogger};

pub use properties::{ChainPropertySource, EnvPropertySource, PropertySource, PropertyStore};

pub use config::{MetadataOptions, Project, ProjectDescriptor};

pub use resolver::{build_signing_profile, ConfigResolver, ResolveRequest};
