//! Property sources
//!
//! This module provides the key/value lookup layer the resolver reads from:
//! - `PropertySource` trait for anything that answers `get(key)`
//! - `PropertyStore`: an optional property file (absent file = empty store)
//! - `EnvPropertySource`: project properties exported as environment variables
//! - `ChainPropertySource`: ordered first-match-wins fallback

mod traits;
mod parser;
mod store;
mod env_source;
mod chain_source;

pub use traits::PropertySource;
pub use store::PropertyStore;
pub use env_source::{EnvPropertySource, GRADLE_PROJECT_PREFIX};
pub use chain_source::ChainPropertySource;
