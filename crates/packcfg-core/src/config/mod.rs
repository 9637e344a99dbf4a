//! Project configuration
//!
//! - `ProjectDescriptor`: YAML descriptor with the caller-supplied identity
//! - `Project`: project root layout and metadata chain assembly

mod descriptor;
mod project;

pub use descriptor::{ProjectDescriptor, DESCRIPTOR_FILE, MODULE_DIR, SIGNING_PROPERTIES_FILE};
pub use project::{
    gradle_user_home, parse_override, MetadataOptions, Project, GRADLE_PROPERTIES, LOCAL_PROPERTIES,
    OVERRIDES_SOURCE,
};
