//! Signing profile assembly

use std::path::PathBuf;

use crate::properties::PropertySource;
use crate::types::{signing_keys as keys, Secret, SigningProfile};

/// Copy each signing credential from `store` if its key exists
///
/// Absent keys leave their field absent. Nothing is defaulted and nothing is
/// validated: the signer reports what it cannot work with.
pub fn build_signing_profile(store: &dyn PropertySource) -> SigningProfile {
    SigningProfile {
        key_alias: store.get(keys::KEY_ALIAS),
        key_password: store.get(keys::KEY_PASSWORD).map(Secret::new),
        store_file: store.get(keys::STORE_FILE).map(PathBuf::from),
        store_password: store.get(keys::STORE_PASSWORD).map(Secret::new),
    }
}
