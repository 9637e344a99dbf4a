//! Secret string wrapper

use serde::{Deserialize, Serialize};

/// Text shown in place of a secret when output is redacted
pub const REDACTED: &str = "<redacted>";

/// A credential value that never prints itself through `Debug` or `Display`
///
/// Serialization writes the real value so the signer receives it; callers
/// that show output to a person should serialize a redacted copy instead.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the secret value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A copy whose value is the redaction marker
    pub fn redacted(&self) -> Self {
        Self(REDACTED.to_string())
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({})", REDACTED)
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}
