use seewo_core::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Credential that holds the app id and secret issued by the platform.
///
/// The secret is used only as the HMAC key: it is never sent, never part of
/// any signed payload, and redacted from Debug output.
#[derive(Default, Clone)]
pub struct Credential {
    /// App id issued by the Seewo open platform.
    pub app_id: String,
    /// Shared secret used to key the request signature.
    pub secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret: secret.into(),
        }
    }

    /// Check if the credential is usable for signing.
    pub fn is_valid(&self) -> bool {
        !self.app_id.is_empty() && !self.secret.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_id", &Redact::from(&self.app_id))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}
