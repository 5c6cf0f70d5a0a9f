use std::fmt;
use std::sync::Arc;

use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Shared-secret gate for write/delete operations
///
/// One process-wide key, compared as-is. No rotation, no per-caller identity.
#[derive(Clone)]
pub struct ApiKeyGate {
    key: Arc<str>,
}

impl ApiKeyGate {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Arc::from(key.into()),
        }
    }

    /// Does the provided key match; a missing key never does
    pub fn authorize(&self, provided: Option<&str>) -> bool {
        provided.is_some_and(|k| k == &*self.key)
    }

    /// [`authorize`](Self::authorize), turning a rejection into `Forbidden`
    pub fn require(&self, provided: Option<&str>, operation: &str) -> AppResult<()> {
        if self.authorize(provided) {
            return Ok(());
        }
        security_log!(
            "WARN",
            "api_key_rejected",
            operation = operation,
            key_present = provided.is_some()
        );
        Err(AppError::forbidden())
    }
}

impl fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyGate").field("key", &"***").finish()
    }
}
