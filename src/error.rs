//! Error types for the agent portal
//!
//! Domain failures are `Validation` (a record or calculation input broke a
//! business rule) and `NotFound` (a lookup key is absent). The remaining
//! variants wrap the file edges: CSV tables and JSON snapshots.

/// Main portal error type
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Input violated a business rule; nothing was mutated
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field that failed validation
        field: &'static str,
        /// Human readable reason
        reason: String,
    },

    /// Lookup key is absent
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Kind of record looked up ("profile", "customer")
        kind: &'static str,
        /// Key that was requested
        key: String,
    },

    /// Customer table could not be read or written
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Snapshot could not be encoded or decoded
    #[error("snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying file I/O failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortalError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        PortalError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        PortalError::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// True for business-rule failures
    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation { .. })
    }

    /// True for absent-key lookups
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortalError::NotFound { .. })
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PortalError::validation("policy_amount", "must be greater than zero, got 0");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "invalid policy_amount: must be greater than zero, got 0");

        let err = PortalError::not_found("profile", "Asha");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "profile not found: Asha");
    }
}
