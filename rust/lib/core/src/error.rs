use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Renderers match on these,
// never on the human-readable message string.

/// Stable error code constants.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const CONFIG: &str = "CONFIG";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ClinicError ─────────────────────────────────────────────────────

/// Unified error type shared by the clinic crates.
///
/// Each domain crate keeps its own narrow error enum and converts into
/// this one at the boundary. Handlers log the code with the message; the
/// login form also publishes it next to its inline error.
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Record or identifier does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Input data is invalid.
    #[error("{0}")]
    Validation(String),

    /// Missing or wrong credentials, or no session.
    #[error("{0}")]
    Unauthorized(String),

    /// Session exists but the role may not do this.
    #[error("{0}")]
    PermissionDenied(String),

    /// Configuration file could not be read or written.
    #[error("{0}")]
    Config(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl ClinicError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClinicError::NotFound(_) => error_code::NOT_FOUND,
            ClinicError::Validation(_) => error_code::VALIDATION_FAILED,
            ClinicError::Unauthorized(_) => error_code::UNAUTHENTICATED,
            ClinicError::PermissionDenied(_) => error_code::PERMISSION_DENIED,
            ClinicError::Config(_) => error_code::CONFIG,
            ClinicError::Internal(_) => error_code::INTERNAL,
        }
    }
}

impl From<std::io::Error> for ClinicError {
    fn from(e: std::io::Error) -> Self {
        ClinicError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for ClinicError {
    fn from(e: toml::de::Error) -> Self {
        ClinicError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for ClinicError {
    fn from(e: toml::ser::Error) -> Self {
        ClinicError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(ClinicError::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(ClinicError::Validation("x".into()).error_code(), "VALIDATION_FAILED");
        assert_eq!(ClinicError::Unauthorized("x".into()).error_code(), "UNAUTHENTICATED");
        assert_eq!(ClinicError::PermissionDenied("x".into()).error_code(), "PERMISSION_DENIED");
        assert_eq!(ClinicError::Config("x".into()).error_code(), "CONFIG");
        assert_eq!(ClinicError::Internal("x".into()).error_code(), "INTERNAL");
    }

    #[test]
    fn display_is_just_message() {
        assert_eq!(ClinicError::NotFound("patient P0007".into()).to_string(), "patient P0007");
        assert_eq!(ClinicError::Unauthorized("no session".into()).to_string(), "no session");
    }

    #[test]
    fn io_error_becomes_config() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ClinicError = io.into();
        assert_eq!(err.error_code(), "CONFIG");
        assert!(err.to_string().contains("read-only"));
    }
}
