use std::io;

use thiserror::Error;

/// Library-wide error type for chaincfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No configuration file found.
    #[error("No chaincfg configuration found (searched from {searched})")]
    ConfigNotFound { searched: String },

    /// A configuration file already exists where `init` would write one.
    #[error("Configuration already exists: {0}")]
    ConfigExists(String),

    /// File extension or format name is not a supported configuration format.
    #[error("Unsupported configuration format '{0}': expected toml, json, yaml or yml")]
    UnsupportedFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Serialization error.
    #[error("Failed to render {format}: {details}")]
    RenderError { format: String, details: String },

    /// Version string is not `major.minor.patch[-pre][+build]`.
    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    /// Version range expression could not be parsed.
    #[error("Invalid version range '{range}': {reason}")]
    InvalidVersionRange { range: String, reason: String },

    /// Network profile not present in `networks`.
    #[error("Network '{0}' not found in configuration")]
    NetworkNotFound(String),

    /// Compiler not present in `compilers`.
    #[error("Compiler '{0}' not found in configuration")]
    CompilerNotFound(String),

    /// Host and port do not form a valid endpoint URL.
    #[error("Invalid endpoint '{endpoint}': {details}")]
    InvalidEndpoint { endpoint: String, details: String },

    /// A concrete chain id was rejected by a network profile.
    #[error("Network '{network}' expects network_id {expected}, got {actual}")]
    NetworkIdMismatch { network: String, expected: String, actual: u64 },

    /// None of the candidate compiler builds satisfies the range.
    #[error("No {compiler} version satisfies '{range}' (available: {available})")]
    NoMatchingCompiler { compiler: String, range: String, available: String },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that bucket failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::UnsupportedFormat(_)
            | AppError::ParseError { .. }
            | AppError::InvalidVersion(_)
            | AppError::InvalidVersionRange { .. }
            | AppError::InvalidEndpoint { .. }
            | AppError::NetworkIdMismatch { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound { .. }
            | AppError::NetworkNotFound(_)
            | AppError::CompilerNotFound(_)
            | AppError::NoMatchingCompiler { .. } => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::RenderError { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_buckets_lookup_failures_as_not_found() {
        assert_eq!(AppError::NetworkNotFound("dev".into()).kind(), io::ErrorKind::NotFound);
        assert_eq!(
            AppError::ConfigNotFound { searched: "/tmp".into() }.kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn kind_passes_through_io_errors() {
        let err = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn display_includes_context() {
        let err = AppError::InvalidVersionRange { range: "^x.y".into(), reason: "bad".into() };
        assert_eq!(err.to_string(), "Invalid version range '^x.y': bad");
    }
}
