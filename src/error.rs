//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the treedupe application.
///
/// - 0: Success (run completed, including runs with non-fatal per-file
///   failures)
/// - 1: General error (invalid root path or any other fatal failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: both trees were scanned and the deletion pass finished.
    Success = 0,
    /// General error: an unexpected or fatal error occurred.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "TD000",
            Self::GeneralError => "TD001",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "TD001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "TD000");
        assert_eq!(ExitCode::GeneralError.code_prefix(), "TD001");
    }

    #[test]
    fn test_structured_error_from_anyhow() {
        let err = anyhow::anyhow!("something broke");
        let structured = StructuredError::new(&err, ExitCode::GeneralError);
        assert_eq!(structured.code, "TD001");
        assert_eq!(structured.exit_code, 1);
        assert_eq!(structured.message, "something broke");
    }
}
