//! Error types.
//!
//! Two layers:
//!
//! - `AppError`: process-level failures (bad configuration, runtime, server).
//!   Carries the exit code used by `main`.
//! - `FitError`: the two user-facing outcomes of a rejected prediction request.
//!   These are *results* shown to the user verbatim, not process failures.

/// Shown for any malformed coordinate list, degree or query value.
pub const MALFORMED_INPUT: &str = "Error processing input";

/// Shown when the degree parses but is below one.
pub const DEGREE_BELOW_ONE: &str = "Degree must be 1 or higher";

/// Rejection reasons of the fitting function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Coordinate list, degree or query value failed to parse.
    MalformedInput,
    /// Degree parsed but is `< 1`.
    DegreeBelowOne,
}

impl FitError {
    pub fn message(self) -> &'static str {
        match self {
            FitError::MalformedInput => MALFORMED_INPUT,
            FitError::DegreeBelowOne => DEGREE_BELOW_ONE,
        }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FitError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_error_display_is_the_user_facing_string() {
        assert_eq!(FitError::MalformedInput.to_string(), "Error processing input");
        assert_eq!(FitError::DegreeBelowOne.to_string(), "Degree must be 1 or higher");
    }

    #[test]
    fn app_error_keeps_exit_code() {
        let err = AppError::new(2, "bad port");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "bad port");
    }
}
