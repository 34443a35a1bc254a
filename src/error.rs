//! Error types for the acceptance test suite.

use std::io;
use thiserror::Error;

/// Result type alias for web UI test operations.
pub type WebUiResult<T> = Result<T, WebUiError>;

/// Errors that can occur while driving the files page.
///
/// Every variant is fatal to the running scenario: the step runner
/// propagates the first error and fails the scenario immediately.
#[derive(Error, Debug)]
pub enum WebUiError {
    /// A named file or folder row was not found where an operation needs it.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Page or folder navigation failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Folder name validation did not match the expected outcome.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Timeout waiting for the UI to settle.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Expected UI state does not match actual UI state.
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// Scenario step precondition broken (malformed step input, etc.).
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl WebUiError {
    /// Create an element-not-found error.
    pub fn element_not_found(name: impl Into<String>) -> Self {
        Self::ElementNotFound(name.into())
    }

    /// Create a navigation error.
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create an assertion error.
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }

    /// Create a scenario error.
    pub fn scenario(msg: impl Into<String>) -> Self {
        Self::Scenario(msg.into())
    }
}
