//! The assertion failure signal

use std::panic::Location;

use thiserror::Error;

/// What raised an [`AssertionFailed`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A condition evaluated false and the caller asserted it
    Check,
    /// An evaluator was handed operands of the wrong kind or type
    Contract,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Check => "assertion failed",
            FailureKind::Contract => "contract violation",
        }
    }
}

/// Structured failure carried as the panic payload of every raise.
///
/// Both false checks and evaluator misuse surface as this one type so that a
/// test runner (or `expect_panic`) can match a single error class.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{}: {message}", kind.label())]
pub struct AssertionFailed {
    kind: FailureKind,
    message: String,
    file: &'static str,
    line: u32,
}

impl AssertionFailed {
    /// Create a check failure located at the caller
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(FailureKind::Check, message, Location::caller())
    }

    /// Create a contract violation located at the caller
    #[track_caller]
    pub fn contract(message: impl Into<String>) -> Self {
        Self::at(FailureKind::Contract, message, Location::caller())
    }

    pub fn at(kind: FailureKind, message: impl Into<String>, location: &'static Location<'static>) -> Self {
        AssertionFailed {
            kind,
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_contract_violation(&self) -> bool {
        self.kind == FailureKind::Contract
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_check() {
        let err = AssertionFailed::new("1 != 2");
        assert_eq!(err.to_string(), "assertion failed: 1 != 2");
        assert_eq!(err.kind(), FailureKind::Check);
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_display_contract() {
        let err = AssertionFailed::contract("not a channel");
        assert_eq!(err.to_string(), "contract violation: not a channel");
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_location_is_caller() {
        let line = line!() + 1;
        let err = AssertionFailed::new("here");
        assert_eq!(err.line(), line);
        assert!(err.file().ends_with("error.rs"));
    }
}
