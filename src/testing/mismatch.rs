//! Mismatches reported when a transition result fails an expectation.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outcome of checking one or more expectations: success, or every mismatch.
pub type Verdict = Validation<(), NonEmptyVec<Mismatch>>;

/// A single way a transition result differed from what was expected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Mismatch {
    #[error("Expected state {expected}, got {actual}")]
    UnexpectedState { expected: String, actual: String },

    #[error("Expected state {expected}, but the state was left unchanged")]
    MissingState { expected: String },

    #[error("Expected the state to be left unchanged, got {actual}")]
    UnexpectedStateChange { actual: String },

    #[error("Missing effects: [{missing}]")]
    MissingEffects { missing: String },

    #[error("Unexpected effects: [{unexpected}]")]
    UnexpectedEffects { unexpected: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
