//! Error taxonomy of the criteria evaluation core.

/// Errors that can occur during criterion evaluation.
///
/// Only `Configuration` is fatal (and only at registry build time).  The
/// other variants are recovered locally by downgrading the affected
/// criterion, so a single missing annotation never blocks a full
/// evaluation.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The variant's molecular consequence is outside the scope of the
    /// decision trees (e.g., missense).
    #[error("variant consequence is not covered by the decision tree: {0}")]
    UnsupportedConsequence(String),
    /// A required annotation fact was not supplied by the caller.
    #[error("required annotation is missing: {0}")]
    MissingFact(String),
    /// The predictor registry contains conflicting bindings.
    #[error("predictor registry is misconfigured: {0}")]
    Configuration(String),
    /// An internal invariant was violated (inverted ranges etc.).
    #[error("algorithm invariant violated: {0}")]
    Algorithm(String),
}
