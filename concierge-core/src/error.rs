use thiserror::Error;

/// Errors raised by the response aggregator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// Top-level input was not a sequence of events
    #[error("invalid input: expected an array of agent events, found {found}")]
    InvalidInput { found: &'static str },
}
