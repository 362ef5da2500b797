//! Crate-wide error type.
//!
//! Every fallible operation in the core returns `Result<T, Error>`; nothing
//! is ever swallowed or retried internally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Two segments are collinear and do not share an endpoint. The sweep
    /// line does not know how to split a collinear overlap except in the
    /// horizontal special case, so this is surfaced rather than guessed at.
    #[error("segments are collinear without a shared endpoint: {0}")]
    Collinearity(String),

    /// A comparison was attempted between values that should never be
    /// compared to each other. Reachable only through an internal bug.
    #[error("cannot compare incompatible values: {0}")]
    ClassComparison(String),

    /// A DCEL structural precondition was violated.
    #[error("invalid DCEL: {0}")]
    Dcel(String),

    /// The overlay rewrite could not locate a point it needs in the merged
    /// DCEL.
    #[error("overlay construction failed: {0}")]
    Overlay(String),

    /// A result accessor was called before the algorithm that produces it
    /// ran.
    #[error("algorithm has not produced a result yet")]
    NotRunYet,

    /// The input segment set was empty.
    #[error("sweep line requires at least one segment")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse input: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
