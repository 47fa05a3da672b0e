//! # Grammar Errors
//!
//! Error type for single-line grammar failures.
//!
//! These never propagate past the parser: a failed line is logged and
//! dropped, per the format's best-effort contract.

use thiserror::Error;

/// Reasons a single line fails its grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The first token is not one of the known line types 0-5.
    #[error("unknown line type: {0}")]
    UnknownLineType(String),

    /// The line does not match the token grammar for its type.
    #[error("line does not match the type-{line_type} grammar")]
    Grammar { line_type: u8 },
}
