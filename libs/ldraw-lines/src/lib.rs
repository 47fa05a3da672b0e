//! # LDraw Lines
//!
//! Line grammar for the LDraw file format.
//!
//! ## Architecture
//!
//! ```text
//! Source → ldraw-lines (Command) → ldraw-resolve (MeshBuffers) → ldraw-mesh
//! ```
//!
//! LDraw files are plain text, one statement per line, dispatched on the
//! first token (the line type). This crate turns source text into typed
//! [`Command`] values; it knows nothing about recursion, libraries, or
//! winding state. Lines that fail their grammar are dropped with a warning,
//! never an error.
//!
//! ## Example
//!
//! ```rust
//! use ldraw_lines::{parse_source, Command};
//!
//! let commands = parse_source("3 16 0 0 0 1 0 0 0 1 0");
//! assert!(matches!(commands[0], Command::Triangle(_)));
//! ```

pub mod bfc;
pub mod command;
pub mod cursor;
pub mod error;
pub mod parser;

// Re-export public API
pub use bfc::{BfcDirective, Winding};
pub use command::{
    transform_from_line, ColorCode, Command, LinePrimitive, Meta, OptionalLinePrimitive,
    QuadPrimitive, SubFileRef, TrianglePrimitive,
};
pub use error::LineError;
pub use parser::{parse_line, parse_source};
