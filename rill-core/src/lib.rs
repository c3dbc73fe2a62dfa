//! Core utilities and types for the rill BPMN compiler.
//!
//! This crate provides the string helpers and file-output primitives shared
//! by the builder, the serializer and the command-line tool.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::humanize;
