//! Typed process builder and validator.
//!
//! A process is described by calling [`ProcessBuilder`] methods inside the
//! callback passed to [`process`]. Construction errors (a duplicate id, an
//! unknown variable type) abort the callback immediately; structural problems
//! are collected by [`validate`] and reported together.
//!
//! ```
//! use rill_builder::{ServiceOptions, VarType, process};
//!
//! let definition = process("order", |p| {
//!     let amount = p.var("amount", VarType::Number);
//!     let start = p.start("received")?;
//!     let check = p.service(
//!         "checkAmount",
//!         ServiceOptions::new().delegate("${checker}").input(&amount),
//!     )?;
//!     let end = p.end("done")?;
//!     p.pipe(&[&start, &check, &end]);
//!     Ok(())
//! })?;
//!
//! assert_eq!(definition.flows().len(), 2);
//! # Ok::<(), rill_builder::Error>(())
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builder;
mod error;
mod options;
mod process;
mod registry;
mod validate;

pub use builder::ProcessBuilder;
pub use error::{Error, Result};
pub use options::{
    CallOptions, Condition, EndOptions, ErrorBoundaryOptions, FlowOptions, FormField,
    GatewayOptions, ParallelOptions, ScriptOptions, ServiceOptions, StartOptions,
    SubProcessOptions, TimerBoundaryOptions, TimerCatchOptions, UserOptions,
};
pub use process::{ProcessOptions, process, process_with};
pub use registry::ElementRegistry;
pub use rill_ir::{
    AnyElement, ElementRef, Expression, FieldValue, ProcessDefinition, Var, VarType, expr,
};
pub use validate::{ValidationError, validate};
