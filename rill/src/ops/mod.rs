//! Core operations.
//!
//! The work behind each command, separated from argument parsing and
//! output rendering.

pub mod check;
pub mod compile;
pub mod inspect;
pub mod list;

pub use check::check;
pub use compile::{CompileTarget, build_all, compile};
pub use inspect::inspect;
pub use list::list;
