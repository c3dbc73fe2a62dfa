//! BPMN 2.0 XML generation for the rill compiler.
//!
//! This crate turns a validated [`ProcessDefinition`](rill_ir::ProcessDefinition)
//! into a Flowable-flavored BPMN document.
//!
//! # Module Organization
//!
//! - [`builder`] - XML building blocks (XmlWriter, Indent, escaping)
//! - [`namespaces`] - Namespace table of the document root
//! - [`to_bpmn`] - The serializer
//! - [`BpmnFile`] - `.bpmn20.xml` output

pub mod builder;
mod file;
pub mod namespaces;
mod serializer;

pub use file::{BPMN_EXTENSION, BpmnFile};
pub use serializer::to_bpmn;
