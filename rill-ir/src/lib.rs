//! Intermediate representation types for the rill BPMN compiler.
//!
//! This crate provides the process graph shared by every stage of the
//! pipeline. The builder produces it, the validator inspects it and the
//! serializer renders it.
//!
//! # Architecture
//!
//! ```text
//! ProcessBuilder calls → rill-ir (process graph) → validate → rill-codegen (XML)
//! ```
//!
//! The IR types are designed to be:
//! - Engine-agnostic (no XML or Flowable-specific concerns)
//! - Append-only while building, immutable once wrapped in a [`ProcessDefinition`]
//! - Serializable with serde for inspection tooling

mod definition;
mod element;
mod flow;
mod value;
mod var;

pub use definition::{ElementRef, ProcessDefinition, ProcessParts};
pub use element::{
    AnyElement, BoundaryEvent, CallActivity, ElementKind, EndEvent, EventDefinition,
    ExclusiveGateway, FieldDefinition, FormProperty, IntermediateCatchEvent, MappingSource,
    ParallelGateway, ScriptTask, ServiceTask, StartEvent, SubProcess, TimerDefinition, TimerKind,
    UserTask, VariableMapping,
};
pub use flow::{ErrorDefinition, SequenceFlow};
pub use value::{Expression, FieldValue, expr};
pub use var::{Direction, UnknownVarType, Var, VarDeclaration, VarType};
