//! Process definitions compiled into the binary.

mod loan_application;
mod order_approval;
mod subprocess_example;
mod vacation_request;

use miette::Diagnostic;
use rill_builder::ProcessDefinition;
use thiserror::Error;

/// A named process and the function that builds it.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub id: &'static str,
    pub description: &'static str,
    build: fn() -> rill_builder::Result<ProcessDefinition>,
}

impl Entry {
    /// Build and validate the definition.
    pub fn build(&self) -> rill_builder::Result<ProcessDefinition> {
        (self.build)()
    }
}

pub const ENTRIES: &[Entry] = &[
    Entry {
        id: "order-approval",
        description: "Validate an order, then approve it automatically or by review",
        build: order_approval::definition,
    },
    Entry {
        id: "vacation-request",
        description: "Manager approval of an employee's vacation request",
        build: vacation_request::definition,
    },
    Entry {
        id: "loan-application",
        description: "Credit check, risk assessment and underwriting of a loan",
        build: loan_application::definition,
    },
    Entry {
        id: "subprocess-example",
        description: "Embedded review sub-process with an error boundary",
        build: subprocess_example::definition,
    },
];

#[derive(Debug, Error, Diagnostic)]
#[error("unknown process '{id}'")]
#[diagnostic(code(rill::unknown_process), help("available processes: {available}"))]
pub struct UnknownProcess {
    pub id: String,
    pub available: String,
}

pub fn find(id: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|e| e.id == id)
}

/// Like [`find`], with an error naming the available ids.
pub fn get(id: &str) -> Result<&'static Entry, UnknownProcess> {
    find(id).ok_or_else(|| UnknownProcess {
        id: id.to_string(),
        available: ENTRIES.iter().map(|e| e.id).collect::<Vec<_>>().join(", "),
    })
}

/// Resolve `ids` in the given order. No ids selects the whole catalogue.
pub fn select(ids: &[String]) -> Result<Vec<&'static Entry>, UnknownProcess> {
    if ids.is_empty() {
        return Ok(ENTRIES.iter().collect());
    }
    ids.iter().map(|id| get(id)).collect()
}
