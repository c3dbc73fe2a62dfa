use miette::Diagnostic;
use rill_ir::UnknownVarType;
use thiserror::Error;

use crate::ValidationError;

/// Result type for builder operations and builder callbacks
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Duplicate element ID: \"{id}\"")]
    #[diagnostic(
        code(rill::duplicate_id),
        help("element ids must be unique across the whole process, sub-processes included")
    )]
    DuplicateId { id: String },

    #[error(transparent)]
    #[diagnostic(
        code(rill::unknown_var_type),
        help("valid types are: string, boolean, double, date")
    )]
    UnknownVarType(#[from] UnknownVarType),

    #[error("Process \"{process}\" validation failed:\n{}", bullet_list(.errors))]
    #[diagnostic(code(rill::validation_failed))]
    Validation {
        process: String,
        #[related]
        errors: Vec<ValidationError>,
    },
}

impl Error {
    /// Violations collected by the validator, empty for construction errors.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            Self::DuplicateId { .. } | Self::UnknownVarType(_) => &[],
        }
    }
}

fn bullet_list(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
