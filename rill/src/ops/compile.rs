//! Compile operation: serialize processes to disk or stdout.

use std::path::PathBuf;

use eyre::{Context, Result};
use rill_builder::ProcessDefinition;
use rill_codegen::{BpmnFile, to_bpmn};
use rill_core::GeneratedFile;

use crate::{
    catalog::Entry,
    reports::{CompileReport, CompiledOutput},
};

/// Where compiled documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileTarget {
    Stdout,
    Dir(PathBuf),
}

/// Build every entry, stopping at the first construction or validation error.
pub fn build_all(entries: &[&Entry]) -> rill_builder::Result<Vec<ProcessDefinition>> {
    entries.iter().map(|entry| entry.build()).collect()
}

pub fn compile(definitions: &[ProcessDefinition], target: &CompileTarget) -> Result<CompileReport> {
    let mut outputs = Vec::with_capacity(definitions.len());

    for definition in definitions {
        let output = match target {
            CompileTarget::Stdout => CompiledOutput::Printed {
                xml: to_bpmn(definition),
            },
            CompileTarget::Dir(dir) => {
                let file = BpmnFile::new(definition);
                let result = file
                    .write(dir)
                    .wrap_err_with(|| format!("Failed to compile '{}'", definition.id()))?;
                CompiledOutput::Written {
                    path: file.path(dir),
                    result,
                }
            }
        };
        outputs.push(output);
    }

    Ok(CompileReport { outputs })
}
