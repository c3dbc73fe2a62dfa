//! Compile command report data structures.

use std::path::PathBuf;

use rill_core::WriteResult;

use super::output::{Output, Report};

/// What happened to one compiled process.
#[derive(Debug)]
pub enum CompiledOutput {
    Written { path: PathBuf, result: WriteResult },
    Printed { xml: String },
}

#[derive(Debug, Default)]
pub struct CompileReport {
    pub outputs: Vec<CompiledOutput>,
}

impl Report for CompileReport {
    fn render(&self, out: &mut dyn Output) {
        for output in &self.outputs {
            match output {
                CompiledOutput::Written {
                    path,
                    result: WriteResult::Written,
                } => out.preformatted(&format!("Wrote {}", path.display())),
                CompiledOutput::Written {
                    path,
                    result: WriteResult::Unchanged,
                } => out.preformatted(&format!("Unchanged {}", path.display())),
                CompiledOutput::Printed { xml } => out.document(xml),
            }
        }
    }
}
