use rill_core::GeneratedFile;
use rill_ir::ProcessDefinition;

use crate::to_bpmn;

/// Suffix the engine expects on deployable process documents.
pub const BPMN_EXTENSION: &str = ".bpmn20.xml";

/// A process definition written out as `<id>.bpmn20.xml`.
#[derive(Debug, Clone, Copy)]
pub struct BpmnFile<'a> {
    definition: &'a ProcessDefinition,
}

impl<'a> BpmnFile<'a> {
    pub fn new(definition: &'a ProcessDefinition) -> Self {
        Self { definition }
    }
}

impl GeneratedFile for BpmnFile<'_> {
    fn file_name(&self) -> String {
        format!("{}{BPMN_EXTENSION}", self.definition.id())
    }

    fn render(&self) -> String {
        to_bpmn(self.definition)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rill_core::WriteResult;
    use rill_ir::ProcessParts;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_name() {
        let def = ProcessDefinition::new("order-approval", "Order", true, ProcessParts::default());
        assert_eq!(BpmnFile::new(&def).file_name(), "order-approval.bpmn20.xml");
    }

    #[test]
    fn test_write_renders_document() {
        let temp = TempDir::new().unwrap();
        let def = ProcessDefinition::new("p", "P", true, ProcessParts::default());
        let file = BpmnFile::new(&def);

        assert_eq!(file.write(&temp.path().join("build")).unwrap(), WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("build/p.bpmn20.xml")).unwrap();
        assert_eq!(written, to_bpmn(&def));

        assert_eq!(file.write(&temp.path().join("build")).unwrap(), WriteResult::Unchanged);
    }
}
