//! Process definition aggregate.

use serde::Serialize;

use crate::{AnyElement, ErrorDefinition, SequenceFlow, Var, VarDeclaration};

/// Handle to an element returned by every element-creation call.
///
/// When the creating call declared outputs, the handle also carries a [`Var`]
/// per output so it can be used as a flow condition or another task's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    id: String,
    outputs: Vec<Var>,
}

impl ElementRef {
    /// Refer to an element by id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            outputs: Vec::new(),
        }
    }

    /// Attach the variables the element produces.
    pub fn with_outputs(mut self, outputs: Vec<Var>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The output variable named `name`, if the element declared one.
    pub fn output(&self, name: &str) -> Option<&Var> {
        self.outputs.iter().find(|v| v.name() == name)
    }

    pub fn outputs(&self) -> &[Var] {
        &self.outputs
    }
}

/// Everything a builder scope accumulated, before it is wrapped in a
/// [`ProcessDefinition`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessParts {
    pub elements: Vec<AnyElement>,
    pub flows: Vec<SequenceFlow>,
    pub errors: Vec<ErrorDefinition>,
    pub vars: Vec<VarDeclaration>,
}

/// Root aggregate of a compiled process. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    id: String,
    name: String,
    is_executable: bool,
    elements: Vec<AnyElement>,
    flows: Vec<SequenceFlow>,
    errors: Vec<ErrorDefinition>,
    vars: Vec<VarDeclaration>,
}

impl ProcessDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        is_executable: bool,
        parts: ProcessParts,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_executable,
            elements: parts.elements,
            flows: parts.flows,
            errors: parts.errors,
            vars: parts.vars,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_executable(&self) -> bool {
        self.is_executable
    }

    pub fn elements(&self) -> &[AnyElement] {
        &self.elements
    }

    pub fn flows(&self) -> &[SequenceFlow] {
        &self.flows
    }

    pub fn errors(&self) -> &[ErrorDefinition] {
        &self.errors
    }

    /// Process-level variable declarations.
    pub fn vars(&self) -> &[VarDeclaration] {
        &self.vars
    }

    /// Look up an element of the top-level scope by id.
    pub fn element(&self, id: &str) -> Option<&AnyElement> {
        self.elements.iter().find(|el| el.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EndEvent, StartEvent, VarType};

    #[test]
    fn test_element_ref_outputs() {
        let r = ElementRef::new("review").with_outputs(vec![
            Var::new("approved", VarType::Boolean),
            Var::new("comments", VarType::Text),
        ]);
        assert_eq!(r.id(), "review");
        assert_eq!(r.outputs().len(), 2);
        assert_eq!(r.output("approved").map(Var::ty), Some(VarType::Boolean));
        assert!(r.output("missing").is_none());
    }

    #[test]
    fn test_definition_from_parts() {
        let parts = ProcessParts {
            elements: vec![
                AnyElement::StartEvent(StartEvent {
                    id: "s".into(),
                    name: Some("S".into()),
                }),
                AnyElement::EndEvent(EndEvent {
                    id: "e".into(),
                    name: Some("E".into()),
                }),
            ],
            ..Default::default()
        };
        let def = ProcessDefinition::new("p", "Process", true, parts);

        assert_eq!(def.id(), "p");
        assert_eq!(def.name(), "Process");
        assert!(def.is_executable());
        assert_eq!(def.elements().len(), 2);
        assert!(def.element("e").is_some());
        assert!(def.element("x").is_none());
        assert!(def.flows().is_empty());
    }
}
