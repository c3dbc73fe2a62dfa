use serde::Serialize;

/// A directed edge between two elements of the same scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFlow {
    pub id: String,
    pub name: Option<String>,
    pub source_ref: String,
    pub target_ref: String,
    /// Opaque condition formula, emitted verbatim.
    pub condition: Option<String>,
}

impl SequenceFlow {
    pub fn is_conditional(&self) -> bool {
        self.condition.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// An error declared at process scope and referenced by error boundary events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDefinition {
    pub id: String,
    pub error_code: String,
}
