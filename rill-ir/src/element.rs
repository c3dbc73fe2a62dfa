//! Process graph elements.
//!
//! [`AnyElement`] is a closed set: every stage of the pipeline matches on it
//! exhaustively, so adding a variant is a compile error everywhere it has to
//! be handled.

use std::fmt;

use serde::Serialize;

use crate::{Expression, FieldValue, SequenceFlow, VarDeclaration};

/// Any element of a process or sub-process scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnyElement {
    StartEvent(StartEvent),
    EndEvent(EndEvent),
    ServiceTask(ServiceTask),
    ScriptTask(ScriptTask),
    UserTask(UserTask),
    ExclusiveGateway(ExclusiveGateway),
    ParallelGateway(ParallelGateway),
    BoundaryEvent(BoundaryEvent),
    IntermediateCatchEvent(IntermediateCatchEvent),
    SubProcess(SubProcess),
    CallActivity(CallActivity),
}

impl AnyElement {
    pub fn id(&self) -> &str {
        match self {
            Self::StartEvent(el) => &el.id,
            Self::EndEvent(el) => &el.id,
            Self::ServiceTask(el) => &el.id,
            Self::ScriptTask(el) => &el.id,
            Self::UserTask(el) => &el.id,
            Self::ExclusiveGateway(el) => &el.id,
            Self::ParallelGateway(el) => &el.id,
            Self::BoundaryEvent(el) => &el.id,
            Self::IntermediateCatchEvent(el) => &el.id,
            Self::SubProcess(el) => &el.id,
            Self::CallActivity(el) => &el.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::StartEvent(el) => el.name.as_deref(),
            Self::EndEvent(el) => el.name.as_deref(),
            Self::ServiceTask(el) => el.name.as_deref(),
            Self::ScriptTask(el) => el.name.as_deref(),
            Self::UserTask(el) => el.name.as_deref(),
            Self::ExclusiveGateway(el) => el.name.as_deref(),
            Self::ParallelGateway(el) => el.name.as_deref(),
            Self::BoundaryEvent(_) => None,
            Self::IntermediateCatchEvent(el) => el.name.as_deref(),
            Self::SubProcess(el) => el.name.as_deref(),
            Self::CallActivity(el) => el.name.as_deref(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::StartEvent(_) => ElementKind::StartEvent,
            Self::EndEvent(_) => ElementKind::EndEvent,
            Self::ServiceTask(_) => ElementKind::ServiceTask,
            Self::ScriptTask(_) => ElementKind::ScriptTask,
            Self::UserTask(_) => ElementKind::UserTask,
            Self::ExclusiveGateway(_) => ElementKind::ExclusiveGateway,
            Self::ParallelGateway(_) => ElementKind::ParallelGateway,
            Self::BoundaryEvent(_) => ElementKind::BoundaryEvent,
            Self::IntermediateCatchEvent(_) => ElementKind::IntermediateCatchEvent,
            Self::SubProcess(_) => ElementKind::SubProcess,
            Self::CallActivity(_) => ElementKind::CallActivity,
        }
    }

    /// Variables this element declares it consumes or produces.
    pub fn vars(&self) -> &[VarDeclaration] {
        match self {
            Self::ServiceTask(el) => &el.vars,
            Self::ScriptTask(el) => &el.vars,
            Self::UserTask(el) => &el.vars,
            Self::StartEvent(_)
            | Self::EndEvent(_)
            | Self::ExclusiveGateway(_)
            | Self::ParallelGateway(_)
            | Self::BoundaryEvent(_)
            | Self::IntermediateCatchEvent(_)
            | Self::SubProcess(_)
            | Self::CallActivity(_) => &[],
        }
    }
}

/// Discriminant of [`AnyElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    StartEvent,
    EndEvent,
    ServiceTask,
    ScriptTask,
    UserTask,
    ExclusiveGateway,
    ParallelGateway,
    BoundaryEvent,
    IntermediateCatchEvent,
    SubProcess,
    CallActivity,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartEvent => "startEvent",
            Self::EndEvent => "endEvent",
            Self::ServiceTask => "serviceTask",
            Self::ScriptTask => "scriptTask",
            Self::UserTask => "userTask",
            Self::ExclusiveGateway => "exclusiveGateway",
            Self::ParallelGateway => "parallelGateway",
            Self::BoundaryEvent => "boundaryEvent",
            Self::IntermediateCatchEvent => "intermediateCatchEvent",
            Self::SubProcess => "subProcess",
            Self::CallActivity => "callActivity",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartEvent {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndEvent {
    pub id: String,
    pub name: Option<String>,
}

/// Task delegating to an externally registered unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTask {
    pub id: String,
    pub name: Option<String>,
    pub delegate_expression: Option<String>,
    pub class_name: Option<String>,
    pub fields: Vec<FieldDefinition>,
    pub is_async: bool,
    pub vars: Vec<VarDeclaration>,
}

/// A field injected into a service task's delegate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptTask {
    pub id: String,
    pub name: Option<String>,
    pub script_format: String,
    pub script: String,
    pub auto_store_variables: bool,
    pub vars: Vec<VarDeclaration>,
}

/// Human task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTask {
    pub id: String,
    pub name: Option<String>,
    pub assignee: Option<String>,
    pub candidate_groups: Vec<String>,
    pub form_key: Option<String>,
    pub form_properties: Vec<FormProperty>,
    pub vars: Vec<VarDeclaration>,
}

/// Field captured when a user task is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusiveGateway {
    pub id: String,
    pub name: Option<String>,
    /// Id of the outgoing flow taken when no condition matches.
    pub default_flow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParallelGateway {
    pub id: String,
    pub name: Option<String>,
}

/// Event attached to the boundary of a task or sub-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryEvent {
    pub id: String,
    pub attached_to: String,
    pub cancel_activity: bool,
    pub definition: Option<EventDefinition>,
}

/// What triggers a boundary event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventDefinition {
    Timer(TimerDefinition),
    Error {
        #[serde(rename = "errorRef")]
        error_ref: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntermediateCatchEvent {
    pub id: String,
    pub name: Option<String>,
    pub timer: Option<TimerDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerDefinition {
    pub kind: TimerKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerKind {
    /// ISO-8601 duration, e.g. `PT30M`.
    Duration,
    /// Fixed ISO-8601 date.
    Date,
    /// Repeating interval, e.g. `R2/PT6H`.
    Cycle,
}

/// Nested scope with its own elements and flows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubProcess {
    pub id: String,
    pub name: Option<String>,
    pub elements: Vec<AnyElement>,
    pub flows: Vec<SequenceFlow>,
}

/// Invocation of a separately deployed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallActivity {
    pub id: String,
    pub name: Option<String>,
    pub called_element: String,
    pub inherit_variables: bool,
    pub inputs: Vec<VariableMapping>,
    pub outputs: Vec<VariableMapping>,
}

impl CallActivity {
    pub fn has_mappings(&self) -> bool {
        !self.inputs.is_empty() || !self.outputs.is_empty()
    }
}

/// Copies a value into `target`, from a named variable or a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableMapping {
    pub source: MappingSource,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MappingSource {
    Variable(String),
    Expression(Expression),
}

impl From<&str> for MappingSource {
    fn from(value: &str) -> Self {
        Self::Variable(value.to_string())
    }
}

impl From<String> for MappingSource {
    fn from(value: String) -> Self {
        Self::Variable(value)
    }
}

impl From<Expression> for MappingSource {
    fn from(value: Expression) -> Self {
        Self::Expression(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VarType;

    fn service(id: &str) -> AnyElement {
        AnyElement::ServiceTask(ServiceTask {
            id: id.into(),
            name: None,
            delegate_expression: Some("${svc}".into()),
            class_name: None,
            fields: vec![],
            is_async: false,
            vars: vec![VarDeclaration::output("result", VarType::Text)],
        })
    }

    #[test]
    fn test_element_accessors() {
        let el = service("svc");
        assert_eq!(el.id(), "svc");
        assert_eq!(el.name(), None);
        assert_eq!(el.kind(), ElementKind::ServiceTask);
        assert_eq!(el.vars().len(), 1);
    }

    #[test]
    fn test_elements_without_vars() {
        let el = AnyElement::ParallelGateway(ParallelGateway {
            id: "fork".into(),
            name: Some("Fork".into()),
        });
        assert_eq!(el.name(), Some("Fork"));
        assert!(el.vars().is_empty());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ElementKind::IntermediateCatchEvent.to_string(), "intermediateCatchEvent");
        assert_eq!(ElementKind::CallActivity.as_str(), "callActivity");
    }

    #[test]
    fn test_call_activity_has_mappings() {
        let mut call = CallActivity {
            id: "call".into(),
            name: None,
            called_element: "other".into(),
            inherit_variables: false,
            inputs: vec![],
            outputs: vec![],
        };
        assert!(!call.has_mappings());

        call.outputs.push(VariableMapping {
            source: MappingSource::Variable("score".into()),
            target: "creditScore".into(),
        });
        assert!(call.has_mappings());
    }
}
