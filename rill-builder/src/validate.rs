//! Structural checks over a finished process scope.

use std::collections::HashSet;

use miette::Diagnostic;
use rill_ir::{AnyElement, SequenceFlow, VarDeclaration};
use thiserror::Error;

/// A single structural violation found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("Process must have at least one start event")]
    #[diagnostic(code(rill::missing_start_event))]
    MissingStartEvent,

    #[error("Process must have at least one end event")]
    #[diagnostic(code(rill::missing_end_event))]
    MissingEndEvent,

    #[error("Flow \"{flow}\" references unknown source \"{source_ref}\"")]
    #[diagnostic(code(rill::unknown_flow_source))]
    UnknownFlowSource { flow: String, source_ref: String },

    #[error("Flow \"{flow}\" references unknown target \"{target_ref}\"")]
    #[diagnostic(code(rill::unknown_flow_target))]
    UnknownFlowTarget { flow: String, target_ref: String },

    #[error("Gateway \"{gateway}\" default flow \"{default_flow}\" not found among outgoing flows")]
    #[diagnostic(
        code(rill::invalid_gateway_default),
        help("give the default flow an explicit id with FlowOptions::id")
    )]
    InvalidGatewayDefault {
        gateway: String,
        default_flow: String,
    },

    #[error("Boundary event \"{event}\" attached to unknown element \"{attached_to}\"")]
    #[diagnostic(code(rill::unknown_attachment))]
    UnknownAttachment { event: String, attached_to: String },

    #[error(
        "Task \"{element}\" requires variable \"{var}\" but nothing in the process provides it"
    )]
    #[diagnostic(
        code(rill::unsatisfied_input),
        help("declare it with var() or as another task's output")
    )]
    UnsatisfiedInput { element: String, var: String },
}

impl ValidationError {
    /// Id of the element or flow the violation is about, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::MissingStartEvent | Self::MissingEndEvent => None,
            Self::UnknownFlowSource { flow, .. } | Self::UnknownFlowTarget { flow, .. } => {
                Some(flow)
            }
            Self::InvalidGatewayDefault { gateway, .. } => Some(gateway),
            Self::UnknownAttachment { event, .. } => Some(event),
            Self::UnsatisfiedInput { element, .. } => Some(element),
        }
    }
}

/// Check one scope's elements and flows against the process-level variable
/// declarations.
///
/// Every check runs; the result lists all violations in a stable order.
/// Sub-process contents are not descended into.
///
/// Variable availability is set membership: an input is satisfied when any
/// process-level declaration or any element output in this scope has its
/// name, regardless of ordering or which branch produces it.
pub fn validate(
    elements: &[AnyElement],
    flows: &[SequenceFlow],
    process_vars: &[VarDeclaration],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let element_ids: HashSet<&str> = elements.iter().map(AnyElement::id).collect();

    if !elements.iter().any(|el| matches!(el, AnyElement::StartEvent(_))) {
        errors.push(ValidationError::MissingStartEvent);
    }
    if !elements.iter().any(|el| matches!(el, AnyElement::EndEvent(_))) {
        errors.push(ValidationError::MissingEndEvent);
    }

    for flow in flows {
        if !element_ids.contains(flow.source_ref.as_str()) {
            errors.push(ValidationError::UnknownFlowSource {
                flow: flow.id.clone(),
                source_ref: flow.source_ref.clone(),
            });
        }
        if !element_ids.contains(flow.target_ref.as_str()) {
            errors.push(ValidationError::UnknownFlowTarget {
                flow: flow.id.clone(),
                target_ref: flow.target_ref.clone(),
            });
        }
    }

    for el in elements {
        match el {
            AnyElement::ExclusiveGateway(gateway) => {
                let Some(default_flow) = gateway.default_flow.as_ref().filter(|d| !d.is_empty())
                else {
                    continue;
                };
                let found = flows
                    .iter()
                    .any(|f| f.source_ref == gateway.id && &f.id == default_flow);
                if !found {
                    errors.push(ValidationError::InvalidGatewayDefault {
                        gateway: gateway.id.clone(),
                        default_flow: default_flow.clone(),
                    });
                }
            }
            AnyElement::BoundaryEvent(event) => {
                if !element_ids.contains(event.attached_to.as_str()) {
                    errors.push(ValidationError::UnknownAttachment {
                        event: event.id.clone(),
                        attached_to: event.attached_to.clone(),
                    });
                }
            }
            _ => {}
        }
    }

    let available: HashSet<&str> = process_vars
        .iter()
        .map(|v| v.name.as_str())
        .chain(
            elements
                .iter()
                .flat_map(AnyElement::vars)
                .filter(|v| v.is_output())
                .map(|v| v.name.as_str()),
        )
        .collect();

    for el in elements {
        for var in el.vars().iter().filter(|v| v.is_input()) {
            if !available.contains(var.name.as_str()) {
                errors.push(ValidationError::UnsatisfiedInput {
                    element: el.id().to_string(),
                    var: var.name.clone(),
                });
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "validation found violations");
    }
    errors
}
