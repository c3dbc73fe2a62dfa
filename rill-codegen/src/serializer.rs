//! Process definition to BPMN 2.0 XML.

use rill_ir::{
    AnyElement, BoundaryEvent, CallActivity, EventDefinition, ExclusiveGateway, FieldDefinition,
    FieldValue, IntermediateCatchEvent, MappingSource, ProcessDefinition, ScriptTask,
    SequenceFlow, ServiceTask, SubProcess, TimerDefinition, TimerKind, UserTask, VarDeclaration,
    VariableMapping,
};

use crate::{
    builder::{Attr, XmlWriter},
    namespaces::DEFINITIONS_ATTRS,
};

const EXTENSION_ELEMENTS: &str = "extensionElements";

/// Render `definition` as a Flowable-flavored BPMN 2.0 document.
///
/// Serialization cannot fail; text and attribute content is escaped and
/// scripts and conditions are wrapped in CDATA.
pub fn to_bpmn(definition: &ProcessDefinition) -> String {
    let mut w = XmlWriter::new();
    w.declaration();

    let root: Vec<Attr<'_>> = DEFINITIONS_ATTRS
        .iter()
        .map(|&(name, value)| (name, Some(value)))
        .collect();
    w.open("definitions", &root);

    for error in definition.errors() {
        w.self_close(
            "error",
            &[
                ("id", Some(error.id.as_str())),
                ("errorCode", Some(error.error_code.as_str())),
            ],
        );
    }

    w.open(
        "process",
        &[
            ("id", Some(definition.id())),
            ("name", Some(definition.name())),
            ("isExecutable", Some(bool_str(definition.is_executable()))),
        ],
    );
    if !definition.vars().is_empty() {
        w.open(EXTENSION_ELEMENTS, &[]);
        write_vars(&mut w, definition.vars());
        w.close(EXTENSION_ELEMENTS);
    }
    write_elements(&mut w, definition.elements());
    write_flows(&mut w, definition.flows());
    w.close("process");
    w.close("definitions");

    let xml = w.build();
    tracing::debug!(
        process = definition.id(),
        bytes = xml.len(),
        "serialized process"
    );
    xml
}

fn write_elements(w: &mut XmlWriter, elements: &[AnyElement]) {
    for el in elements {
        match el {
            AnyElement::StartEvent(event) => {
                w.self_close(
                    "startEvent",
                    &[("id", Some(event.id.as_str())), ("name", event.name.as_deref())],
                );
            }
            AnyElement::EndEvent(event) => {
                w.self_close(
                    "endEvent",
                    &[("id", Some(event.id.as_str())), ("name", event.name.as_deref())],
                );
            }
            AnyElement::ServiceTask(task) => write_service_task(w, task),
            AnyElement::ScriptTask(task) => write_script_task(w, task),
            AnyElement::UserTask(task) => write_user_task(w, task),
            AnyElement::ExclusiveGateway(gateway) => write_exclusive_gateway(w, gateway),
            AnyElement::ParallelGateway(gateway) => {
                w.self_close(
                    "parallelGateway",
                    &[("id", Some(gateway.id.as_str())), ("name", gateway.name.as_deref())],
                );
            }
            AnyElement::BoundaryEvent(event) => write_boundary_event(w, event),
            AnyElement::IntermediateCatchEvent(event) => write_catch_event(w, event),
            AnyElement::SubProcess(sub) => write_sub_process(w, sub),
            AnyElement::CallActivity(call) => write_call_activity(w, call),
        }
    }
}

fn write_service_task(w: &mut XmlWriter, task: &ServiceTask) {
    let delegate = task.delegate_expression.as_deref();
    // A delegate expression takes precedence over a class
    let class = match delegate {
        Some(_) => None,
        None => task.class_name.as_deref(),
    };
    let attrs = [
        ("id", Some(task.id.as_str())),
        ("name", task.name.as_deref()),
        ("flowable:delegateExpression", delegate),
        ("flowable:class", class),
        ("flowable:async", task.is_async.then_some("true")),
    ];

    if task.fields.is_empty() && task.vars.is_empty() {
        w.self_close("serviceTask", &attrs);
        return;
    }

    w.open("serviceTask", &attrs);
    w.open(EXTENSION_ELEMENTS, &[]);
    for field in &task.fields {
        write_field(w, field);
    }
    write_vars(w, &task.vars);
    w.close(EXTENSION_ELEMENTS);
    w.close("serviceTask");
}

fn write_field(w: &mut XmlWriter, field: &FieldDefinition) {
    let tag = match &field.value {
        FieldValue::Literal(_) => "flowable:string",
        FieldValue::Expression(_) => "flowable:expression",
    };
    w.open("flowable:field", &[("name", Some(field.name.as_str()))]);
    w.text(tag, field.value.as_str(), &[]);
    w.close("flowable:field");
}

fn write_script_task(w: &mut XmlWriter, task: &ScriptTask) {
    w.open(
        "scriptTask",
        &[
            ("id", Some(task.id.as_str())),
            ("name", task.name.as_deref()),
            ("scriptFormat", Some(task.script_format.as_str())),
            (
                "flowable:autoStoreVariables",
                task.auto_store_variables.then_some("true"),
            ),
        ],
    );
    if !task.vars.is_empty() {
        w.open(EXTENSION_ELEMENTS, &[]);
        write_vars(w, &task.vars);
        w.close(EXTENSION_ELEMENTS);
    }
    w.cdata("script", &task.script, &[]);
    w.close("scriptTask");
}

fn write_user_task(w: &mut XmlWriter, task: &UserTask) {
    let candidate_groups =
        (!task.candidate_groups.is_empty()).then(|| task.candidate_groups.join(","));
    let attrs = [
        ("id", Some(task.id.as_str())),
        ("name", task.name.as_deref()),
        ("flowable:assignee", task.assignee.as_deref()),
        ("flowable:candidateGroups", candidate_groups.as_deref()),
        ("flowable:formKey", task.form_key.as_deref()),
    ];

    if task.form_properties.is_empty() && task.vars.is_empty() {
        w.self_close("userTask", &attrs);
        return;
    }

    w.open("userTask", &attrs);
    w.open(EXTENSION_ELEMENTS, &[]);
    for prop in &task.form_properties {
        w.self_close(
            "flowable:formProperty",
            &[
                ("id", Some(prop.id.as_str())),
                ("name", Some(prop.name.as_str())),
                ("type", Some(prop.ty.as_str())),
                ("required", Some(bool_str(prop.required))),
            ],
        );
    }
    write_vars(w, &task.vars);
    w.close(EXTENSION_ELEMENTS);
    w.close("userTask");
}

fn write_exclusive_gateway(w: &mut XmlWriter, gateway: &ExclusiveGateway) {
    w.self_close(
        "exclusiveGateway",
        &[
            ("id", Some(gateway.id.as_str())),
            ("name", gateway.name.as_deref()),
            ("default", gateway.default_flow.as_deref()),
        ],
    );
}

fn write_boundary_event(w: &mut XmlWriter, event: &BoundaryEvent) {
    w.open(
        "boundaryEvent",
        &[
            ("id", Some(event.id.as_str())),
            ("attachedToRef", Some(event.attached_to.as_str())),
            ("cancelActivity", Some(bool_str(event.cancel_activity))),
        ],
    );
    match &event.definition {
        Some(EventDefinition::Timer(timer)) => write_timer(w, timer),
        Some(EventDefinition::Error { error_ref }) => {
            w.self_close("errorEventDefinition", &[("errorRef", Some(error_ref.as_str()))]);
        }
        None => {}
    }
    w.close("boundaryEvent");
}

fn write_catch_event(w: &mut XmlWriter, event: &IntermediateCatchEvent) {
    w.open(
        "intermediateCatchEvent",
        &[("id", Some(event.id.as_str())), ("name", event.name.as_deref())],
    );
    if let Some(timer) = &event.timer {
        write_timer(w, timer);
    }
    w.close("intermediateCatchEvent");
}

fn write_timer(w: &mut XmlWriter, timer: &TimerDefinition) {
    let tag = match timer.kind {
        TimerKind::Duration => "timeDuration",
        TimerKind::Date => "timeDate",
        TimerKind::Cycle => "timeCycle",
    };
    w.open("timerEventDefinition", &[]);
    w.text(tag, &timer.value, &[]);
    w.close("timerEventDefinition");
}

fn write_sub_process(w: &mut XmlWriter, sub: &SubProcess) {
    tracing::trace!(id = %sub.id, "entering sub-process");
    w.open(
        "subProcess",
        &[("id", Some(sub.id.as_str())), ("name", sub.name.as_deref())],
    );
    write_elements(w, &sub.elements);
    write_flows(w, &sub.flows);
    w.close("subProcess");
}

fn write_call_activity(w: &mut XmlWriter, call: &CallActivity) {
    let attrs = [
        ("id", Some(call.id.as_str())),
        ("name", call.name.as_deref()),
        ("calledElement", Some(call.called_element.as_str())),
        (
            "flowable:inheritVariables",
            call.inherit_variables.then_some("true"),
        ),
    ];

    if !call.has_mappings() {
        w.self_close("callActivity", &attrs);
        return;
    }

    w.open("callActivity", &attrs);
    w.open(EXTENSION_ELEMENTS, &[]);
    for mapping in &call.inputs {
        write_mapping(w, "flowable:in", mapping);
    }
    for mapping in &call.outputs {
        write_mapping(w, "flowable:out", mapping);
    }
    w.close(EXTENSION_ELEMENTS);
    w.close("callActivity");
}

fn write_mapping(w: &mut XmlWriter, tag: &str, mapping: &VariableMapping) {
    let source = match &mapping.source {
        MappingSource::Variable(name) => ("source", Some(name.as_str())),
        MappingSource::Expression(expr) => ("sourceExpression", Some(expr.value())),
    };
    w.self_close(tag, &[("target", Some(mapping.target.as_str())), source]);
}

fn write_flows(w: &mut XmlWriter, flows: &[SequenceFlow]) {
    for flow in flows {
        let attrs = [
            ("id", Some(flow.id.as_str())),
            ("name", flow.name.as_deref()),
            ("sourceRef", Some(flow.source_ref.as_str())),
            ("targetRef", Some(flow.target_ref.as_str())),
        ];
        match flow.condition.as_deref() {
            Some(condition) if flow.is_conditional() => {
                w.open("sequenceFlow", &attrs);
                w.cdata(
                    "conditionExpression",
                    condition,
                    &[("xsi:type", Some("tFormalExpression"))],
                );
                w.close("sequenceFlow");
            }
            _ => {
                w.self_close("sequenceFlow", &attrs);
            }
        }
    }
}

fn write_vars(w: &mut XmlWriter, vars: &[VarDeclaration]) {
    for var in vars {
        w.self_close(
            "rill:var",
            &[
                ("name", Some(var.name.as_str())),
                ("type", Some(var.ty.tag())),
                ("direction", Some(var.direction.as_str())),
            ],
        );
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
