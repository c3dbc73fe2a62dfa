//! Namespaces declared on the document root.

/// BPMN 2.0 model schema, the default namespace.
pub const BPMN: &str = "http://www.omg.org/spec/BPMN/20100524/MODEL";
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema";
/// Engine extension attributes and elements (`flowable:*`).
pub const FLOWABLE: &str = "http://flowable.org/bpmn";
/// Declared-variable metadata (`rill:var`).
pub const RILL: &str = "https://rill-bpmn.dev";
pub const BPMNDI: &str = "http://www.omg.org/spec/BPMN/20100524/DI";
pub const OMGDC: &str = "http://www.omg.org/spec/DD/20100524/DC";
pub const OMGDI: &str = "http://www.omg.org/spec/DD/20100524/DI";

pub const TARGET_NAMESPACE: &str = "http://flowable.org/test";

/// Attributes of the `<definitions>` root, in document order.
pub const DEFINITIONS_ATTRS: [(&str, &str); 9] = [
    ("xmlns", BPMN),
    ("xmlns:xsi", XSI),
    ("xmlns:xsd", XSD),
    ("xmlns:flowable", FLOWABLE),
    ("xmlns:rill", RILL),
    ("xmlns:bpmndi", BPMNDI),
    ("xmlns:omgdc", OMGDC),
    ("xmlns:omgdi", OMGDI),
    ("targetNamespace", TARGET_NAMESPACE),
];
