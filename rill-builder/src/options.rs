//! Option types accepted by [`ProcessBuilder`](crate::ProcessBuilder) methods.
//!
//! Every option type is built fluently from `new()` (or `Default`); fields are
//! public so struct-literal construction with `..Default::default()` works too.
//! An omitted `name` becomes the humanized element id.

use indexmap::IndexMap;
use rill_ir::{ElementRef, FieldValue, MappingSource, TimerDefinition, TimerKind, Var, VarType};

/// Script language used when a script task does not name one.
pub const DEFAULT_SCRIPT_FORMAT: &str = "groovy";

macro_rules! name_only_options {
    ($($(#[$meta:meta])* $ty:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $ty {
                pub name: Option<String>,
            }

            impl $ty {
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn name(mut self, name: impl Into<String>) -> Self {
                    self.name = Some(name.into());
                    self
                }
            }
        )+
    };
}

name_only_options!(
    /// Options for a start event.
    StartOptions,
    /// Options for an end event.
    EndOptions,
    /// Options for a parallel gateway.
    ParallelOptions,
    /// Options for a sub-process.
    SubProcessOptions,
);

/// Options for a service task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceOptions {
    pub name: Option<String>,
    /// Delegate expression resolving to the unit of work, e.g. `${validator}`.
    pub delegate: Option<String>,
    /// Fully qualified class implementing the unit of work.
    pub class: Option<String>,
    pub fields: IndexMap<String, FieldValue>,
    pub is_async: bool,
    pub inputs: Vec<Var>,
    pub outputs: IndexMap<String, VarType>,
}

impl ServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn delegate(mut self, delegate: impl Into<String>) -> Self {
        self.delegate = Some(delegate.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Inject a field; pass [`expr`](rill_ir::expr) for a formula.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn run_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    pub fn input(mut self, var: &Var) -> Self {
        self.inputs.push(var.clone());
        self
    }

    pub fn inputs<'a>(mut self, vars: impl IntoIterator<Item = &'a Var>) -> Self {
        self.inputs.extend(vars.into_iter().cloned());
        self
    }

    pub fn output(mut self, name: impl Into<String>, ty: VarType) -> Self {
        self.outputs.insert(name.into(), ty);
        self
    }
}

/// Options for a script task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptOptions {
    pub name: Option<String>,
    /// Script language, [`DEFAULT_SCRIPT_FORMAT`] when omitted.
    pub format: Option<String>,
    pub script: String,
    pub auto_store_variables: bool,
    pub inputs: Vec<Var>,
    pub outputs: IndexMap<String, VarType>,
}

impl ScriptOptions {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn auto_store_variables(mut self, enabled: bool) -> Self {
        self.auto_store_variables = enabled;
        self
    }

    pub fn input(mut self, var: &Var) -> Self {
        self.inputs.push(var.clone());
        self
    }

    pub fn inputs<'a>(mut self, vars: impl IntoIterator<Item = &'a Var>) -> Self {
        self.inputs.extend(vars.into_iter().cloned());
        self
    }

    pub fn output(mut self, name: impl Into<String>, ty: VarType) -> Self {
        self.outputs.insert(name.into(), ty);
        self
    }
}

/// A form field captured by a user task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub ty: String,
    pub required: bool,
}

impl FormField {
    /// An optional field of engine form type `ty` (`string`, `boolean`, ...).
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            required: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Options for a user task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserOptions {
    pub name: Option<String>,
    pub assignee: Option<String>,
    pub candidate_groups: Vec<String>,
    pub form_key: Option<String>,
    pub form: IndexMap<String, FormField>,
    pub inputs: Vec<Var>,
    pub outputs: IndexMap<String, VarType>,
}

impl UserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn candidate_group(mut self, group: impl Into<String>) -> Self {
        self.candidate_groups.push(group.into());
        self
    }

    pub fn candidate_groups<S: Into<String>>(mut self, groups: impl IntoIterator<Item = S>) -> Self {
        self.candidate_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn form_key(mut self, form_key: impl Into<String>) -> Self {
        self.form_key = Some(form_key.into());
        self
    }

    pub fn form(mut self, key: impl Into<String>, field: FormField) -> Self {
        self.form.insert(key.into(), field);
        self
    }

    pub fn input(mut self, var: &Var) -> Self {
        self.inputs.push(var.clone());
        self
    }

    pub fn inputs<'a>(mut self, vars: impl IntoIterator<Item = &'a Var>) -> Self {
        self.inputs.extend(vars.into_iter().cloned());
        self
    }

    pub fn output(mut self, name: impl Into<String>, ty: VarType) -> Self {
        self.outputs.insert(name.into(), ty);
        self
    }
}

/// Options for an exclusive gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayOptions {
    pub name: Option<String>,
    /// Id of the outgoing flow taken when no condition matches.
    pub default_flow: Option<String>,
}

impl GatewayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn default_flow(mut self, flow_id: impl Into<String>) -> Self {
        self.default_flow = Some(flow_id.into());
        self
    }
}

/// Options for a timer attached to the boundary of a task or sub-process.
///
/// Exactly one of duration, date or cycle is used; when several are given the
/// first in that order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerBoundaryOptions {
    pub attached_to: String,
    /// Defaults to `true`: the timer cancels the activity it is attached to.
    pub interrupting: Option<bool>,
    pub duration: Option<String>,
    pub date: Option<String>,
    pub cycle: Option<String>,
}

impl TimerBoundaryOptions {
    pub fn new(attached_to: &ElementRef) -> Self {
        Self {
            attached_to: attached_to.id().to_string(),
            interrupting: None,
            duration: None,
            date: None,
            cycle: None,
        }
    }

    pub fn interrupting(mut self, interrupting: bool) -> Self {
        self.interrupting = Some(interrupting);
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn cycle(mut self, cycle: impl Into<String>) -> Self {
        self.cycle = Some(cycle.into());
        self
    }

    pub(crate) fn timer(&self) -> Option<TimerDefinition> {
        timer_definition(&self.duration, &self.date, &self.cycle)
    }
}

/// Options for an intermediate timer catch event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerCatchOptions {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
    pub cycle: Option<String>,
}

impl TimerCatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn cycle(mut self, cycle: impl Into<String>) -> Self {
        self.cycle = Some(cycle.into());
        self
    }

    pub(crate) fn timer(&self) -> Option<TimerDefinition> {
        timer_definition(&self.duration, &self.date, &self.cycle)
    }
}

/// Pick the timer definition in the fixed order duration, date, cycle.
/// Empty strings count as absent.
fn timer_definition(
    duration: &Option<String>,
    date: &Option<String>,
    cycle: &Option<String>,
) -> Option<TimerDefinition> {
    [
        (TimerKind::Duration, duration),
        (TimerKind::Date, date),
        (TimerKind::Cycle, cycle),
    ]
    .into_iter()
    .find_map(|(kind, value)| match value {
        Some(v) if !v.is_empty() => Some(TimerDefinition {
            kind,
            value: v.clone(),
        }),
        _ => None,
    })
}

/// Options for an error boundary event. Error boundaries always interrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBoundaryOptions {
    pub attached_to: String,
    pub error_ref: String,
}

impl ErrorBoundaryOptions {
    pub fn new(attached_to: &ElementRef, error_ref: impl Into<String>) -> Self {
        Self {
            attached_to: attached_to.id().to_string(),
            error_ref: error_ref.into(),
        }
    }
}

/// Options for a call activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOptions {
    pub name: Option<String>,
    pub called_element: String,
    pub inherit_variables: bool,
    /// Callee parameter name → caller variable or expression.
    pub inputs: IndexMap<String, MappingSource>,
    /// Caller variable name → callee result name.
    pub outputs: IndexMap<String, String>,
}

impl CallOptions {
    pub fn new(called_element: impl Into<String>) -> Self {
        Self {
            name: None,
            called_element: called_element.into(),
            inherit_variables: false,
            inputs: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn inherit_variables(mut self, inherit: bool) -> Self {
        self.inherit_variables = inherit;
        self
    }

    /// Pass `source` into the callee's `target` parameter. A plain string
    /// names a caller variable; an [`expr`](rill_ir::expr) is evaluated.
    pub fn input(mut self, target: impl Into<String>, source: impl Into<MappingSource>) -> Self {
        self.inputs.insert(target.into(), source.into());
        self
    }

    /// Copy the callee's `source` result into the caller variable `target`.
    pub fn output(mut self, target: impl Into<String>, source: impl Into<String>) -> Self {
        self.outputs.insert(target.into(), source.into());
        self
    }
}

/// Explicit settings for a sequence flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowOptions {
    /// Used verbatim instead of a generated id; this is how a gateway's
    /// default flow id is satisfied.
    pub id: Option<String>,
    /// Defaults to the condition.
    pub name: Option<String>,
    pub condition: Option<String>,
}

impl FlowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// What a conditional flow is gated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Truthiness of a declared variable.
    Var(Var),
    /// A formula used verbatim as condition and display name.
    Raw(String),
    /// Explicit id, name and condition.
    Options(FlowOptions),
}

impl Condition {
    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }
}

impl From<Var> for Condition {
    fn from(var: Var) -> Self {
        Self::Var(var)
    }
}

impl From<&Var> for Condition {
    fn from(var: &Var) -> Self {
        Self::Var(var.clone())
    }
}

impl From<&str> for Condition {
    fn from(condition: &str) -> Self {
        Self::Raw(condition.to_string())
    }
}

impl From<String> for Condition {
    fn from(condition: String) -> Self {
        Self::Raw(condition)
    }
}

impl From<FlowOptions> for Condition {
    fn from(options: FlowOptions) -> Self {
        Self::Options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_prefers_duration() {
        let anchor = ElementRef::new("task");
        let options = TimerBoundaryOptions::new(&anchor)
            .cycle("R2/PT6H")
            .date("2030-01-01T00:00:00Z")
            .duration("PT1H");

        let timer = options.timer().unwrap();
        assert_eq!(timer.kind, TimerKind::Duration);
        assert_eq!(timer.value, "PT1H");
    }

    #[test]
    fn test_timer_date_before_cycle() {
        let options = TimerCatchOptions::new()
            .cycle("R/PT1M")
            .date("2030-01-01T00:00:00Z");

        let timer = options.timer().unwrap();
        assert_eq!(timer.kind, TimerKind::Date);
    }

    #[test]
    fn test_timer_ignores_empty_values() {
        let options = TimerCatchOptions::new().duration("").cycle("R/PT1M");
        assert_eq!(options.timer().map(|t| t.kind), Some(TimerKind::Cycle));

        assert!(TimerCatchOptions::new().timer().is_none());
    }

    #[test]
    fn test_condition_conversions() {
        let var = Var::new("approved", VarType::Boolean);
        assert!(Condition::from(&var).is_var());
        assert_eq!(
            Condition::from("${x > 1}"),
            Condition::Raw("${x > 1}".into())
        );
        assert!(matches!(
            Condition::from(FlowOptions::new().id("d1")),
            Condition::Options(FlowOptions { id: Some(_), .. })
        ));
    }

    #[test]
    fn test_service_options_keep_field_order() {
        let options = ServiceOptions::new()
            .field("minAmount", "50")
            .field("maxAmount", rill_ir::expr("config.maxOrderAmount"));

        let names: Vec<&str> = options.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["minAmount", "maxAmount"]);
        assert!(options.fields["maxAmount"].is_expression());
    }

    #[test]
    fn test_name_only_options() {
        assert_eq!(StartOptions::new().name("Begin").name.as_deref(), Some("Begin"));
        assert!(SubProcessOptions::default().name.is_none());
    }
}
