use rill_core::humanize;
use rill_ir::{
    AnyElement, BoundaryEvent, CallActivity, ElementRef, EndEvent, ErrorDefinition,
    EventDefinition, ExclusiveGateway, FieldDefinition, FormProperty, IntermediateCatchEvent,
    MappingSource, ParallelGateway, ProcessParts, ScriptTask, SequenceFlow, ServiceTask,
    StartEvent, SubProcess, UserTask, Var, VarDeclaration, VarType, VariableMapping,
};

use crate::{
    ElementRegistry, Result,
    options::{
        CallOptions, Condition, DEFAULT_SCRIPT_FORMAT, EndOptions, ErrorBoundaryOptions,
        GatewayOptions, ParallelOptions, ScriptOptions, ServiceOptions, StartOptions,
        SubProcessOptions, TimerBoundaryOptions, TimerCatchOptions, UserOptions,
    },
};

/// Fluent constructor for one process scope.
///
/// Every element-creation call registers its id in the shared
/// [`ElementRegistry`] and fails immediately on a duplicate. Sub-processes get
/// a child builder that borrows the same registry for the duration of its
/// callback but owns its own element and flow lists.
///
/// Flow ids are generated from a counter owned by this builder instance and
/// are not checked against the registry.
///
/// An explicit empty name, default flow or flow id is kept as given. Empty
/// delegate, class, assignee and form key values count as unset.
#[derive(Debug)]
pub struct ProcessBuilder<'r> {
    registry: &'r mut ElementRegistry,
    elements: Vec<AnyElement>,
    flows: Vec<SequenceFlow>,
    errors: Vec<ErrorDefinition>,
    vars: Vec<VarDeclaration>,
    flow_counter: usize,
}

impl<'r> ProcessBuilder<'r> {
    pub fn new(registry: &'r mut ElementRegistry) -> Self {
        Self {
            registry,
            elements: Vec::new(),
            flows: Vec::new(),
            errors: Vec::new(),
            vars: Vec::new(),
            flow_counter: 0,
        }
    }

    /// Declare a variable the whole process expects as input.
    pub fn var(&mut self, name: impl Into<String>, ty: VarType) -> Var {
        let var = Var::new(name, ty);
        self.vars.push(VarDeclaration::input(&var));
        var
    }

    /// Like [`var`](Self::var), resolving the type from its tag
    /// (`string`, `boolean`, `double`, `date`).
    pub fn var_tagged(&mut self, name: impl Into<String>, tag: &str) -> Result<Var> {
        let ty: VarType = tag.parse()?;
        Ok(self.var(name, ty))
    }

    pub fn start(&mut self, id: &str) -> Result<ElementRef> {
        self.start_with(id, StartOptions::default())
    }

    pub fn start_with(&mut self, id: &str, options: StartOptions) -> Result<ElementRef> {
        self.add(AnyElement::StartEvent(StartEvent {
            id: id.to_string(),
            name: display_name(id, options.name),
        }))?;
        Ok(ElementRef::new(id))
    }

    pub fn end(&mut self, id: &str) -> Result<ElementRef> {
        self.end_with(id, EndOptions::default())
    }

    pub fn end_with(&mut self, id: &str, options: EndOptions) -> Result<ElementRef> {
        self.add(AnyElement::EndEvent(EndEvent {
            id: id.to_string(),
            name: display_name(id, options.name),
        }))?;
        Ok(ElementRef::new(id))
    }

    /// Add a service task. The returned ref carries one [`Var`] per declared
    /// output.
    pub fn service(&mut self, id: &str, options: ServiceOptions) -> Result<ElementRef> {
        let ServiceOptions {
            name,
            delegate,
            class,
            fields,
            is_async,
            inputs,
            outputs,
        } = options;

        let outputs: Vec<Var> = outputs
            .into_iter()
            .map(|(name, ty)| Var::new(name, ty))
            .collect();

        self.add(AnyElement::ServiceTask(ServiceTask {
            id: id.to_string(),
            name: display_name(id, name),
            delegate_expression: non_empty(delegate),
            class_name: non_empty(class),
            fields: fields
                .into_iter()
                .map(|(name, value)| FieldDefinition { name, value })
                .collect(),
            is_async,
            vars: declarations(&inputs, &outputs),
        }))?;
        Ok(ElementRef::new(id).with_outputs(outputs))
    }

    pub fn script(&mut self, id: &str, options: ScriptOptions) -> Result<ElementRef> {
        let ScriptOptions {
            name,
            format,
            script,
            auto_store_variables,
            inputs,
            outputs,
        } = options;

        let outputs: Vec<Var> = outputs
            .into_iter()
            .map(|(name, ty)| Var::new(name, ty))
            .collect();

        self.add(AnyElement::ScriptTask(ScriptTask {
            id: id.to_string(),
            name: display_name(id, name),
            script_format: format.unwrap_or_else(|| DEFAULT_SCRIPT_FORMAT.to_string()),
            script,
            auto_store_variables,
            vars: declarations(&inputs, &outputs),
        }))?;
        Ok(ElementRef::new(id).with_outputs(outputs))
    }

    pub fn user(&mut self, id: &str, options: UserOptions) -> Result<ElementRef> {
        let UserOptions {
            name,
            assignee,
            candidate_groups,
            form_key,
            form,
            inputs,
            outputs,
        } = options;

        let outputs: Vec<Var> = outputs
            .into_iter()
            .map(|(name, ty)| Var::new(name, ty))
            .collect();

        self.add(AnyElement::UserTask(UserTask {
            id: id.to_string(),
            name: display_name(id, name),
            assignee: non_empty(assignee),
            candidate_groups,
            form_key: non_empty(form_key),
            form_properties: form
                .into_iter()
                .map(|(key, field)| FormProperty {
                    id: key.clone(),
                    name: key,
                    ty: field.ty,
                    required: field.required,
                })
                .collect(),
            vars: declarations(&inputs, &outputs),
        }))?;
        Ok(ElementRef::new(id).with_outputs(outputs))
    }

    /// Add an exclusive gateway.
    pub fn gateway(&mut self, id: &str) -> Result<ElementRef> {
        self.gateway_with(id, GatewayOptions::default())
    }

    pub fn gateway_with(&mut self, id: &str, options: GatewayOptions) -> Result<ElementRef> {
        self.add(AnyElement::ExclusiveGateway(ExclusiveGateway {
            id: id.to_string(),
            name: display_name(id, options.name),
            default_flow: options.default_flow,
        }))?;
        Ok(ElementRef::new(id))
    }

    pub fn parallel(&mut self, id: &str) -> Result<ElementRef> {
        self.parallel_with(id, ParallelOptions::default())
    }

    pub fn parallel_with(&mut self, id: &str, options: ParallelOptions) -> Result<ElementRef> {
        self.add(AnyElement::ParallelGateway(ParallelGateway {
            id: id.to_string(),
            name: display_name(id, options.name),
        }))?;
        Ok(ElementRef::new(id))
    }

    /// Attach a timer to the boundary of a task or sub-process. Boundary
    /// events carry no display name.
    pub fn timer(&mut self, id: &str, options: TimerBoundaryOptions) -> Result<ElementRef> {
        let definition = options.timer().map(EventDefinition::Timer);
        self.add(AnyElement::BoundaryEvent(BoundaryEvent {
            id: id.to_string(),
            attached_to: options.attached_to,
            cancel_activity: options.interrupting.unwrap_or(true),
            definition,
        }))?;
        Ok(ElementRef::new(id))
    }

    /// Add an intermediate event that waits for a timer.
    pub fn timer_catch(&mut self, id: &str, options: TimerCatchOptions) -> Result<ElementRef> {
        let timer = options.timer();
        self.add(AnyElement::IntermediateCatchEvent(IntermediateCatchEvent {
            id: id.to_string(),
            name: display_name(id, options.name),
            timer,
        }))?;
        Ok(ElementRef::new(id))
    }

    /// Attach an interrupting error catcher to a task or sub-process.
    pub fn error_boundary(&mut self, id: &str, options: ErrorBoundaryOptions) -> Result<ElementRef> {
        self.add(AnyElement::BoundaryEvent(BoundaryEvent {
            id: id.to_string(),
            attached_to: options.attached_to,
            cancel_activity: true,
            definition: Some(EventDefinition::Error {
                error_ref: options.error_ref,
            }),
        }))?;
        Ok(ElementRef::new(id))
    }

    pub fn subprocess<F>(&mut self, id: &str, build: F) -> Result<ElementRef>
    where
        F: FnOnce(&mut ProcessBuilder<'_>) -> Result<()>,
    {
        self.subprocess_with(id, SubProcessOptions::default(), build)
    }

    /// Build a nested scope.
    ///
    /// The id is registered before `build` runs. Error definitions and
    /// variable declarations made inside the scope belong to the process and
    /// are moved up to this builder.
    pub fn subprocess_with<F>(
        &mut self,
        id: &str,
        options: SubProcessOptions,
        build: F,
    ) -> Result<ElementRef>
    where
        F: FnOnce(&mut ProcessBuilder<'_>) -> Result<()>,
    {
        self.registry.register(id)?;

        let mut child = ProcessBuilder::new(&mut *self.registry);
        build(&mut child)?;
        let ProcessParts {
            elements,
            flows,
            errors,
            vars,
        } = child.finish();

        tracing::debug!(
            id,
            elements = elements.len(),
            flows = flows.len(),
            "built sub-process"
        );

        self.errors.extend(errors);
        self.vars.extend(vars);
        self.elements.push(AnyElement::SubProcess(SubProcess {
            id: id.to_string(),
            name: display_name(id, options.name),
            elements,
            flows,
        }));
        Ok(ElementRef::new(id))
    }

    /// Invoke a separately deployed process.
    pub fn call(&mut self, id: &str, options: CallOptions) -> Result<ElementRef> {
        let CallOptions {
            name,
            called_element,
            inherit_variables,
            inputs,
            outputs,
        } = options;

        self.add(AnyElement::CallActivity(CallActivity {
            id: id.to_string(),
            name: display_name(id, name),
            called_element,
            inherit_variables,
            inputs: inputs
                .into_iter()
                .map(|(target, source)| VariableMapping { source, target })
                .collect(),
            outputs: outputs
                .into_iter()
                .map(|(target, source)| VariableMapping {
                    source: MappingSource::Variable(source),
                    target,
                })
                .collect(),
        }))?;
        Ok(ElementRef::new(id))
    }

    /// Declare an error that boundary events can reference by code.
    pub fn error(&mut self, id: impl Into<String>, error_code: impl Into<String>) {
        self.errors.push(ErrorDefinition {
            id: id.into(),
            error_code: error_code.into(),
        });
    }

    /// Connect each ref to the next. Fewer than two refs is a no-op.
    pub fn pipe(&mut self, refs: &[&ElementRef]) {
        for pair in refs.windows(2) {
            self.flow(pair[0], pair[1]);
        }
    }

    /// Add an unconditional flow with a generated id.
    pub fn flow(&mut self, source: &ElementRef, target: &ElementRef) {
        self.push_flow(source, target, None);
    }

    /// Add a flow gated on a variable, a raw formula or explicit
    /// [`FlowOptions`](crate::FlowOptions).
    pub fn flow_with(
        &mut self,
        source: &ElementRef,
        target: &ElementRef,
        condition: impl Into<Condition>,
    ) {
        self.push_flow(source, target, Some(condition.into()));
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

    pub fn registry(&self) -> &ElementRegistry {
        self.registry
    }

    /// Release the registry borrow and hand over everything accumulated.
    pub fn finish(self) -> ProcessParts {
        ProcessParts {
            elements: self.elements,
            flows: self.flows,
            errors: self.errors,
            vars: self.vars,
        }
    }

    fn add(&mut self, element: AnyElement) -> Result<()> {
        self.registry.register(element.id())?;
        tracing::debug!(id = element.id(), kind = %element.kind(), "added element");
        self.elements.push(element);
        Ok(())
    }

    fn push_flow(&mut self, source: &ElementRef, target: &ElementRef, condition: Option<Condition>) {
        let (id, name, condition) = match condition {
            None => (None, None, None),
            Some(Condition::Var(var)) => {
                let reference = var.reference();
                (None, Some(reference.clone()), Some(reference))
            }
            Some(Condition::Raw(raw)) => (None, Some(raw.clone()), Some(raw)),
            Some(Condition::Options(options)) => {
                let name = options.name.or_else(|| options.condition.clone());
                (options.id, name, options.condition)
            }
        };
        let id = match id {
            Some(id) => id,
            None => self.next_flow_id(source.id(), target.id()),
        };

        tracing::trace!(id = %id, source = source.id(), target = target.id(), "added flow");
        self.flows.push(SequenceFlow {
            id,
            name,
            source_ref: source.id().to_string(),
            target_ref: target.id().to_string(),
            condition,
        });
    }

    fn next_flow_id(&mut self, source: &str, target: &str) -> String {
        self.flow_counter += 1;
        format!("flow_{source}_to_{target}_{}", self.flow_counter)
    }
}

fn display_name(id: &str, name: Option<String>) -> Option<String> {
    Some(name.unwrap_or_else(|| humanize(id)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn declarations(inputs: &[Var], outputs: &[Var]) -> Vec<VarDeclaration> {
    inputs
        .iter()
        .map(VarDeclaration::input)
        .chain(
            outputs
                .iter()
                .map(|var| VarDeclaration::output(var.name(), var.ty())),
        )
        .collect()
}
