use rill_ir::ProcessDefinition;

use crate::{ElementRegistry, Error, ProcessBuilder, Result, validate};

/// Process-level settings for [`process_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Defaults to the process id.
    pub name: Option<String>,
    pub is_executable: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            name: None,
            is_executable: true,
        }
    }
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn executable(mut self, is_executable: bool) -> Self {
        self.is_executable = is_executable;
        self
    }
}

/// Build, validate and freeze a process with default options.
pub fn process<F>(id: &str, build: F) -> Result<ProcessDefinition>
where
    F: FnOnce(&mut ProcessBuilder<'_>) -> Result<()>,
{
    process_with(id, ProcessOptions::default(), build)
}

/// Build, validate and freeze a process.
///
/// Construction errors from `build` are returned as-is. Otherwise the
/// top-level scope is validated and every violation is reported in a single
/// [`Error::Validation`].
pub fn process_with<F>(id: &str, options: ProcessOptions, build: F) -> Result<ProcessDefinition>
where
    F: FnOnce(&mut ProcessBuilder<'_>) -> Result<()>,
{
    let mut registry = ElementRegistry::new();
    let mut builder = ProcessBuilder::new(&mut registry);
    build(&mut builder)?;
    let parts = builder.finish();

    let errors = validate(&parts.elements, &parts.flows, &parts.vars);
    if !errors.is_empty() {
        return Err(Error::Validation {
            process: id.to_string(),
            errors,
        });
    }

    let name = options.name.unwrap_or_else(|| id.to_string());

    tracing::debug!(
        process = id,
        ids = registry.len(),
        elements = parts.elements.len(),
        flows = parts.flows.len(),
        "process definition built"
    );
    Ok(ProcessDefinition::new(id, name, options.is_executable, parts))
}
