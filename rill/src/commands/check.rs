use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    catalog, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Processes to check (defaults to all)
    pub ids: Vec<String>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let entries = catalog::select(&self.ids).unwrap_or_exit();

        let report = ops::check(&entries);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            tracing::debug!(failures = report.failure_count(), "check failed");
            std::process::exit(1);
        }

        Ok(())
    }
}
