use clap::Args;
use eyre::Result;

use crate::{
    catalog, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list(catalog::ENTRIES);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
