use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    catalog,
    config::Config,
    ops::{self, CompileTarget},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CompileCommand {
    /// Processes to compile (defaults to all)
    pub ids: Vec<String>,

    /// Print the XML instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides compile.out_dir)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

impl CompileCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let entries = catalog::select(&self.ids).unwrap_or_exit();
        let definitions = ops::build_all(&entries).unwrap_or_exit();

        let report = ops::compile(&definitions, &self.target(config))?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Flags win over the config file. An explicit `--out-dir` beats
    /// `compile.stdout = true`.
    fn target(&self, config: &Config) -> CompileTarget {
        if self.stdout {
            return CompileTarget::Stdout;
        }
        match &self.out_dir {
            Some(dir) => CompileTarget::Dir(dir.clone()),
            None if config.compile.stdout => CompileTarget::Stdout,
            None => CompileTarget::Dir(config.compile.out_dir.clone()),
        }
    }
}
