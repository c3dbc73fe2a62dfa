// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod commands;
mod config;
mod ops;
mod reports;
mod telemetry;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run()
}
