use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{catalog, ops};

#[derive(Args)]
pub struct InspectCommand {
    /// Process to inspect
    pub id: String,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let entry = catalog::get(&self.id).unwrap_or_exit();
        let definition = entry.build().unwrap_or_exit();

        println!("{}", ops::inspect(&definition)?);
        Ok(())
    }
}
