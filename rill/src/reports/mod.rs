//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`].

mod check;
mod compile;
mod list;
mod output;

pub use check::{CheckReport, CheckResult};
pub use compile::{CompileReport, CompiledOutput};
pub use list::{ListReport, ListRow};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) mod testing {
    use super::output::Output;

    /// Output that records what it was asked to render, one line per call.
    #[derive(Debug, Default)]
    pub struct RecordedOutput {
        pub stdout: Vec<String>,
        pub stderr: Vec<String>,
    }

    impl Output for RecordedOutput {
        fn section(&mut self, name: &str) {
            self.stdout.push(format!("{name}:"));
        }

        fn list_item(&mut self, text: &str) {
            self.stdout.push(format!("  - {text}"));
        }

        fn error(&mut self, msg: &str) {
            self.stderr.push(msg.to_string());
        }

        fn preformatted(&mut self, text: &str) {
            self.stdout.push(text.to_string());
        }

        fn document(&mut self, text: &str) {
            self.stdout.push(text.to_string());
        }
    }
}
