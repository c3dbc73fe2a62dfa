//! Check operation: build and validate catalogue processes.

use crate::{
    catalog::Entry,
    reports::{CheckReport, CheckResult},
};

/// Build every entry, recording a rendered diagnostic for each failure.
///
/// Unlike [`build_all`](super::build_all) this does not stop at the first
/// invalid process.
pub fn check(entries: &[&Entry]) -> CheckReport {
    let results = entries
        .iter()
        .map(|entry| {
            let failure = entry.build().err().map(|e| {
                tracing::debug!(process = entry.id, error = %e, "process failed to build");
                format!("{:?}", miette::Report::new(e))
            });
            CheckResult {
                id: entry.id.to_string(),
                failure,
            }
        })
        .collect();

    CheckReport { results }
}
