//! Check command report data structures.

use super::output::{Output, Report};

/// Outcome of building and validating one process.
#[derive(Debug)]
pub struct CheckResult {
    pub id: String,
    /// Rendered diagnostic when the process failed to build or validate.
    pub failure: Option<String>,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Whether every process passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.failure.is_none())
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.failure.is_some()).count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for result in &self.results {
            match &result.failure {
                None => out.preformatted(&format!("✓ {} is valid", result.id)),
                Some(failure) => out.error(failure),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordedOutput;

    #[test]
    fn test_render_mixed() {
        let report = CheckReport {
            results: vec![
                CheckResult {
                    id: "a".into(),
                    failure: None,
                },
                CheckResult {
                    id: "b".into(),
                    failure: Some("boom".into()),
                },
            ],
        };
        assert!(!report.is_valid());
        assert_eq!(report.failure_count(), 1);

        let mut out = RecordedOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, ["✓ a is valid"]);
        assert_eq!(out.stderr, ["boom"]);
    }
}
