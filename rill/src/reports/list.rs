//! List command report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ListRow {
    pub id: String,
    pub description: String,
    /// Top-level element and flow counts, `None` if the process is invalid.
    pub counts: Option<(usize, usize)>,
}

#[derive(Debug, Default)]
pub struct ListReport {
    pub rows: Vec<ListRow>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Processes");
        for row in &self.rows {
            let counts = match row.counts {
                Some((elements, flows)) => format!(
                    "{} element{}, {} flow{}",
                    elements,
                    plural(elements),
                    flows,
                    plural(flows)
                ),
                None => "invalid".to_string(),
            };
            out.list_item(&format!("{} ({}): {}", row.id, counts, row.description));
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
