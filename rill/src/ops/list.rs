//! List operation: summarize the catalogue.

use crate::{
    catalog::Entry,
    reports::{ListReport, ListRow},
};

pub fn list(entries: &[Entry]) -> ListReport {
    let rows = entries
        .iter()
        .map(|entry| ListRow {
            id: entry.id.to_string(),
            description: entry.description.to_string(),
            counts: entry
                .build()
                .ok()
                .map(|def| (def.elements().len(), def.flows().len())),
        })
        .collect();

    ListReport { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ENTRIES;

    #[test]
    fn test_list_counts() {
        let report = list(ENTRIES);
        let order = &report.rows[0];
        assert_eq!(order.id, "order-approval");
        assert_eq!(order.counts, Some((8, 8)));

        let sub = report.rows.iter().find(|r| r.id == "subprocess-example").unwrap();
        // The sub-process's own elements are nested, not counted here
        assert_eq!(sub.counts, Some((5, 4)));
    }
}
