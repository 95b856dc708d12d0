//! Human-readable listings of a worklog.

use crate::models::WorklogEntry;
use crate::utils::formatting::{mins2hours, mins2readable};
use crate::utils::table::Table;

/// `N entries:` followed by `issue<TAB>minutes min<TAB>description` per entry.
pub fn dump_worklog(worklog: &[WorklogEntry]) -> String {
    let mut out = format!("{} entries:\n", worklog.len());
    for log in worklog {
        out.push_str(
            &[
                log.issue_str().to_string(),
                format!("{} min", log.minutes),
                log.description.clone(),
            ]
            .join("\t"),
        );
        out.push('\n');
    }
    out
}

/// Aligned table with the split issue / description, as shown by `sheet --extract`.
pub fn extraction_table(worklog: &[WorklogEntry]) -> String {
    let mut table = Table::new(vec!["Date", "Issue", "Minutes", "Description"]);
    for log in worklog {
        table.add_row(vec![
            log.date.clone().unwrap_or_default(),
            log.issue_str().to_string(),
            log.minutes.to_string(),
            log.description.clone(),
        ]);
    }

    let total: i64 = worklog.iter().map(|l| l.minutes.max(0)).sum();
    format!(
        "{}\nTotal hours: {:.2} ({})\n",
        table.render(),
        mins2hours(total),
        mins2readable(total, false, false)
    )
}
