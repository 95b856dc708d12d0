//! Completeness checks run before anything is sent.

use crate::errors::{AppError, AppResult};
use crate::models::WorklogEntry;

/// Returns true when an entry cannot be logged as-is.
pub fn is_incomplete(entry: &WorklogEntry) -> bool {
    entry.minutes <= 0
        || entry.seconds().is_none()
        || entry.issue_number.as_deref().is_none_or(str::is_empty)
        || entry.description.trim().is_empty()
        || entry.date.as_deref().is_none_or(str::is_empty)
}

/// Entries with missing info: no (or an unusable) time, no issue number, no description or no date.
pub fn missing_info(worklog: &[WorklogEntry]) -> Vec<&WorklogEntry> {
    worklog.iter().filter(|e| is_incomplete(e)).collect()
}

/// Checks a worklog for mistakes. The whole batch is rejected if any entry is incomplete.
pub fn check_worklog(worklog: &[WorklogEntry]) -> AppResult<()> {
    let info: Vec<String> = missing_info(worklog)
        .into_iter()
        .map(WorklogEntry::label)
        .collect();

    if info.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingInfo(info))
    }
}
