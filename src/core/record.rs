//! Row-by-row conversion of the CSV export into worklog entries.

use crate::core::date::normalize_date;
use crate::core::issue::parse_issue;
use crate::models::{RawRecord, WorklogEntry};

/// Stateful parser: date marker rows set the date used by every following row.
///
/// Rows must be fed in file order.
#[derive(Debug, Default)]
pub struct RecordParser {
    current_date: Option<String>,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_date(&self) -> Option<&str> {
        self.current_date.as_deref()
    }

    /// Returns `None` for date marker rows, an entry otherwise.
    pub fn parse(&mut self, record: &RawRecord) -> Option<WorklogEntry> {
        if record.is_date_marker() {
            let date = normalize_date(&record.time);
            tracing::debug!(raw = %record.time, date = %date, "date marker");
            self.current_date = Some(date);
            return None;
        }

        let issue = parse_issue(&record.activity);
        Some(WorklogEntry {
            date: self.current_date.clone(),
            issue_number: issue.number,
            description: issue.description,
            minutes: parse_minutes(&record.time),
        })
    }

    /// Parse a whole sequence, dropping the marker rows.
    pub fn parse_all<'a, I>(&mut self, records: I) -> Vec<WorklogEntry>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        records.into_iter().filter_map(|r| self.parse(r)).collect()
    }
}

/// Non-numeric time values count as 0 minutes, which the validator rejects.
pub fn parse_minutes(value: &str) -> i64 {
    let v = value.trim();
    if let Ok(m) = v.parse::<i64>() {
        return m;
    }
    match v.parse::<f64>() {
        Ok(f) if f.is_finite() => f.round() as i64,
        _ => {
            tracing::warn!(value = %v, "time value is not a number of minutes");
            0
        }
    }
}
