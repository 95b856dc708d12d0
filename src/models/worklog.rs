use serde::Serialize;

/// Placeholder used when an entry carries no issue number.
pub const NO_ISSUE: &str = "null";

/// A single unit of time logged against an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorklogEntry {
    pub date: Option<String>,         // ISO date "YYYY-MM-DD" from the last date marker
    pub issue_number: Option<String>, // e.g. "ABC-123"
    pub description: String,
    pub minutes: i64,
}

impl WorklogEntry {
    pub fn new(
        date: Option<String>,
        issue_number: Option<String>,
        description: impl Into<String>,
        minutes: i64,
    ) -> Self {
        Self {
            date,
            issue_number,
            description: description.into(),
            minutes,
        }
    }

    pub fn issue_str(&self) -> &str {
        self.issue_number.as_deref().unwrap_or(NO_ISSUE)
    }

    /// `"<issue> <description>"`, the form used in reports.
    pub fn label(&self) -> String {
        format!("{} {}", self.issue_str(), self.description)
    }

    /// `None` when the time does not fit in seconds.
    pub fn seconds(&self) -> Option<i64> {
        self.minutes.checked_mul(60)
    }
}

/// Result of splitting a free-text activity label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIssue {
    pub number: Option<String>,
    pub description: String,
}

/// One raw input row: the activity label and the time column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub activity: String,
    pub time: String,
}

impl RawRecord {
    pub fn new(activity: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            time: time.into(),
        }
    }

    /// Build a record from a CSV row; missing columns read as empty.
    pub fn from_csv(record: &csv::StringRecord) -> Self {
        Self {
            activity: record.get(0).unwrap_or_default().to_string(),
            time: record.get(1).unwrap_or_default().to_string(),
        }
    }

    /// A date marker row has no activity and a slash-delimited date in the time column.
    pub fn is_date_marker(&self) -> bool {
        self.activity.trim().is_empty() && self.time.contains('/')
    }
}
