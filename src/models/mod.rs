pub mod worklog;

pub use worklog::{ParsedIssue, RawRecord, WorklogEntry};
