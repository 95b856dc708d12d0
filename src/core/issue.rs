//! Splits an activity label into a Jira issue key and a description.

use crate::models::ParsedIssue;
use regex::Regex;
use std::sync::LazyLock;

/// A Jira key is 2-10 capitals or digits, a minus and a number (e.g. `XXX-12345`).
static ISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z0-9]{2,10}-[0-9]{1,5})(.*)").expect("valid issue regex"));

/// Parse a Jira issue number from a text.
///
/// Anything before the key is dropped; the text after it becomes the trimmed
/// description. Without a key the whole text is kept as description.
pub fn parse_issue(text: &str) -> ParsedIssue {
    match ISSUE_RE.captures(text) {
        Some(caps) => ParsedIssue {
            number: caps.get(1).map(|m| m.as_str().to_string()),
            description: caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        },
        None => ParsedIssue {
            number: None,
            description: text.to_string(),
        },
    }
}
