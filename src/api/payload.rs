//! Request bodies for the two supported worklog endpoints.

use serde::Serialize;

/// Tempo Timesheets `POST worklogs/`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoWorklog<'a> {
    pub issue: IssueRef<'a>,
    pub author: AuthorRef<'a>,
    pub date_started: String,
    pub time_spent_seconds: i64,
    pub billed_seconds: i64,
    pub comment: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IssueRef<'a> {
    pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AuthorRef<'a> {
    pub name: &'a str,
}

/// Jira REST `POST issue/{key}/worklog`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog<'a> {
    pub started: String,
    pub time_spent: String,
    pub comment: &'a str,
}
