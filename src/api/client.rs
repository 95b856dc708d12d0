use crate::api::WorklogSubmitter;
use crate::api::payload::{AuthorRef, IssueRef, JiraWorklog, TempoWorklog};
use crate::config::{ApiFlavor, Config};
use crate::errors::{AppError, AppResult};
use crate::models::WorklogEntry;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;

const USER_AGENT: &str = concat!("worklog2jira/", env!("CARGO_PKG_VERSION"));

/// HTTP client posting worklogs to Tempo or plain Jira.
pub struct JiraClient {
    http: reqwest::Client,
    api: ApiFlavor,
    base_url: String,
    token: String,
    author: String,
    start_time: String,
}

impl JiraClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        cfg.ensure_submittable()?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api: cfg.api,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            token: cfg.token.clone(),
            author: cfg.author.clone(),
            start_time: cfg.start_time.clone(),
        })
    }

    /// Target URL for an issue key.
    pub fn endpoint(&self, key: &str) -> String {
        match self.api {
            ApiFlavor::Tempo => format!("{}/worklogs/", self.base_url),
            ApiFlavor::Jira => format!("{}/issue/{}/worklog", self.base_url, key),
        }
    }

    /// JSON body for an entry that has already passed validation.
    pub fn body(&self, key: &str, date: &str, entry: &WorklogEntry) -> AppResult<serde_json::Value> {
        let started = format!("{date}T{}", self.start_time);
        let seconds = entry
            .seconds()
            .ok_or_else(|| AppError::Unsubmittable(entry.label(), "time out of range"))?;
        let value = match self.api {
            ApiFlavor::Tempo => serde_json::to_value(TempoWorklog {
                issue: IssueRef { key },
                author: AuthorRef { name: &self.author },
                date_started: started,
                time_spent_seconds: seconds,
                billed_seconds: 0,
                comment: &entry.description,
            }),
            ApiFlavor::Jira => serde_json::to_value(JiraWorklog {
                started,
                time_spent: format!("{}m", entry.minutes),
                comment: &entry.description,
            }),
        };
        value.map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
    }
}

#[async_trait]
impl WorklogSubmitter for JiraClient {
    async fn submit(&self, entry: &WorklogEntry) -> AppResult<()> {
        let key = entry
            .issue_number
            .as_deref()
            .ok_or_else(|| AppError::Unsubmittable(entry.label(), "no issue number"))?;
        let date = entry
            .date
            .as_deref()
            .ok_or_else(|| AppError::Unsubmittable(entry.label(), "no date"))?;

        let url = self.endpoint(key);
        let body = self.body(key, date, entry)?;

        tracing::debug!(url = %url, issue = key, minutes = entry.minutes, "POST worklog");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Basic {}", self.token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(issue = key, date, minutes = entry.minutes, "worklog created");
        Ok(())
    }
}
