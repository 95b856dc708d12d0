//! Remote worklog submission.

pub mod client;
pub mod payload;

pub use client::JiraClient;

use crate::errors::AppResult;
use crate::models::WorklogEntry;
use async_trait::async_trait;

/// Anything able to record one worklog entry remotely.
#[async_trait]
pub trait WorklogSubmitter: Send + Sync {
    async fn submit(&self, entry: &WorklogEntry) -> AppResult<()>;
}
