//! Parse → validate → confirm → submit, over a full batch.

use crate::api::WorklogSubmitter;
use crate::core::record::RecordParser;
use crate::core::validate::check_worklog;
use crate::errors::{AppError, AppResult};
use crate::models::{RawRecord, WorklogEntry};
use crate::ui::messages::info;
use crate::ui::prompt::Confirm;
use futures::stream::{self, StreamExt};
use std::fmt;

/// Pipeline stages, in the only order they can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Validating,
    Confirming,
    Submitting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Parsing => "parsing",
            Stage::Validating => "validating",
            Stage::Confirming => "confirming",
            Stage::Submitting => "submitting",
            Stage::Done => "done",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Skip the confirmation step.
    pub quiet: bool,
    /// Maximum number of requests in flight.
    pub concurrency: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Transferred(usize),
    Empty,
}

/// What happened to one entry during submission.
#[derive(Debug, Clone)]
pub struct EntryResult {
    pub entry: WorklogEntry,
    pub error: Option<String>,
}

impl EntryResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-entry results of a batch where at least one request failed.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub results: Vec<EntryResult>,
}

impl SubmissionReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &EntryResult> {
        self.results.iter().filter(|r| r.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &EntryResult> {
        self.results.iter().filter(|r| !r.is_ok())
    }
}

impl fmt::Display for SubmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed().count();
        writeln!(
            f,
            "Submitted {} of {} entries, {} failed:",
            self.results.len() - failed,
            self.results.len(),
            failed
        )?;
        for r in self.failed() {
            writeln!(
                f,
                "  FAILED {} ({})",
                r.entry.label(),
                r.error.as_deref().unwrap_or_default()
            )?;
        }
        for r in self.succeeded() {
            writeln!(f, "  sent   {}", r.entry.label())?;
        }
        Ok(())
    }
}

pub struct Pipeline<'a, S, C> {
    submitter: &'a S,
    confirm: &'a C,
    options: PipelineOptions,
}

impl<'a, S, C> Pipeline<'a, S, C>
where
    S: WorklogSubmitter,
    C: Confirm,
{
    pub fn new(submitter: &'a S, confirm: &'a C, options: PipelineOptions) -> Self {
        Self {
            submitter,
            confirm,
            options,
        }
    }

    /// Run the whole pipeline over raw CSV rows.
    pub async fn run_records(&self, records: &[RawRecord]) -> AppResult<Outcome> {
        enter(Stage::Parsing);
        let worklog = RecordParser::new().parse_all(records);
        self.run(worklog).await
    }

    /// Run validation, confirmation and submission over already parsed entries.
    pub async fn run(&self, worklog: Vec<WorklogEntry>) -> AppResult<Outcome> {
        enter(Stage::Validating);
        check_worklog(&worklog)?;

        if worklog.is_empty() {
            return Ok(Outcome::Empty);
        }

        if !self.options.quiet {
            enter(Stage::Confirming);
            if !self.confirm.confirm(&worklog)? {
                return Err(AppError::Cancelled);
            }
        }

        enter(Stage::Submitting);
        info("Sending to Jira...");
        let results = self.submit_all(worklog).await;

        if results.iter().all(EntryResult::is_ok) {
            enter(Stage::Done);
            Ok(Outcome::Transferred(results.len()))
        } else {
            Err(AppError::Submission(SubmissionReport { results }))
        }
    }

    /// Fan out one request per entry; never stops early on a failure.
    async fn submit_all(&self, worklog: Vec<WorklogEntry>) -> Vec<EntryResult> {
        let submitter = self.submitter;
        stream::iter(worklog)
            .map(|entry| async move {
                let error = match submitter.submit(&entry).await {
                    Ok(()) => None,
                    Err(e) => {
                        tracing::warn!(issue = %entry.issue_str(), error = %e, "worklog rejected");
                        Some(e.to_string())
                    }
                };
                EntryResult { entry, error }
            })
            .buffer_unordered(self.options.concurrency.max(1))
            .collect()
            .await
    }
}

fn enter(stage: Stage) {
    tracing::debug!(stage = %stage, "pipeline");
}
