use crate::api::JiraClient;
use crate::config::Config;
use crate::core::pipeline::{Outcome, Pipeline, PipelineOptions};
use crate::core::reader::read_source;
use crate::core::record::RecordParser;
use crate::core::validate::check_worklog;
use crate::errors::AppResult;
use crate::models::WorklogEntry;
use crate::ui::messages::{success, warning};
use crate::ui::preview::dump_worklog;
use crate::ui::prompt::StdinConfirm;
use std::path::Path;

/// How a batch should be handled once parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushMode {
    pub quiet: bool,
    pub dry_run: bool,
}

pub struct PushLogic;

impl PushLogic {
    /// Push a CSV export (file or stdin).
    /// Returns the number of entries transferred.
    pub async fn push_csv(
        cfg: &Config,
        path: Option<&Path>,
        delimiter: u8,
        mode: PushMode,
    ) -> AppResult<usize> {
        let records = read_source(path, delimiter)?;

        if mode.dry_run {
            let worklog = RecordParser::new().parse_all(&records);
            return Self::dry_run(&worklog);
        }

        let client = JiraClient::new(cfg)?;
        let outcome = Pipeline::new(&client, &StdinConfirm, Self::options(cfg, mode))
            .run_records(&records)
            .await?;
        Ok(Self::report(outcome))
    }

    /// Validate, confirm and submit an already parsed worklog.
    pub async fn push(cfg: &Config, worklog: Vec<WorklogEntry>, mode: PushMode) -> AppResult<usize> {
        if mode.dry_run {
            return Self::dry_run(&worklog);
        }

        let client = JiraClient::new(cfg)?;
        let outcome = Pipeline::new(&client, &StdinConfirm, Self::options(cfg, mode))
            .run(worklog)
            .await?;
        Ok(Self::report(outcome))
    }

    /// Validation and preview only; no configuration needed.
    fn dry_run(worklog: &[WorklogEntry]) -> AppResult<usize> {
        check_worklog(worklog)?;
        print!("{}", dump_worklog(worklog));
        warning("Dry run: nothing was sent.");
        Ok(0)
    }

    fn options(cfg: &Config, mode: PushMode) -> PipelineOptions {
        PipelineOptions {
            quiet: mode.quiet,
            concurrency: cfg.concurrency,
        }
    }

    fn report(outcome: Outcome) -> usize {
        match outcome {
            Outcome::Transferred(n) => {
                success(format!("Transferred {n} entries."));
                n
            }
            Outcome::Empty => {
                warning("No entries to transfer.");
                0
            }
        }
    }
}
