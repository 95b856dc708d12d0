use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::push::{PushLogic, PushMode};
use crate::core::sheet::{extract_worklog, read_sheet};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::preview::extraction_table;
use std::io::{self, IsTerminal};
use std::path::Path;

/// Push (or just split) a timesheet workbook.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet {
        file,
        sheet,
        quiet,
        extract,
        dry_run,
    } = cmd
    {
        let range = read_sheet(Path::new(file), sheet.as_deref())?;
        let worklog = extract_worklog(&range, &cfg.sheet)?;

        if *extract {
            header("Issues");
            print!("{}", extraction_table(&worklog));
            return Ok(());
        }

        // Without a terminal nobody can answer the prompt.
        let mode = PushMode {
            quiet: *quiet || !io::stdin().is_terminal(),
            dry_run: *dry_run,
        };
        PushLogic::push(cfg, worklog, mode).await?;
    }

    Ok(())
}
