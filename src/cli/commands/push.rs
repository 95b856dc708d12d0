use crate::cli::parser::Commands;
use crate::config::{Config, parse_delimiter};
use crate::core::push::{PushLogic, PushMode};
use crate::errors::AppResult;
use std::io::{self, IsTerminal};
use std::path::Path;

/// Push a CSV export.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Push {
        file,
        quiet,
        confirm,
        delimiter,
        dry_run,
    } = cmd
    {
        let delimiter = match delimiter {
            Some(d) => parse_delimiter(d)?,
            None => cfg.delimiter_byte()?,
        };

        // Without a terminal nobody can answer the prompt.
        let quiet = *quiet || (!*confirm && !io::stdin().is_terminal());

        let mode = PushMode {
            quiet,
            dry_run: *dry_run,
        };
        PushLogic::push_csv(cfg, file.as_deref().map(Path::new), delimiter, mode).await?;
    }

    Ok(())
}
