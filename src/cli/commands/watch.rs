use crate::cli::parser::Commands;
use crate::config::{Config, parse_delimiter};
use crate::core::watch::{WatchLogic, WatchOptions};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::time::Duration;

/// Watch a folder for new exports.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        dir,
        interval,
        delimiter,
        once,
    } = cmd
    {
        let dir = expand_tilde(dir.as_deref().unwrap_or(&cfg.watch_dir));
        let delimiter = match delimiter {
            Some(d) => parse_delimiter(d)?,
            None => cfg.delimiter_byte()?,
        };

        let opts = WatchOptions {
            interval: Duration::from_secs((*interval).max(1)),
            delimiter,
            once: *once,
        };
        WatchLogic::run(cfg, &dir, opts).await?;
    }

    Ok(())
}
