use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: create the configuration file if missing.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_file(cli.config.as_deref().map(Path::new))?;

    success(format!("Config file: {}", path.display()));
    info("Fill in base_url, token and author (or set TEMPO_BASE, JIRA_TOKEN, JIRA_USER).");
    Ok(())
}
