use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            ConfigLogic::print(cfg)?;
        }

        if *check {
            ConfigLogic::check(cfg)?;
        }

        if *edit_config {
            let path = cli
                .config
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(Config::config_file);
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
