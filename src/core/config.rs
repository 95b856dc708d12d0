use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration, token masked.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(&cfg.redacted())?;
        println!("{}", yaml);
        Ok(())
    }

    /// Report required keys that are still empty. Fails if any is missing.
    pub fn check(cfg: &Config) -> AppResult<()> {
        let missing = cfg.missing_fields();
        if missing.is_empty() {
            success("Configuration is complete.");
            return Ok(());
        }
        for field in &missing {
            warning(format!("Missing configuration value: {field}"));
        }
        cfg.ensure_submittable()
    }

    /// Open the file in the requested editor, falling back to $EDITOR/$VISUAL.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or(default_editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot run editor '{ed}': {e}")))?;

        if status.success() {
            success(format!("Configuration file edited using '{ed}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{ed}' exited with {status}")))
        }
    }
}
