use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which worklog endpoint to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFlavor {
    #[default]
    Tempo,
    Jira,
}

impl FromStr for ApiFlavor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tempo" => Ok(ApiFlavor::Tempo),
            "jira" => Ok(ApiFlavor::Jira),
            other => Err(AppError::Config(format!(
                "unknown api '{other}' (expected 'tempo' or 'jira')"
            ))),
        }
    }
}

/// Cell layout of the timesheet workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    #[serde(default = "default_date_cell")]
    pub date_cell: String,
    #[serde(default = "default_tasks_range")]
    pub tasks_range: String,
    #[serde(default = "default_minutes_range")]
    pub minutes_range: String,
}

fn default_date_cell() -> String {
    "B6".to_string()
}
fn default_tasks_range() -> String {
    "A7:A50".to_string()
}
fn default_minutes_range() -> String {
    "B7:B50".to_string()
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            date_cell: default_date_cell(),
            tasks_range: default_tasks_range(),
            minutes_range: default_minutes_range(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiFlavor,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_watch_dir")]
    pub watch_dir: String,
    #[serde(default)]
    pub sheet: SheetLayout,
}

fn default_start_time() -> String {
    "18:00:00.000+0000".to_string()
}
fn default_concurrency() -> usize {
    4
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_watch_dir() -> String {
    "~/Documents".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiFlavor::default(),
            base_url: String::new(),
            token: String::new(),
            author: String::new(),
            start_time: default_start_time(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
            delimiter: default_delimiter(),
            watch_dir: default_watch_dir(),
            sheet: SheetLayout::default(),
        }
    }
}

/// Environment variables that override the file values.
pub const ENV_BASE_URL: &str = "TEMPO_BASE";
pub const ENV_TOKEN: &str = "JIRA_TOKEN";
pub const ENV_AUTHOR: &str = "JIRA_USER";
pub const ENV_API: &str = "JIRA_API";

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklog2jira")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog2jira.conf")
    }

    /// Load the configuration file (or defaults if missing), then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut cfg = Self::load_file(path)?;
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    /// Load only the configuration file, or defaults if it does not exist.
    pub fn load_file(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply overrides coming from `lookup` (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_BASE_URL) {
            self.base_url = v;
        }
        if let Some(v) = non_empty(ENV_TOKEN) {
            self.token = v;
        }
        if let Some(v) = non_empty(ENV_AUTHOR) {
            self.author = v;
        }
        if let Some(v) = non_empty(ENV_API) {
            self.api = v.parse()?;
        }
        Ok(())
    }

    /// Required keys that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_url.trim().is_empty() {
            missing.push("base_url");
        }
        if self.token.trim().is_empty() {
            missing.push("token");
        }
        if self.api == ApiFlavor::Tempo && self.author.trim().is_empty() {
            missing.push("author");
        }
        missing
    }

    pub fn ensure_submittable(&self) -> AppResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "missing {} (set them in {} or via {ENV_BASE_URL}/{ENV_TOKEN}/{ENV_AUTHOR})",
                missing.join(", "),
                Self::config_file().display()
            )))
        }
    }

    /// CSV delimiter as a single byte.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        parse_delimiter(&self.delimiter)
    }

    /// Copy with the token masked, for printing.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.token.is_empty() {
            cfg.token = "********".to_string();
        }
        cfg
    }

    /// Write a default configuration file; an existing one is left untouched.
    pub fn init_file(path: Option<&Path>) -> io::Result<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        if path.exists() {
            return Ok(path);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(io::Error::other)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}

/// Accepts a single ASCII character, or the words `tab`/`\t`.
pub fn parse_delimiter(s: &str) -> AppResult<u8> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(AppError::InvalidDelimiter(s.to_string())),
    }
}
