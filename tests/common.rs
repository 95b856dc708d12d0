#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use worklog2jira::api::WorklogSubmitter;
use worklog2jira::errors::{AppError, AppResult};
use worklog2jira::models::WorklogEntry;
use worklog2jira::ui::prompt::Confirm;

pub const TOKEN: &str = "c2VjcmV0";
pub const AUTHOR: &str = "jdoe";

/// Binary with a clean environment: no credentials, no RUST_LOG.
pub fn w2j() -> Command {
    let mut cmd = cargo_bin_cmd!("worklog2jira");
    for var in ["TEMPO_BASE", "JIRA_TOKEN", "JIRA_USER", "JIRA_API", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Binary wired to a mock server through the environment, with a config file
/// path that does not exist (so defaults apply).
pub fn w2j_against(base_url: &str, name: &str) -> Command {
    let mut cmd = w2j();
    cmd.env("TEMPO_BASE", base_url)
        .env("JIRA_TOKEN", TOKEN)
        .env("JIRA_USER", AUTHOR)
        .args(["--config", &temp_config(name)]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("w2j_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

/// Write `content` to a fresh temp file and return its path.
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Fresh empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("w2j_{name}_dir"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub const VALID_CSV: &str = "\
# Daily export
,27/01/16
ABC-1 fix bug,30
ABC-2 write docs,45
";

pub const ZERO_MINUTES_CSV: &str = "\
,27/01/16
ABC-1 fix bug,30
ABC-3 forgot the time,0
";

/// Records every submitted entry; fails entries whose issue is in `fail_for`.
#[derive(Default)]
pub struct RecordingSubmitter {
    pub sent: Mutex<Vec<WorklogEntry>>,
    pub fail_for: Vec<String>,
}

impl RecordingSubmitter {
    pub fn failing_for(issues: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: issues.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl WorklogSubmitter for RecordingSubmitter {
    async fn submit(&self, entry: &WorklogEntry) -> AppResult<()> {
        if self.fail_for.iter().any(|i| Some(i.as_str()) == entry.issue_number.as_deref()) {
            return Err(AppError::Api {
                status: 500,
                body: "boom".to_string(),
            });
        }
        self.sent.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// Always answers the same, counting how often it was asked.
pub struct FixedConfirm {
    pub answer: bool,
    pub asked: AtomicUsize,
}

impl FixedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, _worklog: &[WorklogEntry]) -> AppResult<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}
