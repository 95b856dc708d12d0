//! Directory polling: every new export dropped in the folder is pushed once,
//! then renamed to `<name>.sent`.

use crate::config::Config;
use crate::core::push::{PushLogic, PushMode};
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SENT_SUFFIX: &str = ".sent";

#[derive(Debug)]
pub struct Watcher {
    dir: PathBuf,
    seen: HashSet<PathBuf>,
}

impl Watcher {
    /// Files already present are remembered and never processed.
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let mut watcher = Self::including_existing(dir);
        let existing = watcher.scan()?;
        watcher.seen.extend(existing);
        Ok(watcher)
    }

    /// A watcher for which the current content of the folder counts as new.
    pub fn including_existing(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seen: HashSet::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files that appeared since the previous call, in name order.
    ///
    /// Paths that left the folder are forgotten, so a file created again
    /// under the same name is reported again.
    pub fn poll(&mut self) -> AppResult<Vec<PathBuf>> {
        let current: HashSet<PathBuf> = self.scan()?.into_iter().collect();
        self.seen.retain(|p| current.contains(p));

        let mut fresh: Vec<PathBuf> = current
            .into_iter()
            .filter(|p| !self.seen.contains(p))
            .collect();
        fresh.sort();
        self.seen.extend(fresh.iter().cloned());
        Ok(fresh)
    }

    fn scan(&self) -> AppResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && !is_ignored(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

/// Hidden files and files already marked as sent are skipped.
pub fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .is_none_or(|name| name.starts_with('.') || name.contains(SENT_SUFFIX))
}

/// Rename `file` to `file.sent`.
pub fn mark_sent(path: &Path) -> AppResult<PathBuf> {
    let mut target = path.as_os_str().to_owned();
    target.push(SENT_SUFFIX);
    let target = PathBuf::from(target);
    fs::rename(path, &target)?;
    Ok(target)
}

/// Settings for the watch loop.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub interval: Duration,
    pub delimiter: u8,
    /// Process what is in the folder now, then return.
    pub once: bool,
}

pub struct WatchLogic;

impl WatchLogic {
    pub async fn run(cfg: &Config, dir: &Path, opts: WatchOptions) -> AppResult<()> {
        if opts.once {
            let mut watcher = Watcher::including_existing(dir);
            for path in watcher.poll()? {
                Self::process(cfg, &path, opts.delimiter).await;
            }
            return Ok(());
        }

        let mut watcher = Watcher::new(dir)?;
        info(format!("Watching {} for new exports...", watcher.dir().display()));

        let mut ticker = tokio::time::interval(opts.interval);
        loop {
            ticker.tick().await;
            match watcher.poll() {
                Ok(paths) => {
                    for path in paths {
                        Self::process(cfg, &path, opts.delimiter).await;
                    }
                }
                Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "scan failed"),
            }
        }
    }

    /// Push one file quietly and mark it as sent, whatever the outcome.
    async fn process(cfg: &Config, path: &Path, delimiter: u8) {
        info(path.display());
        tracing::info!(file = %path.display(), "new export detected");

        let mode = PushMode {
            quiet: true,
            dry_run: false,
        };
        if let Err(e) = PushLogic::push_csv(cfg, Some(path), delimiter, mode).await {
            error(&e);
        }

        if let Err(e) = mark_sent(path) {
            error(format!("Cannot rename {}: {e}", path.display()));
        }
    }
}
