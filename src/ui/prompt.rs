//! Interactive confirmation before anything is sent.

use crate::errors::{AppError, AppResult};
use crate::models::WorklogEntry;
use crate::ui::preview::dump_worklog;
use std::io::{self, BufRead, Write};

/// Asks a human whether a batch may be submitted.
pub trait Confirm {
    fn confirm(&self, worklog: &[WorklogEntry]) -> AppResult<bool>;
}

/// Prints the worklog and reads a y/N answer from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, worklog: &[WorklogEntry]) -> AppResult<bool> {
        print!("{}", dump_worklog(worklog));
        print!("Does this look alright? [y/N]: ");
        io::stdout().flush().ok();

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(AppError::from)?;

        Ok(is_yes(&answer))
    }
}

/// Accepts `y` / `yes` in any case; everything else means no.
pub fn is_yes(answer: &str) -> bool {
    let ans = answer.trim().to_ascii_lowercase();
    ans == "y" || ans == "yes"
}
