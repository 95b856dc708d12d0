//! Worklog extraction from a timesheet workbook (xlsx, xls, ods).
//!
//! The layout is fixed: one date cell for the whole sheet, a column of task
//! labels and a parallel column of minutes. Rows without time are skipped.

use crate::config::SheetLayout;
use crate::core::date::normalize_date;
use crate::core::issue::parse_issue;
use crate::core::record::parse_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::WorklogEntry;
use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{1,3})([1-9][0-9]*)$").expect("valid cell regex"));

/// Zero-based `(row, col)` of an A1-style reference such as `B6`.
pub fn parse_cell(reference: &str) -> AppResult<(u32, u32)> {
    let upper = reference.trim().to_ascii_uppercase();
    let caps = CELL_RE
        .captures(&upper)
        .ok_or_else(|| AppError::InvalidCell(reference.to_string()))?;

    let col = caps[1]
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + u32::from(b - b'A' + 1))
        - 1;
    let row: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidCell(reference.to_string()))?;

    Ok((row - 1, col))
}

/// A single-column range such as `A7:A50`, as zero-based `(first_row, last_row, col)`.
pub fn parse_column_range(range: &str) -> AppResult<(u32, u32, u32)> {
    let (start, end) = range
        .split_once(':')
        .ok_or_else(|| AppError::InvalidCell(range.to_string()))?;
    let (r0, c0) = parse_cell(start)?;
    let (r1, c1) = parse_cell(end)?;

    if c0 != c1 || r1 < r0 {
        return Err(AppError::InvalidCell(format!(
            "{range} (expected a single column, top to bottom)"
        )));
    }
    Ok((r0, r1, c0))
}

/// Open a workbook and return the named sheet, or the first one.
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> AppResult<Range<Data>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| AppError::Sheet(e.to_string()))?;

    let name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AppError::Sheet(format!("{} has no sheets", path.display())))?,
    };

    tracing::debug!(path = %path.display(), sheet = %name, "reading worksheet");
    workbook
        .worksheet_range(&name)
        .map_err(|e| AppError::Sheet(format!("{name}: {e}")))
}

/// Build the worklog of a sheet.
pub fn extract_worklog(range: &Range<Data>, layout: &SheetLayout) -> AppResult<Vec<WorklogEntry>> {
    let date = cell_date(range.get_value(parse_cell(&layout.date_cell)?));
    let (task_first, task_last, task_col) = parse_column_range(&layout.tasks_range)?;
    let (min_first, min_last, min_col) = parse_column_range(&layout.minutes_range)?;

    let rows = (task_last - task_first).min(min_last - min_first) + 1;
    let mut worklog = Vec::new();

    for i in 0..rows {
        let Some(minutes) = cell_minutes(range.get_value((min_first + i, min_col))) else {
            continue;
        };

        let task = cell_text(range.get_value((task_first + i, task_col)));
        let issue = parse_issue(&task);
        worklog.push(WorklogEntry {
            date: date.clone(),
            issue_number: issue.number,
            description: issue.description,
            minutes,
        });
    }

    Ok(worklog)
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `None` means "no time on this row": empty or zero.
fn cell_minutes(cell: Option<&Data>) -> Option<i64> {
    let minutes = match cell? {
        Data::Empty => return None,
        Data::Int(i) => *i,
        Data::Float(f) => f.round() as i64,
        Data::String(s) if s.trim().is_empty() => return None,
        Data::String(s) => parse_minutes(s),
        other => parse_minutes(&other.to_string()),
    };
    (minutes != 0).then_some(minutes)
}

fn cell_date(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty => None,
        Data::String(s) if s.contains('/') => Some(normalize_date(s)),
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.trim().to_string()),
        other => other.as_date().map(|d| d.format("%Y-%m-%d").to_string()),
    }
}
