//! Formatting utilities used for CLI outputs.

/// Minutes as `02h 25m` (long) or `02:25` (short), optionally signed.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Minutes as decimal hours, like the sheet's `CONVERT(SUM(..); "mn"; "hr")`.
pub fn mins2hours(mins: i64) -> f64 {
    mins as f64 / 60.0
}
