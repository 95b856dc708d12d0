//! Date marker conversion.

/// Converts `27/01/16` to `2016-01-27`.
///
/// Parts are only rearranged: a two-digit year gets the `20` century prefix,
/// nothing else is padded or checked. Malformed input gives a malformed result.
pub fn normalize_date(date: &str) -> String {
    let parts: Vec<&str> = date.trim().split('/').collect();
    let day = parts.first().copied().unwrap_or_default();
    let month = parts.get(1).copied().unwrap_or_default();
    let year = parts.get(2).copied().unwrap_or_default();

    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    };

    [year.as_str(), month, day].join("-")
}
