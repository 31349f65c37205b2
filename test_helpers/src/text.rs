//! Text helpers for behavioural test suites.

/// Strips one layer of matching double quotes from a Gherkin placeholder.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
}

/// Splits a comma-separated placeholder such as `"E2", "E3"` into labels.
#[must_use]
pub fn label_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|part| unquote(part).to_owned())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Returns the entries of a numbered composite message (`1: a`, `2: b`).
///
/// Lines without a numeric prefix, such as a heading, are skipped.
#[must_use]
pub fn numbered_entries(message: &str) -> Vec<String> {
    message
        .lines()
        .filter_map(|line| {
            let (number, rest) = line.split_once(": ")?;
            number.parse::<usize>().ok().map(|_| rest.to_owned())
        })
        .collect()
}
