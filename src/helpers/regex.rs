//! Regex extraction over already-extracted markup or text.

use crate::cache;
use crate::collection::StringCollection;
use regex::Captures;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("invalid regex pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("capture group {group} out of range, pattern has {groups} groups")]
    GroupOutOfRange { group: usize, groups: usize },
}

/// Compile `pattern` through the thread-local cache.
pub(crate) fn compile(pattern: &str) -> Result<regex::Regex, RegexError> {
    cache::get_or_compile_regex(pattern).map_err(|e| RegexError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Collect one capture group from every match of `pattern` across `items`.
///
/// Group 0 is the whole match. Matches where the group did not participate
/// are skipped rather than reported as empty strings.
pub fn match_group(
    pattern: &str,
    group: usize,
    items: &[String],
) -> Result<StringCollection, RegexError> {
    let re = compile(pattern)?;
    if group >= re.captures_len() {
        return Err(RegexError::GroupOutOfRange {
            group,
            groups: re.captures_len(),
        });
    }

    let mut result = Vec::new();
    for item in items {
        for captures in re.captures_iter(item) {
            if let Some(found) = captures.get(group) {
                result.push(found.as_str().to_string());
            }
        }
    }
    Ok(StringCollection::new(result))
}

/// Map every capture set of `pattern` across `items` through `f`, keeping
/// the `Some` results.
pub fn match_with<F>(pattern: &str, f: F, items: &[String]) -> Result<StringCollection, RegexError>
where
    F: Fn(&Captures<'_>) -> Option<String>,
{
    let re = compile(pattern)?;

    let mut result = Vec::new();
    for item in items {
        for captures in re.captures_iter(item) {
            if let Some(mapped) = f(&captures) {
                result.push(mapped);
            }
        }
    }
    Ok(StringCollection::new(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn collects_group_across_items() {
        let found = match_group(r"(\d+)-(\d+)", 2, &items(&["1-2 3-4", "5-6"])).unwrap();
        assert_eq!(found.items(), ["2", "4", "6"]);
    }

    #[test]
    fn group_zero_is_whole_match() {
        let found = match_group(r"\d+", 0, &items(&["a1b22"])).unwrap();
        assert_eq!(found.items(), ["1", "22"]);
    }

    #[test]
    fn out_of_range_group_is_rejected() {
        let err = match_group(r"(\d+)", 5, &items(&["1"])).unwrap_err();
        assert_eq!(err, RegexError::GroupOutOfRange { group: 5, groups: 2 });
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = match_group("(unclosed", 0, &items(&[])).unwrap_err();
        assert!(matches!(err, RegexError::InvalidPattern { .. }));
    }

    #[test]
    fn callback_filters_and_maps() {
        let found = match_with(
            r"(\d+)",
            |caps| {
                let n: u32 = caps[1].parse().ok()?;
                (n % 2 == 0).then(|| format!("even:{n}"))
            },
            &items(&["1 2 3 4"]),
        )
        .unwrap();
        assert_eq!(found.items(), ["even:2", "even:4"]);
    }
}
