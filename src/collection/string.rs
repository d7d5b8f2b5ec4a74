use crate::helpers::regex::{self as regex_helper, RegexError};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, immutable collection of extracted strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringCollection {
    items: Vec<String>,
}

impl StringCollection {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Out-of-range indexes return `None`, mirroring slice access.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// New collection with `other`'s items appended after this one's.
    pub fn merge(&self, other: &StringCollection) -> Self {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        Self { items }
    }

    /// New collection with one item appended; the source is untouched.
    pub fn add(&self, item: impl Into<String>) -> Self {
        let mut items = self.items.clone();
        items.push(item.into());
        Self { items }
    }

    /// Order-preserving deduplication.
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for item in &self.items {
            if seen.insert(item.as_str()) {
                items.push(item.clone());
            }
        }
        Self { items }
    }

    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool,
    {
        let items = self
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        Self { items }
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let items = self.items.iter().map(|item| f(item)).collect();
        Self { items }
    }

    /// Regex-replace every item.
    pub fn replace(&self, pattern: &str, replacement: &str) -> Result<Self, RegexError> {
        let re = regex_helper::compile(pattern)?;
        let items = self
            .items
            .iter()
            .map(|item| re.replace_all(item, replacement).into_owned())
            .collect();
        Ok(Self { items })
    }

    /// Collect one capture group from every match across all items.
    pub fn match_regex(&self, pattern: &str, group: usize) -> Result<Self, RegexError> {
        regex_helper::match_group(pattern, group, &self.items)
    }

    /// Regex-split every item into one flat collection, dropping empty
    /// fragments.
    pub fn split(&self, pattern: &str) -> Result<Self, RegexError> {
        let re = regex_helper::compile(pattern)?;
        let mut items = Vec::new();
        for item in &self.items {
            items.extend(
                re.split(item)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string),
            );
        }
        Ok(Self { items })
    }
}

impl From<Vec<String>> for StringCollection {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<String> for StringCollection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for StringCollection {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringCollection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(values: &[&str]) -> StringCollection {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn get_out_of_range_is_none() {
        let c = collection(&["a", "b"]);
        assert_eq!(c.get(0), Some("a"));
        assert_eq!(c.get(2), None);
    }

    #[test]
    fn merge_keeps_order_and_sources() {
        let left = collection(&["0", "1"]);
        let right = collection(&["0"]);
        let merged = left.merge(&right);
        assert_eq!(merged.items(), ["0", "1", "0"]);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn add_leaves_source_untouched() {
        let source = collection(&["0", "1"]);
        let extended = source.add("2");
        assert_eq!(source.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(extended.last(), Some("2"));
    }

    #[test]
    fn unique_preserves_first_occurrence_order() {
        let c = collection(&["b", "a", "b", "c", "a"]);
        assert_eq!(c.unique().items(), ["b", "a", "c"]);
    }

    #[test]
    fn replace_applies_to_every_item() {
        let c = collection(&["a1", "b22"]);
        let replaced = c.replace(r"\d+", "#").unwrap();
        assert_eq!(replaced.items(), ["a#", "b#"]);
    }

    #[test]
    fn split_flattens_and_drops_empty() {
        let c = collection(&["a, b", "c"]);
        let split = c.split(r",\s*").unwrap();
        assert_eq!(split.items(), ["a", "b", "c"]);
    }

    #[test]
    fn match_regex_over_items() {
        let c = collection(&["tel: 123", "tel: 456"]);
        let found = c.match_regex(r"tel: (\d+)", 1).unwrap();
        assert_eq!(found.items(), ["123", "456"]);
    }

    #[test]
    fn filter_and_map() {
        let c = collection(&["a", "bb", "ccc"]);
        assert_eq!(c.filter(|s| s.len() > 1).items(), ["bb", "ccc"]);
        assert_eq!(c.map(|s| s.to_uppercase()).items(), ["A", "BB", "CCC"]);
    }
}
