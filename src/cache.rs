//! Thread-local compilation caches for regexes and translated selectors.
//!
//! Scraping workloads run the same handful of expressions against many
//! documents, so compiled regexes and selector translations are cached
//! instead of being rebuilt per call. Each cache is capped at 256 entries;
//! when the cap is reached the cache is cleared and rebuilt on demand.

use crate::translate::TranslateError;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

const MAX_CACHE_ENTRIES: usize = 256;

thread_local! {
    static REGEX_CACHE: RefCell<HashMap<String, Regex>> =
        RefCell::new(HashMap::new());

    // Key is "<translator>:<expression>" so the same expression string fed
    // through different translators never collides.
    static SELECTOR_CACHE: RefCell<HashMap<String, String>> =
        RefCell::new(HashMap::new());
}

/// Get a compiled regex from cache, or compile and cache it.
///
/// Invalid patterns are not cached; every call with a bad pattern reports
/// the same `regex::Error`.
pub fn get_or_compile_regex(pattern: &str) -> Result<Regex, regex::Error> {
    REGEX_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();

        if let Some(re) = cache.get(pattern) {
            return Ok(re.clone());
        }

        // Evict all if at capacity (simple but effective for batch workloads)
        if cache.len() >= MAX_CACHE_ENTRIES {
            cache.clear();
        }

        let compiled = Regex::new(pattern)?;
        cache.insert(pattern.to_string(), compiled.clone());
        Ok(compiled)
    })
}

/// Get a translated XPath expression from cache, or translate and cache it.
///
/// `translator_id` namespaces the cache key; translation failures are not
/// cached.
pub fn get_or_translate<F>(
    translator_id: &str,
    expression: &str,
    translate: F,
) -> Result<String, TranslateError>
where
    F: FnOnce(&str) -> Result<String, TranslateError>,
{
    let cache_key = format!("{translator_id}:{expression}");

    SELECTOR_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();

        if let Some(xpath) = cache.get(&cache_key) {
            return Ok(xpath.clone());
        }

        if cache.len() >= MAX_CACHE_ENTRIES {
            cache.clear();
        }

        let translated = translate(expression)?;
        cache.insert(cache_key, translated.clone());
        Ok(translated)
    })
}

/// Clear both caches (mainly for testing).
pub fn clear_caches() {
    REGEX_CACHE.with(|cache| cache.borrow_mut().clear());
    SELECTOR_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Get cache sizes for monitoring: (regexes, selectors).
pub fn cache_sizes() -> (usize, usize) {
    let regexes = REGEX_CACHE.with(|cache| cache.borrow().len());
    let selectors = SELECTOR_CACHE.with(|cache| cache.borrow().len());
    (regexes, selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_is_cached_after_first_compile() {
        clear_caches();
        let first = get_or_compile_regex(r"\d+").unwrap();
        let second = get_or_compile_regex(r"\d+").unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(cache_sizes().0, 1);
    }

    #[test]
    fn invalid_regex_is_not_cached() {
        clear_caches();
        assert!(get_or_compile_regex("(unclosed").is_err());
        assert_eq!(cache_sizes().0, 0);
    }

    #[test]
    fn translations_are_namespaced_by_translator() {
        clear_caches();
        let a = get_or_translate("a", "div", |_| Ok("//a".to_string())).unwrap();
        let b = get_or_translate("b", "div", |_| Ok("//b".to_string())).unwrap();
        assert_eq!(a, "//a");
        assert_eq!(b, "//b");
        assert_eq!(cache_sizes().1, 2);
    }
}
