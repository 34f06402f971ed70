//! Search Session
//!
//! Query normalization, the per-session result cache and result paging.
//! Pure state, owned by the app context and driven by the search panel.

use std::collections::HashMap;

use crate::config::MIN_QUERY_CHARS;
use crate::models::Item;

/// Trimmed query, or `None` when it is too short to search
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (query.chars().count() >= MIN_QUERY_CHARS).then_some(query)
}

/// What the panel should do for a query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStep {
    /// Too short: hide results, no backend call
    Clear,
    /// Served from the cache
    Cached(Vec<Item>),
    /// Ask the backend for this (normalized) query
    Fetch(String),
}

/// Results cached by exact trimmed query; no eviction, cleared on mutation
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    cache: HashMap<String, Vec<Item>>,
}

impl SearchSession {
    pub fn begin(&self, raw: &str) -> SearchStep {
        match normalize_query(raw) {
            None => SearchStep::Clear,
            Some(query) => match self.cache.get(query) {
                Some(results) => SearchStep::Cached(results.clone()),
                None => SearchStep::Fetch(query.to_string()),
            },
        }
    }

    pub fn complete(&mut self, query: String, results: Vec<Item>) {
        self.cache.insert(query, results);
    }

    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Results as displayed: at most `limit` rows plus the backend total
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub rows: Vec<Item>,
    pub total: usize,
}

impl SearchPage {
    pub fn new(mut results: Vec<Item>, limit: u32) -> Self {
        let total = results.len();
        results.truncate(limit as usize);
        Self { rows: results, total }
    }

    pub fn is_truncated(&self) -> bool {
        self.total > self.rows.len()
    }

    /// Set the count of every row with this name
    pub fn patch_count(&mut self, name: &str, count: u32) -> bool {
        let mut patched = false;
        for row in self.rows.iter_mut().filter(|row| row.name == name) {
            row.count = count;
            patched = true;
        }
        patched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, count: u32) -> Item {
        Item {
            name: name.to_string(),
            item_type: None,
            count,
            notes: None,
            icon_url: None,
            thumb_url: None,
            full_url: None,
            image_url: None,
        }
    }

    #[test]
    fn test_short_queries_never_fetch() {
        let session = SearchSession::default();
        assert_eq!(session.begin(""), SearchStep::Clear);
        assert_eq!(session.begin("a"), SearchStep::Clear);
        assert_eq!(session.begin("  x  "), SearchStep::Clear);
        assert_eq!(session.begin(" ab "), SearchStep::Fetch("ab".to_string()));
    }

    #[test]
    fn test_repeated_query_uses_cache_until_invalidated() {
        let mut session = SearchSession::default();

        let SearchStep::Fetch(query) = session.begin("sword") else {
            panic!("first lookup should fetch");
        };
        session.complete(query, vec![item("Sword", 1)]);

        assert_eq!(session.begin("sword"), SearchStep::Cached(vec![item("Sword", 1)]));
        assert_eq!(session.begin(" sword "), SearchStep::Cached(vec![item("Sword", 1)]));

        session.invalidate();
        assert!(session.is_empty());
        assert_eq!(session.begin("sword"), SearchStep::Fetch("sword".to_string()));
    }

    #[test]
    fn test_cache_key_is_exact() {
        let mut session = SearchSession::default();
        session.complete("sword".to_string(), vec![]);
        assert_eq!(session.begin("Sword"), SearchStep::Fetch("Sword".to_string()));
    }

    #[test]
    fn test_page_truncates_to_limit() {
        let results: Vec<Item> = (0..40).map(|i| item(&format!("Sword {}", i), 0)).collect();
        let page = SearchPage::new(results, 25);
        assert_eq!(page.rows.len(), 25);
        assert_eq!(page.total, 40);
        assert!(page.is_truncated());
    }

    #[test]
    fn test_page_within_limit_is_not_truncated() {
        let page = SearchPage::new(vec![item("Ether", 0), item("Ethanol", 2)], 25);
        assert_eq!(page.rows.len(), 2);
        assert!(!page.is_truncated());

        let page = SearchPage::new((0..25).map(|i| item(&i.to_string(), 0)).collect(), 25);
        assert!(!page.is_truncated());
    }

    #[test]
    fn test_patch_count() {
        let mut page = SearchPage::new(vec![item("Ether", 0), item("Ethanol", 2)], 25);
        assert!(page.patch_count("Ether", 1));
        assert!(!page.patch_count("Water", 3));
        assert_eq!(page.rows[0].count, 1);
        assert_eq!(page.rows[1].count, 2);
    }
}
