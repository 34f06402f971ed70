//! Configuration
//!
//! UI timing constants, startup configuration read from local storage, and
//! the persisted search-limit preference.

use std::cell::RefCell;
use std::str::FromStr;

use gloo_storage::Storage;
use log::LevelFilter;

/// Debounce for the search input
pub const SEARCH_DEBOUNCE_MS: u32 = 150;
/// Idle time before the modal count field is saved
pub const COUNT_SAVE_DELAY_MS: u32 = 500;
/// Idle time before the modal notes field is saved
pub const NOTES_SAVE_DELAY_MS: u32 = 1000;
/// Deferred stats refresh after an in-place count change
pub const STATS_REFRESH_DELAY_MS: u32 = 1000;
/// How long a notification stays on screen
pub const NOTIFICATION_MS: u32 = 2000;

/// Queries shorter than this (after trimming) never reach the backend
pub const MIN_QUERY_CHARS: usize = 2;

pub const DEFAULT_SEARCH_LIMIT: u32 = 25;
pub const SEARCH_LIMIT_OPTIONS: &[u32] = &[10, 25, 50, 100, 250];

pub const SEARCH_LIMIT_KEY: &str = "searchLimit";
pub const LOG_LEVEL_KEY: &str = "logLevel";
pub const API_BASE_KEY: &str = "apiBase";

pub const DEFAULT_API_BASE: &str = "/api";

/// Startup configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for HTTP-mode endpoints, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from a key lookup; unset or invalid values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_KEY) {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                config.api_base = base.to_string();
            }
        }

        if let Some(level) = lookup(LOG_LEVEL_KEY) {
            if let Ok(level) = LevelFilter::from_str(level.trim()) {
                config.log_level = level;
            }
        }

        config
    }

    /// Read overrides from browser local storage
    pub fn load() -> Self {
        let storage = gloo_storage::LocalStorage::raw();
        Self::from_lookup(|key| storage.get_item(key).ok().flatten())
    }
}

thread_local! {
    static CURRENT: RefCell<AppConfig> = RefCell::new(AppConfig::default());
}

pub fn install(config: AppConfig) {
    CURRENT.with(|c| *c.borrow_mut() = config);
}

pub fn api_base() -> String {
    CURRENT.with(|c| c.borrow().api_base.clone())
}

// ========================
// Preferences
// ========================

/// Missing or zero limits fall back to the default
pub fn normalize_search_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(limit) if limit > 0 => limit,
        _ => DEFAULT_SEARCH_LIMIT,
    }
}

pub fn load_search_limit() -> u32 {
    normalize_search_limit(gloo_storage::LocalStorage::get::<u32>(SEARCH_LIMIT_KEY).ok())
}

pub fn save_search_limit(limit: u32) {
    if let Err(e) = gloo_storage::LocalStorage::set(SEARCH_LIMIT_KEY, limit) {
        log::warn!("[Config] Could not persist search limit: {}", e);
    } else {
        log::info!("[Config] Search limit set to: {}", limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (API_BASE_KEY, "http://localhost:8080/api/"),
            (LOG_LEVEL_KEY, "debug"),
        ]));
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(API_BASE_KEY, "  / "), (LOG_LEVEL_KEY, "loud")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_normalize_search_limit() {
        assert_eq!(normalize_search_limit(None), 25);
        assert_eq!(normalize_search_limit(Some(0)), 25);
        assert_eq!(normalize_search_limit(Some(50)), 50);
    }
}
