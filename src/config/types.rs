// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_MAX_VISIBLE: usize = 6;
pub const DEFAULT_FETCH_LIMIT: usize = 100;
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// What regaining input focus does to a dismissed suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RefocusPolicy {
    /// Start a fresh fetch for the current text
    #[default]
    Refetch,
    /// Reopen the last fetched list without touching the network
    Restore,
}

/// Suggestion engine section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Quiet period before a fetch is issued
    pub debounce_ms: u64,
    /// Maximum rows shown in the dropdown
    pub max_visible: usize,
    /// Result count requested from the backend before filtering
    pub fetch_limit: usize,
    pub refocus: RefocusPolicy,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_visible: DEFAULT_MAX_VISIBLE,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            refocus: RefocusPolicy::default(),
        }
    }
}

/// Episode API section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            sort_by: "created_at".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Valid refocus policies parse to their variant
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_refocus_parsing(policy in prop::sample::select(vec!["refetch", "restore"])) {
            let toml_content = format!(r#"
[suggest]
refocus = "{}"
"#, policy);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid policy: {}", policy);

            let expected = match policy {
                "refetch" => RefocusPolicy::Refetch,
                "restore" => RefocusPolicy::Restore,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().suggest.refocus, expected);
        }
    }

    // Any subset of suggest fields leaves the rest at their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_missing_fields_use_defaults(
            debounce in prop::option::of(0u64..5000),
            max_visible in prop::option::of(1usize..50),
        ) {
            let mut toml_content = String::from("[suggest]\n");
            if let Some(ms) = debounce {
                toml_content.push_str(&format!("debounce_ms = {}\n", ms));
            }
            if let Some(n) = max_visible {
                toml_content.push_str(&format!("max_visible = {}\n", n));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            prop_assert_eq!(config.suggest.debounce_ms, debounce.unwrap_or(DEFAULT_DEBOUNCE_MS));
            prop_assert_eq!(config.suggest.max_visible, max_visible.unwrap_or(DEFAULT_MAX_VISIBLE));
            prop_assert_eq!(config.suggest.fetch_limit, DEFAULT_FETCH_LIMIT);
            prop_assert_eq!(config.api.base_url.as_str(), DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.suggest.debounce_ms, 250);
        assert_eq!(config.suggest.max_visible, 6);
        assert_eq!(config.suggest.refocus, RefocusPolicy::Refetch);
        assert_eq!(config.api.sort_by, "created_at");
        assert_eq!(config.api.sort_order, "desc");
    }

    #[test]
    fn test_unknown_refocus_policy_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[suggest]\nrefocus = \"sometimes\"\n");
        assert!(result.is_err());
    }
}
