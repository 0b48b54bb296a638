use serde::{Deserialize, Serialize};

use crate::history::HistoryMode;
use crate::path::normalize_base;

/// Router configuration
///
/// Built once at startup and handed to [`crate::Navigator::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// URL prefix the application is served under (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// How route paths are written into the URL (default: web)
    #[serde(default)]
    pub history: HistoryMode,

    /// Whether path matching ignores ASCII case (default: false)
    #[serde(default)]
    pub case_insensitive: bool,
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            history: HistoryMode::default(),
            case_insensitive: false,
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base path, normalizing it to `/` or `/prefix`
    ///
    /// ```
    /// use sueldo_router::RouterConfig;
    ///
    /// let config = RouterConfig::new().with_base_path("calculadora/");
    /// assert_eq!(config.base_path, "/calculadora");
    /// ```
    pub fn with_base_path(mut self, base_path: impl AsRef<str>) -> Self {
        self.base_path = normalize_base(base_path.as_ref());
        self
    }

    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Returns a copy with the base path in canonical form
    ///
    /// Deserialized configs carry the base path exactly as written.
    pub fn normalized(self) -> Self {
        let base_path = normalize_base(&self.base_path);
        Self { base_path, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.history, HistoryMode::Web);
        assert!(!config.case_insensitive);
    }

    #[test]
    fn test_empty_config() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            base_path = "/calc/"
            history = "hash"
            case_insensitive = true
        "#;
        let config: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.history, HistoryMode::Hash);
        assert!(config.case_insensitive);
        assert_eq!(config.base_path, "/calc/");
        assert_eq!(config.normalized().base_path, "/calc");
    }
}
