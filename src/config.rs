// File: src/config.rs
// Purpose: Theme configuration and prefix-class resolution

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Theme configuration handed to `Breadcrumb::render`.
///
/// Replaces an ambient configuration-provider context with an explicit
/// value: the caller decides which provider a render uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigProvider {
    /// Optional theme prefix prepended to every component class.
    #[serde(default)]
    pub prefix: Option<String>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Load provider settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the class prefix for a component. A caller-supplied
    /// `custom` value wins over the themed prefix; with neither set the
    /// component suffix is used bare.
    pub fn prefix_cls(&self, suffix: &str, custom: Option<&str>) -> String {
        if let Some(custom) = custom {
            return custom.to_string();
        }
        match &self.prefix {
            Some(prefix) => format!("{prefix}-{suffix}"),
            None => suffix.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn custom_wins_over_theme_prefix() {
        let config = ConfigProvider::with_prefix("app");
        assert_eq!(config.prefix_cls("breadcrumb", Some("my-crumbs")), "my-crumbs");
    }

    #[test]
    fn theme_prefix_is_prepended() {
        let config = ConfigProvider::with_prefix("app");
        assert_eq!(config.prefix_cls("breadcrumb", None), "app-breadcrumb");
    }

    #[test]
    fn bare_suffix_without_prefix() {
        let config = ConfigProvider::new();
        assert_eq!(config.prefix_cls("breadcrumb", None), "breadcrumb");
    }

    #[test]
    fn from_file_reads_prefix() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = \"site\"").unwrap();
        let config = ConfigProvider::from_file(file.path()).unwrap();
        assert_eq!(config.prefix.as_deref(), Some("site"));
    }

    #[test]
    fn from_file_missing_path_carries_context() {
        let err = ConfigProvider::from_file("/nonexistent/crumbtrail.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
