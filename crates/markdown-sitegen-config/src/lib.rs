use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a site's inputs live and where its output goes.
///
/// Every field is optional in `site.toml`; missing ones take the defaults
/// of [`SiteConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Assets mirrored verbatim into the output.
    pub static_dir: PathBuf,
    /// Markdown pages.
    pub content_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Output directory; wiped on every build.
    pub public_dir: PathBuf,
    /// Escape HTML-special characters in page text.
    pub escape_html: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            public_dir: PathBuf::from("public"),
            escape_html: false,
        }
    }
}

impl SiteConfig {
    /// Config file name looked up in the working directory.
    pub const DEFAULT_FILE: &'static str = "site.toml";

    /// Loads a config file, or `Ok(None)` when there is none.
    ///
    /// Paths are shell-expanded, then relative ones are resolved against the
    /// directory holding the config file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let base = config_path.parent().unwrap_or(Path::new(""));
        Ok(Some(config.resolve_paths(base)))
    }

    /// Loads `site.toml` from the working directory, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::DEFAULT_FILE)
    }

    fn resolve_paths(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            let expanded = Self::expand_path(&path).unwrap_or(path);
            if expanded.is_relative() {
                base.join(expanded)
            } else {
                expanded
            }
        };
        Self {
            static_dir: resolve(self.static_dir),
            content_dir: resolve(self.content_dir),
            template_path: resolve(self.template_path),
            public_dir: resolve(self.public_dir),
            escape_html: self.escape_html,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
