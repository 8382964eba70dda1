//! Simple CLI configuration loader for the HMS dashboard
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Working directory: ./hms.json or ./.hms/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/hms/config.json or ~/.config/hms/config.json
//! 4. Built-in defaults
//!
//! Environment variables are applied on top of whichever source won, and
//! command-line flags are applied last.

use anyhow::{anyhow, Context, Result};
use hms_core::{ConfigError, DashboardConfig, Page};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Page label, slug or sidebar position
    pub start_page: Option<String>,
    pub chart_width: Option<usize>,
    pub chart_height: Option<usize>,
    pub color: Option<bool>,
    pub max_history: Option<usize>,
}

impl RawConfig {
    /// Fill unset fields from `other`
    fn overlay(mut self, other: RawConfig) -> Self {
        self.start_page = other.start_page.or(self.start_page);
        self.chart_width = other.chart_width.or(self.chart_width);
        self.chart_height = other.chart_height.or(self.chart_height);
        self.color = other.color.or(self.color);
        self.max_history = other.max_history.or(self.max_history);
        self
    }
}

/// Values taken from `HMS_*` environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub start_page: Option<String>,
    pub chart_width: Option<String>,
    pub max_history: Option<String>,
    pub no_color: bool,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self {
            start_page: std::env::var("HMS_START_PAGE").ok(),
            chart_width: std::env::var("HMS_CHART_WIDTH").ok(),
            max_history: std::env::var("HMS_MAX_HISTORY").ok(),
            no_color: std::env::var_os("HMS_NO_COLOR").is_some()
                || std::env::var_os("NO_COLOR").is_some(),
        }
    }

    fn into_raw(self) -> Result<RawConfig> {
        let parse = |field: &str, value: Option<String>| -> Result<Option<usize>> {
            value
                .map(|v| {
                    v.trim().parse::<usize>().map_err(|_| {
                        anyhow!(ConfigError::InvalidValue {
                            field: field.to_string(),
                            value: v.clone(),
                        })
                    })
                })
                .transpose()
        };

        Ok(RawConfig {
            start_page: self.start_page,
            chart_width: parse("HMS_CHART_WIDTH", self.chart_width)?,
            chart_height: None,
            color: self.no_color.then_some(false),
            max_history: parse("HMS_MAX_HISTORY", self.max_history)?,
        })
    }
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory searched for project-local config (defaults to cwd)
    working_dir: Option<PathBuf>,
    /// Whether to consult the user's XDG config directory
    use_user_config: bool,
    env: Option<EnvOverrides>,
    /// Flag overrides
    page_override: Option<String>,
    width_override: Option<usize>,
    no_color: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            working_dir: None,
            use_user_config: true,
            env: None,
            page_override: None,
            width_override: None,
            no_color: false,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Skip the XDG config directory
    pub fn without_user_config(mut self) -> Self {
        self.use_user_config = false;
        self
    }

    /// Use fixed environment overrides instead of reading the process environment
    pub fn with_env_overrides(mut self, env: EnvOverrides) -> Self {
        self.env = Some(env);
        self
    }

    /// Set start page override
    pub fn with_page_override(mut self, page: String) -> Self {
        self.page_override = Some(page);
        self
    }

    /// Set chart width override
    pub fn with_width_override(mut self, width: usize) -> Self {
        self.width_override = Some(width);
        self
    }

    /// Disable colours regardless of configuration
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<DashboardConfig> {
        // Step 1: Find and load base configuration
        let config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Environment, then flags
        let env = self.env.clone().unwrap_or_else(EnvOverrides::from_env);
        let mut config = config.overlay(env.into_raw()?);

        if let Some(page) = &self.page_override {
            config.start_page = Some(page.clone());
        }
        if let Some(width) = self.width_override {
            config.chart_width = Some(width);
        }
        if self.no_color {
            config.color = Some(false);
        }

        // Step 3: Resolve to final dashboard config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        if let Some(config) = self.try_load_working_dir().await? {
            return Ok(config);
        }

        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        debug!("No config file found, using defaults");
        Ok(RawConfig::default())
    }

    async fn try_load_working_dir(&self) -> Result<Option<RawConfig>> {
        let dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        for candidate in [dir.join("hms.json"), dir.join(".hms").join("config.json")] {
            if candidate.is_file() {
                return Ok(Some(self.load_file(&candidate).await?));
            }
        }

        Ok(None)
    }

    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if !self.use_user_config {
            return Ok(None);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("hms").join("config.json");
            if config_path.is_file() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(ConfigError::FileNotFound {
                    path: config_file.display().to_string(),
                }))
            }
        } else {
            Err(anyhow!(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve raw config to DashboardConfig
    fn resolve_config(&self, config: RawConfig) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let start_page = match config.start_page {
            Some(page) => page.parse::<Page>()?,
            None => defaults.start_page,
        };

        let resolved = DashboardConfig {
            start_page,
            chart_width: config.chart_width.unwrap_or(defaults.chart_width),
            chart_height: config.chart_height.unwrap_or(defaults.chart_height),
            color: config.color.unwrap_or(defaults.color),
            max_history: config.max_history.unwrap_or(defaults.max_history),
        };

        resolved
            .validate()
            .context("Configuration validation failed")?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
