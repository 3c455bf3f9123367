//! Facade configuration.
//!
//! `LogConfig` is the single configuration point for constructing a facade,
//! supporting both programmatic and environment-variable setup.

use std::env;

use crate::detection::StyleMode;

/// Configuration for a [`Log`] facade.
///
/// # Environment Variables
///
/// | Variable | Values | Description |
/// |----------|--------|-------------|
/// | `CHANLOG_RICH` | (set) | Force styled output |
/// | `CHANLOG_PLAIN` | (set) | Force plain output |
/// | `NO_COLOR` | (set) | Disable styling (standard) |
/// | `CHANLOG_HISTORY` | 0/false | Disable default-channel history |
///
/// [`Log`]: crate::Log
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Override style mode (None = auto-detect).
    pub style: Option<StyleMode>,
    /// Force plain output regardless of environment.
    pub force_plain: bool,
    /// Force styled output regardless of environment.
    pub force_rich: bool,
    /// Whether the default channel records history.
    pub default_history: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            style: None,
            force_plain: false,
            force_rich: false,
            default_history: true,
        }
    }
}

impl LogConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var("CHANLOG_RICH").is_ok() {
            config.force_rich = true;
        }
        if env::var("CHANLOG_PLAIN").is_ok() || env::var("NO_COLOR").is_ok() {
            config.force_plain = true;
        }
        if env::var("CHANLOG_HISTORY")
            .map(|value| value == "0" || value.to_lowercase() == "false")
            .unwrap_or(false)
        {
            config.default_history = false;
        }

        config
    }

    /// Force plain output.
    #[must_use]
    pub fn plain_mode(mut self) -> Self {
        self.force_plain = true;
        self
    }

    /// Force styled output.
    #[must_use]
    pub fn rich_mode(mut self) -> Self {
        self.force_rich = true;
        self
    }

    /// Set the style mode explicitly.
    #[must_use]
    pub fn with_style(mut self, style: StyleMode) -> Self {
        self.style = Some(style);
        self
    }

    /// Disable history on the default channel.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.default_history = false;
        self
    }

    /// Resolve the effective style mode.
    ///
    /// `force_plain` wins over `force_rich`; an explicit `style` beats
    /// auto-detection.
    #[must_use]
    pub fn resolve_style(&self) -> StyleMode {
        if self.force_plain {
            return StyleMode::Plain;
        }
        if self.force_rich {
            return StyleMode::Rich;
        }
        self.style.unwrap_or_else(StyleMode::detect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::new();
        assert!(config.default_history);
        assert!(!config.force_plain);
        assert!(!config.force_rich);
        assert!(config.style.is_none());
    }

    #[test]
    fn test_plain_mode_resolves_plain() {
        let config = LogConfig::new().plain_mode();
        assert_eq!(config.resolve_style(), StyleMode::Plain);
    }

    #[test]
    fn test_rich_mode_resolves_rich() {
        let config = LogConfig::new().rich_mode();
        assert_eq!(config.resolve_style(), StyleMode::Rich);
    }

    #[test]
    fn test_force_plain_beats_force_rich() {
        let config = LogConfig::new().rich_mode().plain_mode();
        assert_eq!(config.resolve_style(), StyleMode::Plain);
    }

    #[test]
    fn test_explicit_style_beats_detection() {
        let config = LogConfig::new().with_style(StyleMode::Rich);
        assert_eq!(config.resolve_style(), StyleMode::Rich);
    }

    #[test]
    fn test_without_history() {
        let config = LogConfig::new().without_history();
        assert!(!config.default_history);
    }
}
