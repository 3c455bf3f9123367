//! Style capability detection
//!
//! Determines whether the output sink should receive rich inline styling,
//! based on the execution environment. The facade resolves this once at
//! construction and injects the result into every channel, so dispatch never
//! sniffs the environment itself.

/// Whether output is decorated with inline style directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// Plain output - style-directive tokens are stripped.
    Plain,
    /// Rich output - style directives are honored by the sink.
    #[default]
    Rich,
}

impl StyleMode {
    /// Auto-detect the style mode from the environment.
    #[must_use]
    pub fn detect() -> Self {
        if should_style() {
            Self::Rich
        } else {
            Self::Plain
        }
    }

    /// Check if rich styling is active.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Rich)
    }

    /// Check if output is plain.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Determine if we're running in a headless or automated context.
#[must_use]
pub fn is_headless_context() -> bool {
    // CI runners and test harnesses set these
    std::env::var("CI").is_ok()
        || std::env::var("AGENT_MODE").is_ok()
        // Explicit rich disable
        || std::env::var("CHANLOG_PLAIN").is_ok()
        || std::env::var("NO_COLOR").is_ok()
}

/// Determine if rich styling should be enabled.
#[must_use]
pub fn should_style() -> bool {
    // Explicit enable always wins
    if std::env::var("CHANLOG_RICH").is_ok() {
        return true;
    }

    // Headless/automated environments never get styling
    if is_headless_context() {
        return false;
    }

    // Otherwise ask the terminal itself
    console::Term::stderr().features().colors_supported()
}
