//! Channel configuration and the shallow-merge patch applied to it.

use serde::{Deserialize, Serialize};

use crate::style::Prefix;

/// Effective configuration of a channel.
///
/// Unrecognized fields arriving through a patch are stored in `extra` and
/// otherwise ignored; merges are permissive by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelOptions {
    /// Whether calls are recorded in the history buffer.
    pub history: bool,
    /// Whether calls reach the sink.
    pub enabled: bool,
    /// Optional visual banner injected on styled output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Prefix>,
    /// Unrecognized option fields, stored verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            history: true,
            enabled: true,
            prefix: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl ChannelOptions {
    /// Shallow-merge the patch into these options. Fields absent from the
    /// patch are left untouched; unknown fields land in `extra`.
    pub fn merge(&mut self, patch: OptionsPatch) {
        if let Some(history) = patch.history {
            self.history = history;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(prefix) = patch.prefix {
            self.prefix = Some(prefix);
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

/// A partial options record; only the fields present are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsPatch {
    /// Set whether calls are recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<bool>,
    /// Set whether calls reach the sink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Set the banner prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Prefix>,
    /// Unrecognized fields, carried through to `ChannelOptions::extra`.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OptionsPatch {
    /// An empty patch (merging it is a no-op).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history flag.
    #[must_use]
    pub fn history(mut self, on: bool) -> Self {
        self.history = Some(on);
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn enabled(mut self, on: bool) -> Self {
        self.enabled = Some(on);
        self
    }

    /// Set the banner prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Attach an arbitrary field; stored but not interpreted.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
