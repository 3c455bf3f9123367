//! The log facade: a registry of channels fronted by a default channel.
//!
//! The facade exposes the same 21 kind methods as a channel, delegating to
//! its `"default"` channel, so callers can treat the facade itself as a
//! channel. Named channels are created lazily on first reference and live
//! for the facade's lifetime.

use std::sync::{Arc, Mutex, OnceLock};

use crate::channel::{Channel, all_kind_methods};
use crate::config::LogConfig;
use crate::detection::StyleMode;
use crate::kind::LogKind;
use crate::options::{ChannelOptions, OptionsPatch};
use crate::sink::{ConsoleSink, Sink};
use crate::value::{Args, LogCall};

/// Name of the channel the facade proxies to.
pub const DEFAULT_CHANNEL: &str = "default";

/// A facade over one sink, aggregating named channels.
pub struct Log {
    sink: Arc<dyn Sink>,
    style: StyleMode,
    channels: Mutex<Vec<Arc<Channel>>>,
}

impl Log {
    /// Create a facade with auto-detected style mode.
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self::with_style(sink, StyleMode::detect())
    }

    /// Create a facade with an injected style mode.
    #[must_use]
    pub fn with_style(sink: Arc<dyn Sink>, style: StyleMode) -> Self {
        Self::with_options(sink, style, OptionsPatch::new())
    }

    /// Create a facade, seeding the default channel's options.
    #[must_use]
    pub fn with_options(sink: Arc<dyn Sink>, style: StyleMode, options: OptionsPatch) -> Self {
        let log = Self {
            sink,
            style,
            channels: Mutex::new(Vec::new()),
        };
        let _ = log.channel_with(DEFAULT_CHANNEL, options);
        log
    }

    /// Create a facade from a resolved configuration.
    #[must_use]
    pub fn with_config(sink: Arc<dyn Sink>, config: &LogConfig) -> Self {
        let mut options = OptionsPatch::new();
        if !config.default_history {
            options = options.history(false);
        }
        Self::with_options(sink, config.resolve_style(), options)
    }

    /// The style mode resolved at construction.
    #[must_use]
    pub fn style(&self) -> StyleMode {
        self.style
    }

    /// The named channel, created on first reference.
    #[must_use]
    pub fn channel(&self, name: &str) -> Arc<Channel> {
        self.channel_with(name, OptionsPatch::new())
    }

    /// The named channel; `options` is merged into it whether it already
    /// existed or was just created.
    #[must_use = "the returned channel is the handle for further calls"]
    pub fn channel_with(&self, name: &str, options: OptionsPatch) -> Arc<Channel> {
        let mut channels = match self.channels.lock() {
            Ok(channels) => channels,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(existing) = channels.iter().find(|channel| channel.name() == name) {
            let existing = existing.clone();
            drop(channels);
            existing.configure(options);
            return existing;
        }

        let channel = Arc::new(Channel::new(
            name,
            options,
            self.sink.clone(),
            self.style,
        ));
        channels.push(channel.clone());
        channel
    }

    /// Bulk operations over every registered channel.
    #[must_use]
    pub fn channels(&self) -> Channels<'_> {
        Channels { log: self }
    }

    fn all(&self) -> Vec<Arc<Channel>> {
        self.channels
            .lock()
            .map(|channels| channels.clone())
            .unwrap_or_default()
    }

    fn default_channel(&self) -> Arc<Channel> {
        self.channel(DEFAULT_CHANNEL)
    }

    fn dispatch(&self, args: Args, kind: LogKind) -> &Self {
        self.default_channel().send(args, kind);
        self
    }

    all_kind_methods!();

    /// Run the default channel's dispatch pipeline directly.
    pub fn send(&self, args: impl Into<Args>, kind: LogKind) -> &Self {
        self.dispatch(args.into(), kind)
    }

    // The facade mirrors the full channel surface, forwarding state
    // operations to its default channel.

    /// Enable the default channel.
    pub fn on(&self) -> &Self {
        self.default_channel().on();
        self
    }

    /// Disable the default channel. History recording is unaffected.
    pub fn off(&self) -> &Self {
        self.default_channel().off();
        self
    }

    /// Snapshot of the default channel's options.
    #[must_use]
    pub fn options(&self) -> ChannelOptions {
        self.default_channel().options()
    }

    /// Shallow-merge the patch into the default channel's options.
    pub fn configure(&self, patch: OptionsPatch) -> &Self {
        self.default_channel().configure(patch);
        self
    }

    /// Snapshot of the default channel's history.
    #[must_use]
    pub fn history(&self) -> Vec<LogCall> {
        self.default_channel().history()
    }

    /// Drop the default channel's history.
    pub fn clear_history(&self) -> &Self {
        self.default_channel().clear_history();
        self
    }

    /// Re-emit the default channel's most recent entry while it is disabled.
    pub fn force(&self) -> &Self {
        self.default_channel().force();
        self
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log")
            .field("style", &self.style)
            .field("channels", &self.channels().names())
            .finish_non_exhaustive()
    }
}

/// View over every channel of a facade, in first-reference order.
pub struct Channels<'a> {
    log: &'a Log,
}

impl Channels<'_> {
    /// Enable every channel.
    pub fn on(&self) -> &Self {
        for channel in self.log.all() {
            channel.on();
        }
        self
    }

    /// Disable every channel.
    pub fn off(&self) -> &Self {
        for channel in self.log.all() {
            channel.off();
        }
        self
    }

    /// Each channel's history, keyed by channel name.
    #[must_use]
    pub fn history(&self) -> Vec<(String, Vec<LogCall>)> {
        self.log
            .all()
            .iter()
            .map(|channel| (channel.name().to_string(), channel.history()))
            .collect()
    }

    /// Registered channel names, in first-reference order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.log
            .all()
            .iter()
            .map(|channel| channel.name().to_string())
            .collect()
    }
}

// ─────────────────────────────────────────────────────────
// Global Entry Point
// ─────────────────────────────────────────────────────────

static GLOBAL: OnceLock<Log> = OnceLock::new();

/// The process-wide facade over a stderr console sink.
///
/// Created on first use with environment-detected settings unless [`init`]
/// ran first. Prefer constructing an explicit [`Log`] in library code; the
/// global exists for application-level convenience and the [`emit!`] macro.
///
/// [`emit!`]: crate::emit!
#[must_use]
pub fn global() -> &'static Log {
    GLOBAL.get_or_init(|| Log::new(Arc::new(ConsoleSink::new())))
}

/// Initialize the global facade from a configuration.
///
/// Must run before any use of [`global`]; returns an error if the global
/// facade already exists.
pub fn init(config: &LogConfig) -> Result<(), &'static str> {
    let sink = Arc::new(ConsoleSink::with_styled(config.resolve_style().is_rich()));
    init_with_sink(sink, config)
}

/// Initialize the global facade over a custom sink.
pub fn init_with_sink(sink: Arc<dyn Sink>, config: &LogConfig) -> Result<(), &'static str> {
    GLOBAL
        .set(Log::with_config(sink, config))
        .map_err(|_| "chanlog global facade already initialized")
}
