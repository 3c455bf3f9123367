//! The channel: unit of configuration, history, and dispatch.
//!
//! A channel owns its options and history behind a mutex and shares the
//! facade's sink and resolved style mode. Every log-kind method funnels into
//! [`Channel::send`], which runs the classification / history / styling /
//! normalization pipeline.

use std::sync::{Arc, Mutex};

use crate::detection::StyleMode;
use crate::kind::LogKind;
use crate::options::{ChannelOptions, OptionsPatch};
use crate::sink::Sink;
use crate::style::{ITALIC_RESET, STYLE_TOKEN, kind_style, strip_style_tokens};
use crate::value::{Args, LogCall, LogValue};

/// Generates the 21 log-kind methods, delegating to the type's `dispatch`.
///
/// Used by both [`Channel`] and the facade, so the two surfaces stay
/// identical without runtime reflection.
macro_rules! all_kind_methods {
    () => {
        $crate::channel::all_kind_methods! {
            @each
            assert => Assert,
            clear => Clear,
            count => Count,
            debug => Debug,
            dir => Dir,
            dirxml => Dirxml,
            error => Error,
            exception => Exception,
            group => Group,
            group_collapsed => GroupCollapsed,
            group_end => GroupEnd,
            info => Info,
            log => Log,
            profile => Profile,
            profile_end => ProfileEnd,
            table => Table,
            time => Time,
            time_end => TimeEnd,
            time_stamp => TimeStamp,
            trace => Trace,
            warn => Warn,
        }
    };
    (@each $($method:ident => $kind:ident),+ $(,)?) => {
        $(
            #[doc = concat!(
                "Dispatch the argument list with the `",
                stringify!($method),
                "` kind."
            )]
            pub fn $method(&self, args: impl Into<$crate::value::Args>) -> &Self {
                self.dispatch(args.into(), $crate::kind::LogKind::$kind)
            }
        )+
    };
}
pub(crate) use all_kind_methods;

struct ChannelState {
    options: ChannelOptions,
    history: Vec<LogCall>,
}

/// A named, independently configurable logging destination.
pub struct Channel {
    name: String,
    sink: Arc<dyn Sink>,
    style: StyleMode,
    state: Mutex<ChannelState>,
}

impl Channel {
    /// Create a channel over a shared sink with the given resolved style
    /// mode, applying `patch` on top of the default options.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        patch: OptionsPatch,
        sink: Arc<dyn Sink>,
        style: StyleMode,
    ) -> Self {
        let mut options = ChannelOptions::default();
        options.merge(patch);
        Self {
            name: name.into(),
            sink,
            style,
            state: Mutex::new(ChannelState {
                options,
                history: Vec::new(),
            }),
        }
    }

    /// The channel's immutable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the current options.
    #[must_use]
    pub fn options(&self) -> ChannelOptions {
        self.state
            .lock()
            .map(|state| state.options.clone())
            .unwrap_or_default()
    }

    /// Shallow-merge the patch into the channel's options.
    pub fn configure(&self, patch: OptionsPatch) -> &Self {
        if let Ok(mut state) = self.state.lock() {
            state.options.merge(patch);
        }
        self
    }

    /// Enable output to the sink.
    pub fn on(&self) -> &Self {
        self.set_enabled(true)
    }

    /// Disable output to the sink. History recording is unaffected.
    pub fn off(&self) -> &Self {
        self.set_enabled(false)
    }

    fn set_enabled(&self, enabled: bool) -> &Self {
        if let Ok(mut state) = self.state.lock() {
            state.options.enabled = enabled;
        }
        self
    }

    /// Snapshot of the buffered history, in emission order.
    #[must_use]
    pub fn history(&self) -> Vec<LogCall> {
        self.state
            .lock()
            .map(|state| state.history.clone())
            .unwrap_or_default()
    }

    /// Drop all buffered history.
    pub fn clear_history(&self) -> &Self {
        if let Ok(mut state) = self.state.lock() {
            state.history.clear();
        }
        self
    }

    /// Re-emit the most recent history entry while disabled.
    ///
    /// Temporarily enables the channel, replays the entry through [`send`]
    /// (which re-records it, as a regular call would), then restores the
    /// disabled state. No-op when enabled or when history is empty.
    ///
    /// [`send`]: Channel::send
    pub fn force(&self) -> &Self {
        let replay = {
            let Ok(mut state) = self.state.lock() else {
                return self;
            };
            if state.options.enabled {
                return self;
            }
            let Some(last) = state.history.last() else {
                return self;
            };
            let call = (last.kind, last.values.clone());
            state.options.enabled = true;
            call
        };

        self.send(Args::from(replay.1), replay.0);

        self.set_enabled(false)
    }

    fn dispatch(&self, args: Args, kind: LogKind) -> &Self {
        self.send(args, kind)
    }

    all_kind_methods!();

    /// Run the dispatch pipeline for one call.
    ///
    /// Classification, history recording, style handling, and kind
    /// normalization happen here, in that order. Never fails: every argument
    /// list and sink produces some output decision.
    pub fn send(&self, args: impl Into<Args>, kind: LogKind) -> &Self {
        let Args { mut values } = args.into();

        // Error-like firsts become their trimmed stack text, separated from
        // any following values by a blank line.
        let mut first_is_text = matches!(values.first(), Some(LogValue::Text(_)));
        if matches!(values.first(), Some(LogValue::Error { .. })) {
            if let LogValue::Error { stack, .. } = values.remove(0) {
                let mut text = stack.trim().to_string();
                if !values.is_empty() {
                    text.push_str("\n\n");
                }
                values.insert(0, LogValue::Text(text));
                first_is_text = true;
            }
        }

        // Record post-classification, pre-style-injection.
        let (enabled, prefix) = {
            let Ok(mut state) = self.state.lock() else {
                return self;
            };
            if state.options.history {
                state.history.push(LogCall::new(kind, values.clone()));
            }
            (state.options.enabled, state.options.prefix.clone())
        };

        if !enabled {
            return self;
        }

        if self.style.is_plain() && first_is_text {
            if let Some(LogValue::Text(text)) = values.first_mut() {
                *text = strip_style_tokens(text);
            }
        } else if kind == LogKind::Dir && first_is_text {
            // The dir routine does not apply style directives.
            if let Some(LogValue::Text(text)) = values.first_mut() {
                *text = strip_style_tokens(text);
            }
        } else if let Some(prefix) = prefix {
            let mut combined = format!("{}{STYLE_TOKEN}", prefix.text);
            if first_is_text {
                if let LogValue::Text(text) = values.remove(0) {
                    combined.push_str(&text);
                }
            } else if let Some(first) = values.first() {
                combined.push_str("type: ");
                combined.push_str(first.type_label());
            }

            if prefix.style.is_empty() {
                values.insert(0, LogValue::Text(combined));
            } else {
                let reset = if first_is_text { "" } else { ITALIC_RESET };
                values.insert(0, LogValue::Text(reset.to_string()));
                values.insert(
                    0,
                    LogValue::Text(format!("{}{}", prefix.style, kind_style(kind))),
                );
                values.insert(0, LogValue::Text(combined));
            }
        }

        // Kinds without a dedicated sink routine fall back to the generic
        // one; this also covers error/info/warn on bare sinks.
        let kind = if self.sink.supports(kind) {
            kind
        } else {
            LogKind::Log
        };

        self.sink.emit(kind, &values);
        self
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (enabled, history_len) = self
            .state
            .lock()
            .map(|state| (state.options.enabled, state.history.len()))
            .unwrap_or((false, 0));
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("enabled", &enabled)
            .field("history_len", &history_len)
            .finish_non_exhaustive()
    }
}
