#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod channel;
pub mod config;
pub mod detection;
pub mod facade;
pub mod kind;
mod macros;
pub mod options;
pub mod sink;
pub mod style;
pub mod testing;
pub mod value;

pub use bridge::ChannelLogger;
pub use channel::Channel;
pub use config::LogConfig;
pub use detection::{StyleMode, should_style};
pub use facade::{Channels, DEFAULT_CHANNEL, Log, global, init, init_with_sink};
pub use kind::LogKind;
pub use options::{ChannelOptions, OptionsPatch};
pub use sink::{ConsoleSink, Sink};
pub use style::{Prefix, STYLE_TOKEN, strip_style_tokens};
pub use value::{Args, LogCall, LogValue};
