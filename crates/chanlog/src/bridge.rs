//! Bridge from the `log` facade into a channel.
//!
//! Installs as the process logger and forwards every `log` record into a
//! channel, mapping levels onto the matching kinds:
//!
//! ```ignore
//! use chanlog::bridge::ChannelLogger;
//!
//! ChannelLogger::init(log::LevelFilter::Info)?;
//! log::warn!("forwarded through the default channel");
//! ```

use std::sync::Arc;

use log::{Level, LevelFilter, Metadata, Record};

use crate::channel::Channel;
use crate::kind::LogKind;
use crate::value::Args;

/// A `log::Log` implementation forwarding records into a channel.
pub struct ChannelLogger {
    channel: Arc<Channel>,
    min_level: LevelFilter,
    show_targets: bool,
}

impl ChannelLogger {
    /// Forward into the global facade's default channel.
    #[must_use]
    pub fn new(min_level: LevelFilter) -> Self {
        Self::with_channel(crate::facade::global().channel(crate::facade::DEFAULT_CHANNEL), min_level)
    }

    /// Forward into a specific channel.
    #[must_use]
    pub fn with_channel(channel: Arc<Channel>, min_level: LevelFilter) -> Self {
        Self {
            channel,
            min_level,
            show_targets: true,
        }
    }

    /// Set whether the record target is included in the message.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    /// Install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(min_level: LevelFilter) -> Result<(), log::SetLoggerError> {
        let logger = Box::new(Self::new(min_level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(min_level);
        Ok(())
    }

    /// Install as the global logger, ignoring errors if already set.
    pub fn try_init(min_level: LevelFilter) {
        let _ = Self::init(min_level);
    }

    fn kind_for(level: Level) -> LogKind {
        match level {
            Level::Error => LogKind::Error,
            Level::Warn => LogKind::Warn,
            Level::Info => LogKind::Info,
            Level::Debug => LogKind::Debug,
            Level::Trace => LogKind::Trace,
        }
    }
}

impl log::Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let text = if self.show_targets {
            format!("{}: {}", record.target(), record.args())
        } else {
            format!("{}", record.args())
        };

        self.channel
            .send(Args::from(text), Self::kind_for(record.level()));
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::StyleMode;
    use crate::options::OptionsPatch;
    use crate::testing::RecordingSink;
    use log::Log as _;

    fn bridged(sink: &RecordingSink, min_level: LevelFilter) -> ChannelLogger {
        let channel = Arc::new(Channel::new(
            "bridge",
            OptionsPatch::new(),
            Arc::new(sink.clone()),
            StyleMode::Plain,
        ));
        ChannelLogger::with_channel(channel, min_level)
    }

    #[test]
    fn test_enabled_respects_min_level() {
        let sink = RecordingSink::new();
        let logger = bridged(&sink, LevelFilter::Info);
        let warn = log::Metadata::builder().level(Level::Warn).target("t").build();
        let debug = log::Metadata::builder().level(Level::Debug).target("t").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_record_lands_in_channel_with_mapped_kind() {
        let sink = RecordingSink::new();
        let logger = bridged(&sink, LevelFilter::Trace);
        logger.log(
            &Record::builder()
                .args(format_args!("disk almost full"))
                .level(Level::Warn)
                .target("app::storage")
                .build(),
        );

        assert_eq!(sink.kind_of(0), Some(LogKind::Warn));
        sink.assert_contains("app::storage: disk almost full");
    }

    #[test]
    fn test_targets_can_be_hidden() {
        let sink = RecordingSink::new();
        let logger = bridged(&sink, LevelFilter::Trace).with_targets(false);
        logger.log(
            &Record::builder()
                .args(format_args!("quiet"))
                .level(Level::Info)
                .target("app")
                .build(),
        );
        sink.assert_contains("quiet");
        sink.assert_not_contains("app:");
    }

    #[test]
    fn test_below_threshold_records_are_dropped() {
        let sink = RecordingSink::new();
        let logger = bridged(&sink, LevelFilter::Error);
        logger.log(
            &Record::builder()
                .args(format_args!("chatty"))
                .level(Level::Debug)
                .target("app")
                .build(),
        );
        assert_eq!(sink.call_count(), 0);
    }

    #[test]
    fn test_level_kind_mapping() {
        assert_eq!(ChannelLogger::kind_for(Level::Error), LogKind::Error);
        assert_eq!(ChannelLogger::kind_for(Level::Trace), LogKind::Trace);
    }
}
