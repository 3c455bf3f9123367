//! The fixed set of log operations a sink can expose.
//!
//! Kinds mirror the method surface of a console-like sink. A sink is not
//! required to implement all of them; dispatch falls back to [`LogKind::Log`]
//! for anything the sink reports as unsupported.

use serde::{Deserialize, Serialize};

/// One of the 21 console-style log operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogKind {
    Assert,
    Clear,
    Count,
    Debug,
    Dir,
    Dirxml,
    Error,
    Exception,
    Group,
    GroupCollapsed,
    GroupEnd,
    Info,
    Log,
    Profile,
    ProfileEnd,
    Table,
    Time,
    TimeEnd,
    TimeStamp,
    Trace,
    Warn,
}

impl LogKind {
    /// Every kind, in sink-method order.
    pub const ALL: [LogKind; 21] = [
        LogKind::Assert,
        LogKind::Clear,
        LogKind::Count,
        LogKind::Debug,
        LogKind::Dir,
        LogKind::Dirxml,
        LogKind::Error,
        LogKind::Exception,
        LogKind::Group,
        LogKind::GroupCollapsed,
        LogKind::GroupEnd,
        LogKind::Info,
        LogKind::Log,
        LogKind::Profile,
        LogKind::ProfileEnd,
        LogKind::Table,
        LogKind::Time,
        LogKind::TimeEnd,
        LogKind::TimeStamp,
        LogKind::Trace,
        LogKind::Warn,
    ];

    /// The sink method name for this kind (camelCase, console convention).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Assert => "assert",
            LogKind::Clear => "clear",
            LogKind::Count => "count",
            LogKind::Debug => "debug",
            LogKind::Dir => "dir",
            LogKind::Dirxml => "dirxml",
            LogKind::Error => "error",
            LogKind::Exception => "exception",
            LogKind::Group => "group",
            LogKind::GroupCollapsed => "groupCollapsed",
            LogKind::GroupEnd => "groupEnd",
            LogKind::Info => "info",
            LogKind::Log => "log",
            LogKind::Profile => "profile",
            LogKind::ProfileEnd => "profileEnd",
            LogKind::Table => "table",
            LogKind::Time => "time",
            LogKind::TimeEnd => "timeEnd",
            LogKind::TimeStamp => "timeStamp",
            LogKind::Trace => "trace",
            LogKind::Warn => "warn",
        }
    }

    /// Whether this is one of the severity kinds that sinks commonly
    /// route through a dedicated channel (error/info/warn).
    #[must_use]
    pub fn is_severity(self) -> bool {
        matches!(self, LogKind::Error | LogKind::Info | LogKind::Warn)
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
