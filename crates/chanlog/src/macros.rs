//! Call-site macros: heterogeneous argument lists and the global entry point.

/// Build an [`Args`] list from mixed values.
///
/// ```ignore
/// let args = chanlog::values!["%cready", serde_json::json!({"t": 3}), 42i64];
/// ```
///
/// [`Args`]: crate::Args
#[macro_export]
macro_rules! values {
    () => {
        $crate::Args::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::LogValue::from($value)),+])
    };
}

/// Log through the global facade.
///
/// The bare form dispatches the generic `log` kind on the default channel; a
/// leading `kind:` selects another kind; `channel "name",` targets a named
/// channel.
///
/// ```ignore
/// chanlog::emit!("starting up");
/// chanlog::emit!(warn: "disk almost full", 93u64);
/// chanlog::emit!(channel "ui", error: "render failed");
/// ```
#[macro_export]
macro_rules! emit {
    (channel $name:expr, $kind:ident: $($value:expr),+ $(,)?) => {{
        let _ = $crate::global().channel($name).$kind($crate::values![$($value),+]);
    }};
    (channel $name:expr, $($value:expr),+ $(,)?) => {{
        let _ = $crate::global().channel($name).log($crate::values![$($value),+]);
    }};
    ($kind:ident: $($value:expr),+ $(,)?) => {{
        let _ = $crate::global().$kind($crate::values![$($value),+]);
    }};
    ($($value:expr),+ $(,)?) => {{
        let _ = $crate::global().log($crate::values![$($value),+]);
    }};
}
