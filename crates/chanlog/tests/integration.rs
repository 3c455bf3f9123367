//! Integration tests for chanlog component interoperability.
//!
//! These tests verify that components work correctly together at their
//! boundaries:
//! - Facade + Channel dispatch
//! - Channel pipeline + Sink capability reporting
//! - Style mode affecting the full pipeline
//! - History and force() across the facade surface

use std::sync::Arc;

use chanlog::testing::{CapturedConsole, RecordingSink};
use chanlog::{
    Channel, LogKind, LogValue, Log, OptionsPatch, Prefix, StyleMode,
};

fn plain_facade(sink: &RecordingSink) -> Log {
    Log::with_style(Arc::new(sink.clone()), StyleMode::Plain)
}

fn rich_facade(sink: &RecordingSink) -> Log {
    Log::with_style(Arc::new(sink.clone()), StyleMode::Rich)
}

// ============================================================================
// End-to-End Dispatch Tests
// ============================================================================

#[test]
fn test_error_call_reaches_sink_with_stack_text() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let err = std::io::Error::other("boom");
    let _ = log.channel("ui").error(LogValue::error(&err));

    assert_eq!(sink.call_count(), 1);
    let first = sink.first_text(0).unwrap();
    assert!(first.starts_with("Error: boom"), "got: {first}");

    let history = log.channel("ui").history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, LogKind::Error);
}

#[test]
fn test_error_call_normalized_on_sink_without_error_routine() {
    let sink = RecordingSink::without([LogKind::Error]);
    let log = plain_facade(&sink);

    let err = std::io::Error::other("boom");
    let _ = log.channel("ui").error(LogValue::error(&err));

    assert_eq!(sink.kind_of(0), Some(LogKind::Log));
    sink.assert_contains("Error: boom");
}

#[test]
fn test_disabled_channel_records_but_stays_silent() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let channel = log.channel("x");
    let _ = channel.off();
    let _ = channel.log("a");

    assert_eq!(channel.history().len(), 1);
    assert_eq!(sink.call_count(), 0);
}

#[test]
fn test_off_then_on_resumes_identical_output() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let _ = log.log("before");
    let before = sink.calls()[0].text();
    sink.clear();

    log.channels().off();
    log.channels().on();

    let _ = log.log("before");
    assert_eq!(sink.calls()[0].text(), before);
}

// ============================================================================
// Styling Pipeline Tests
// ============================================================================

#[test]
fn test_plain_mode_strips_directives_end_to_end() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let _ = log.log("%chello");

    assert_eq!(sink.call_count(), 1);
    assert_eq!(sink.first_text(0), Some("hello".to_string()));
    assert_eq!(sink.calls()[0].values.len(), 1);
}

#[test]
fn test_rich_prefix_banner_three_slots() {
    let sink = RecordingSink::new();
    let log = rich_facade(&sink);

    let channel = log.channel_with(
        "ui",
        OptionsPatch::new().prefix(Prefix::new("[ui]", "color: #00529b;")),
    );
    let _ = channel.error("render failed");

    let values = &sink.calls()[0].values;
    assert_eq!(values.len(), 3);
    assert_eq!(values[0].as_text(), Some("[ui]%crender failed"));
    let style = values[1].as_text().unwrap();
    assert!(style.contains("color: #00529b;"));
    assert!(style.contains("#ffbaba"), "error table entry appended");
    assert_eq!(values[2].as_text(), Some(""));
}

#[test]
fn test_prefix_not_applied_in_plain_mode() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let channel = log.channel_with(
        "ui",
        OptionsPatch::new().prefix(Prefix::new("[ui]", "color: blue;")),
    );
    let _ = channel.log("%chello");

    assert_eq!(sink.first_text(0), Some("hello".to_string()));
}

// ============================================================================
// History / Force Tests
// ============================================================================

#[test]
fn test_history_disabled_never_grows() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let channel = log.channel_with("quiet", OptionsPatch::new().history(false));
    let _ = channel.log("a").warn("b").error("c");

    assert!(channel.history().is_empty());
    assert_eq!(sink.call_count(), 3);
}

#[test]
fn test_force_on_disabled_channel_with_no_history() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let channel = log.channel_with("empty", OptionsPatch::new().history(false));
    let _ = channel.off().force();

    assert_eq!(sink.call_count(), 0);
    assert!(!channel.options().enabled, "force must not flip enabled");
}

#[test]
fn test_force_replays_recorded_kind() {
    let sink = RecordingSink::without([LogKind::Error]);
    let log = plain_facade(&sink);

    let channel = log.channel("ui");
    let _ = channel.error("bad frame");
    let _ = channel.off();
    sink.clear();

    let _ = channel.force();

    // replayed with the recorded kind, then normalized as usual
    assert_eq!(sink.kind_of(0), Some(LogKind::Log));
    sink.assert_contains("bad frame");
    assert!(!channel.options().enabled);
}

#[test]
fn test_bulk_history_across_channels() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let _ = log.log("default entry");
    let _ = log.channel("a").warn("a entry");
    let _ = log.channel("b").debug("b entry");

    let history = log.channels().history();
    let names: Vec<&str> = history.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["default", "a", "b"]);
    assert!(history.iter().all(|(_, entries)| entries.len() == 1));
}

// ============================================================================
// Options Merge Tests
// ============================================================================

#[test]
fn test_options_snapshot_does_not_mutate() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let channel = log.channel("x");
    let first = channel.options();
    let second = channel.options();
    assert_eq!(first, second);
}

#[test]
fn test_repeated_merges_converge() {
    let sink = RecordingSink::new();
    let log = plain_facade(&sink);

    let patch = OptionsPatch::new()
        .history(false)
        .prefix(Prefix::new("[x]", "color: red;"));

    let channel = log.channel_with("x", patch.clone());
    let once = channel.options();
    let channel = log.channel_with("x", patch);
    assert_eq!(channel.options(), once);
}

// ============================================================================
// Console Sink Capture Tests
// ============================================================================

#[test]
fn test_console_sink_plain_line() {
    let capture = CapturedConsole::new(false);
    let log = Log::with_style(capture.sink(), StyleMode::Plain);

    let _ = log.log("%cplain line");

    assert_eq!(capture.output(), vec!["plain line".to_string()]);
    assert!(!capture.raw_output()[0].contains('\u{1b}'));
}

#[test]
fn test_console_sink_styled_prefix_renders_ansi() {
    let capture = CapturedConsole::new(true);
    let log = Log::with_style(capture.sink(), StyleMode::Rich);

    let channel = log.channel_with(
        "ui",
        OptionsPatch::new().prefix(Prefix::new("%c[ui]", "color: red;")),
    );
    let _ = channel.warn("slow frame");

    let raw = &capture.raw_output()[0];
    assert!(raw.contains('\u{1b}'), "expected ANSI styling, got: {raw}");
    assert_eq!(capture.output(), vec!["[ui]slow frame".to_string()]);
}

#[test]
fn test_non_ascii_style_declaration_renders_without_styling() {
    let capture = CapturedConsole::new(true);
    let log = Log::with_style(capture.sink(), StyleMode::Rich);

    // style declarations are arbitrary caller strings
    let _ = log.log(["%cboom", "color: #€€;"]);

    assert_eq!(capture.output(), vec!["boom".to_string()]);
}

// ============================================================================
// Direct Channel Construction Tests
// ============================================================================

#[test]
fn test_channel_usable_without_facade() {
    let sink = RecordingSink::new();
    let channel = Channel::new(
        "standalone",
        OptionsPatch::new(),
        Arc::new(sink.clone()),
        StyleMode::Plain,
    );

    let _ = channel.table(serde_json::json!([[1, 2], [3, 4]]));

    assert_eq!(sink.kind_of(0), Some(LogKind::Table));
    assert_eq!(channel.history().len(), 1);
}
