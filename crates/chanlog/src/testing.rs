//! Test utilities: a recording sink and a capture wrapper for the console
//! sink.
//!
//! `RecordingSink` stands in for the console in unit and integration tests;
//! it records every `(kind, values)` call for assertion and can simulate a
//! sink that lacks dedicated routines for some kinds.

use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::kind::LogKind;
use crate::sink::{ConsoleSink, Sink};
use crate::value::LogValue;

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone)]
pub struct SinkCall {
    /// The (normalized) kind the sink was invoked with.
    pub kind: LogKind,
    /// The final argument list.
    pub values: Vec<LogValue>,
}

impl SinkCall {
    /// Render the values as a single space-joined line.
    #[must_use]
    pub fn text(&self) -> String {
        self.values
            .iter()
            .map(LogValue::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A sink that records calls instead of writing anywhere.
///
/// Cloning shares the underlying buffer, so a test can hold a handle while
/// the facade owns the `Arc<dyn Sink>`.
#[derive(Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
    missing: Arc<HashSet<LogKind>>,
}

impl RecordingSink {
    /// A sink supporting every kind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink lacking dedicated routines for the given kinds.
    #[must_use]
    pub fn without(kinds: impl IntoIterator<Item = LogKind>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            missing: Arc::new(kinds.into_iter().collect()),
        }
    }

    /// All recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Kind of the call at `index`.
    #[must_use]
    pub fn kind_of(&self, index: usize) -> Option<LogKind> {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.get(index).map(|call| call.kind))
    }

    /// First value of the call at `index`, rendered as text.
    #[must_use]
    pub fn first_text(&self, index: usize) -> Option<String> {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.get(index).and_then(|call| call.values.first().map(LogValue::render)))
    }

    /// Every call rendered as one line.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.calls().iter().map(SinkCall::text).collect()
    }

    /// Check if any recorded call contains the needle (case-insensitive).
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.texts()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Check if any recorded call matches the regex pattern.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => self.texts().iter().any(|text| re.is_match(text)),
            Err(_) => false,
        }
    }

    /// Assert that some recorded call contains the needle.
    ///
    /// # Panics
    ///
    /// Panics if no call contains the needle.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "No sink call contained '{}'. Recorded calls:\n{}",
            needle,
            self.texts().join("\n")
        );
    }

    /// Assert that no recorded call contains the needle.
    ///
    /// # Panics
    ///
    /// Panics if some call contains the needle.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "A sink call unexpectedly contained '{}'. Recorded calls:\n{}",
            needle,
            self.texts().join("\n")
        );
    }

    /// Drop all recorded calls.
    pub fn clear(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl Sink for RecordingSink {
    fn emit(&self, kind: LogKind, values: &[LogValue]) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(SinkCall {
                kind,
                values: values.to_vec(),
            });
        }
    }

    fn supports(&self, kind: LogKind) -> bool {
        !self.missing.contains(&kind)
    }
}

impl std::fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSink")
            .field("call_count", &self.call_count())
            .finish_non_exhaustive()
    }
}

/// A [`ConsoleSink`] writing into a shared buffer, for asserting on the
/// rendered output itself.
pub struct CapturedConsole {
    sink: Arc<ConsoleSink>,
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedConsole {
    /// Create a capture over a styled or plain console sink.
    #[must_use]
    pub fn new(styled: bool) -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = BufferWriter(buffer.clone());
        Self {
            sink: Arc::new(ConsoleSink::with_writer(writer, styled)),
            buffer,
        }
    }

    /// The sink handle to hand to a facade.
    #[must_use]
    pub fn sink(&self) -> Arc<ConsoleSink> {
        self.sink.clone()
    }

    /// Captured lines with ANSI codes stripped.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        let bytes = self
            .buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default();
        let stripped = strip_ansi_escapes::strip(&bytes);
        String::from_utf8_lossy(&stripped)
            .lines()
            .map(String::from)
            .collect()
    }

    /// Captured lines with ANSI codes preserved.
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        let bytes = self
            .buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect()
    }
}

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
