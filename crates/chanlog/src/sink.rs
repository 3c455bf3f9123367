//! The output sink trait and the stderr console sink.

use std::io::Write;
use std::sync::Mutex;

use crate::detection::StyleMode;
use crate::kind::LogKind;
use crate::style::{STYLE_TOKEN, strip_style_tokens, terminal_style};
use crate::value::LogValue;

/// A console-like output target.
///
/// A sink exposes one routine per [`LogKind`]; `supports` reports which kinds
/// have a dedicated routine. Dispatch normalizes unsupported kinds to
/// [`LogKind::Log`] before calling `emit`, so implementations may treat the
/// kind as advisory.
pub trait Sink: Send + Sync {
    /// Write one call to the sink.
    fn emit(&self, kind: LogKind, values: &[LogValue]);

    /// Whether the sink has a dedicated routine for the kind.
    fn supports(&self, _kind: LogKind) -> bool {
        true
    }
}

enum SinkTarget {
    Stderr(console::Term),
    Writer(Box<dyn Write + Send>),
}

/// Sink writing to stderr via the terminal.
///
/// In styled mode, `%c` segments in a leading text value are rendered with
/// the trailing style-declaration values translated to ANSI styling. In
/// plain mode, tokens are stripped and values printed verbatim.
pub struct ConsoleSink {
    target: Mutex<SinkTarget>,
    styled: bool,
}

impl ConsoleSink {
    /// Create with automatic styling detection.
    #[must_use]
    pub fn new() -> Self {
        Self::with_styled(StyleMode::detect().is_rich())
    }

    /// Create with explicit styling.
    #[must_use]
    pub fn with_styled(styled: bool) -> Self {
        Self {
            target: Mutex::new(SinkTarget::Stderr(console::Term::stderr())),
            styled,
        }
    }

    /// Create over a custom writer (for capturing output in tests).
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W, styled: bool) -> Self {
        Self {
            target: Mutex::new(SinkTarget::Writer(Box::new(writer))),
            styled,
        }
    }

    /// Whether this sink renders style directives.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.styled
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, kind: LogKind, values: &[LogValue]) {
        let Ok(mut target) = self.target.lock() else {
            return;
        };

        if kind == LogKind::Clear && values.is_empty() {
            if let SinkTarget::Stderr(term) = &*target {
                let _ = term.clear_screen();
            }
            return;
        }

        let line = if self.styled {
            render_styled(values)
        } else {
            render_plain(values)
        };

        match &mut *target {
            SinkTarget::Stderr(term) => {
                let _ = term.write_line(&line);
            }
            SinkTarget::Writer(writer) => {
                let _ = writeln!(writer, "{line}");
            }
        }
    }

    fn supports(&self, kind: LogKind) -> bool {
        // A raw terminal has no dedicated error/info/warn routines; those
        // kinds get normalized to the generic one upstream.
        !kind.is_severity()
    }
}

/// Render values with `%c` directives applied as ANSI styling.
fn render_styled(values: &[LogValue]) -> String {
    let Some(LogValue::Text(first)) = values.first() else {
        return render_plain(values);
    };

    let token_count = first.matches(STYLE_TOKEN).count();
    if token_count == 0 {
        return render_plain(values);
    }

    // One declaration value per token, in order.
    let declarations: Vec<String> = values
        .iter()
        .skip(1)
        .take(token_count)
        .map(LogValue::render)
        .collect();

    let mut out = String::new();
    for (index, segment) in first.split(STYLE_TOKEN).enumerate() {
        if index == 0 {
            out.push_str(segment);
            continue;
        }
        let declaration = declarations.get(index - 1).map_or("", String::as_str);
        if declaration.is_empty() || segment.is_empty() {
            out.push_str(segment);
        } else {
            let styled = terminal_style(declaration)
                .force_styling(true)
                .apply_to(segment);
            out.push_str(&styled.to_string());
        }
    }

    for value in values.iter().skip(1 + token_count) {
        out.push(' ');
        out.push_str(&value.render());
    }

    out
}

/// Render values as plain text, tokens stripped.
fn render_plain(values: &[LogValue]) -> String {
    let mut parts = Vec::with_capacity(values.len());
    for value in values {
        match value {
            LogValue::Text(text) => parts.push(strip_style_tokens(text)),
            other => parts.push(other.render()),
        }
    }
    parts.join(" ")
}
