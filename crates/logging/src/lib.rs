#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides reusable logging primitives that operate on the
//! [`Message`](core::message::Message) type shared across the srckit
//! workspace. Diagnostics stream to arbitrary writers through [`MessageSink`],
//! while per-subsystem debug output goes through [`tracing`] events emitted
//! under `srckit::` targets by the exported `trace_*` macros.
//!
//! # Design
//!
//! The crate exposes [`MessageSink`], a lightweight wrapper around an
//! [`io::Write`](std::io::Write) implementor. Callers control whether rendered
//! messages end with a newline by selecting a [`LineMode`]. Debug
//! instrumentation is separate: tool crates emit tracing events under
//! `srckit::scan`, `srckit::move`, and similar targets, and
//! [`init_tracing`] installs a subscriber whose filter is derived from the
//! `-v` count or the `RUST_LOG` environment variable.
//!
//! # Invariants
//!
//! - Operator-facing messages never pass through `tracing`; they are rendered
//!   by [`MessageSink`] so their format stays byte-stable regardless of the
//!   active verbosity.
//! - `LineMode::WithNewline` mirrors the tools' default of printing each
//!   diagnostic on its own line.
//!
//! # Errors
//!
//! All sink operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! Stream two diagnostics into an in-memory buffer and inspect the output:
//!
//! ```ignore
//! use core::message::Message;
//! use logging::{LineMode, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write(&Message::warning("leftover entries"))?;
//! sink.write(&Message::error(2, "missing root"))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.lines().all(|line| line.starts_with("srckit")));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::borrow::Borrow;
use std::io::{self, Write};

use core::message::Message;

mod tracing_macros;
mod verbosity;

pub use verbosity::{init_tracing, verbosity_directives};

/// Controls whether a [`MessageSink`] appends a trailing newline when writing messages.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered message.
    #[default]
    WithNewline,
    /// Emit the rendered message without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

/// Streaming sink that renders [`Message`] values into an [`io::Write`] target.
///
/// The sink owns the underlying writer. Each call to [`write`](Self::write)
/// renders the supplied message using the configured [`LineMode`], mirroring
/// the tools' line-oriented diagnostics by default.
#[derive(Clone, Debug)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered message.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single message to the underlying writer.
    pub fn write(&mut self, message: &Message) -> io::Result<()> {
        if self.line_mode.append_newline() {
            writeln!(self.writer, "{message}")
        } else {
            write!(self.writer, "{message}")
        }
    }

    /// Writes each message from the iterator to the underlying writer.
    ///
    /// The iterator may yield borrowed or owned [`Message`] values. Items that
    /// implement [`Borrow<Message>`] are accepted so callers batching
    /// diagnostics in collections such as [`Vec<Message>`] need not
    /// materialise intermediate references.
    pub fn write_all<I, M>(&mut self, messages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Borrow<Message>,
    {
        for message in messages {
            self.write(message.borrow())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
