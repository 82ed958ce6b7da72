//! # Overview
//!
//! Structured operator-facing diagnostics. Every line srckit prints about its
//! own behaviour goes through [`Message`], which renders as
//! `srckit <severity>: <text>` with an ` (code N)` suffix on errors that carry
//! an exit code. Keeping the prefix in exactly one place means scripts can
//! filter tool chatter from tool output with a single prefix match.
//!
//! # Examples
//!
//! ```ignore
//! use core::message::Message;
//!
//! let message = Message::error(2, "source root does not exist");
//! assert_eq!(
//!     message.to_string(),
//!     "srckit error: source root does not exist (code 2)",
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

/// Severity of a user-visible message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl Severity {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Structured representation of a srckit user-visible message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    severity: Severity,
    code: Option<i32>,
    text: Cow<'static, str>,
}

impl Message {
    /// Creates an informational message.
    #[must_use]
    pub fn info<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self {
            severity: Severity::Info,
            code: None,
            text: text.into(),
        }
    }

    /// Creates a warning message.
    #[must_use]
    pub fn warning<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            text: text.into(),
        }
    }

    /// Creates an error message with the provided exit code.
    #[must_use]
    pub fn error<T: Into<Cow<'static, str>>>(code: i32, text: T) -> Self {
        Self {
            severity: Severity::Error,
            code: Some(code),
            text: text.into(),
        }
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the exit code associated with the message if present.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Returns the message payload text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "srckit {}: {}", self.severity.as_str(), self.text)?;

        if let (Severity::Error, Some(code)) = (self.severity, self.code) {
            write!(f, " (code {code})")?;
        }

        Ok(())
    }
}

/// Builds an informational [`Message`] from format arguments.
#[macro_export]
macro_rules! srckit_info {
    ($($arg:tt)*) => {
        $crate::message::Message::info(::std::format!($($arg)*))
    };
}

/// Builds a warning [`Message`] from format arguments.
#[macro_export]
macro_rules! srckit_warning {
    ($($arg:tt)*) => {
        $crate::message::Message::warning(::std::format!($($arg)*))
    };
}

/// Builds an error [`Message`] with an exit code from format arguments.
#[macro_export]
macro_rules! srckit_error {
    ($code:expr, $($arg:tt)*) => {
        $crate::message::Message::error($code, ::std::format!($($arg)*))
    };
}
