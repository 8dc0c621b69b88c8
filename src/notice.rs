//! Transient user-facing notifications.
//!
//! Remote failures and successful mutations are surfaced to the operator as
//! notices; the command layer decides how to render them.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A transient notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The message to display
    pub message: String,
    /// The severity level of the notice
    pub level: NoticeLevel,
}

/// Severity level for notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
    Success,
}

impl Notice {
    /// Create a new notice with the given message and level
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    /// Create an info notice
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Info)
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Error)
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Success)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Info => write!(
                f,
                "{}",
                self.message.if_supports_color(Stream::Stderr, |m| m.cyan())
            ),
            NoticeLevel::Error => write!(
                f,
                "{}",
                self.message.if_supports_color(Stream::Stderr, |m| m.red())
            ),
            NoticeLevel::Success => write!(
                f,
                "{}",
                self.message
                    .if_supports_color(Stream::Stderr, |m| m.green())
            ),
        }
    }
}
