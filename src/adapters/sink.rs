//! Message sink adapters
//!
//! - [`StderrSink`] - writes labelled diagnostics to stderr
//! - [`CollectingSink`] - buffers diagnostics in memory

use colored::Colorize;

use crate::core::ports::MessageSink;

/// Leading label written before every diagnostic
pub const FAIL_LABEL: &str = "Branch name lint fail!";

/// Writes each diagnostic to stderr as `Branch name lint fail! <message>`
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a stderr sink
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MessageSink for StderrSink {
    fn emit(&mut self, message: &str) {
        eprintln!("{} {message}", FAIL_LABEL.red().bold());
    }
}

/// Keeps diagnostics in memory, in order
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    messages: Vec<String>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Messages received so far
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the sink, returning its messages
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl MessageSink for CollectingSink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
