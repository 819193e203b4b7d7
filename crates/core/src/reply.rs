//! Bot Reply Builder
//!
//! Ordered display lines for one assistant message. The core never embeds
//! a line-break marker; each transport joins lines with its own separator
//! when serializing.

/// Multi-line assistant message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotReply {
    lines: Vec<String>,
}

impl BotReply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line reply.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// Append one display line, preserving insertion order.
    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join lines with the transport's separator. Never emits a trailing
    /// separator.
    pub fn join(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}
