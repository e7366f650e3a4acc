//! WhatsApp message builder
//!
//! Fluent API for the plain-text markup WhatsApp renders: `*bold*`
//! spans, a heavy separator rule, and `Key: value` lines. Item detail
//! lines are indented three spaces under their item header.

use std::fmt::Display;

/// Separator rule between message blocks
const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━";

/// WhatsApp message builder
pub struct MessageBuilder {
    buf: String,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    // === Text Output ===

    /// Write raw text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write `*bold*` text followed by newline
    pub fn bold_line(&mut self, s: &str) -> &mut Self {
        self.buf.push('*');
        self.buf.push_str(s);
        self.buf.push('*');
        self.buf.push('\n');
        self
    }

    // === Layout Helpers ===

    /// Write a `Key: value` line
    pub fn field(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.buf.push_str(key);
        self.buf.push_str(": ");
        self.buf.push_str(&value.to_string());
        self.buf.push('\n');
        self
    }

    /// Write a `Key: value` line only when the value is present
    pub fn field_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.field(key, v);
        }
        self
    }

    /// Write an indented `Key: value` line (item detail)
    pub fn item_field(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.buf.push_str("   ");
        self.field(key, value)
    }

    /// Separator rule
    pub fn sep(&mut self) -> &mut Self {
        self.line(SEPARATOR)
    }

    // === Build ===

    /// Finish and return the composed message
    pub fn build(self) -> String {
        self.buf
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
