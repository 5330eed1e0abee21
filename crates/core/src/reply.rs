//! Structured reply documents
//!
//! Generators build a [`Reply`] instead of concatenating markup strings.
//! Rendering to the `**bold**` markup stored in [`crate::Message::content`]
//! happens in one place, [`Reply::to_markup`].

use serde::{Deserialize, Serialize};

use crate::conversation::{CallToAction, Message};

/// Emphasis applied to a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    Plain,
    Strong,
}

/// A run of text with a single emphasis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Strong,
        }
    }
}

/// One rendered line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }
}

/// Response document produced by a generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub lines: Vec<Line>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cta: Vec<CallToAction>,
}

impl Reply {
    pub fn builder() -> ReplyBuilder {
        ReplyBuilder::default()
    }

    /// Single plain-text line reply
    pub fn text(text: impl Into<String>) -> Self {
        Self::builder().line(text).build()
    }

    /// Render as markup: strong spans wrapped in `**`, lines joined by `\n`
    pub fn to_markup(&self) -> String {
        self.render(|span, out| match span.emphasis {
            Emphasis::Plain => out.push_str(&span.text),
            Emphasis::Strong => {
                out.push_str("**");
                out.push_str(&span.text);
                out.push_str("**");
            },
        })
    }

    /// Render without emphasis markers
    pub fn plain_text(&self) -> String {
        self.render(|span, out| out.push_str(&span.text))
    }

    fn render(&self, mut write_span: impl FnMut(&Span, &mut String)) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in &line.spans {
                write_span(span, &mut out);
            }
        }
        out
    }

    /// Wrap into an assistant transcript message
    pub fn into_message(self) -> Message {
        let content = self.to_markup();
        Message::assistant(content).with_cta(self.cta)
    }
}

/// Fluent builder for [`Reply`]
#[derive(Debug, Default)]
pub struct ReplyBuilder {
    lines: Vec<Line>,
    cta: Vec<CallToAction>,
}

impl ReplyBuilder {
    /// Bold heading line
    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::new(vec![Span::strong(text)]));
        self
    }

    /// Plain line
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::new(vec![Span::plain(text)]));
        self
    }

    /// `**Label:** value`
    pub fn field(mut self, label: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.lines.push(Line::new(vec![
            Span::strong(format!("{}:", label.as_ref())),
            Span::plain(format!(" {}", value.into())),
        ]));
        self
    }

    /// `• text`
    pub fn bullet(mut self, text: impl AsRef<str>) -> Self {
        self.lines
            .push(Line::new(vec![Span::plain(format!("• {}", text.as_ref()))]));
        self
    }

    /// `• Label: value`
    pub fn bullet_field(self, label: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.bullet(format!("{}: {}", label.as_ref(), value.as_ref()))
    }

    /// Bullet for each item
    pub fn bullets<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items.into_iter().fold(self, |b, item| b.bullet(item))
    }

    /// Empty separator line
    pub fn blank(mut self) -> Self {
        self.lines.push(Line::default());
        self
    }

    /// `💡 text`
    pub fn tip(self, text: impl AsRef<str>) -> Self {
        self.line(format!("💡 {}", text.as_ref()))
    }

    /// Arbitrary mixed-emphasis line
    pub fn spans(mut self, spans: Vec<Span>) -> Self {
        self.lines.push(Line::new(spans));
        self
    }

    pub fn cta(mut self, cta: CallToAction) -> Self {
        self.cta.push(cta);
        self
    }

    pub fn build(self) -> Reply {
        Reply {
            lines: self.lines,
            cta: self.cta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_rendering() {
        let reply = Reply::builder()
            .heading("Cost Estimate")
            .blank()
            .field("Standard", "₹31,50,000")
            .bullet("Car Parking")
            .tip("Prices exclude land")
            .build();

        assert_eq!(
            reply.to_markup(),
            "**Cost Estimate**\n\n**Standard:** ₹31,50,000\n• Car Parking\n💡 Prices exclude land"
        );
        assert_eq!(
            reply.plain_text(),
            "Cost Estimate\n\nStandard: ₹31,50,000\n• Car Parking\n💡 Prices exclude land"
        );
    }

    #[test]
    fn test_into_message_keeps_cta() {
        let reply = Reply::builder()
            .line("Ask us on WhatsApp")
            .cta(CallToAction::new("WhatsApp Owner", "https://wa.me/1"))
            .build();
        let message = reply.into_message();

        assert!(message.is_assistant());
        assert_eq!(message.content, "Ask us on WhatsApp");
        assert_eq!(message.cta.len(), 1);
    }

    #[test]
    fn test_blank_line_detection() {
        let reply = Reply::builder().line("a").blank().build();
        assert!(!reply.lines[0].is_blank());
        assert!(reply.lines[1].is_blank());
    }
}
