//! Message formatter
//!
//! Turns stored markup into display segments. Each `\n`-separated line is
//! split on `**bold**` spans first; numbers and rupee amounts in the
//! remaining plain text are then marked for numeric emphasis. Bold text is
//! never re-scanned for numbers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BOLD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"₹\s?\d[\d,]*(?:\.\d+)?|\b\d[\d,]*(?:\.\d+)?\b").unwrap()
});

/// Display style of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStyle {
    Plain,
    Bold,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    fn new(text: &str, style: SegmentStyle) -> Self {
        Self {
            text: text.to_string(),
            style,
        }
    }
}

/// Formatted message: one entry per line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedMessage {
    pub lines: Vec<Vec<Segment>>,
}

impl FormattedMessage {
    /// Text with markers removed, lines joined by `\n`
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Stateless formatter for transcript message content
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageFormatter;

impl MessageFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, content: &str) -> FormattedMessage {
        FormattedMessage {
            lines: content.split('\n').map(|line| self.format_line(line)).collect(),
        }
    }

    /// Segments for a single line
    pub fn format_line(&self, line: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in BOLD_PATTERN.captures_iter(line) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_plain(&mut segments, &line[cursor..whole.start()]);
            segments.push(Segment::new(inner.as_str(), SegmentStyle::Bold));
            cursor = whole.end();
        }
        push_plain(&mut segments, &line[cursor..]);

        segments
    }
}

/// Split plain text into plain and numeric segments
fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    let mut cursor = 0;
    for m in NUMERIC_PATTERN.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment::new(&text[cursor..m.start()], SegmentStyle::Plain));
        }
        segments.push(Segment::new(m.as_str(), SegmentStyle::Numeric));
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(Segment::new(&text[cursor..], SegmentStyle::Plain));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(segments: &[Segment]) -> Vec<(&str, SegmentStyle)> {
        segments.iter().map(|s| (s.text.as_str(), s.style)).collect()
    }

    #[test]
    fn test_bold_markers_stripped() {
        let formatted = MessageFormatter::new().format("**Standard Package**: great");
        assert_eq!(
            styles(&formatted.lines[0]),
            vec![
                ("Standard Package", SegmentStyle::Bold),
                (": great", SegmentStyle::Plain),
            ]
        );
    }

    #[test]
    fn test_numeric_emphasis_outside_bold() {
        let line = MessageFormatter::new().format_line("**Total:** ₹31,50,000 for 1500 sq.ft");
        assert_eq!(
            styles(&line),
            vec![
                ("Total:", SegmentStyle::Bold),
                (" ", SegmentStyle::Plain),
                ("₹31,50,000", SegmentStyle::Numeric),
                (" for ", SegmentStyle::Plain),
                ("1500", SegmentStyle::Numeric),
                (" sq.ft", SegmentStyle::Plain),
            ]
        );
    }

    #[test]
    fn test_numbers_inside_bold_stay_bold() {
        let line = MessageFormatter::new().format_line("**3BHK: 1500 sq.ft**");
        assert_eq!(styles(&line), vec![("3BHK: 1500 sq.ft", SegmentStyle::Bold)]);
    }

    #[test]
    fn test_digits_glued_to_letters_not_numeric() {
        let line = MessageFormatter::new().format_line("a 3BHK on 30x40");
        assert!(line.iter().all(|s| s.style == SegmentStyle::Plain));
    }

    #[test]
    fn test_line_breaks_preserved() {
        let formatted = MessageFormatter::new().format("one\n\nthree");
        assert_eq!(formatted.lines.len(), 3);
        assert!(formatted.lines[1].is_empty());
        assert_eq!(formatted.plain_text(), "one\n\nthree");
    }

    #[test]
    fn test_unclosed_marker_is_plain() {
        let line = MessageFormatter::new().format_line("**open");
        assert_eq!(styles(&line), vec![("**open", SegmentStyle::Plain)]);
    }

    #[test]
    fn test_rupee_with_space() {
        let line = MessageFormatter::new().format_line("Cost ₹ 2,100/sq.ft");
        assert_eq!(line[1].text, "₹ 2,100");
        assert_eq!(line[1].style, SegmentStyle::Numeric);
    }
}
