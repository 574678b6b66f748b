//! Content Segmenter
//!
//! Splits a raw text blob into an ordered sequence of typed [`Segment`]s.
//! There is no grammar: every line is classified on its own by a fixed,
//! ordered table of line rules (see [`RULES`]), and runs of lines with the
//! same classification coalesce into one segment.
//!
//! | Priority | Rule | Matches |
//! |----------|------|---------|
//! | 1 | heading | `#`, `##` or `###` followed by whitespace |
//! | 2 | list item | `-` or `*` followed by whitespace |
//! | 3 | table row | any line containing `|` |
//! | 4 | text | any other non-blank line |
//!
//! Blank lines match no rule and are skipped without closing the running
//! segment, so prose separated by blank lines stays one text segment.
//!
//! # Example
//!
//! ```
//! use plaindoc_core::segment::{segment, Segment};
//!
//! let segments = segment("# Intro\nSome prose\n- a\n- b");
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[0], Segment::Heading { level: 1, title: "Intro".to_string() });
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// The content kind of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Heading,
    List,
    Table,
    Text,
}

/// A classified run of input lines with a single content kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// A one-shot heading; never accumulates further lines
    Heading { level: u8, title: String },
    /// List items with their markers stripped
    List { lines: Vec<String> },
    /// Table cells flattened across all rows
    Table { lines: Vec<String> },
    /// Raw source lines
    Text { lines: Vec<String> },
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Heading { .. } => SegmentKind::Heading,
            Segment::List { .. } => SegmentKind::List,
            Segment::Table { .. } => SegmentKind::Table,
            Segment::Text { .. } => SegmentKind::Text,
        }
    }

    /// Heading title, `None` for every other kind
    pub fn title(&self) -> Option<&str> {
        match self {
            Segment::Heading { title, .. } => Some(title),
            _ => None,
        }
    }

    /// Content lines; empty for headings, whose content is the title
    pub fn lines(&self) -> &[String] {
        match self {
            Segment::Heading { .. } => &[],
            Segment::List { lines } | Segment::Table { lines } | Segment::Text { lines } => lines,
        }
    }
}

/// A single source line after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Heading { level: u8, title: &'a str },
    ListItem(&'a str),
    TableRow(Vec<&'a str>),
    Text(&'a str),
}

impl Line<'_> {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Line::Heading { .. } => SegmentKind::Heading,
            Line::ListItem(_) => SegmentKind::List,
            Line::TableRow(_) => SegmentKind::Table,
            Line::Text(_) => SegmentKind::Text,
        }
    }
}

/// A line rule: returns the classified line when the rule applies
pub type LineRule = for<'a> fn(&'a str) -> Option<Line<'a>>;

/// Line rules in priority order. The first rule that matches wins.
pub const RULES: [LineRule; 4] = [heading_rule, list_item_rule, table_row_rule, text_rule];

fn heading_re() -> &'static Regex {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    // Exactly one whitespace character belongs to the marker
    HEADING_RE.get_or_init(|| Regex::new(r"^(#{1,3})\s").unwrap())
}

fn list_marker_re() -> &'static Regex {
    static LIST_RE: OnceLock<Regex> = OnceLock::new();
    LIST_RE.get_or_init(|| Regex::new(r"^[-*]\s").unwrap())
}

/// `#`, `##` or `###` followed by whitespace. `####` does not match.
pub fn heading_rule(line: &str) -> Option<Line<'_>> {
    let caps = heading_re().captures(line)?;
    let marker = caps.get(0)?;
    Some(Line::Heading {
        level: caps[1].len() as u8,
        title: &line[marker.end()..],
    })
}

/// `-` or `*` followed by whitespace
pub fn list_item_rule(line: &str) -> Option<Line<'_>> {
    let marker = list_marker_re().find(line)?;
    Some(Line::ListItem(&line[marker.end()..]))
}

/// Any line containing `|`. Cells are trimmed and empty cells dropped, so
/// a separator such as `|---|` still yields cells while `||` yields none.
pub fn table_row_rule(line: &str) -> Option<Line<'_>> {
    if !line.contains('|') {
        return None;
    }
    let cells = line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();
    Some(Line::TableRow(cells))
}

/// Fallback for every non-blank line; the line is kept unmodified
pub fn text_rule(line: &str) -> Option<Line<'_>> {
    if line.trim().is_empty() {
        None
    } else {
        Some(Line::Text(line))
    }
}

/// Classify a line with the first matching rule; `None` for blank lines
pub fn classify(line: &str) -> Option<Line<'_>> {
    RULES.iter().find_map(|rule| rule(line))
}

/// Kind of the running (accumulating) segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    List,
    Table,
    Text,
}

/// Segmenter state: finished segments plus one running accumulator
struct Segmenter {
    segments: Vec<Segment>,
    run: RunKind,
    lines: Vec<String>,
}

impl Segmenter {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            run: RunKind::Text,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: Line<'_>) {
        match line {
            Line::Heading { level, title } => {
                self.flush();
                self.segments.push(Segment::Heading {
                    level,
                    title: title.to_string(),
                });
            }
            Line::ListItem(item) => self.accumulate(RunKind::List, [item]),
            Line::TableRow(cells) => self.accumulate(RunKind::Table, cells),
            Line::Text(text) => self.accumulate(RunKind::Text, [text]),
        }
    }

    /// Append to the running segment, switching runs first if the kind differs
    fn accumulate<'a>(&mut self, run: RunKind, items: impl IntoIterator<Item = &'a str>) {
        if self.run != run {
            self.flush();
            self.run = run;
        }
        self.lines.extend(items.into_iter().map(str::to_string));
    }

    /// Close the running segment if it holds anything and reopen an empty
    /// text run
    fn flush(&mut self) {
        if !self.lines.is_empty() {
            let lines = std::mem::take(&mut self.lines);
            self.segments.push(match self.run {
                RunKind::List => Segment::List { lines },
                RunKind::Table => Segment::Table { lines },
                RunKind::Text => Segment::Text { lines },
            });
        }
        self.run = RunKind::Text;
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush();
        self.segments
    }
}

/// Segment raw content into headings, lists, tables and text runs.
///
/// Pure: identical input always yields an identical sequence.
pub fn segment(content: &str) -> Vec<Segment> {
    let mut segmenter = Segmenter::new();
    for line in content.split('\n') {
        if let Some(classified) = classify(line) {
            segmenter.push(classified);
        }
    }
    let segments = segmenter.finish();
    debug!(segments = segments.len(), "segmented content");
    segments
}
