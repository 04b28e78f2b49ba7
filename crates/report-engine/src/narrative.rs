//! Heuristic segmentation of defect narratives into title and body.
//!
//! Authored defect text arrives in wildly inconsistent shapes: blank-line
//! paragraphs, single-newline lists, "Label: detail" one-liners, or a bare
//! sentence. Segmentation runs a fixed chain of rules and stops at the
//! first one that applies, so the precedence stays auditable per rule.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLANK_LINE: Regex = Regex::new(r"\n\s*\n").expect("blank-line pattern");
    /// "Label: remainder" with a 3-120 char colon-free label.
    static ref COLON_TITLE: Regex =
        Regex::new(r"(?s)^([^:\n]{3,120}):\s*(.+)$").expect("colon-title pattern");
    /// "Label - remainder" / "Label – remainder" with a 3-120 char label.
    static ref DASH_TITLE: Regex =
        Regex::new(r"(?s)^(.{3,120}?)\s+[\-–]\s+(.+)$").expect("dash-title pattern");
}

/// Segmented defect narrative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    pub title: String,
    /// All body paragraphs joined with a blank line.
    pub body: String,
    pub paragraphs: Vec<String>,
}

impl Narrative {
    fn new(title: &str, paragraphs: Vec<String>) -> Self {
        Narrative {
            title: title.trim().to_string(),
            body: paragraphs.join("\n\n"),
            paragraphs,
        }
    }
}

type Rule = fn(&str) -> Option<Narrative>;

/// The precedence chain. Rules are tried in order; exactly one fires.
const RULES: &[(&str, Rule)] = &[
    ("blank-line paragraphs", split_on_blank_lines),
    ("single newlines", split_on_newlines),
    ("colon label", split_on_colon),
    ("dash label", split_on_dash),
    ("first period", split_on_first_period),
];

/// Segment a raw narrative. Total: any input yields a `Narrative`, with the
/// whole trimmed text as title when no structural rule applies.
pub fn segment(raw: &str) -> Narrative {
    let text = normalize(raw);
    if text.is_empty() {
        return Narrative::default();
    }
    for (_name, rule) in RULES {
        if let Some(narrative) = rule(&text) {
            return narrative;
        }
    }
    Narrative::new(&text, Vec::new())
}

fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

fn split_on_blank_lines(text: &str) -> Option<Narrative> {
    let blocks: Vec<&str> = BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();
    if blocks.len() < 2 {
        return None;
    }
    let paragraphs = blocks[1..].iter().map(|b| b.to_string()).collect();
    Some(Narrative::new(blocks[0], paragraphs))
}

fn split_on_newlines(text: &str) -> Option<Narrative> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return None;
    }
    // Continuation lines collapse into one space-joined paragraph.
    Some(Narrative::new(lines[0], vec![lines[1..].join(" ")]))
}

fn split_on_colon(text: &str) -> Option<Narrative> {
    let captures = COLON_TITLE.captures(text)?;
    let title = captures.get(1)?.as_str();
    let remainder = captures.get(2)?.as_str();
    Some(Narrative::new(title, split_paragraphs(remainder)))
}

fn split_on_dash(text: &str) -> Option<Narrative> {
    let captures = DASH_TITLE.captures(text)?;
    let title = captures.get(1)?.as_str();
    let remainder = captures.get(2)?.as_str();
    Some(Narrative::new(title, split_paragraphs(remainder)))
}

fn split_on_first_period(text: &str) -> Option<Narrative> {
    let idx = text.find('.')?;
    // A leading or trailing period is punctuation, not a title boundary.
    if idx == 0 || idx == text.len() - 1 {
        return None;
    }
    let title = &text[..idx];
    let rest = text[idx + 1..].trim();
    if rest.is_empty() {
        return None;
    }
    Some(Narrative::new(title, vec![rest.to_string()]))
}

fn split_paragraphs(text: &str) -> Vec<String> {
    BLANK_LINE
        .split(text.trim())
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
