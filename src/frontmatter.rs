//! Front-matter splitting for talk documents.
//!
//! A talk file may open with a fenced header of `key: value` lines:
//!
//! ```text
//! ---
//! date:    November 11, 2025
//! speaker: Yuyan Wang
//! ---
//! # Talk title
//! ...
//! ```
//!
//! The header is not YAML. Values are free text (times like
//! `6:00–7:00 PM`, URLs with colons) and the only structure is "split on the
//! first colon". Parsing never fails: a document that doesn't have the fenced
//! shape simply has no metadata and its whole text is the body.

use std::collections::BTreeMap;

const FENCE: &str = "---";

/// The parsed header block plus the remaining body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Lower-cased, trimmed keys mapped to trimmed values.
    pub fields: BTreeMap<String, String>,
    /// Whether a fenced header was found at all.
    pub present: bool,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Serialize the fields back into a fenced header block.
    ///
    /// Parsing the result yields the same fields.
    pub fn to_block(&self) -> String {
        let mut out = String::from(FENCE);
        out.push('\n');
        for (key, value) in &self.fields {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str(FENCE);
        out.push('\n');
        out
    }
}

/// Split raw document text into front-matter and body.
///
/// Blank lines directly after the closing fence are dropped so the body starts
/// at its first line of content.
pub fn parse(text: &str) -> (FrontMatter, &str) {
    match split_fenced(text) {
        Some((header, body)) => {
            let fields = header.lines().filter_map(parse_line).collect();
            (
                FrontMatter {
                    fields,
                    present: true,
                },
                body,
            )
        }
        None => (FrontMatter::default(), text),
    }
}

/// Parse one `key: value` header line. Lines without a colon or with an empty
/// key are skipped.
fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim().to_string()))
}

/// Locate the header between the opening and closing fences.
///
/// Returns `(header, body)` slices of `text`, or `None` if the text doesn't
/// open with a fence line or never closes it.
fn split_fenced(text: &str) -> Option<(&str, &str)> {
    let mut lines = LineSpans::new(text);

    let (_, first_end, first) = lines.next()?;
    if !is_fence(first) {
        return None;
    }

    let header_start = first_end;
    for (start, end, line) in lines.by_ref() {
        if is_fence(line) {
            let header = &text[header_start..start];
            let body = skip_blank_lines(&text[end..]);
            return Some((header, body));
        }
    }
    None
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

fn skip_blank_lines(mut text: &str) -> &str {
    while let Some(pos) = text.find('\n') {
        if text[..pos].trim().is_empty() {
            text = &text[pos + 1..];
        } else {
            break;
        }
    }
    text
}

/// Iterator over `(start, end_including_newline, line_without_newline)`.
struct LineSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LineSpans<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for LineSpans<'a> {
    type Item = (usize, usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.text[start..];
        let (line, end) = match rest.find('\n') {
            Some(i) => (&rest[..i], start + i + 1),
            None => (rest, self.text.len()),
        };
        self.pos = end;
        Some((start, end, line.strip_suffix('\r').unwrap_or(line)))
    }
}
