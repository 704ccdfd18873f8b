//! Snippet sanitization.
//!
//! The search endpoint highlights matches by wrapping them in `<mark>` tags and
//! otherwise sends page text as-is. Snippets are split into plain and
//! highlighted segments so front ends never inject server markup directly:
//! `<mark>`/`</mark>` become segment boundaries, every other byte is text.

use std::sync::OnceLock;

use regex::Regex;

/// A run of snippet text, highlighted or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSegment {
    pub text: String,
    pub highlighted: bool,
}

fn mark_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<(/?)mark\s*>").unwrap())
}

/// Split a snippet into segments.
///
/// A stray `</mark>` is dropped; an unclosed `<mark>` highlights to the end.
/// Nested `<mark>` tags do not nest the highlight. Character references the
/// browser would decode (`&amp;`, `&lt;`, ...) are decoded.
pub fn parse_snippet(raw: &str) -> Vec<SnippetSegment> {
    let mut segments: Vec<SnippetSegment> = Vec::new();
    let mut highlighted = false;
    let mut last = 0;

    for caps in mark_tag().captures_iter(raw) {
        let Some(tag) = caps.get(0) else { continue };
        push_segment(&mut segments, &raw[last..tag.start()], highlighted);
        last = tag.end();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        highlighted = !closing;
    }
    push_segment(&mut segments, &raw[last..], highlighted);
    segments
}

fn push_segment(segments: &mut Vec<SnippetSegment>, text: &str, highlighted: bool) {
    if text.is_empty() {
        return;
    }
    let text = decode_entities(text);
    match segments.last_mut() {
        Some(prev) if prev.highlighted == highlighted => prev.text.push_str(&text),
        _ => segments.push(SnippetSegment { text, highlighted }),
    }
}

/// Plain-text rendering with highlights wrapped in `open`/`close`.
pub fn render_plain(segments: &[SnippetSegment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for seg in segments {
        if seg.highlighted {
            out.push_str(open);
            out.push_str(&seg.text);
            out.push_str(close);
        } else {
            out.push_str(&seg.text);
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest.find(';').and_then(|semi| {
            let ch = decode_entity(&rest[1..semi])?;
            Some((ch, semi + 1))
        });
        match decoded {
            Some((ch, len)) => {
                out.push(ch);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
