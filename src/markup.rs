// src/markup.rs
//! Minimal inline markup grammar for paragraph and bullet text
//!
//! Markup strings carry a small HTML-like vocabulary: `<b>…</b>`,
//! `<i>…</i>`, `<a href="…">…</a>` and `<br/>`. Nothing else is
//! recognized — unknown tags, unclosed tags and stray `<` are kept as
//! literal text, so free-form resume content cannot smuggle layout-engine
//! syntax through a paragraph.

/// One parsed run of a markup string.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Link { label: String, href: String },
    LineBreak,
}

/// Parse a markup string into spans. Never fails; anything that is not a
/// well-formed tag of the grammar comes back as [`Span::Text`].
pub fn parse_markup(input: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        let (before, at_tag) = rest.split_at(pos);
        text.push_str(before);
        match take_tag(at_tag) {
            Some((span, remainder)) => {
                flush_text(&mut text, &mut spans);
                spans.push(span);
                rest = remainder;
            }
            None => {
                // Not a tag we understand; keep the '<' literal.
                text.push('<');
                rest = &at_tag[1..];
            }
        }
    }

    text.push_str(rest);
    flush_text(&mut text, &mut spans);
    spans
}

fn flush_text(text: &mut String, spans: &mut Vec<Span>) {
    if !text.is_empty() {
        spans.push(Span::Text(std::mem::take(text)));
    }
}

/// Try to consume one grammar tag at the start of `input` (which begins
/// with '<'). Returns the parsed span and the remaining input.
fn take_tag(input: &str) -> Option<(Span, &str)> {
    if let Some(rest) = input
        .strip_prefix("<br/>")
        .or_else(|| input.strip_prefix("<br>"))
    {
        return Some((Span::LineBreak, rest));
    }

    if let Some(rest) = input.strip_prefix("<b>") {
        let end = rest.find("</b>")?;
        return Some((Span::Bold(rest[..end].to_string()), &rest[end + 4..]));
    }

    if let Some(rest) = input.strip_prefix("<i>") {
        let end = rest.find("</i>")?;
        return Some((Span::Italic(rest[..end].to_string()), &rest[end + 4..]));
    }

    if let Some(rest) = input.strip_prefix("<a href=") {
        // Both quote styles appear in stored records.
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let rest = &rest[1..];
        let close = rest.find(quote)?;
        let href = rest[..close].to_string();
        let rest = rest[close + 1..].strip_prefix('>')?;
        let end = rest.find("</a>")?;
        return Some((
            Span::Link {
                label: rest[..end].to_string(),
                href,
            },
            &rest[end + 4..],
        ));
    }

    None
}
