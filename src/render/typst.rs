// src/render/typst.rs
//! Typst source emitter: content blocks -> layout-engine document
//!
//! Emission is a single forward pass over the block sequence. All literal
//! text is escaped before it reaches the engine, so the only styling a
//! record can express is whatever the inline grammar allows.

use crate::config::PageConfig;
use crate::markup::{parse_markup, Span};
use crate::story::{ContentBlock, HeadingLevel};

/// Translates a block sequence into a complete Typst document string.
pub struct TypstEmitter {
    page: PageConfig,
}

impl TypstEmitter {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    /// Emit the full document: page setup, style rules, then one fragment
    /// per block in sequence order.
    pub fn emit(&self, blocks: &[ContentBlock]) -> String {
        let mut out = String::new();
        self.emit_preamble(&mut out);

        for block in blocks {
            match block {
                ContentBlock::Heading { level, text } => emit_heading(*level, text, &mut out),
                ContentBlock::Paragraph { markup } => {
                    emit_markup(markup, &mut out);
                    out.push_str("\n\n");
                }
                ContentBlock::BulletList { items } => {
                    for item in items {
                        out.push_str("- ");
                        emit_markup(item, &mut out);
                        out.push('\n');
                    }
                    out.push('\n');
                }
                ContentBlock::Spacer { inches } => {
                    out.push_str(&format!("#v({inches}in)\n\n"));
                }
            }
        }

        out
    }

    fn emit_preamble(&self, out: &mut String) {
        out.push_str(&format!(
            "#set page(paper: \"{}\", margin: (left: {}in, right: {}in, top: {}in, bottom: {}in))\n",
            escape_string(&self.page.paper),
            self.page.left_margin_in,
            self.page.right_margin_in,
            self.page.top_margin_in,
            self.page.bottom_margin_in,
        ));
        out.push_str("#set text(size: 10pt)\n");
        out.push_str("#set par(leading: 0.5em)\n");
        out.push_str("#show heading.where(level: 1): set align(center)\n");
        out.push_str("#show heading.where(level: 1): set text(size: 17pt)\n");
        out.push_str("#show heading.where(level: 2): set text(size: 13pt)\n");
        out.push_str("#show link: underline\n");
        out.push('\n');
    }
}

fn emit_heading(level: HeadingLevel, text: &str, out: &mut String) {
    let depth = match level {
        HeadingLevel::Title => 1,
        HeadingLevel::Section => 2,
    };
    // Function form rather than `=` markers: stays valid for empty or
    // whitespace-only heading text.
    out.push_str(&format!(
        "#heading(level: {depth})[{}]\n\n",
        escape_text(text)
    ));
}

/// Emit one markup string as styled Typst content.
fn emit_markup(markup: &str, out: &mut String) {
    for span in parse_markup(markup) {
        match span {
            Span::Text(text) => out.push_str(&escape_text(&text)),
            Span::Bold(text) => {
                out.push_str(&format!("#strong[{}]", escape_text(&text)));
            }
            Span::Italic(text) => {
                out.push_str(&format!("#emph[{}]", escape_text(&text)));
            }
            Span::Link { label, href } => {
                out.push_str(&format!(
                    "#link(\"{}\")[{}]",
                    escape_string(&href),
                    escape_text(&label)
                ));
            }
            Span::LineBreak => out.push_str("#linebreak()\n"),
        }
    }
}

/// Escape literal text for Typst markup mode. Every character with markup
/// meaning is backslash-escaped; newlines become spaces so a stray blank
/// line in a record cannot split a paragraph.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '@' | '=' | '-'
            | '+' | '/' | '~' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted Typst string literal.
pub fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
