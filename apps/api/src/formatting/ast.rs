//! Tokenizer for the constrained markdown subset the model is asked to emit.
//!
//! Parsing is line oriented: every line is exactly one of heading, list item or
//! plain line, and consecutive list items collapse into one `Block::List`.
//! Inline emphasis is resolved per line, so markers never pair across lines.

/// Inline content of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `## title`
    Heading(Vec<Inline>),
    /// Consecutive `- item` lines.
    List(Vec<Vec<Inline>>),
    /// Any other line, including blank ones.
    Line(Vec<Inline>),
}

pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(title) = line.strip_prefix("## ") {
            blocks.push(Block::Heading(parse_inline(title.trim_end())));
        } else if let Some(item) = line.strip_prefix("- ") {
            let item = parse_inline(item.trim_end());
            match blocks.last_mut() {
                Some(Block::List(items)) => items.push(item),
                _ => blocks.push(Block::List(vec![item])),
            }
        } else {
            blocks.push(Block::Line(parse_inline(line)));
        }
    }

    blocks
}

/// Parses `**bold**` and `*italic*` spans. Bold may nest italic and vice versa;
/// an opener without a closing partner on the same line stays literal.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(close) = after.find("**").filter(|&c| c > 0) {
                flush_text(&mut text, &mut nodes);
                nodes.push(Inline::Bold(parse_inline(&after[..close])));
                rest = &after[close + 2..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix('*') {
            if let Some(close) = find_single_star(after).filter(|&c| c > 0) {
                flush_text(&mut text, &mut nodes);
                nodes.push(Inline::Italic(parse_inline(&after[..close])));
                rest = &after[close + 1..];
                continue;
            }
        }

        text.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush_text(&mut text, &mut nodes);
    nodes
}

fn flush_text(text: &mut String, nodes: &mut Vec<Inline>) {
    if !text.is_empty() {
        nodes.push(Inline::Text(std::mem::take(text)));
    }
}

/// Byte offset of the next `*` that is not half of a `**` pair.
fn find_single_star(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'*' {
            if bytes.get(i + 1) == Some(&b'*') {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    None
}
