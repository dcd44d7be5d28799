//! HTML renderer for parsed completion blocks.

use crate::formatting::ast::{Block, Inline};

/// Renders blocks to inline HTML.
///
/// A line break between two plain lines becomes `<br>`. Headings and lists are
/// block elements, so the line breaks around them are dropped.
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut previous: Option<&Block> = None;

    for block in blocks {
        match block {
            Block::Heading(inlines) => {
                out.push_str("<h2>");
                render_inlines(inlines, &mut out);
                out.push_str("</h2>");
            }
            Block::List(items) => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    render_inlines(item, &mut out);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            Block::Line(inlines) => {
                if matches!(previous, Some(Block::Line(_))) {
                    out.push_str("<br>");
                }
                render_inlines(inlines, &mut out);
            }
        }
        previous = Some(block);
    }

    out
}

fn render_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => push_escaped(text, out),
            Inline::Bold(children) => {
                out.push_str("<b>");
                render_inlines(children, out);
                out.push_str("</b>");
            }
            Inline::Italic(children) => {
                out.push_str("<i>");
                render_inlines(children, out);
                out.push_str("</i>");
            }
        }
    }
}

fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ast::parse;

    #[test]
    fn test_escapes_markup_in_text() {
        assert_eq!(
            render_html(&parse("<script>alert(1)</script> & **<b>**")),
            "&lt;script&gt;alert(1)&lt;/script&gt; &amp; <b>&lt;b&gt;</b>"
        );
    }

    #[test]
    fn test_blank_lines_become_breaks() {
        assert_eq!(render_html(&parse("a\n\nb\n")), "a<br><br>b<br>");
    }

    #[test]
    fn test_break_dropped_after_list() {
        assert_eq!(
            render_html(&parse("Try:\n- one\n- two\nGood luck")),
            "Try:<ul><li>one</li><li>two</li></ul>Good luck"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_html(&parse("")), "");
    }
}
