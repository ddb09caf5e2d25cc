//! The parsed markup tree.
//!
//! pulldown-cmark produces a flat event stream; this module folds it into
//! the tag/children tree the block translator walks. Tag names mirror the
//! HTML the Markdown would render to (`h1`, `p`, `ul`, `pre`, ...), so the
//! translator's dispatch reads like the document structure it handles.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// One element of the parsed document tree.
///
/// Either a bare text node or a tagged element with ordered children and
/// optional attributes (currently only `href` on links). The root is a
/// `document` element whose children are the top-level blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Text(String),
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    /// An empty element with the given tag.
    pub fn element(tag: &str) -> MarkupNode {
        MarkupNode::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag, or `None` for a text node.
    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Text(_) => None,
            MarkupNode::Element { tag, .. } => Some(tag),
        }
    }

    /// The element's children; a text node has none.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Text(_) => &[],
            MarkupNode::Element { children, .. } => children,
        }
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            MarkupNode::Text(_) => None,
            MarkupNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Append a child to this element. No-op on text nodes.
    pub fn push(&mut self, child: MarkupNode) {
        if let MarkupNode::Element { children, .. } = self {
            children.push(child);
        }
    }

    /// Concatenated text of this node and all descendants.
    ///
    /// Line-break elements contribute a newline so preformatted content
    /// keeps its line structure.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            MarkupNode::Text(text) => out.push_str(text),
            MarkupNode::Element { tag, children, .. } => {
                if tag == "br" {
                    out.push('\n');
                }
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Parse Markdown text into a markup tree rooted at a `document` element.
///
/// Only the tables extension is enabled; footnotes, task lists, and maths
/// stay off. Soft line breaks become `br` elements, matching the original
/// pipeline's newline-to-break conversion.
pub fn parse(markdown: &str) -> MarkupNode {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut stack = vec![MarkupNode::element("document")];

    for event in parser {
        match event {
            Event::Start(tag) => {
                // mirror HTML's pre > code nesting for fenced/indented code
                if let Tag::CodeBlock(_) = tag {
                    stack.push(MarkupNode::element("pre"));
                    stack.push(MarkupNode::element("code"));
                } else {
                    stack.push(open_element(&tag));
                }
            }
            Event::End(end) => {
                close_top(&mut stack);
                if end == TagEnd::CodeBlock {
                    close_top(&mut stack);
                }
            }
            Event::Text(text) => append(&mut stack, MarkupNode::Text(text.into_string())),
            Event::Code(text) => {
                let mut code = MarkupNode::element("code");
                code.push(MarkupNode::Text(text.into_string()));
                append(&mut stack, code);
            }
            // the original enabled nl2br, so soft breaks are real breaks
            Event::SoftBreak | Event::HardBreak => append(&mut stack, MarkupNode::element("br")),
            Event::Rule => append(&mut stack, MarkupNode::element("hr")),
            // raw HTML is kept as text so its content is never silently lost
            Event::Html(html) | Event::InlineHtml(html) => {
                append(&mut stack, MarkupNode::Text(html.into_string()));
            }
            // unreachable with the enabled extensions
            _ => {}
        }
    }

    // fold any unbalanced elements back into the root
    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().expect("the document root is always present")
}

fn append(stack: &mut [MarkupNode], node: MarkupNode) {
    if let Some(top) = stack.last_mut() {
        top.push(node);
    }
}

fn close_top(stack: &mut Vec<MarkupNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(node) = stack.pop() {
        append(stack, node);
    }
}

fn open_element(tag: &Tag) -> MarkupNode {
    match tag {
        Tag::Paragraph => MarkupNode::element("p"),
        // HeadingLevel displays as "h1".."h6"
        Tag::Heading { level, .. } => MarkupNode::element(&level.to_string()),
        Tag::BlockQuote(_) => MarkupNode::element("blockquote"),
        Tag::List(Some(_)) => MarkupNode::element("ol"),
        Tag::List(None) => MarkupNode::element("ul"),
        Tag::Item => MarkupNode::element("li"),
        Tag::Table(_) => MarkupNode::element("table"),
        Tag::TableHead | Tag::TableRow => MarkupNode::element("tr"),
        Tag::TableCell => MarkupNode::element("td"),
        Tag::Emphasis => MarkupNode::element("em"),
        Tag::Strong => MarkupNode::element("strong"),
        Tag::Link { dest_url, .. } => MarkupNode::Element {
            tag: "a".to_string(),
            attrs: vec![("href".to_string(), dest_url.to_string())],
            children: Vec::new(),
        },
        Tag::Image { .. } => MarkupNode::element("img"),
        // raw HTML blocks surface their text as a paragraph
        Tag::HtmlBlock => MarkupNode::element("p"),
        // generic container; the translator recurses through it
        _ => MarkupNode::element("div"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> MarkupNode {
        MarkupNode::Text(s.to_string())
    }

    #[test]
    fn parses_heading_and_paragraph() {
        let root = parse("# Title\n\nbody");
        assert_eq!(root.tag(), Some("document"));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].tag(), Some("h1"));
        assert_eq!(root.children()[0].children(), &[text("Title")]);
        assert_eq!(root.children()[1].tag(), Some("p"));
    }

    #[test]
    fn fenced_code_nests_pre_code() {
        let root = parse("```\nlet x = 1;\n```");
        let pre = &root.children()[0];
        assert_eq!(pre.tag(), Some("pre"));
        let code = &pre.children()[0];
        assert_eq!(code.tag(), Some("code"));
        assert_eq!(code.plain_text(), "let x = 1;\n");
    }

    #[test]
    fn links_carry_their_target() {
        let root = parse("[home](https://example.com)");
        let link = &root.children()[0].children()[0];
        assert_eq!(link.tag(), Some("a"));
        assert_eq!(link.attr("href"), Some("https://example.com"));
        assert_eq!(link.plain_text(), "home");
    }

    #[test]
    fn newlines_become_breaks() {
        let root = parse("one\ntwo");
        let paragraph = &root.children()[0];
        assert_eq!(
            paragraph.children(),
            &[text("one"), MarkupNode::element("br"), text("two")]
        );
    }

    #[test]
    fn tables_map_to_rows_and_cells() {
        let root = parse("| a | b |\n| - | - |\n| c | d |");
        let table = &root.children()[0];
        assert_eq!(table.tag(), Some("table"));
        let rows: Vec<_> = table
            .children()
            .iter()
            .filter(|node| node.tag() == Some("tr"))
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].children().len(), 2);
        assert_eq!(rows[1].children()[1].plain_text(), "d");
    }

    #[test]
    fn html_blocks_keep_their_text_as_a_paragraph() {
        let root = parse("before\n\n<div>\nimportant html text\n</div>\n\nafter");
        let block = &root.children()[1];
        assert_eq!(block.tag(), Some("p"));
        assert!(block.plain_text().contains("important html text"));
    }

    #[test]
    fn entities_decode_to_plain_characters() {
        let root = parse("AT&amp;T and x &lt; y");
        assert_eq!(root.children()[0].plain_text(), "AT&T and x < y");
    }
}
