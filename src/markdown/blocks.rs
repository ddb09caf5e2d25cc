//! Block translation: the markup tree becomes an ordered sequence of
//! page-content blocks.
//!
//! The walk is state-free apart from the output sequence and the current
//! list depth. Unknown tags fall through to a container arm that recurses
//! into children, so no content node type is ever silently lost; malformed
//! trees degrade through the same arm rather than failing.

use crate::markdown::inline::{self, StyledRun};
use crate::markdown::tree::MarkupNode;

/// One paginated unit of output, consumed in order by the page renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Heading at level 1-4. Source levels 5-6 collapse to 4.
    Heading { level: u8, text: StyledRun },
    Paragraph(StyledRun),
    /// A full-width divider.
    Rule,
    ListItem {
        /// Bullet or ordinal text, without trailing spacing.
        marker: String,
        text: StyledRun,
        /// Nesting depth; top-level items are 0.
        depth: usize,
    },
    /// Raw preformatted text, kept verbatim.
    CodeBlock(String),
    /// One line of a blockquote.
    Quote(StyledRun),
    /// Table cells, degraded to delimited text by the renderer.
    TableRow(Vec<String>),
}

/// Policy knobs for translation.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// First ordinal used when numbering ordered lists.
    ///
    /// The program this tool reproduces numbered from 0, which reads as an
    /// off-by-one; numbering is a policy here instead, defaulting to 1.
    pub ordinal_start: usize,
}

impl Default for TranslateOptions {
    fn default() -> TranslateOptions {
        TranslateOptions { ordinal_start: 1 }
    }
}

/// Translate a parsed markup tree into a content-block sequence.
pub fn translate(root: &MarkupNode, options: &TranslateOptions) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    translate_node(root, options, 0, &mut blocks);
    blocks
}

fn translate_node(
    node: &MarkupNode,
    options: &TranslateOptions,
    depth: usize,
    out: &mut Vec<ContentBlock>,
) {
    let tag = match node.tag() {
        Some(tag) => tag,
        // bare text was already consumed by the inline composition of
        // whichever parent referenced it
        None => return,
    };

    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            // only four heading styles exist; h5/h6 collapse to h4
            let level = tag[1..].parse::<u8>().unwrap_or(4).min(4);
            out.push(ContentBlock::Heading {
                level,
                text: inline::compose(node),
            });
        }
        "p" => {
            let text = inline::compose(node);
            if !text.is_blank() {
                out.push(ContentBlock::Paragraph(text));
            }
        }
        "hr" => out.push(ContentBlock::Rule),
        "ul" => translate_list(node, false, options, depth, out),
        "ol" => translate_list(node, true, options, depth, out),
        // a list item outside any list; keep it rather than lose its text
        "li" => {
            out.push(list_item("•", node, depth));
            translate_nested_lists(node, options, depth, out);
        }
        "pre" => out.push(ContentBlock::CodeBlock(code_text(node))),
        // inline code in block position: the tree walk never recurses into
        // a pre, so reaching here means the code sits outside one
        "code" => {
            let text = inline::compose_element(node);
            if !text.is_blank() {
                out.push(ContentBlock::Paragraph(text));
            }
        }
        "blockquote" => {
            // each quoted child becomes its own quote line
            for child in node.children() {
                if child.tag().is_none() {
                    continue;
                }
                let text = inline::compose(child);
                if !text.is_blank() {
                    out.push(ContentBlock::Quote(text));
                }
            }
        }
        "table" => translate_table(node, out),
        // containers, the document root, and anything unrecognised
        _ => {
            for child in node.children() {
                translate_node(child, options, depth, out);
            }
        }
    }
}

fn translate_list(
    node: &MarkupNode,
    ordered: bool,
    options: &TranslateOptions,
    depth: usize,
    out: &mut Vec<ContentBlock>,
) {
    let mut ordinal = options.ordinal_start;
    for child in node.children() {
        if child.tag() != Some("li") {
            continue;
        }
        let marker = if ordered {
            let marker = format!("{ordinal}.");
            ordinal += 1;
            marker
        } else {
            "•".to_string()
        };
        out.push(list_item(&marker, child, depth));
        translate_nested_lists(child, options, depth, out);
    }
}

/// Emit an item's nested lists right after it, one level deeper.
fn translate_nested_lists(
    item: &MarkupNode,
    options: &TranslateOptions,
    depth: usize,
    out: &mut Vec<ContentBlock>,
) {
    for sub in item.children() {
        match sub.tag() {
            Some("ul") => translate_list(sub, false, options, depth + 1, out),
            Some("ol") => translate_list(sub, true, options, depth + 1, out),
            _ => {}
        }
    }
}

fn list_item(marker: &str, node: &MarkupNode, depth: usize) -> ContentBlock {
    ContentBlock::ListItem {
        marker: marker.to_string(),
        // nested lists are emitted as their own blocks, not inline text
        text: inline::compose_excluding(node, &["ul", "ol"]),
        depth,
    }
}

fn code_text(node: &MarkupNode) -> String {
    node.children()
        .iter()
        .find(|child| child.tag() == Some("code"))
        .map(MarkupNode::plain_text)
        .unwrap_or_else(|| node.plain_text())
}

fn translate_table(node: &MarkupNode, out: &mut Vec<ContentBlock>) {
    for row in node.children() {
        if row.tag() != Some("tr") {
            continue;
        }
        let cells: Vec<String> = row
            .children()
            .iter()
            .filter(|cell| matches!(cell.tag(), Some("td") | Some("th")))
            .map(|cell| cell.plain_text().trim().to_string())
            .collect();
        if !cells.is_empty() {
            out.push(ContentBlock::TableRow(cells));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::tree::parse;
    use pretty_assertions::assert_eq;

    fn translate_str(markdown: &str) -> Vec<ContentBlock> {
        translate(&parse(markdown), &TranslateOptions::default())
    }

    #[test]
    fn heading_then_paragraph() {
        let blocks = translate_str("# Title\n\nSome **bold** text.");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            ContentBlock::Heading { level, text } => {
                assert_eq!(*level, 1);
                assert_eq!(text.plain_text(), "Title");
            }
            other => panic!("expected a heading, got {other:?}"),
        }
        match &blocks[1] {
            ContentBlock::Paragraph(text) => {
                assert_eq!(text.plain_text(), "Some bold text.");
            }
            other => panic!("expected a paragraph, got {other:?}"),
        }
    }

    #[test]
    fn deep_headings_collapse_to_level_four() {
        let blocks = translate_str("#### four\n\n##### five\n\n###### six");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::Heading { level, .. } => *level,
                other => panic!("expected a heading, got {other:?}"),
            })
            .collect();
        assert_eq!(levels, vec![4, 4, 4]);
    }

    #[test]
    fn empty_paragraphs_are_dropped() {
        let mut paragraph = MarkupNode::element("p");
        paragraph.push(MarkupNode::Text("   \t ".to_string()));
        let mut root = MarkupNode::element("document");
        root.push(paragraph);

        assert_eq!(translate(&root, &TranslateOptions::default()), vec![]);
    }

    #[test]
    fn thematic_break_becomes_a_rule() {
        let blocks = translate_str("above\n\n***\n\nbelow");
        assert_eq!(blocks[1], ContentBlock::Rule);
    }

    #[test]
    fn unordered_lists_use_bullets() {
        let blocks = translate_str("- one\n- two");
        let markers: Vec<&str> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::ListItem { marker, .. } => marker.as_str(),
                other => panic!("expected a list item, got {other:?}"),
            })
            .collect();
        assert_eq!(markers, vec!["•", "•"]);
    }

    #[test]
    fn ordered_lists_number_from_one_by_default() {
        let blocks = translate_str("1. a\n2. b\n3. c");
        let markers: Vec<&str> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::ListItem { marker, .. } => marker.as_str(),
                other => panic!("expected a list item, got {other:?}"),
            })
            .collect();
        assert_eq!(markers, vec!["1.", "2.", "3."]);
    }

    #[test]
    fn ordinal_start_is_a_policy() {
        let options = TranslateOptions { ordinal_start: 0 };
        let blocks = translate(&parse("1. a\n2. b"), &options);
        match &blocks[0] {
            ContentBlock::ListItem { marker, .. } => assert_eq!(marker, "0."),
            other => panic!("expected a list item, got {other:?}"),
        }
    }

    #[test]
    fn nested_lists_follow_their_item_one_level_deeper() {
        let blocks = translate_str("- a\n    - b\n    - c\n- d");
        let items: Vec<(String, usize)> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::ListItem { text, depth, .. } => (text.plain_text(), *depth),
                other => panic!("expected a list item, got {other:?}"),
            })
            .collect();
        assert_eq!(
            items,
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 1),
                ("c".to_string(), 1),
                ("d".to_string(), 0),
            ]
        );
    }

    #[test]
    fn html_block_text_surfaces_as_a_paragraph() {
        let blocks = translate_str("before\n\n<div>\nimportant html text\n</div>\n\nafter");
        let paragraphs: Vec<String> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::Paragraph(text) => text.plain_text(),
                other => panic!("expected a paragraph, got {other:?}"),
            })
            .collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "before");
        assert!(paragraphs[1].contains("important html text"));
        assert_eq!(paragraphs[2], "after");
    }

    #[test]
    fn bare_list_item_still_emits_its_nested_lists() {
        let mut nested = MarkupNode::element("ul");
        let mut nested_item = MarkupNode::element("li");
        nested_item.push(MarkupNode::Text("inner".to_string()));
        nested.push(nested_item);

        let mut item = MarkupNode::element("li");
        item.push(MarkupNode::Text("outer".to_string()));
        item.push(nested);
        let mut root = MarkupNode::element("document");
        root.push(item);

        let blocks = translate(&root, &TranslateOptions::default());
        let items: Vec<(String, usize)> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::ListItem { text, depth, .. } => (text.plain_text(), *depth),
                other => panic!("expected a list item, got {other:?}"),
            })
            .collect();
        assert_eq!(
            items,
            vec![("outer".to_string(), 0), ("inner".to_string(), 1)]
        );
    }

    #[test]
    fn fenced_code_keeps_raw_text() {
        let blocks = translate_str("```\nfn main() {}\n    indented\n```");
        assert_eq!(
            blocks,
            vec![ContentBlock::CodeBlock(
                "fn main() {}\n    indented\n".to_string()
            )]
        );
    }

    #[test]
    fn bare_code_element_renders_as_monospace_paragraph() {
        let mut code = MarkupNode::element("code");
        code.push(MarkupNode::Text("x + y".to_string()));
        let mut root = MarkupNode::element("document");
        root.push(code);

        let blocks = translate(&root, &TranslateOptions::default());
        match &blocks[0] {
            ContentBlock::Paragraph(text) => {
                assert_eq!(text.plain_text(), "x + y");
                match &text.spans()[0] {
                    crate::markdown::inline::Span::Text { style, .. } => {
                        assert!(style.monospace);
                    }
                    other => panic!("expected a text span, got {other:?}"),
                }
            }
            other => panic!("expected a paragraph, got {other:?}"),
        }
    }

    #[test]
    fn blockquote_children_become_separate_quote_lines() {
        let blocks = translate_str("> first\n>\n> second");
        let lines: Vec<String> = blocks
            .iter()
            .map(|block| match block {
                ContentBlock::Quote(text) => text.plain_text(),
                other => panic!("expected a quote, got {other:?}"),
            })
            .collect();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn tables_degrade_to_rows_of_cell_text() {
        let blocks = translate_str("| h1 | h2 |\n| -- | -- |\n| a  | b  |");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::TableRow(vec!["h1".to_string(), "h2".to_string()]),
                ContentBlock::TableRow(vec!["a".to_string(), "b".to_string()]),
            ]
        );
    }

    #[test]
    fn unknown_containers_recurse_instead_of_dropping_content() {
        let mut section = MarkupNode::element("section");
        let mut paragraph = MarkupNode::element("p");
        paragraph.push(MarkupNode::Text("inside".to_string()));
        section.push(paragraph);
        let mut root = MarkupNode::element("document");
        root.push(section);

        let blocks = translate(&root, &TranslateOptions::default());
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            ContentBlock::Paragraph(text) => assert_eq!(text.plain_text(), "inside"),
            other => panic!("expected a paragraph, got {other:?}"),
        }
    }

    #[test]
    fn translation_is_idempotent() {
        let source = "# T\n\npara **b**\n\n- one\n- two\n\n```\ncode\n```\n\n> q\n";
        let tree = parse(source);
        let options = TranslateOptions::default();
        assert_eq!(translate(&tree, &options), translate(&tree, &options));
    }
}
