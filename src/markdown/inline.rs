//! Inline composition: a run of mixed text and inline markup becomes one
//! styled text unit.
//!
//! Styles are composed while walking down the tree, so every produced span
//! carries the full set of its ancestors' styles and spans can never
//! interleave. The renderer consumes these typed spans directly; there is
//! no markup dialect for source text to corrupt, so characters like `&`,
//! `<`, and `>` flow through verbatim.

use crate::markdown::tree::MarkupNode;

/// Inline formatting applied to one span of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    /// Hyperlink target, when the span sits inside a link.
    pub link: Option<String>,
}

/// One piece of a styled run: styled text or a forced line break.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text { text: String, style: SpanStyle },
    Break,
}

/// A string of text annotated with inline style spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledRun {
    spans: Vec<Span>,
}

impl StyledRun {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Append text in the given style, merging with the previous span when
    /// the styles match.
    pub fn push_text(&mut self, text: &str, style: &SpanStyle) {
        if text.is_empty() {
            return;
        }
        if let Some(Span::Text {
            text: last,
            style: last_style,
        }) = self.spans.last_mut()
        {
            if last_style == style {
                last.push_str(text);
                return;
            }
        }
        self.spans.push(Span::Text {
            text: text.to_string(),
            style: style.clone(),
        });
    }

    /// Append a forced line break.
    pub fn push_break(&mut self) {
        self.spans.push(Span::Break);
    }

    /// The text content with styling stripped; breaks become newlines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Text { text, .. } => out.push_str(text),
                Span::Break => out.push('\n'),
            }
        }
        out
    }

    /// True when the run contains no text beyond whitespace.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// Compose the inline content of `node`'s children into one styled run.
pub fn compose(node: &MarkupNode) -> StyledRun {
    compose_excluding(node, &[])
}

/// Compose inline content, skipping direct children with the given tags.
///
/// List items use this to keep nested list text out of the item's own
/// line; the nested lists are emitted as separate blocks right after it.
pub fn compose_excluding(node: &MarkupNode, skip: &[&str]) -> StyledRun {
    let mut run = StyledRun::default();
    for child in node.children() {
        if child.tag().is_some_and(|tag| skip.contains(&tag)) {
            continue;
        }
        compose_into(child, &SpanStyle::default(), &mut run);
    }
    run
}

/// Compose a single inline element, applying its own tag's style.
///
/// Used for inline markup promoted to block position (a bare `code`
/// element, say), where the element's own style must still apply.
pub fn compose_element(node: &MarkupNode) -> StyledRun {
    let mut run = StyledRun::default();
    compose_into(node, &SpanStyle::default(), &mut run);
    run
}

fn compose_into(node: &MarkupNode, style: &SpanStyle, run: &mut StyledRun) {
    let (tag, children) = match node {
        MarkupNode::Text(text) => {
            run.push_text(text, style);
            return;
        }
        MarkupNode::Element { tag, children, .. } => (tag.as_str(), children),
    };

    let style = match tag {
        "strong" | "b" => SpanStyle {
            bold: true,
            ..style.clone()
        },
        "em" | "i" => SpanStyle {
            italic: true,
            ..style.clone()
        },
        "code" => SpanStyle {
            monospace: true,
            ..style.clone()
        },
        "a" => SpanStyle {
            link: node
                .attr("href")
                .map(str::to_string)
                .or_else(|| style.link.clone()),
            ..style.clone()
        },
        "br" => {
            run.push_break();
            return;
        }
        // unknown wrappers keep the current style so their text still
        // surfaces instead of being dropped
        _ => style.clone(),
    };

    for child in children {
        compose_into(child, &style, run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::tree::parse;
    use pretty_assertions::assert_eq;

    /// Parse a one-paragraph Markdown snippet and compose that paragraph.
    fn compose_paragraph(markdown: &str) -> StyledRun {
        let root = parse(markdown);
        compose(&root.children()[0])
    }

    #[test]
    fn plain_text_stays_plain() {
        let run = compose_paragraph("just words");
        assert_eq!(
            run.spans(),
            &[Span::Text {
                text: "just words".to_string(),
                style: SpanStyle::default(),
            }]
        );
    }

    #[test]
    fn styles_apply_and_nest() {
        let run = compose_paragraph("a **b _c_** `d`");
        let styles: Vec<(String, bool, bool, bool)> = run
            .spans()
            .iter()
            .map(|span| match span {
                Span::Text { text, style } => {
                    (text.clone(), style.bold, style.italic, style.monospace)
                }
                Span::Break => panic!("no breaks expected"),
            })
            .collect();
        assert_eq!(
            styles,
            vec![
                ("a ".to_string(), false, false, false),
                ("b ".to_string(), true, false, false),
                ("c".to_string(), true, true, false),
                (" ".to_string(), false, false, false),
                ("d".to_string(), false, false, true),
            ]
        );
    }

    #[test]
    fn links_carry_their_url() {
        let run = compose_paragraph("see [docs](https://example.com/docs)");
        match &run.spans()[1] {
            Span::Text { text, style } => {
                assert_eq!(text, "docs");
                assert_eq!(style.link.as_deref(), Some("https://example.com/docs"));
            }
            Span::Break => panic!("expected a text span"),
        }
    }

    #[test]
    fn line_breaks_become_break_spans() {
        let run = compose_paragraph("one\ntwo");
        assert_eq!(run.spans().len(), 3);
        assert_eq!(run.spans()[1], Span::Break);
        assert_eq!(run.plain_text(), "one\ntwo");
    }

    #[test]
    fn markup_significant_characters_round_trip() {
        let run = compose_paragraph("AT&T says x < y > z & done");
        assert_eq!(run.plain_text(), "AT&T says x < y > z & done");
    }

    #[test]
    fn styled_text_round_trips_modulo_styling() {
        let run = compose_paragraph("a **bold** and _italic_ and `mono` end");
        assert_eq!(run.plain_text(), "a bold and italic and mono end");
    }

    #[test]
    fn adjacent_same_style_spans_merge() {
        // the image wrapper is unknown inline markup; its alt text merges
        // into the surrounding plain span
        let run = compose_paragraph("before ![alt](x.png) after");
        assert_eq!(run.spans().len(), 1);
        assert_eq!(run.plain_text(), "before alt after");
    }

    #[test]
    fn blank_runs_are_detected() {
        let mut run = StyledRun::default();
        run.push_text("  \t ", &SpanStyle::default());
        assert!(run.is_blank());
        run.push_text("x", &SpanStyle::default());
        assert!(!run.is_blank());
    }
}
