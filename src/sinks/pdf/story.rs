//! Flowable rendering: a content-block sequence becomes paginated PDF
//! bytes.
//!
//! genpdf owns line wrapping and page breaking; this module only maps each
//! block kind onto elements carrying the right style, spacing, and indent.

use crate::error::Error;
use crate::geometry::{pt_to_mm, PageGeometry};
use crate::markdown::{BlockStyle, ContentBlock, Rgb, Span, SpanStyle, StyleSheet, StyledRun};
use crate::sinks::pdf::fonts;
use genpdf::elements::{FramedElement, LinearLayout, PaddedElement, Paragraph};
use genpdf::fonts::{Font, FontFamily};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Context, Document, Element, Margins, Mm, Position, RenderResult, Size};

/// Render a content-block sequence into a single-section PDF.
pub fn render_markdown(
    blocks: &[ContentBlock],
    styles: &StyleSheet,
    geometry: &PageGeometry,
) -> Result<Vec<u8>, Error> {
    let fonts = fonts::load()?;
    let mut doc = Document::new(fonts.body);
    let mono = doc.add_font_family(fonts.mono);

    doc.set_title("README");
    doc.set_paper_size(Size::new(
        pt_to_mm(geometry.page_width),
        pt_to_mm(geometry.page_height),
    ));
    doc.set_font_size(styles.paragraph.size);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(
        pt_to_mm(geometry.margin),
        pt_to_mm(geometry.margin),
        pt_to_mm(geometry.margin),
        pt_to_mm(geometry.margin),
    ));
    doc.set_page_decorator(decorator);

    for block in blocks {
        push_block(&mut doc, block, styles, mono);
    }

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    Ok(bytes)
}

fn push_block(
    doc: &mut Document,
    block: &ContentBlock,
    styles: &StyleSheet,
    mono: FontFamily<Font>,
) {
    match block {
        ContentBlock::Heading { level, text } => {
            let style = styles.heading(*level);
            doc.push(flow(text, style, None, 0.0, styles, mono));
        }
        ContentBlock::Paragraph(text) => {
            doc.push(flow(text, &styles.paragraph, None, 0.0, styles, mono));
        }
        ContentBlock::Rule => {
            let rule = HorizontalRule {
                color: color(styles.rule_color),
            };
            doc.push(PaddedElement::new(
                rule,
                Margins::trbl(0.0, 0.0, pt_to_mm(6.0), 0.0),
            ));
        }
        ContentBlock::ListItem {
            marker,
            text,
            depth,
        } => {
            let extra_indent = styles.list_nest_indent * *depth as f64;
            doc.push(flow(
                text,
                &styles.list_item,
                Some(marker),
                extra_indent,
                styles,
                mono,
            ));
        }
        ContentBlock::CodeBlock(text) => {
            doc.push(code_block(text, &styles.code, mono));
        }
        ContentBlock::Quote(text) => {
            doc.push(flow(text, &styles.blockquote, None, 0.0, styles, mono));
        }
        ContentBlock::TableRow(cells) => {
            let mut paragraph = Paragraph::default();
            paragraph.push_styled(cells.join("  |  "), base_style(&styles.paragraph, mono));
            doc.push(PaddedElement::new(
                paragraph,
                block_margins(&styles.paragraph, 0.0),
            ));
        }
    }
}

/// Build the flowable element for one styled run.
///
/// Hard breaks split the run into stacked paragraphs; the optional marker
/// (a bullet or ordinal) leads the first line in the block's base style.
fn flow(
    run: &StyledRun,
    block: &BlockStyle,
    marker: Option<&str>,
    extra_indent: f64,
    styles: &StyleSheet,
    mono: FontFamily<Font>,
) -> PaddedElement<LinearLayout> {
    let base = base_style(block, mono);
    let mut layout = LinearLayout::vertical();
    let mut paragraph = Paragraph::default();

    if let Some(marker) = marker {
        paragraph.push_styled(format!("{marker}  "), base.clone());
    }

    for span in run.spans() {
        match span {
            Span::Break => {
                layout.push(std::mem::take(&mut paragraph));
            }
            // links degrade to colored text; there is no annotation to add
            Span::Text { text, style } => {
                paragraph.push_styled(text.clone(), span_style(&base, style, styles, mono));
            }
        }
    }
    layout.push(paragraph);

    PaddedElement::new(layout, block_margins(block, extra_indent))
}

/// Preformatted text: one paragraph per source line, monospace, framed to
/// set the block off from body text.
fn code_block(
    text: &str,
    block: &BlockStyle,
    mono: FontFamily<Font>,
) -> PaddedElement<FramedElement<LinearLayout>> {
    let style = base_style(block, mono);
    let mut layout = LinearLayout::vertical();
    for line in text.lines() {
        // an empty paragraph would collapse; keep the blank line's height
        let line = if line.is_empty() { " " } else { line };
        layout.push(Paragraph::new(StyledString::new(
            line.to_string(),
            style.clone(),
        )));
    }
    PaddedElement::new(FramedElement::new(layout), block_margins(block, 0.0))
}

fn base_style(block: &BlockStyle, mono: FontFamily<Font>) -> Style {
    let mut style = Style::new()
        .with_font_size(block.size)
        .with_line_spacing(block.leading);
    if block.bold {
        style = style.bold();
    }
    if block.monospace {
        style = style.with_font_family(mono);
    }
    if let Some(text_color) = block.text_color {
        style = style.with_color(color(text_color));
    }
    style
}

fn span_style(
    base: &Style,
    span: &SpanStyle,
    styles: &StyleSheet,
    mono: FontFamily<Font>,
) -> Style {
    let mut style = base.clone();
    if span.bold {
        style = style.bold();
    }
    if span.italic {
        style = style.italic();
    }
    if span.monospace {
        style = style.with_font_family(mono);
    }
    if span.link.is_some() {
        style = style.with_color(color(styles.link_color));
    }
    style
}

fn block_margins(block: &BlockStyle, extra_indent: f64) -> Margins {
    Margins::trbl(
        pt_to_mm(block.space_before),
        pt_to_mm(block.right_indent),
        pt_to_mm(block.space_after),
        pt_to_mm(block.left_indent + extra_indent),
    )
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// A full-width divider, the flowable analogue of a thematic break.
struct HorizontalRule {
    color: Color,
}

impl Element for HorizontalRule {
    fn render(
        &mut self,
        _context: &Context,
        area: genpdf::render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, genpdf::error::Error> {
        let width = area.size().width;
        let y = Mm::from(pt_to_mm(1.0));
        area.draw_line(
            vec![Position::new(0.0, y), Position::new(width, y)],
            Style::new().with_color(self.color),
        );
        Ok(RenderResult {
            size: Size::new(width, Mm::from(pt_to_mm(2.0))),
            has_more: false,
        })
    }
}
