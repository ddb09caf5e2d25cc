//! Named presentation styles for page content.
//!
//! One immutable [`StyleSheet`] is built at startup and passed by reference
//! wherever blocks are rendered. Sizes and spacing are in points; leading
//! is a multiple of the font size.

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Formatting attributes for one kind of content block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStyle {
    /// Font size in points.
    pub size: u8,
    /// Line spacing as a multiple of the font size.
    pub leading: f64,
    /// Vertical space before the block, in points.
    pub space_before: f64,
    /// Vertical space after the block, in points.
    pub space_after: f64,
    /// Left indent in points.
    pub left_indent: f64,
    /// Right indent in points.
    pub right_indent: f64,
    pub bold: bool,
    pub monospace: bool,
    /// Text colour; `None` means the document default (black).
    pub text_color: Option<Rgb>,
    /// Background shading behind the block, where the renderer supports it.
    pub background: Option<Rgb>,
}

impl Default for BlockStyle {
    fn default() -> BlockStyle {
        BlockStyle {
            size: 10,
            leading: 1.4,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
            bold: false,
            monospace: false,
            text_color: None,
            background: None,
        }
    }
}

/// The full set of styles used to render translated content.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub h1: BlockStyle,
    pub h2: BlockStyle,
    pub h3: BlockStyle,
    pub h4: BlockStyle,
    pub paragraph: BlockStyle,
    pub list_item: BlockStyle,
    /// Extra left indent applied per nested-list level, in points.
    pub list_nest_indent: f64,
    pub code: BlockStyle,
    pub blockquote: BlockStyle,
    /// Colour used for hyperlink text.
    pub link_color: Rgb,
    /// Colour of horizontal rules.
    pub rule_color: Rgb,
}

impl StyleSheet {
    /// The style for a heading level; levels above 4 get the h4 style.
    pub fn heading(&self, level: u8) -> &BlockStyle {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            _ => &self.h4,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> StyleSheet {
        StyleSheet {
            h1: BlockStyle {
                size: 20,
                space_before: 14.0,
                space_after: 10.0,
                bold: true,
                ..BlockStyle::default()
            },
            h2: BlockStyle {
                size: 16,
                space_before: 12.0,
                space_after: 8.0,
                bold: true,
                ..BlockStyle::default()
            },
            h3: BlockStyle {
                size: 13,
                space_before: 10.0,
                space_after: 6.0,
                bold: true,
                ..BlockStyle::default()
            },
            h4: BlockStyle {
                size: 11,
                space_before: 8.0,
                space_after: 4.0,
                bold: true,
                ..BlockStyle::default()
            },
            paragraph: BlockStyle {
                space_after: 6.0,
                ..BlockStyle::default()
            },
            list_item: BlockStyle {
                space_after: 3.0,
                left_indent: 18.0,
                ..BlockStyle::default()
            },
            list_nest_indent: 18.0,
            code: BlockStyle {
                size: 9,
                leading: 13.0 / 9.0,
                space_after: 6.0,
                left_indent: 12.0,
                right_indent: 12.0,
                monospace: true,
                background: Some(rgb(0xf5, 0xf5, 0xf5)),
                ..BlockStyle::default()
            },
            blockquote: BlockStyle {
                space_after: 6.0,
                left_indent: 24.0,
                text_color: Some(rgb(0x55, 0x55, 0x55)),
                ..BlockStyle::default()
            },
            link_color: rgb(0, 0, 255),
            rule_color: rgb(0xcc, 0xcc, 0xcc),
        }
    }
}
