//! Markdown translation: source text to a markup tree, then to an ordered
//! sequence of styled content blocks.

pub mod blocks;
pub mod inline;
pub mod styles;
pub mod tree;

pub use blocks::{translate, ContentBlock, TranslateOptions};
pub use inline::{compose, Span, SpanStyle, StyledRun};
pub use styles::{BlockStyle, Rgb, StyleSheet};
pub use tree::{parse, MarkupNode};
