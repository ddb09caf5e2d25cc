//! PDF sink.
//!
//! Three independent stages: a flowable renderer for translated Markdown,
//! a canvas renderer for image pages, and a merger that concatenates the
//! resulting page sets into the final document.

mod fonts;
mod images;
mod merge;
mod story;

pub use images::render_image_pages;
pub use merge::merge_page_sets;
pub use story::render_markdown;
