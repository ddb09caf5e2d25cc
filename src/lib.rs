//! Convert a directory of images (JPG/PNG), plus an optional `README.md`,
//! into a single paginated PDF.
//!
//! The pipeline has three independent stages: the README is parsed into a
//! markup tree and translated into styled content blocks ([`markdown`]),
//! each image is measured and placed on its own page ([`geometry`] plus
//! the PDF sink), and the resulting page sets are merged README-first into
//! one document ([`convert`]).

pub mod convert;
pub mod discovery;
pub mod error;
pub mod geometry;
pub mod markdown;
pub mod sinks;

pub use convert::{convert, Summary};
pub use error::Error;
