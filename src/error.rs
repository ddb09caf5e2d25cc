//! Error taxonomy for the conversion pipeline.
//!
//! Input problems are fatal and reported before any rendering starts; a
//! single bad image is only a warning and never aborts the batch.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The conversion target does not exist or is not a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// The target directory contains no files with an eligible extension.
    #[error("no JPG or PNG images found in '{0}'")]
    NoImages(PathBuf),

    /// Both the README and the image pipeline produced zero pages.
    #[error("nothing to write")]
    EmptyOutput,

    /// Reading a source file or writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The flowable renderer failed while building pages.
    #[error("failed to render pages: {0}")]
    Render(#[from] genpdf::error::Error),

    /// The image canvas failed while producing per-image pages.
    #[error("failed to render image pages: {0}")]
    ImagePages(String),

    /// Concatenating the rendered page sets failed.
    #[error("failed to merge page sets: {0}")]
    Merge(#[from] lopdf::Error),
}
