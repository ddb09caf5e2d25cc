//! Directory-to-document orchestration.

use crate::discovery;
use crate::error::Error;
use crate::geometry::PageGeometry;
use crate::markdown::{self, StyleSheet, TranslateOptions};
use crate::sinks::pdf;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// What a successful conversion produced.
#[derive(Debug)]
pub struct Summary {
    /// Total pages in the written document.
    pub page_count: usize,
    /// Number of eligible images found in the input directory.
    pub image_count: usize,
    /// Path of the written document.
    pub outfile: PathBuf,
}

/// Convert a directory of images, plus an optional `README.md`, into
/// `<parent>/<dir name>.pdf`.
///
/// README pages always come first; image pages follow in lexicographic
/// filename order. The merged document is assembled in memory and written
/// in one step, so a failed run never leaves a partial file behind.
pub fn convert(dir: &Path, progress: &ProgressBar) -> Result<Summary, Error> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let dir = dir.canonicalize()?;

    let images = discovery::find_images(&dir)?;
    progress.set_length(images.len() as u64);

    let geometry = PageGeometry::default();
    let styles = StyleSheet::default();
    let mut parts: Vec<Vec<u8>> = Vec::new();

    if let Some(readme) = discovery::readme_path(&dir) {
        progress.set_message("converting README.md");
        let text = std::fs::read_to_string(&readme)?;
        let tree = markdown::parse(&text);
        let blocks = markdown::translate(&tree, &TranslateOptions::default());
        parts.push(pdf::render_markdown(&blocks, &styles, &geometry)?);
    }

    progress.set_message("rendering images");
    if let Some(bytes) = pdf::render_image_pages(&images, &geometry, progress)? {
        parts.push(bytes);
    }

    if parts.is_empty() {
        return Err(Error::EmptyOutput);
    }

    let (mut merged, page_count) = pdf::merge_page_sets(&parts)?;
    let outfile = output_path(&dir);
    let mut bytes = Vec::new();
    merged.save_to(&mut bytes)?;
    std::fs::write(&outfile, bytes)?;

    Ok(Summary {
        page_count,
        image_count: images.len(),
        outfile,
    })
}

/// The output lands next to the input directory, named after it.
fn output_path(dir: &Path) -> PathBuf {
    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "book".to_string());
    dir.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{name}.pdf"))
}
