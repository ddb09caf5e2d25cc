//! Image page rendering.
//!
//! Each image gets one page on a raw canvas: scaled to fit the content box
//! while preserving its aspect ratio, horizontally centred, top-anchored.

use crate::error::Error;
use crate::geometry::{fit_image, PageGeometry};
use indicatif::ProgressBar;
use printpdf::image_crate::{DynamicImage, GenericImageView};
use printpdf::{Image, ImageTransform, Mm, PdfDocument, Pt};
use std::path::PathBuf;

/// Render one page per image, in input order.
///
/// Undecodable and zero-size images are skipped with a warning rather than
/// aborting the batch. Returns `None` when nothing could be placed so the
/// caller can omit the section from the merge instead of emitting an
/// empty document.
pub fn render_image_pages(
    paths: &[PathBuf],
    geometry: &PageGeometry,
    progress: &ProgressBar,
) -> Result<Option<Vec<u8>>, Error> {
    let page_width = Mm::from(Pt(geometry.page_width as f32));
    let page_height = Mm::from(Pt(geometry.page_height as f32));
    let (doc, first_page, first_layer) = PdfDocument::new("Images", page_width, page_height, "image");

    let mut placed = 0usize;
    for path in paths {
        // decode and measure; the handle is released before the next image
        let decoded = match printpdf::image_crate::open(path) {
            Ok(decoded) => decoded,
            Err(error) => {
                log::warn!("skipping unreadable image {}: {error}", path.display());
                progress.inc(1);
                continue;
            }
        };
        let (width_px, height_px) = decoded.dimensions();
        let Some(placement) = fit_image(geometry, width_px, height_px) else {
            log::warn!("skipping zero-size image {}", path.display());
            progress.inc(1);
            continue;
        };

        let (page, layer) = if placed == 0 {
            // the document starts with one empty page; use it up first
            (first_page, first_layer)
        } else {
            doc.add_page(page_width, page_height, "image")
        };
        let layer = doc.get_page(page).get_layer(layer);

        // flatten any alpha channel; the canvas embeds plain RGB
        let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(decoded.to_rgb8()));
        // at 72 dpi one pixel is one point, so scale is display over source
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm::from(Pt(placement.x as f32))),
                translate_y: Some(Mm::from(Pt(placement.y as f32))),
                scale_x: Some(placement.width as f32 / width_px as f32),
                scale_y: Some(placement.height as f32 / height_px as f32),
                dpi: Some(72.0),
                ..ImageTransform::default()
            },
        );

        placed += 1;
        progress.inc(1);
    }

    if placed == 0 {
        return Ok(None);
    }
    let bytes = doc
        .save_to_bytes()
        .map_err(|error| Error::ImagePages(error.to_string()))?;
    Ok(Some(bytes))
}
