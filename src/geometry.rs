//! Page geometry and image placement.
//!
//! All dimensions are PostScript points (1/72 inch). The PDF backends want
//! millimetres, so conversions happen at the sink boundary via [`pt_to_mm`].

/// Page dimensions and the derived content box.
///
/// The content box is the page minus a uniform margin on all four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in points.
    pub page_width: f64,
    /// Page height in points.
    pub page_height: f64,
    /// Uniform margin in points.
    pub margin: f64,
}

impl PageGeometry {
    /// US Letter (612x792 pt) with a 0.75 inch margin.
    pub fn letter() -> PageGeometry {
        PageGeometry {
            page_width: 612.0,
            page_height: 792.0,
            margin: 54.0,
        }
    }

    /// Width of the content box: page width minus both margins.
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Height of the content box: page height minus both margins.
    pub fn content_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> PageGeometry {
        PageGeometry::letter()
    }
}

/// Convert points to the millimetres the PDF backends expect.
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * 25.4 / 72.0
}

/// Where an image lands on its page, in points.
///
/// Produced by [`fit_image`]; the origin is the lower-left corner of the
/// image in page space (PDF coordinates grow upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// Fit an image into the content box, preserving its aspect ratio.
///
/// The image is scaled to the full content width first; if that makes it
/// taller than the content box it is refit to the full content height
/// instead. The result is horizontally centred and top-anchored: the top
/// edge of the image sits at the top of the content area.
///
/// Returns `None` when either pixel dimension is zero.
pub fn fit_image(geometry: &PageGeometry, width_px: u32, height_px: u32) -> Option<ImagePlacement> {
    if width_px == 0 || height_px == 0 {
        return None;
    }

    let aspect = f64::from(height_px) / f64::from(width_px);

    let mut width = geometry.content_width();
    let mut height = width * aspect;
    if height > geometry.content_height() {
        height = geometry.content_height();
        width = height / aspect;
    }

    let x = geometry.margin + (geometry.content_width() - width) / 2.0;
    let y = geometry.page_height - geometry.margin - height;

    Some(ImagePlacement {
        width,
        height,
        x,
        y,
    })
}
