//! Bundled font loading.
//!
//! DejaVu Sans for body text and DejaVu Sans Mono for code, embedded at
//! compile time so the binary carries no runtime font dependencies.

use crate::error::Error;
use genpdf::fonts::{FontData, FontFamily};

/// The two font families every rendered document uses.
pub struct DocumentFonts {
    pub body: FontFamily<FontData>,
    pub mono: FontFamily<FontData>,
}

/// Load the bundled DejaVu families.
pub fn load() -> Result<DocumentFonts, Error> {
    Ok(DocumentFonts {
        body: family(
            include_bytes!("../../../assets/fonts/DejaVuSans.ttf"),
            include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf"),
            include_bytes!("../../../assets/fonts/DejaVuSans-Oblique.ttf"),
            include_bytes!("../../../assets/fonts/DejaVuSans-BoldOblique.ttf"),
        )?,
        mono: family(
            include_bytes!("../../../assets/fonts/DejaVuSansMono.ttf"),
            include_bytes!("../../../assets/fonts/DejaVuSansMono-Bold.ttf"),
            include_bytes!("../../../assets/fonts/DejaVuSansMono-Oblique.ttf"),
            include_bytes!("../../../assets/fonts/DejaVuSansMono-BoldOblique.ttf"),
        )?,
    })
}

fn family(
    regular: &[u8],
    bold: &[u8],
    italic: &[u8],
    bold_italic: &[u8],
) -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: font(regular)?,
        bold: font(bold)?,
        italic: font(italic)?,
        bold_italic: font(bold_italic)?,
    })
}

fn font(data: &[u8]) -> Result<FontData, Error> {
    Ok(FontData::new(data.to_vec(), None)?)
}
