use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{
    FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X9, FONT_6X10, FONT_6X12, FONT_6X13, FONT_6X13_BOLD,
    FONT_7X14, FONT_7X14_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD, FONT_10X20,
};

use crate::error::{ChartError, ChartResult};
use crate::render::{FontMetrics, FontSpec, TextMetrics};

/// Sorted by ascending cell height.
const REGULAR_FACES: &[&MonoFont<'static>] = &[
    &FONT_4X6, &FONT_5X7, &FONT_5X8, &FONT_6X9, &FONT_6X10, &FONT_6X12, &FONT_6X13, &FONT_7X14,
    &FONT_9X15, &FONT_9X18, &FONT_10X20,
];

/// Sorted by ascending cell height.
const BOLD_FACES: &[&MonoFont<'static>] =
    &[&FONT_6X13_BOLD, &FONT_7X14_BOLD, &FONT_9X15_BOLD, &FONT_9X18_BOLD];

const SMALLEST_BOLD_PX: f64 = 13.0;

/// Font metrics for the built-in bitmap faces painted by
/// [`PixelSurface`](crate::render::PixelSurface).
///
/// A [`FontSpec`] resolves to the tallest face whose cell fits `size_px`;
/// requests below the smallest face get the smallest one. Only generic
/// families resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoFontMetrics;

impl MonoFontMetrics {
    pub(crate) fn face_for(font: &FontSpec) -> ChartResult<&'static MonoFont<'static>> {
        font.validate()?;
        if !family_supported(&font.family) {
            return Err(ChartError::FontUnavailable {
                family: font.family.clone(),
                size_px: font.size_px,
            });
        }

        let faces = if font.is_bold() && font.size_px >= SMALLEST_BOLD_PX {
            BOLD_FACES
        } else {
            REGULAR_FACES
        };
        faces
            .iter()
            .rev()
            .find(|face| f64::from(face.character_size.height) <= font.size_px)
            .or_else(|| faces.first())
            .copied()
            .ok_or_else(|| ChartError::FontUnavailable {
                family: font.family.clone(),
                size_px: font.size_px,
            })
    }

    pub(crate) fn face_metrics(face: &MonoFont<'_>, text: &str) -> TextMetrics {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        let advance = to_i32(face.character_size.width) + to_i32(face.character_spacing);
        let width = if chars == 0 {
            0
        } else {
            chars.saturating_mul(advance) - to_i32(face.character_spacing)
        };
        let height = to_i32(face.character_size.height);
        let ascent = to_i32(face.baseline) + 1;
        TextMetrics {
            width,
            height,
            ascent,
            descent: height - ascent,
        }
    }
}

impl FontMetrics for MonoFontMetrics {
    fn measure(&self, font: &FontSpec, text: &str) -> ChartResult<TextMetrics> {
        let face = Self::face_for(font)?;
        Ok(Self::face_metrics(face, text))
    }
}

fn family_supported(family: &str) -> bool {
    matches!(
        family.trim().to_ascii_lowercase().as_str(),
        "sans-serif" | "sans" | "serif" | "monospace" | "mono" | "fixed"
    )
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
