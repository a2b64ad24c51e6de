use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use pango::prelude::FontMapExt;
use std::f64::consts::FRAC_PI_2;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSurface, FontMetrics, FontSpec, LinePrimitive, RectPrimitive, TextMetrics,
    TextPrimitive, TextRotation,
};

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Two modes are supported:
/// - offscreen image-surface rendering through [`CairoSurface::new`]
/// - in-place rendering on an external Cairo context (for example a GTK
///   `DrawingArea` callback) through [`CairoSurface::from_context`]
///
/// Pair it with [`PangoFontMetrics`] so layout measures the text this
/// surface paints.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    viewport: Viewport,
}

impl CairoSurface {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        viewport.validate()?;
        let image = ImageSurface::create(
            Format::Rgb24,
            viewport.width_px(),
            viewport.height_px(),
        )
        .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            viewport,
        })
    }

    pub fn from_context(context: Context, viewport: Viewport) -> ChartResult<Self> {
        viewport.validate()?;
        Ok(Self {
            context,
            image: None,
            viewport,
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Backing image when the surface was created offscreen.
    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }
}

impl DrawingSurface for CairoSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        apply_color(&self.context, rect.fill_color);
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        apply_color(&self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        // Half-pixel offset centers the stroke on the pixel grid.
        self.context.move_to(line.x1 + 0.5, line.y1 + 0.5);
        self.context.line_to(line.x2 + 0.5, line.y2 + 0.5);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(&text.font)));
        layout.set_text(&text.text);
        let ascent = f64::from(layout.baseline() / pango::SCALE);

        apply_color(&self.context, text.color);
        match text.rotation {
            TextRotation::Horizontal => {
                self.context.move_to(text.x, text.y - ascent);
                pangocairo::functions::show_layout(&self.context, &layout);
            }
            TextRotation::Ccw90 => {
                self.context
                    .save()
                    .map_err(|err| map_backend_error("failed to save cairo state", err))?;
                self.context.translate(text.x, text.y);
                self.context.rotate(-FRAC_PI_2);
                self.context.move_to(0.0, -ascent);
                pangocairo::functions::show_layout(&self.context, &layout);
                self.context
                    .restore()
                    .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
            }
        }
        Ok(())
    }
}

/// Pango-backed text measurement matching [`CairoSurface`] output.
#[derive(Debug)]
pub struct PangoFontMetrics {
    context: pango::Context,
}

impl PangoFontMetrics {
    #[must_use]
    pub fn new() -> Self {
        let font_map = pangocairo::FontMap::default();
        Self {
            context: font_map.create_context(),
        }
    }
}

impl Default for PangoFontMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetrics for PangoFontMetrics {
    fn measure(&self, font: &FontSpec, text: &str) -> ChartResult<TextMetrics> {
        font.validate()?;
        let description = font_description(font);
        if self.context.load_font(&description).is_none() {
            return Err(ChartError::FontUnavailable {
                family: font.family.clone(),
                size_px: font.size_px,
            });
        }

        let layout = pango::Layout::new(&self.context);
        layout.set_font_description(Some(&description));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        let ascent = layout.baseline() / pango::SCALE;
        Ok(TextMetrics {
            width,
            height,
            ascent,
            descent: height - ascent,
        })
    }
}

fn font_description(font: &FontSpec) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family(&font.family);
    description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
    description.set_weight(if font.is_bold() {
        pango::Weight::Bold
    } else {
        pango::Weight::Normal
    });
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
