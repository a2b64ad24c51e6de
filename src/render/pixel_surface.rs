use std::convert::Infallible;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    Color, DrawingSurface, LinePrimitive, MonoFontMetrics, RectPrimitive, TextPrimitive,
    TextRotation,
};

/// Owned RGB raster painted with the built-in bitmap faces.
///
/// Text metrics for this surface come from [`MonoFontMetrics`]. Anything
/// painted outside the canvas is clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    viewport: Viewport,
    pixels: Vec<Rgb888>,
}

impl PixelSurface {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        viewport.validate()?;
        let len = viewport.width as usize * viewport.height as usize;
        Ok(Self {
            viewport,
            pixels: vec![Rgb888::BLACK; len],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    /// RGB value at `(x, y)`, `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        let color = self.pixels[self.index(x, y)];
        Some([color.r(), color.g(), color.b()])
    }

    /// Row-major RGB bytes, three per pixel.
    #[must_use]
    pub fn as_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| [color.r(), color.g(), color.b()])
            .collect()
    }

    /// Number of pixels currently holding `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Color) -> usize {
        let target = to_rgb888(color);
        self.pixels.iter().filter(|pixel| **pixel == target).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.viewport.width as usize + x as usize
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.viewport.width && y < self.viewport.height {
            let index = self.index(x, y);
            self.pixels[index] = color;
        }
    }
}

impl OriginDimensions for PixelSurface {
    fn size(&self) -> Size {
        Size::new(self.viewport.width, self.viewport.height)
    }
}

impl DrawTarget for PixelSurface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

impl DrawingSurface for PixelSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        let top_left = Point::new(to_px(rect.x), to_px(rect.y));
        let size = Size::new(to_extent(rect.width), to_extent(rect.height));
        let styled = Rectangle::new(top_left, size)
            .into_styled(PrimitiveStyle::with_fill(to_rgb888(rect.fill_color)));
        drawn(styled.draw(self));
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        let stroke = to_extent(line.stroke_width).max(1);
        let styled = Line::new(
            Point::new(to_px(line.x1), to_px(line.y1)),
            Point::new(to_px(line.x2), to_px(line.y2)),
        )
        .into_styled(PrimitiveStyle::with_stroke(to_rgb888(line.color), stroke));
        drawn(styled.draw(self));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let face = MonoFontMetrics::face_for(&text.font)?;
        let metrics = MonoFontMetrics::face_metrics(face, &text.text);
        let style = MonoTextStyle::new(face, to_rgb888(text.color));

        match text.rotation {
            TextRotation::Horizontal => {
                let top_left = Point::new(to_px(text.x), to_px(text.y) - metrics.ascent);
                let run = Text::with_baseline(&text.text, top_left, style, Baseline::Top);
                drawn(run.draw(self).map(|_| ()));
            }
            TextRotation::Ccw90 => {
                let local_top_left = Point::new(0, -metrics.ascent);
                let local_size = Size::new(
                    u32::try_from(metrics.width).unwrap_or(0),
                    u32::try_from(metrics.height).unwrap_or(0),
                );
                let mut target = RotatedTarget {
                    pivot: Point::new(to_px(text.x), to_px(text.y)),
                    bounds: Rectangle::new(local_top_left, local_size),
                    surface: self,
                };
                let run = Text::with_baseline(&text.text, local_top_left, style, Baseline::Top);
                drawn(run.draw(&mut target).map(|_| ()));
            }
        }
        Ok(())
    }
}

/// Draw target in the text's local frame, mapped onto the surface by a
/// -90 degree rotation about `pivot`.
struct RotatedTarget<'a> {
    surface: &'a mut PixelSurface,
    pivot: Point,
    bounds: Rectangle,
}

impl Dimensions for RotatedTarget<'_> {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}

impl DrawTarget for RotatedTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(local, color) in pixels {
            // Local cell (lx, ly) lands on device cell (px + ly, py - lx - 1).
            self.surface
                .set_pixel(self.pivot.x + local.y, self.pivot.y - local.x - 1, color);
        }
        Ok(())
    }
}

fn drawn(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

fn to_rgb888(color: Color) -> Rgb888 {
    let [red, green, blue] = color.to_rgb8();
    Rgb888::new(red, green, blue)
}

fn to_px(value: f64) -> i32 {
    value.floor() as i32
}

fn to_extent(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
