use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TICK_COUNT, TickGenerator};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec};

use super::AxisLabelFormat;

/// Presentation settings for one chart render.
///
/// This type is serializable so host applications can persist/load chart
/// styling without inventing their own ad-hoc format. A `None` (or empty)
/// title or header suppresses that element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_title")]
    pub title: Option<String>,
    #[serde(default = "default_x_axis_header")]
    pub x_axis_header: Option<String>,
    #[serde(default = "default_y_axis_header")]
    pub y_axis_header: Option<String>,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    /// Color of titles, headers, tick marks and tick labels.
    #[serde(default = "default_title_color")]
    pub title_color: Color,
    #[serde(default = "default_axis_line_color")]
    pub axis_line_color: Color,
    #[serde(default = "default_title_font")]
    pub title_font: FontSpec,
    #[serde(default = "default_axis_header_font")]
    pub axis_header_font: FontSpec,
    #[serde(default = "default_tick_label_font")]
    pub tick_label_font: FontSpec,
    #[serde(default = "default_tick_length_px")]
    pub tick_length_px: i32,
    /// Space between a Y tick label and its tick mark.
    #[serde(default = "default_tick_label_gap_px")]
    pub tick_label_gap_px: i32,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_x_label_format")]
    pub x_label_format: AxisLabelFormat,
    #[serde(default = "default_y_label_format")]
    pub y_label_format: AxisLabelFormat,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_axis_header: default_x_axis_header(),
            y_axis_header: default_y_axis_header(),
            background_color: default_background_color(),
            title_color: default_title_color(),
            axis_line_color: default_axis_line_color(),
            title_font: default_title_font(),
            axis_header_font: default_axis_header_font(),
            tick_label_font: default_tick_label_font(),
            tick_length_px: default_tick_length_px(),
            tick_label_gap_px: default_tick_label_gap_px(),
            tick_count: default_tick_count(),
            x_label_format: default_x_label_format(),
            y_label_format: default_y_label_format(),
        }
    }
}

impl ChartStyle {
    /// Style without title and headers; only ticks and axis lines remain.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            title: None,
            x_axis_header: None,
            y_axis_header: None,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_axis_headers(
        mut self,
        x_axis_header: Option<&str>,
        y_axis_header: Option<&str>,
    ) -> Self {
        self.x_axis_header = x_axis_header.map(str::to_owned);
        self.y_axis_header = y_axis_header.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, background: Color, title: Color) -> Self {
        self.background_color = background;
        self.title_color = title;
        self
    }

    #[must_use]
    pub fn with_fonts(
        mut self,
        title: FontSpec,
        axis_header: FontSpec,
        tick_label: FontSpec,
    ) -> Self {
        self.title_font = title;
        self.axis_header_font = axis_header;
        self.tick_label_font = tick_label;
        self
    }

    #[must_use]
    pub fn with_tick_geometry(mut self, tick_length_px: i32, tick_label_gap_px: i32) -> Self {
        self.tick_length_px = tick_length_px;
        self.tick_label_gap_px = tick_label_gap_px;
        self
    }

    #[must_use]
    pub fn with_label_formats(mut self, x: AxisLabelFormat, y: AxisLabelFormat) -> Self {
        self.x_label_format = x;
        self.y_label_format = y;
        self
    }

    /// Title text when it should be drawn.
    #[must_use]
    pub fn visible_title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    #[must_use]
    pub fn visible_x_axis_header(&self) -> Option<&str> {
        non_empty(self.x_axis_header.as_deref())
    }

    #[must_use]
    pub fn visible_y_axis_header(&self) -> Option<&str> {
        non_empty(self.y_axis_header.as_deref())
    }

    pub fn tick_generator(&self) -> ChartResult<TickGenerator> {
        TickGenerator::new(self.tick_count)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.background_color.validate()?;
        self.title_color.validate()?;
        self.axis_line_color.validate()?;
        self.title_font.validate()?;
        self.axis_header_font.validate()?;
        self.tick_label_font.validate()?;
        if self.tick_length_px < 0 || self.tick_label_gap_px < 0 {
            return Err(ChartError::InvalidData(
                "tick length and tick label gap must be >= 0".to_owned(),
            ));
        }
        self.tick_generator()?;
        self.x_label_format.validate()?;
        self.y_label_format.validate()
    }

    /// Serializes the style to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize style: {e}")))
    }

    /// Deserializes a style from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse style: {e}")))
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

fn default_title() -> Option<String> {
    Some("Graph Title".to_owned())
}

fn default_x_axis_header() -> Option<String> {
    Some("X Axis".to_owned())
}

fn default_y_axis_header() -> Option<String> {
    Some("Y Axis".to_owned())
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_title_color() -> Color {
    Color::BLACK
}

fn default_axis_line_color() -> Color {
    Color::DARK_GRAY
}

fn default_title_font() -> FontSpec {
    FontSpec::bold(32.0)
}

fn default_axis_header_font() -> FontSpec {
    FontSpec::regular(14.0)
}

fn default_tick_label_font() -> FontSpec {
    FontSpec::regular(12.0)
}

fn default_tick_length_px() -> i32 {
    3
}

fn default_tick_label_gap_px() -> i32 {
    2
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_x_label_format() -> AxisLabelFormat {
    AxisLabelFormat::INDEX_AXIS
}

fn default_y_label_format() -> AxisLabelFormat {
    AxisLabelFormat::VALUE_AXIS
}
