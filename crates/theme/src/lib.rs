pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{GaugeStyle, LayerStyle};

use meter_config::{GaugeConfig, ThemeConfig};

/// Compiled theme derived from [`ThemeConfig`] and the gauge's base colour.
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible; invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background:      Color,
    /// Fill, needle and centre value colour.
    pub accent:          Color,
    pub track:           Color,
    pub major_tick:      Color,
    pub minor_tick:      Color,
    pub label:           Color,
    pub text:            Color,
    pub font:            String,
    pub value_font_size: f32,
    pub label_font_size: f32,
}

impl Theme {
    /// Build a [`Theme`] from the `[theme]` section and `gauge.base_color`.
    pub fn from_config(cfg: &ThemeConfig, base_color: &str) -> Self {
        Self {
            background:      Color::from_hex(&cfg.background).unwrap_or(Color::BLACK),
            accent:          Color::from_hex(base_color).unwrap_or(Color::GOLD),
            track:           Color::from_hex(&cfg.track).unwrap_or(Color::TRACK),
            major_tick:      Color::from_hex(&cfg.major_tick).unwrap_or(Color::GRAY),
            minor_tick:      Color::from_hex(&cfg.minor_tick).unwrap_or(Color::GRAY),
            label:           Color::from_hex(&cfg.label).unwrap_or(Color::SILVER),
            text:            Color::from_hex(&cfg.text).unwrap_or(Color::SILVER),
            font:            cfg.font.clone(),
            value_font_size: cfg.value_font_size,
            label_font_size: cfg.label_font_size,
        }
    }

    /// Layer styles for a gauge drawn with `gauge.stroke_width`.
    #[must_use]
    pub fn gauge_style(&self, gauge: &GaugeConfig) -> GaugeStyle {
        let stroke = gauge.stroke_width as f32;
        GaugeStyle {
            track:      LayerStyle { color: self.track, stroke_width: stroke },
            fill:       LayerStyle { color: self.accent, stroke_width: stroke },
            major_tick: LayerStyle { color: self.major_tick, stroke_width: 2.0 },
            minor_tick: LayerStyle { color: self.minor_tick, stroke_width: 1.0 },
            indicator:  LayerStyle { color: self.accent, stroke_width: 3.0 },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), &GaugeConfig::default().base_color)
    }
}
