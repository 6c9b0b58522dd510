use crate::colors::Color;

/// Stroke and fill settings for one scene layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub color: Color,
    pub stroke_width: f32,
}

/// Per-gauge visual settings handed to the SVG writer.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeStyle {
    pub track:      LayerStyle,
    pub fill:       LayerStyle,
    pub major_tick: LayerStyle,
    pub minor_tick: LayerStyle,
    pub indicator:  LayerStyle,
}
