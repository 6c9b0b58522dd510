use meter_core::window::{self, DEFAULT_CAPACITY};
use meter_core::{MeterError, Reading, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `tick_count` and `minor_tick_count`.
pub const MAX_TICKS: usize = 1_000;

/// Root configuration structure parsed from `meter.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MeterConfig {
    /// Scale, appearance and orientation of the gauge.
    pub gauge: GaugeConfig,
    /// Size of the reading window.
    pub window: WindowConfig,
    /// Simulated reading source.
    pub feed: FeedConfig,
    /// Colours used when exporting SVG.
    pub theme: ThemeConfig,
    /// Where rendered views are written.
    pub output: OutputConfig,
    /// Initial readings.  Empty means "use the built-in seed sequence".
    pub data: Vec<Reading>,
}

impl MeterConfig {
    /// Check every section.  Called at load, mount and reload.
    pub fn validate(&self) -> Result<()> {
        self.gauge.validate()?;
        self.window.validate()?;
        self.feed.validate()
    }
}

/// Gauge variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Horizontal bar with a pointer.
    Linear,
    /// Circular arc with an indicator dot.
    Radial,
    /// Circular arc with a needle from the centre.
    #[default]
    Needle,
}

/// Settings for a single gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Top of the scale (`scaleMax`).  Must be positive.
    pub max_value: f64,
    pub unit: String,
    pub title: String,
    pub orientation: Orientation,
    /// Edge length of the square dial canvas.
    pub size: f64,
    /// Shifts the dial radius: `radius = (size - stroke_width)/2 - (100 - gauge_radius)`.
    pub gauge_radius: f64,
    pub stroke_width: f64,
    /// Degrees, 0 = +x axis, growing clockwise (screen coordinates).
    pub start_angle: f64,
    pub end_angle: f64,
    /// Fill / needle colour (hex).
    pub base_color: String,
    /// Number of major intervals; `tick_count + 1` labelled ticks are drawn.
    pub tick_count: usize,
    /// Number of minor intervals on the linear bar.  `0` disables them.
    pub minor_tick_count: usize,
    /// Linear bar length in pixels.
    pub bar_length: f64,
    /// Linear bar thickness in pixels.
    pub bar_thickness: f64,
    /// How many recent readings are listed below the gauge.
    pub history_rows: usize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max_value:        200.0,
            unit:             "L/min".to_string(),
            title:            "Flow Meter".to_string(),
            orientation:      Orientation::Needle,
            size:             360.0,
            gauge_radius:     50.0,
            stroke_width:     20.0,
            start_angle:      -135.0,
            end_angle:        135.0,
            base_color:       "#ffd700".to_string(),
            tick_count:       5,
            minor_tick_count: 20,
            bar_length:       280.0,
            bar_thickness:    20.0,
            history_rows:     4,
        }
    }
}

impl GaugeConfig {
    /// Defaults for one gauge variant.  The radial dial is a short top arc
    /// with a thinner stroke; the other variants share [`Default`].
    pub fn for_orientation(orientation: Orientation) -> Self {
        let base = Self { orientation, ..Self::default() };
        match orientation {
            Orientation::Radial => Self {
                gauge_radius: 70.0,
                stroke_width: 12.0,
                start_angle:  225.0,
                end_angle:    315.0,
                tick_count:   4,
                ..base
            },
            Orientation::Linear | Orientation::Needle => base,
        }
    }

    /// Radius of the dial arc.
    #[must_use]
    pub fn dial_radius(&self) -> f64 {
        (self.size - self.stroke_width) / 2.0 - (100.0 - self.gauge_radius)
    }

    /// Centre of the dial canvas.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    /// Reject configurations that cannot produce a scene.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_value.is_finite() && self.max_value > 0.0) {
            return Err(config_err(format!(
                "gauge.max_value must be positive, got {}",
                self.max_value
            )));
        }
        if self.tick_count == 0 || self.tick_count > MAX_TICKS {
            return Err(config_err(format!(
                "gauge.tick_count must be between 1 and {MAX_TICKS}, got {}",
                self.tick_count
            )));
        }
        if self.minor_tick_count > MAX_TICKS {
            return Err(config_err(format!(
                "gauge.minor_tick_count must be at most {MAX_TICKS}, got {}",
                self.minor_tick_count
            )));
        }
        if !(self.start_angle.is_finite() && self.end_angle.is_finite()) {
            return Err(config_err("gauge angles must be finite".into()));
        }
        if !positive(self.stroke_width) {
            return Err(config_err(format!(
                "gauge.stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }

        match self.orientation {
            Orientation::Linear => {
                if !positive(self.bar_length) || !positive(self.bar_thickness) {
                    return Err(config_err(format!(
                        "linear bar must have positive size, got {}x{}",
                        self.bar_length, self.bar_thickness
                    )));
                }
            }
            Orientation::Radial | Orientation::Needle => {
                let radius = self.dial_radius();
                if !positive(radius) {
                    return Err(config_err(format!(
                        "dial radius must be positive, got {radius} \
                         (size {}, stroke {}, gauge_radius {})",
                        self.size, self.stroke_width, self.gauge_radius
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Reading window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Maximum number of readings kept (`N`).
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        window::check_capacity(self.capacity)
    }
}

/// Simulated reading source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Time between readings in milliseconds.
    pub interval_ms: u64,
    /// Lower bound of generated values (inclusive).
    pub min_value: f64,
    /// Upper bound of generated values (exclusive).
    pub max_value: f64,
    /// Fixed RNG seed for reproducible runs.  `None` = entropy.
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2_000,
            min_value:   20.0,
            max_value:   200.0,
            seed:        None,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(config_err("feed.interval_ms must be at least 1".into()));
        }
        let finite = self.min_value.is_finite() && self.max_value.is_finite();
        if !finite || self.min_value < 0.0 || self.min_value >= self.max_value {
            return Err(config_err(format!(
                "feed range must satisfy 0 <= min < max, got [{}, {})",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

/// Theme / styling configuration for exported SVG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Canvas background (hex, e.g. `"#111111"`).
    pub background: String,
    /// Unfilled track of the bar or arc.
    pub track: String,
    pub major_tick: String,
    pub minor_tick: String,
    /// Tick label colour.
    pub label: String,
    /// Title, unit and secondary text.
    pub text: String,
    /// Font family name.
    pub font: String,
    /// Size of the centre value text.
    pub value_font_size: f32,
    /// Size of tick labels.
    pub label_font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:      "#111111".to_string(),
            track:           "#2a2a2a".to_string(),
            major_tick:      "#666666".to_string(),
            minor_tick:      "#444444".to_string(),
            label:           "#999999".to_string(),
            text:            "#cccccc".to_string(),
            font:            "monospace".to_string(),
            value_font_size: 28.0,
            label_font_size: 12.0,
        }
    }
}

/// Output sinks.  Unset paths are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendered SVG document, rewritten on every update.
    pub svg_path: Option<PathBuf>,
    /// JSON snapshot of the full view model.
    pub json_path: Option<PathBuf>,
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn config_err(msg: String) -> MeterError {
    MeterError::Config(msg)
}
