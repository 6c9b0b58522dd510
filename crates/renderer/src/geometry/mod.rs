//! Pure mapping from a gauge configuration and a fill fraction to drawable
//! primitives.
//!
//! The three orientations share one entry point, [`build_scene`], and share
//! the arc and tick helpers below.  Output depends only on the arguments, so
//! identical inputs always give identical scenes.

mod arc;
mod dial;
mod linear;
mod ticks;

pub use arc::arc_between;
pub use ticks::{format_value, scale_steps, ScaleStep};

use crate::scene::GeometricScene;
use meter_config::{GaugeConfig, Orientation};
use meter_core::Result;

/// Build the scene for `config` filled to `percentage`.
///
/// `percentage` is clamped to `[0, 1]`; `NaN` is treated as `0`.
pub fn build_scene(config: &GaugeConfig, percentage: f64) -> Result<GeometricScene> {
    config.validate()?;
    let p = clamp_fraction(percentage);

    let scene = match config.orientation {
        Orientation::Linear => linear::scene(config, p),
        Orientation::Radial => dial::scene(config, p, dial::Hand::Dot),
        Orientation::Needle => dial::scene(config, p, dial::Hand::Needle),
    };
    Ok(scene)
}

fn clamp_fraction(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
