//! Turns a reading window and a gauge configuration into a complete,
//! renderable view model.
//!
//! [`render`] is recomputed from scratch after every window mutation; there
//! is no caching, so a stale scene can never outlive the reading that
//! invalidated it.  On a configuration error nothing is produced and the
//! caller keeps whatever view it had.

pub mod geometry;
pub mod history;
pub mod scene;
pub mod svg;

pub use geometry::build_scene;
pub use history::HistoryRow;
pub use scene::{ArcPath, GeometricScene, Indicator, Point, Rect, Segment, Shape, Tick, TickKind};

use geometry::format_value;
use meter_config::GaugeConfig;
use meter_core::{compute_aggregate, Aggregate, MeterError, Result, SampleWindow};
use serde::Serialize;

/// Scene plus aggregate plus the text shown around the gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub title:          String,
    pub unit:           String,
    pub aggregate:      Aggregate,
    pub scene:          GeometricScene,
    /// Current value rounded to an integer.
    pub value_label:    String,
    /// Percentage as `"39%"`.
    pub capacity_label: String,
    /// `HH:MM:SS` of the newest reading, if any.
    pub last_updated:   Option<String>,
    /// Newest readings first.
    pub history:        Vec<HistoryRow>,
}

/// Build the full view for `window` under `config`.
pub fn render(window: &SampleWindow, config: &GaugeConfig) -> Result<GaugeView> {
    config.validate()?;
    let aggregate = compute_aggregate(window, config.max_value)?;
    let scene = build_scene(config, aggregate.percentage)?;

    tracing::debug!(
        value = aggregate.current_value,
        percentage = aggregate.percentage,
        samples = aggregate.sample_count,
        "rendered {:?} gauge",
        config.orientation
    );

    Ok(GaugeView {
        title:          config.title.clone(),
        unit:           config.unit.clone(),
        value_label:    format_value(aggregate.current_value),
        capacity_label: format!("{}%", aggregate.capacity_percent()),
        last_updated:   window.latest().map(|r| r.time_label()),
        history:        history::recent(window, config.max_value, config.history_rows),
        aggregate,
        scene,
    })
}

/// Pretty-printed JSON snapshot of a view.
pub fn to_json(view: &GaugeView) -> Result<String> {
    serde_json::to_string_pretty(view)
        .map_err(|e| MeterError::Output(format!("cannot serialise view: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_config::Orientation;
    use meter_core::{seed_readings, Reading, Status};

    fn seeded() -> SampleWindow {
        let mut window = SampleWindow::new(10).unwrap();
        for r in seed_readings(5_000) {
            window.push(r).unwrap();
        }
        window
    }

    #[test]
    fn seed_scenario_view() {
        let view = render(&seeded(), &GaugeConfig::default()).unwrap();
        assert_eq!(view.aggregate.current_value, 78.0);
        assert_eq!(view.aggregate.percentage, 0.39);
        assert_eq!(view.aggregate.cumulative_estimate, 9);
        assert_eq!(view.aggregate.status, Status::Active);
        assert_eq!(view.value_label, "78");
        assert_eq!(view.capacity_label, "39%");
        assert_eq!(view.last_updated.as_deref(), Some("00:00:05"));
        assert_eq!(view.history.len(), 4);
        assert_eq!(view.history[0].value, 78.0);
        assert_eq!(view.title, "Flow Meter");
        assert_eq!(view.unit, "L/min");
    }

    #[test]
    fn render_is_pure() {
        let window = seeded();
        for orientation in [Orientation::Linear, Orientation::Radial, Orientation::Needle] {
            let cfg = GaugeConfig { orientation, ..GaugeConfig::default() };
            assert_eq!(render(&window, &cfg).unwrap(), render(&window, &cfg).unwrap());
        }
    }

    #[test]
    fn new_reading_changes_the_view() {
        let mut window = seeded();
        let cfg = GaugeConfig::default();
        let before = render(&window, &cfg).unwrap();
        window.push(Reading::new(6_000, 150.0)).unwrap();
        let after = render(&window, &cfg).unwrap();
        assert_ne!(before.scene, after.scene);
        assert_eq!(after.aggregate.percentage, 0.75);
    }

    #[test]
    fn empty_window_renders_idle() {
        let window = SampleWindow::new(10).unwrap();
        let view = render(&window, &GaugeConfig::default()).unwrap();
        assert_eq!(view.aggregate.status, Status::Idle);
        assert_eq!(view.value_label, "0");
        assert!(view.last_updated.is_none());
        assert!(view.history.is_empty());
    }

    #[test]
    fn bad_scale_is_a_config_error() {
        let cfg = GaugeConfig { max_value: -1.0, ..GaugeConfig::default() };
        assert!(matches!(render(&seeded(), &cfg), Err(MeterError::Config(_))));
    }

    #[test]
    fn json_snapshot_contains_aggregate() {
        let view = render(&seeded(), &GaugeConfig::default()).unwrap();
        let json = to_json(&view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["aggregate"]["cumulative_estimate"], 9);
        assert_eq!(value["aggregate"]["status"], "ACTIVE");
        assert_eq!(value["scene"]["orientation"], "needle");
        assert_eq!(value["scene"]["background"]["kind"], "arc");
    }
}
