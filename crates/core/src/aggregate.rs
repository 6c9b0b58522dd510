use crate::{window::SampleWindow, MeterError, Result};
use serde::Serialize;
use std::fmt;

/// The sum of the window is read as a per-minute rate integrated over one
/// minute.  This ignores the real sampling interval, which varies between
/// 200 ms and 3 s depending on the feed, so the estimate is physically
/// inconsistent.  Kept as-is for compatibility with existing displays.
const CUMULATIVE_DIVISOR: f64 = 60.0;

/// Activity label derived purely from the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Idle,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => f.write_str("ACTIVE"),
            Status::Idle => f.write_str("IDLE"),
        }
    }
}

/// Values derived from a window, recomputed in full on every update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    /// Value of the newest reading, `0` for an empty window.
    pub current_value: f64,
    /// `current_value / scale_max`, clamped to `[0, 1]`.
    pub percentage: f64,
    /// `round(sum / 60)`.
    pub cumulative_estimate: u64,
    pub sample_count: usize,
    pub status: Status,
}

impl Aggregate {
    /// Percentage as a whole number for display, e.g. `39`.
    #[must_use]
    pub fn capacity_percent(&self) -> u32 {
        (self.percentage * 100.0).round() as u32
    }
}

/// Derive the aggregate for `window` on a scale of `0..=scale_max`.
pub fn compute_aggregate(window: &SampleWindow, scale_max: f64) -> Result<Aggregate> {
    if !(scale_max.is_finite() && scale_max > 0.0) {
        return Err(MeterError::Config(format!(
            "scale maximum must be a positive number, got {scale_max}"
        )));
    }

    let current_value = window.latest().map_or(0.0, |r| r.value);
    let percentage = (current_value / scale_max).clamp(0.0, 1.0);
    let cumulative_estimate = (window.sum() / CUMULATIVE_DIVISOR).round() as u64;

    Ok(Aggregate {
        current_value,
        percentage,
        cumulative_estimate,
        sample_count: window.len(),
        status: if current_value > 0.0 { Status::Active } else { Status::Idle },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{seed_readings, Reading};

    fn window_of(values: &[f64]) -> SampleWindow {
        let mut window = SampleWindow::new(10).unwrap();
        for (i, &v) in values.iter().enumerate() {
            window.push(Reading::new(i as i64 * 1_000, v)).unwrap();
        }
        window
    }

    #[test]
    fn seed_window_aggregate() {
        let mut window = SampleWindow::new(10).unwrap();
        for r in seed_readings(5_000) {
            window.push(r).unwrap();
        }
        let agg = compute_aggregate(&window, 200.0).unwrap();
        assert_eq!(agg.current_value, 78.0);
        assert_eq!(agg.percentage, 0.39);
        assert_eq!(agg.cumulative_estimate, 9);
        assert_eq!(agg.sample_count, 6);
        assert_eq!(agg.status, Status::Active);
        assert_eq!(agg.capacity_percent(), 39);
    }

    #[test]
    fn empty_window_is_idle_zero() {
        let agg = compute_aggregate(&window_of(&[]), 50.0).unwrap();
        assert_eq!(agg.current_value, 0.0);
        assert_eq!(agg.percentage, 0.0);
        assert_eq!(agg.cumulative_estimate, 0);
        assert_eq!(agg.sample_count, 0);
        assert_eq!(agg.status, Status::Idle);
    }

    #[test]
    fn percentage_clamps_at_one() {
        let agg = compute_aggregate(&window_of(&[10.0, 450.0]), 200.0).unwrap();
        assert_eq!(agg.percentage, 1.0);
        assert_eq!(agg.capacity_percent(), 100);
    }

    #[test]
    fn percentage_tracks_last_value_over_many_windows() {
        for scale_max in [1.0, 50.0, 200.0, 1_000.0] {
            for len in 1..=10 {
                let values: Vec<f64> = (0..len).map(|i| (i * 37 % 260) as f64).collect();
                let agg = compute_aggregate(&window_of(&values), scale_max).unwrap();
                let last = *values.last().unwrap();
                assert_eq!(agg.percentage, (last / scale_max).min(1.0));
                assert!((0.0..=1.0).contains(&agg.percentage));
            }
        }
    }

    #[test]
    fn zero_value_reading_is_idle() {
        let agg = compute_aggregate(&window_of(&[120.0, 0.0]), 200.0).unwrap();
        assert_eq!(agg.status, Status::Idle);
        assert_eq!(agg.cumulative_estimate, 2);
    }

    #[test]
    fn non_positive_scale_is_config_error() {
        let window = window_of(&[1.0]);
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compute_aggregate(&window, bad),
                Err(MeterError::Config(_))
            ));
        }
    }

    #[test]
    fn status_display_matches_labels() {
        assert_eq!(Status::Active.to_string(), "ACTIVE");
        assert_eq!(Status::Idle.to_string(), "IDLE");
    }
}
