use crate::error::ReadingError;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Values of the built-in seed sequence, oldest first, spaced one second apart.
const SEED_VALUES: [f64; 6] = [45.0, 67.0, 89.0, 124.0, 156.0, 78.0];
const SEED_SPACING_MS: i64 = 1_000;

/// One timestamped sensor sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Epoch milliseconds.
    pub timestamp: i64,
    /// Measured value, expected to be finite and non-negative.
    pub value: f64,
}

impl Reading {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Check the value on its own, independent of any window.
    pub fn validate(&self) -> Result<(), ReadingError> {
        if !self.value.is_finite() {
            return Err(ReadingError::NonFinite(self.value));
        }
        if self.value < 0.0 {
            return Err(ReadingError::Negative(self.value));
        }
        Ok(())
    }

    /// Wall-clock time of the reading as `HH:MM:SS` (UTC).
    ///
    /// Falls back to `--:--:--` for timestamps outside chrono's range.
    pub fn time_label(&self) -> String {
        DateTime::from_timestamp_millis(self.timestamp)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }
}

/// The sequence shown when a gauge is mounted without any data.
///
/// Six readings, one second apart, the last one stamped `now_ms`.
pub fn seed_readings(now_ms: i64) -> Vec<Reading> {
    let last = SEED_VALUES.len() as i64 - 1;
    SEED_VALUES
        .iter()
        .enumerate()
        .map(|(i, &value)| Reading::new(now_ms - (last - i as i64) * SEED_SPACING_MS, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_sequence_ends_at_now() {
        let seed = seed_readings(5_000);
        assert_eq!(seed.len(), 6);
        assert_eq!(seed[0], Reading::new(0, 45.0));
        assert_eq!(seed[5], Reading::new(5_000, 78.0));
        assert!(seed.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn validate_rejects_nan_and_negative() {
        assert!(matches!(
            Reading::new(0, f64::NAN).validate(),
            Err(ReadingError::NonFinite(_))
        ));
        assert_eq!(
            Reading::new(0, f64::INFINITY).validate(),
            Err(ReadingError::NonFinite(f64::INFINITY))
        );
        assert_eq!(
            Reading::new(0, -1.0).validate(),
            Err(ReadingError::Negative(-1.0))
        );
        assert!(Reading::new(0, 0.0).validate().is_ok());
    }

    #[test]
    fn time_label_is_utc_clock_time() {
        // 2025-05-30T07:27:24.683Z
        assert_eq!(Reading::new(1_748_590_044_683, 8.0).time_label(), "07:27:24");
    }
}
