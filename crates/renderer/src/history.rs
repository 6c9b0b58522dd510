use meter_core::SampleWindow;
use serde::Serialize;

/// One line of the "recent readings" list under a gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub timestamp:  i64,
    pub time_label: String,
    pub value:      f64,
    /// Width of the row's mini bar, `min(value / scale_max, 1)`.
    pub fill:       f64,
}

/// The newest `rows` readings, newest first.
pub fn recent(window: &SampleWindow, scale_max: f64, rows: usize) -> Vec<HistoryRow> {
    window
        .iter()
        .rev()
        .take(rows)
        .map(|r| HistoryRow {
            timestamp:  r.timestamp,
            time_label: r.time_label(),
            value:      r.value,
            fill:       (r.value / scale_max).min(1.0),
        })
        .collect()
}
