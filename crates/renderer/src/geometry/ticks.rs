/// One evenly spaced step of a scale divided into `count` intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep {
    pub index:    usize,
    /// `index / count`.
    pub fraction: f64,
    /// `scale_max / count * index`.
    pub value:    f64,
}

/// `count + 1` steps from `0` to `scale_max` inclusive.
///
/// `count` must be non-zero; callers validate it as part of the config.
pub fn scale_steps(count: usize, scale_max: f64) -> impl Iterator<Item = ScaleStep> {
    let step_value = scale_max / count as f64;
    (0..=count).map(move |index| ScaleStep {
        index,
        fraction: index as f64 / count as f64,
        value: step_value * index as f64,
    })
}

/// Round a scale value for display, e.g. `66.666 -> "67"`.
pub fn format_value(value: f64) -> String {
    format!("{:.0}", value.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_cover_zero_to_max() {
        let steps: Vec<ScaleStep> = scale_steps(4, 200.0).collect();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].value, 0.0);
        assert_eq!(steps[2].value, 100.0);
        assert_eq!(steps[4].value, 200.0);
        assert_eq!(steps[4].fraction, 1.0);
    }

    #[test]
    fn labels_are_rounded() {
        let labels: Vec<String> = scale_steps(3, 200.0).map(|s| format_value(s.value)).collect();
        assert_eq!(labels, ["0", "67", "133", "200"]);
    }
}
