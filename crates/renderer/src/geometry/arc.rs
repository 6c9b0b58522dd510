use crate::scene::{ArcPath, Point};

/// Arc around `center` from `start_angle` to `end_angle` (degrees).
///
/// The large-arc flag is set when the span exceeds 180°; the sweep is always
/// clockwise so background and progress arcs run the same way.
pub fn arc_between(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        start: center.polar(start_angle, radius),
        end: center.polar(end_angle, radius),
        radius,
        start_angle,
        end_angle,
        large_arc: (end_angle - start_angle).abs() > 180.0,
        sweep: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(100.0, 100.0);

    #[test]
    fn large_arc_flag_threshold() {
        assert!(!arc_between(CENTER, 50.0, 225.0, 315.0).large_arc);
        assert!(!arc_between(CENTER, 50.0, 0.0, 180.0).large_arc);
        assert!(arc_between(CENTER, 50.0, -135.0, 135.0).large_arc);
        assert!(arc_between(CENTER, 50.0, 135.0, -135.0).large_arc);
    }

    #[test]
    fn sweep_is_always_clockwise() {
        assert!(arc_between(CENTER, 50.0, 10.0, 20.0).sweep);
        assert!(arc_between(CENTER, 50.0, 20.0, 10.0).sweep);
    }

    #[test]
    fn zero_span_is_degenerate() {
        let arc = arc_between(CENTER, 50.0, -135.0, -135.0);
        assert!(arc.is_degenerate());
        assert_eq!(arc.start, arc.end);
    }
}
