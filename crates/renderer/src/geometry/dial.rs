use super::arc::arc_between;
use super::ticks::{format_value, scale_steps};
use crate::scene::{GeometricScene, Indicator, Point, Segment, Shape, Tick, TickKind};
use meter_config::GaugeConfig;

/// Tick ring offsets, measured outward from the arc radius.
const TICK_INNER: f64 = 5.0;
const TICK_OUTER: f64 = 15.0;
const LABEL_RADIUS: f64 = 30.0;
/// Needle length as a share of the arc radius.
const NEEDLE_REACH: f64 = 0.7;
const DOT_RADIUS: f64 = 6.0;

/// How the current value is marked on a dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Hand {
    /// Dot on the arc (radial gauge).
    Dot,
    /// Line from the centre (needle gauge).
    Needle,
}

pub(super) fn scene(config: &GaugeConfig, percentage: f64, hand: Hand) -> GeometricScene {
    let radius = config.dial_radius();
    let (cx, cy) = config.center();
    let center = Point::new(cx, cy);
    let angle = angle_at(config, percentage);

    let indicator = match hand {
        Hand::Dot => Indicator::Dot {
            center: center.polar(angle, radius),
            radius: DOT_RADIUS,
        },
        Hand::Needle => Indicator::Needle {
            hub:        center,
            tip:        center.polar(angle, radius * NEEDLE_REACH),
            hub_radius: DOT_RADIUS,
        },
    };

    GeometricScene {
        orientation: config.orientation,
        width: config.size,
        height: config.size,
        background: Shape::Arc(arc_between(center, radius, config.start_angle, config.end_angle)),
        foreground: Shape::Arc(arc_between(center, radius, config.start_angle, angle)),
        ticks: ticks(config, center, radius),
        indicator,
    }
}

/// `start + (end - start) * fraction`.
fn angle_at(config: &GaugeConfig, fraction: f64) -> f64 {
    config.start_angle + (config.end_angle - config.start_angle) * fraction
}

fn ticks(config: &GaugeConfig, center: Point, radius: f64) -> Vec<Tick> {
    scale_steps(config.tick_count, config.max_value)
        .map(|step| {
            let angle = angle_at(config, step.fraction);
            Tick {
                kind: TickKind::Major,
                fraction: step.fraction,
                value: step.value,
                line: Segment {
                    from: center.polar(angle, radius + TICK_INNER),
                    to:   center.polar(angle, radius + TICK_OUTER),
                },
                position: center.polar(angle, radius + LABEL_RADIUS),
                label: Some(format_value(step.value)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ArcPath;
    use meter_config::Orientation;

    fn config(orientation: Orientation) -> GaugeConfig {
        GaugeConfig { orientation, ..GaugeConfig::default() }
    }

    fn progress(scene: &GeometricScene) -> ArcPath {
        match scene.foreground {
            Shape::Arc(arc) => arc,
            Shape::Bar(_) => panic!("dial drew a bar"),
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn empty_gauge_has_degenerate_progress_arc() {
        let s = scene(&config(Orientation::Radial), 0.0, Hand::Dot);
        let arc = progress(&s);
        assert!(arc.is_degenerate());
        assert_eq!(arc.start, arc.end);
    }

    #[test]
    fn full_gauge_progress_matches_background() {
        let s = scene(&config(Orientation::Radial), 1.0, Hand::Dot);
        assert_eq!(s.background, s.foreground);
        assert!(progress(&s).large_arc);
    }

    #[test]
    fn large_arc_flips_past_half_turn() {
        // Default span is 270°, so 180° is reached at two thirds.
        let cfg = config(Orientation::Needle);
        assert!(!progress(&scene(&cfg, 0.5, Hand::Needle)).large_arc);
        assert!(progress(&scene(&cfg, 0.7, Hand::Needle)).large_arc);
    }

    #[test]
    fn needle_reaches_seventy_percent_of_radius() {
        let cfg = config(Orientation::Needle);
        let s = scene(&cfg, 0.5, Hand::Needle);
        // Half of -135..135 is 0°, pointing straight right.
        match s.indicator {
            Indicator::Needle { hub, tip, hub_radius } => {
                assert_eq!(hub, Point::new(180.0, 180.0));
                assert!(close(tip, Point::new(180.0 + 84.0, 180.0)));
                assert_eq!(hub_radius, 6.0);
            }
            other => panic!("wrong indicator {other:?}"),
        }
    }

    #[test]
    fn radial_dot_sits_on_the_arc() {
        let cfg = GaugeConfig {
            start_angle: 225.0,
            end_angle: 315.0,
            ..config(Orientation::Radial)
        };
        let s = scene(&cfg, 0.5, Hand::Dot);
        // 270° is straight up in screen coordinates.
        assert!(close(s.indicator.position(), Point::new(180.0, 60.0)));
        assert!(!progress(&s).large_arc);
    }

    #[test]
    fn tick_ring_spans_start_to_end_outward() {
        let cfg = config(Orientation::Radial);
        let s = scene(&cfg, 0.3, Hand::Dot);
        let center = Point::new(180.0, 180.0);
        assert_eq!(s.ticks.len(), 6);

        let first = &s.ticks[0];
        assert!(close(first.line.from, center.polar(-135.0, 125.0)));
        assert!(close(first.line.to, center.polar(-135.0, 135.0)));
        assert!(close(first.position, center.polar(-135.0, 150.0)));
        assert_eq!(first.label.as_deref(), Some("0"));

        let last = s.ticks.last().unwrap();
        assert!(close(last.position, center.polar(135.0, 150.0)));
        assert_eq!(last.label.as_deref(), Some("200"));
    }
}
