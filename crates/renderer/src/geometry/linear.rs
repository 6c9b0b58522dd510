use super::ticks::{format_value, scale_steps};
use crate::scene::{GeometricScene, Indicator, Point, Rect, Segment, Shape, Tick, TickKind};
use meter_config::GaugeConfig;

/// Gap between the bar and the top of the tick lines.
const TICK_GAP: f64 = 5.0;
const MAJOR_TICK_LEN: f64 = 10.0;
const MINOR_TICK_LEN: f64 = 5.0;
/// Distance from the bar to the tick label baseline.
const LABEL_OFFSET: f64 = 30.0;
/// Extra canvas width so the last label and pointer are not clipped.
const CANVAS_MARGIN: f64 = 40.0;
const CANVAS_HEIGHT: f64 = 80.0;
const HUB_RADIUS: f64 = 3.0;

pub(super) fn scene(config: &GaugeConfig, percentage: f64) -> GeometricScene {
    let length = config.bar_length;
    let thickness = config.bar_thickness;
    let fill = length * percentage;

    let bar = |width: f64| Rect {
        x: 0.0,
        y: 0.0,
        width,
        height: thickness,
        corner_radius: thickness / 2.0,
    };

    let mut ticks = major_ticks(config);
    ticks.extend(minor_ticks(config));
    ticks.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));

    GeometricScene {
        orientation: config.orientation,
        width: length + CANVAS_MARGIN,
        height: CANVAS_HEIGHT.max(thickness + LABEL_OFFSET + 10.0),
        background: Shape::Bar(bar(length)),
        foreground: Shape::Bar(bar(fill)),
        ticks,
        indicator: pointer(fill),
    }
}

fn major_ticks(config: &GaugeConfig) -> Vec<Tick> {
    let h = config.bar_thickness;
    let spacing = config.bar_length / config.tick_count as f64;

    scale_steps(config.tick_count, config.max_value)
        .map(|step| {
            let x = spacing * step.index as f64;
            Tick {
                kind: TickKind::Major,
                fraction: step.fraction,
                value: step.value,
                line: Segment {
                    from: Point::new(x, h + TICK_GAP),
                    to:   Point::new(x, h + TICK_GAP + MAJOR_TICK_LEN),
                },
                position: Point::new(x, h + LABEL_OFFSET),
                label: Some(format_value(step.value)),
            }
        })
        .collect()
}

/// Minor marks between the major ones.  A minor position that lands exactly
/// on a major tick is left out.
fn minor_ticks(config: &GaugeConfig) -> Vec<Tick> {
    let minors = config.minor_tick_count;
    if minors == 0 {
        return Vec::new();
    }
    let h = config.bar_thickness;
    let spacing = config.bar_length / minors as f64;

    scale_steps(minors, config.max_value)
        .filter(|step| (step.index * config.tick_count) % minors != 0)
        .map(|step| {
            let x = spacing * step.index as f64;
            let from = Point::new(x, h + TICK_GAP);
            Tick {
                kind: TickKind::Minor,
                fraction: step.fraction,
                value: step.value,
                line: Segment { from, to: Point::new(x, h + TICK_GAP + MINOR_TICK_LEN) },
                position: from,
                label: None,
            }
        })
        .collect()
}

fn pointer(fill: f64) -> Indicator {
    let tip = Point::new(fill, 0.0);
    let at = |dx: f64, dy: f64| tip.offset(dx, dy);
    Indicator::Pointer {
        tip,
        outline:    [at(0.0, -5.0), at(8.0, 0.0), at(0.0, 25.0), at(-8.0, 0.0)],
        hub:        at(0.0, 10.0),
        hub_radius: HUB_RADIUS,
    }
}
