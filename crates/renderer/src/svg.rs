//! SVG export of a rendered [`GaugeView`].

use crate::scene::{Indicator, Shape, TickKind};
use crate::GaugeView;
use meter_config::Orientation;
use meter_theme::{GaugeStyle, LayerStyle, Theme};
use std::fmt::Write;

/// Tick labels sit slightly below their anchor so they read centred.
const LABEL_BASELINE: f64 = 4.0;

/// Serialise `view` into a standalone SVG document.
pub fn to_svg(view: &GaugeView, theme: &Theme, style: &GaugeStyle) -> String {
    let scene = &view.scene;
    let mut out = String::new();

    // `write!` into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height,
    );
    let _ = writeln!(out, "  <title>{}</title>", escape(&view.title));
    let _ = writeln!(
        out,
        "  <desc>{} {} {} ({})</desc>",
        escape(&view.value_label),
        escape(&view.unit),
        view.aggregate.status,
        view.capacity_label,
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        theme.background.to_hex()
    );

    shape(&mut out, &scene.background, style.track);
    shape(&mut out, &scene.foreground, style.fill);

    for tick in &scene.ticks {
        let layer = match tick.kind {
            TickKind::Major => style.major_tick,
            TickKind::Minor => style.minor_tick,
        };
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            tick.line.from.x,
            tick.line.from.y,
            tick.line.to.x,
            tick.line.to.y,
            layer.color.to_hex(),
            layer.stroke_width,
        );
        if let Some(label) = &tick.label {
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle">{}</text>"#,
                tick.position.x,
                tick.position.y + LABEL_BASELINE,
                theme.label_font_size,
                theme.label.to_hex(),
                escape(label),
            );
        }
    }

    indicator(&mut out, &scene.indicator, style.indicator, theme);

    if scene.orientation != Orientation::Linear {
        let (cx, cy) = (scene.width / 2.0, scene.height / 2.0);
        let _ = writeln!(
            out,
            r#"  <text x="{cx}" y="{}" font-family="{}" font-size="{}" font-weight="bold" fill="{}" text-anchor="middle">{}</text>"#,
            cy - 20.0,
            escape(&theme.font),
            theme.value_font_size,
            theme.accent.to_hex(),
            escape(&view.value_label),
        );
        let _ = writeln!(
            out,
            r#"  <text x="{cx}" y="{}" font-size="14" fill="{}" text-anchor="middle">{}</text>"#,
            cy + 30.0,
            theme.text.to_hex(),
            escape(&view.unit),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn shape(out: &mut String, shape: &Shape, layer: LayerStyle) {
    match shape {
        Shape::Bar(rect) => {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                layer.color.to_hex(),
                r = rect.corner_radius,
            );
        }
        Shape::Arc(arc) if arc.is_degenerate() => {}
        Shape::Arc(arc) => {
            let _ = writeln!(
                out,
                r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round"/>"#,
                arc.to_path(),
                layer.color.to_hex(),
                layer.stroke_width,
            );
        }
    }
}

fn indicator(out: &mut String, indicator: &Indicator, layer: LayerStyle, theme: &Theme) {
    let accent = layer.color.to_hex();
    match *indicator {
        Indicator::Pointer { outline, hub, hub_radius, .. } => {
            let points: Vec<String> = outline.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            let _ = writeln!(out, r#"  <polygon points="{}" fill="{accent}"/>"#, points.join(" "));
            let _ = writeln!(
                out,
                r##"  <circle cx="{}" cy="{}" r="{hub_radius}" fill="#ffffff"/>"##,
                hub.x, hub.y
            );
        }
        Indicator::Dot { center, radius } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{accent}" stroke="{}" stroke-width="2"/>"#,
                center.x,
                center.y,
                theme.background.to_hex(),
            );
        }
        Indicator::Needle { hub, tip, hub_radius } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{hub_radius}" fill="{accent}"/>"#,
                hub.x, hub.y
            );
            let _ = writeln!(
                out,
                r#"  <path d="M {} {} L {} {}" stroke="{accent}" stroke-width="{}"/>"#,
                hub.x, hub.y, tip.x, tip.y, layer.stroke_width
            );
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
