use meter_config::Orientation;
use serde::Serialize;

/// A point in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` along `angle_deg`
    /// (0° = +x, positive angles turn clockwise on screen).
    #[must_use]
    pub fn polar(self, angle_deg: f64, radius: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            x: self.x + radius * rad.cos(),
            y: self.y + radius * rad.sin(),
        }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight line from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to:   Point,
}

/// Axis-aligned rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x:             f64,
    pub y:             f64,
    pub width:         f64,
    pub height:        f64,
    pub corner_radius: f64,
}

/// Circular arc expressed as SVG path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcPath {
    pub start:       Point,
    pub end:         Point,
    pub radius:      f64,
    pub start_angle: f64,
    pub end_angle:   f64,
    /// Set when the arc spans more than 180°.
    pub large_arc:   bool,
    /// Always clockwise.
    pub sweep:       bool,
}

impl ArcPath {
    /// `true` when start and end angle coincide, i.e. nothing is drawn.
    pub fn is_degenerate(&self) -> bool {
        self.start_angle == self.end_angle
    }

    /// SVG path data: `M x1 y1 A r r 0 large sweep x2 y2`.
    pub fn to_path(&self) -> String {
        format!(
            "M {} {} A {r} {r} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y,
            r = self.radius,
        )
    }
}

/// Background or progress shape of a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Bar(Rect),
    Arc(ArcPath),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    Major,
    Minor,
}

/// One graduation mark on the scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub kind:     TickKind,
    /// Position along the scale in `[0, 1]`.
    pub fraction: f64,
    /// Scale value at this mark.
    pub value:    f64,
    pub line:     Segment,
    /// Label anchor for major ticks, line start for minor ones.
    pub position: Point,
    /// Rounded value; `None` for minor ticks.
    pub label:    Option<String>,
}

/// What marks the current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Indicator {
    /// Diamond pointer riding on the end of a linear fill.
    Pointer {
        tip:        Point,
        outline:    [Point; 4],
        hub:        Point,
        hub_radius: f64,
    },
    /// Dot sitting on the arc at the current angle.
    Dot { center: Point, radius: f64 },
    /// Line from the dial centre toward the current angle.
    Needle {
        hub:        Point,
        tip:        Point,
        hub_radius: f64,
    },
}

impl Indicator {
    /// The point that marks the current value on the scale.
    pub fn position(&self) -> Point {
        match *self {
            Indicator::Pointer { tip, .. } => tip,
            Indicator::Dot { center, .. } => center,
            Indicator::Needle { tip, .. } => tip,
        }
    }
}

/// Everything needed to draw one gauge, in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricScene {
    pub orientation: Orientation,
    pub width:       f64,
    pub height:      f64,
    pub background:  Shape,
    pub foreground:  Shape,
    /// Ordered along the scale, from its start to its end.
    pub ticks:       Vec<Tick>,
    pub indicator:   Indicator,
}

impl GeometricScene {
    pub fn major_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.kind == TickKind::Major)
    }

    pub fn minor_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.kind == TickKind::Minor)
    }
}
