use crate::geometry::{FULL_TURN, HALF_TURN, Point, polar_to_cartesian};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub start_angle: f64,
    pub end_angle: f64,
    pub arc_radius: f64,
    /// The slice is centered at `(origin_radius, origin_radius)`.
    pub origin_radius: f64,
}

impl ArcSpec {
    pub fn new(start_angle: f64, end_angle: f64, arc_radius: f64, origin_radius: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            arc_radius,
            origin_radius,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.origin_radius, self.origin_radius)
    }

    pub fn span(&self) -> f64 {
        let delta = self.end_angle - self.start_angle;
        if delta < 0.0 { delta + FULL_TURN } else { delta }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// `M origin L arc_start A r,r 0 large 0 arc_end Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathDescription {
    pub origin: Point,
    pub arc_start: Point,
    pub arc_end: Point,
    pub radius: f64,
    pub large_arc: bool,
}

impl PathDescription {
    pub const SWEEP: bool = false;

    pub fn commands(&self) -> [PathCommand; 4] {
        [
            PathCommand::MoveTo(self.origin),
            PathCommand::LineTo(self.arc_start),
            PathCommand::ArcTo {
                radius: self.radius,
                large_arc: self.large_arc,
                sweep: Self::SWEEP,
                to: self.arc_end,
            },
            PathCommand::Close,
        ]
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {},{}", num(p.x), num(p.y)),
            Self::LineTo(p) => write!(f, "L {},{}", num(p.x), num(p.y)),
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {r},{r} 0 {} {} {},{}",
                u8::from(*large_arc),
                u8::from(*sweep),
                num(to.x),
                num(to.y),
                r = num(*radius),
            ),
            Self::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

fn num(value: f64) -> f64 {
    // never print "-0"
    value + 0.0
}

pub fn build_arc(spec: &ArcSpec) -> PathDescription {
    let origin = spec.origin();
    PathDescription {
        origin,
        arc_start: polar_to_cartesian(origin, spec.arc_radius, spec.end_angle),
        arc_end: polar_to_cartesian(origin, spec.arc_radius, spec.start_angle),
        radius: spec.arc_radius,
        large_arc: spec.span() > HALF_TURN,
    }
}
