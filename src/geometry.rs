use serde::{Deserialize, Serialize};

pub const FULL_TURN: f64 = 360.0;
pub const HALF_TURN: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// `None` until the region has a real size (e.g. before the first layout).
    pub fn center(&self) -> Option<Point> {
        let sized = self.width > 0.0 && self.height > 0.0;
        let center = Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        );
        (sized && center.is_finite()).then_some(center)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub fn factor(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// A convention angle `a` sits at compass angle `origin + sign * a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convention {
    pub origin: f64,
    pub winding: Winding,
    pub rotation_offset: f64,
}

impl Convention {
    pub const COMPASS: Self = Self {
        origin: 0.0,
        winding: Winding::Clockwise,
        rotation_offset: 0.0,
    };

    /// 0 points east and angles grow counter-clockwise (upwards).
    pub const ELEVATION: Self = Self {
        origin: 90.0,
        winding: Winding::CounterClockwise,
        rotation_offset: -270.0,
    };

    pub fn sign(&self) -> f64 {
        self.winding.factor()
    }

    pub fn to_compass(&self, angle: f64) -> f64 {
        self.origin + self.sign() * angle
    }

    pub fn from_compass(&self, compass: f64) -> f64 {
        wrap_degrees(self.sign() * (compass - self.origin))
    }

    /// Compass span `(start, end)` covering the convention interval `[lo, hi]`,
    /// oriented so that `start -> end` runs clockwise.
    pub fn compass_span(&self, lo: f64, hi: f64) -> (f64, f64) {
        match self.winding {
            Winding::Clockwise => (self.to_compass(lo), self.to_compass(hi)),
            Winding::CounterClockwise => (self.to_compass(hi), self.to_compass(lo)),
        }
    }
}

pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    let radians = (angle - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 160.0, 160.0);
        assert_eq!(rect.center(), Some(Point::new(90.0, 100.0)));
    }

    #[test]
    fn test_zero_size_rect_has_no_center() {
        assert_eq!(Rect::default().center(), None);
        assert_eq!(Rect::new(5.0, 5.0, 0.0, 40.0).center(), None);
        assert_eq!(Rect::new(f64::NAN, 5.0, 40.0, 40.0).center(), None);
    }

    #[test]
    fn test_polar_to_cartesian_compass_directions() {
        let center = Point::new(80.0, 80.0);
        let cases = [
            (0.0, 80.0, 4.0),
            (90.0, 156.0, 80.0),
            (180.0, 80.0, 156.0),
            (270.0, 4.0, 80.0),
        ];

        for (angle, x, y) in cases {
            let p = polar_to_cartesian(center, 76.0, angle);
            assert_relative_eq!(p.x, x, epsilon = 1e-9);
            assert_relative_eq!(p.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_elevation_convention_round_trip() {
        let conv = Convention::ELEVATION;
        // up-right of center is +30 in elevation terms
        assert_eq!(conv.to_compass(30.0), 60.0);
        assert_relative_eq!(conv.from_compass(60.0), 30.0);
        assert_relative_eq!(conv.from_compass(120.0), 330.0);
    }

    #[test]
    fn test_compass_span_orientation() {
        assert_eq!(Convention::COMPASS.compass_span(0.0, 20.0), (0.0, 20.0));
        assert_eq!(
            Convention::ELEVATION.compass_span(30.0, 180.0),
            (-90.0, 60.0)
        );
    }
}
