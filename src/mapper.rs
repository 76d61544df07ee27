use crate::domain::AngularDomain;
use crate::geometry::{Convention, FULL_TURN, HALF_TURN, Point, wrap_degrees};

/// Raws closer than this to a whole degree count as that degree.
const WHOLE_DEGREE_TOLERANCE: f64 = 1e-9;

/// 0° is up, growing clockwise.
pub fn pointer_to_domain_angle(pointer: Point, center: Point) -> f64 {
    pointer_to_angle(pointer, center, Convention::COMPASS)
}

/// A pointer sitting exactly on the center maps to 0 in every convention.
pub fn pointer_to_angle(pointer: Point, center: Point, convention: Convention) -> f64 {
    let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    let compass = wrap_degrees(-dx.atan2(dy).to_degrees() + HALF_TURN);
    if convention == Convention::COMPASS {
        compass
    } else {
        convention.from_compass(compass)
    }
}

/// Quantizes a raw angle to whole degrees (rounding up) and clamps it into `domain`.
pub fn normalize_to_domain(raw: f64, domain: &AngularDomain) -> f64 {
    if !raw.is_finite() {
        return f64::NAN;
    }

    let unwrapped = if domain.wraps() {
        if (0.0..=FULL_TURN).contains(&raw) {
            raw
        } else {
            wrap_degrees(raw)
        }
    } else if raw > HALF_TURN {
        raw - FULL_TURN
    } else {
        raw
    };

    // `+ 0.0` turns a negative zero into a plain zero
    ceil_degrees(unwrapped).clamp(domain.whole_degree_floor(), domain.max()) + 0.0
}

fn ceil_degrees(angle: f64) -> f64 {
    let nearest = angle.round();
    if (angle - nearest).abs() < WHOLE_DEGREE_TOLERANCE {
        nearest
    } else {
        angle.ceil()
    }
}

pub fn scale_visual_to_stored(visual: f64, scale: f64) -> f64 {
    (visual / scale).floor() + 0.0
}

pub fn value_to_rotation(value: f64, scale: f64, convention: Convention) -> f64 {
    convention.sign() * (value * scale) + convention.rotation_offset
}

pub fn rotation_to_visual(rotation: f64, convention: Convention) -> f64 {
    (rotation - convention.rotation_offset) * convention.sign()
}
