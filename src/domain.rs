use crate::geometry::{FULL_TURN, HALF_TURN};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Domain bounds must be finite (min: {min}, max: {max})")]
    NonFinite { min: f64, max: f64 },
    #[error("Domain minimum {min} is above its maximum {max}")]
    Inverted { min: f64, max: f64 },
    #[error("Domain bounds {min}..{max} leave the circle ({floor}..{ceiling})")]
    OffCircle {
        min: f64,
        max: f64,
        floor: f64,
        ceiling: f64,
    },
    #[error("Scale factor must be a positive finite number, got {0}")]
    InvalidScale(f64),
    #[error("Dial radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularDomain {
    min: f64,
    max: f64,
    wraps: bool,
}

impl AngularDomain {
    pub fn new(min: f64, max: f64, wraps: bool) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFinite { min, max });
        }
        if min > max {
            return Err(DomainError::Inverted { min, max });
        }
        let domain = Self { min, max, wraps };
        let (floor, ceiling) = domain.extent();
        // a wrapping domain may touch both ends; the others exclude -180
        let above_floor = if wraps { min >= floor } else { min > floor };
        if !above_floor || max > ceiling {
            return Err(DomainError::OffCircle {
                min,
                max,
                floor,
                ceiling,
            });
        }
        Ok(domain)
    }

    pub fn full_circle() -> Self {
        Self {
            min: 0.0,
            max: FULL_TURN,
            wraps: true,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn wraps(&self) -> bool {
        self.wraps
    }

    pub fn extent(&self) -> (f64, f64) {
        if self.wraps {
            (0.0, FULL_TURN)
        } else {
            (-HALF_TURN, HALF_TURN)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// NaN stays NaN; callers decide what a non-finite value means.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Lowest whole-degree value the domain admits, or `min` itself when the
    /// domain is narrower than a degree.
    pub fn whole_degree_floor(&self) -> f64 {
        let lo = self.min.ceil();
        if lo <= self.max { lo } else { self.min }
    }
}

impl Default for AngularDomain {
    fn default() -> Self {
        Self::full_circle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_bounds() {
        assert_eq!(
            AngularDomain::new(200.0, 20.0, true),
            Err(DomainError::Inverted {
                min: 200.0,
                max: 20.0
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        assert!(matches!(
            AngularDomain::new(f64::NAN, 20.0, true),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            AngularDomain::new(0.0, f64::INFINITY, false),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_wrapping_bounds_stay_on_circle() {
        assert!(matches!(
            AngularDomain::new(20.0, 400.0, true),
            Err(DomainError::OffCircle { .. })
        ));
        assert!(matches!(
            AngularDomain::new(-30.0, 30.0, true),
            Err(DomainError::OffCircle { .. })
        ));
        assert!(AngularDomain::new(0.0, 360.0, true).is_ok());
    }

    #[test]
    fn test_non_wrapping_bounds_stay_within_half_turn() {
        assert!(matches!(
            AngularDomain::new(-180.0, 30.0, false),
            Err(DomainError::OffCircle { .. })
        ));
        assert!(matches!(
            AngularDomain::new(-30.0, 200.0, false),
            Err(DomainError::OffCircle { .. })
        ));
        assert!(AngularDomain::new(-179.5, 180.0, false).is_ok());
    }

    #[test]
    fn test_clamp_keeps_value_in_bounds() {
        let domain = AngularDomain::new(20.0, 200.0, true).unwrap();
        assert_eq!(domain.clamp(15.0), 20.0);
        assert_eq!(domain.clamp(210.0), 200.0);
        assert_eq!(domain.clamp(90.0), 90.0);
        assert!(domain.clamp(f64::NAN).is_nan());
    }

    #[test]
    fn test_extent() {
        assert_eq!(AngularDomain::full_circle().extent(), (0.0, 360.0));
        let elevation = AngularDomain::new(-30.0, 30.0, false).unwrap();
        assert_eq!(elevation.extent(), (-180.0, 180.0));
    }

    #[test]
    fn test_whole_degree_floor() {
        let domain = AngularDomain::new(20.5, 200.0, true).unwrap();
        assert_eq!(domain.whole_degree_floor(), 21.0);
        let narrow = AngularDomain::new(20.2, 20.7, true).unwrap();
        assert_eq!(narrow.whole_degree_floor(), 20.2);
    }
}
