use crate::dial::{ARC_INSET, DialProfile};
use crate::domain::{AngularDomain, DomainError};
use crate::geometry::Convention;
use crate::mapper::scale_visual_to_stored;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DialKind {
    #[strum(to_string = "Heading", serialize = "compass", serialize = "h")]
    Heading,
    #[strum(to_string = "Elevation", serialize = "tilt", serialize = "e")]
    Elevation,
}

fn check_radius(radius: f64) -> Result<f64, DomainError> {
    if radius.is_finite() && radius > ARC_INSET {
        Ok(radius)
    } else {
        Err(DomainError::InvalidRadius(radius))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadingSettings {
    pub radius: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            radius: 60.0,
            min: 0.0,
            max: 360.0,
        }
    }
}

impl HeadingSettings {
    pub fn radius(&self) -> Result<f64, DomainError> {
        check_radius(self.radius)
    }

    pub fn domain(&self) -> Result<AngularDomain, DomainError> {
        AngularDomain::new(self.min, self.max, true)
    }

    pub fn profile(&self) -> Result<DialProfile, DomainError> {
        Ok(DialProfile {
            convention: Convention::COMPASS,
            visual: self.domain()?,
            scale: 1.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElevationSettings {
    pub radius: f64,
    pub visual_min: f64,
    pub visual_max: f64,
    pub scale: f64,
}

impl Default for ElevationSettings {
    fn default() -> Self {
        Self {
            radius: 40.0,
            visual_min: -30.0,
            visual_max: 30.0,
            scale: 2.0,
        }
    }
}

impl ElevationSettings {
    pub fn radius(&self) -> Result<f64, DomainError> {
        check_radius(self.radius)
    }

    pub fn visual_domain(&self) -> Result<AngularDomain, DomainError> {
        AngularDomain::new(self.visual_min, self.visual_max, false)
    }

    /// The stored range: the visual range divided by the scale, floored.
    pub fn stored_domain(&self) -> Result<AngularDomain, DomainError> {
        let visual = self.visual_domain()?;
        let scale = self.scale()?;
        AngularDomain::new(
            scale_visual_to_stored(visual.min(), scale),
            scale_visual_to_stored(visual.max(), scale),
            false,
        )
    }

    pub fn scale(&self) -> Result<f64, DomainError> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(self.scale)
        } else {
            Err(DomainError::InvalidScale(self.scale))
        }
    }

    pub fn profile(&self) -> Result<DialProfile, DomainError> {
        Ok(DialProfile {
            convention: Convention::ELEVATION,
            visual: self.visual_domain()?,
            scale: self.scale()?,
        })
    }
}
