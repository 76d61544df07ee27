use super::{ControlState, DialHandle};
use crate::arc::ArcSpec;
use crate::domain::DomainError;
use crate::pointer::{Document, HitRegion, Propagation};
use crate::settings::{DialKind, HeadingSettings};

/// The compass dial: 0° up, clockwise, wrapping at 360°.
#[derive(Clone)]
pub struct HeadingControl {
    dial: DialHandle,
}

impl HeadingControl {
    pub fn mount(
        settings: &HeadingSettings,
        initial: f64,
        document: &Document,
        region: impl HitRegion + 'static,
        on_commit: impl FnMut(f64) + 'static,
    ) -> Result<Self, DomainError> {
        let state = ControlState {
            value: initial,
            domain: settings.domain()?,
            radius: settings.radius()?,
        };
        let dial = DialHandle::mount(
            DialKind::Heading,
            state,
            settings.profile()?,
            Box::new(region),
            document,
            on_commit,
        );
        Ok(Self { dial })
    }

    pub fn value(&self) -> f64 {
        self.dial.value()
    }

    pub fn state(&self) -> ControlState {
        self.dial.state()
    }

    pub fn rotation(&self) -> f64 {
        self.dial.rotation()
    }

    /// `[0, min]` and `[max, 360]`.
    pub fn exclusion_arcs(&self) -> [ArcSpec; 2] {
        self.dial.exclusion_arcs()
    }

    pub fn set_value(&self, value: f64) {
        self.dial.commit(value);
    }

    pub fn reconfigure(&self, settings: &HeadingSettings) -> Result<(), DomainError> {
        self.dial
            .reconfigure(settings.domain()?, settings.profile()?, settings.radius()?);
        Ok(())
    }

    pub fn pointer_down(&self) -> Propagation {
        self.dial.pointer_down()
    }

    pub fn is_dragging(&self) -> bool {
        self.dial.is_dragging()
    }

    pub fn teardown(&self) {
        self.dial.teardown();
    }
}
