use crate::arc::ArcSpec;
use crate::domain::AngularDomain;
use crate::drag::{DragSession, DragStart};
use crate::geometry::{Convention, Point};
use crate::mapper;
use crate::pointer::{Document, HitRegion, PointerEvent, Propagation};
use crate::settings::DialKind;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub mod elevation;
pub mod heading;

pub use elevation::ElevationControl;
pub use heading::HeadingControl;

pub const ARC_INSET: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialProfile {
    pub convention: Convention,
    pub visual: AngularDomain,
    /// Visual degrees per stored unit.
    pub scale: f64,
}

impl DialProfile {
    /// `None` when the pointer cannot be turned into a usable value.
    pub fn map_pointer(&self, pointer: Point, center: Point) -> Option<f64> {
        let raw = mapper::pointer_to_angle(pointer, center, self.convention);
        let visual = mapper::normalize_to_domain(raw, &self.visual);
        let stored = mapper::scale_visual_to_stored(visual, self.scale);
        stored.is_finite().then_some(stored)
    }

    pub fn rotation(&self, value: f64) -> f64 {
        mapper::value_to_rotation(value, self.scale, self.convention)
    }

    pub fn slice(&self, lo: f64, hi: f64, radius: f64) -> ArcSpec {
        let (start, end) = self.convention.compass_span(lo, hi);
        ArcSpec::new(start, end, radius - ARC_INSET, radius)
    }

    pub fn exclusion_arcs(&self, radius: f64) -> [ArcSpec; 2] {
        let (floor, ceiling) = self.visual.extent();
        [
            self.slice(floor, self.visual.min(), radius),
            self.slice(self.visual.max(), ceiling, radius),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    pub value: f64,
    pub domain: AngularDomain,
    pub radius: f64,
}

type CommitFn = Rc<RefCell<dyn FnMut(f64)>>;

struct Dial {
    kind: DialKind,
    state: ControlState,
    profile: DialProfile,
    region: Box<dyn HitRegion>,
    document: Document,
    session: DragSession,
    on_commit: CommitFn,
}

impl Dial {
    fn store(&mut self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            log::trace!("{} dial ignored non-finite value {}", self.kind, value);
            return None;
        }
        self.state.value = self.state.domain.clamp(value);
        Some(self.state.value)
    }

    fn drag_to(&mut self, pointer: Point) -> Option<f64> {
        let Some(center) = self.region.bounds().center() else {
            log::trace!("{} dial has no size yet, move dropped", self.kind);
            return None;
        };
        let value = self.profile.map_pointer(pointer, center)?;
        self.store(value)
    }
}

#[derive(Clone)]
pub(crate) struct DialHandle {
    inner: Rc<RefCell<Dial>>,
}

impl DialHandle {
    /// The initial value is clamped and committed right away.
    pub(crate) fn mount(
        kind: DialKind,
        mut state: ControlState,
        profile: DialProfile,
        region: Box<dyn HitRegion>,
        document: &Document,
        on_commit: impl FnMut(f64) + 'static,
    ) -> Self {
        let initial = state.value;
        if !initial.is_finite() {
            state.value = state.domain.min();
        }

        let handle = Self {
            inner: Rc::new(RefCell::new(Dial {
                kind,
                state,
                profile,
                region,
                document: document.clone(),
                session: DragSession::new(),
                on_commit: Rc::new(RefCell::new(on_commit)),
            })),
        };

        let value = handle.inner.borrow().state.value;
        handle.commit(value);
        if handle.value() != initial {
            log::debug!(
                "{} dial corrected initial value {} to {}",
                kind,
                initial,
                handle.value()
            );
        }
        handle
    }

    pub(crate) fn value(&self) -> f64 {
        self.inner.borrow().state.value
    }

    pub(crate) fn state(&self) -> ControlState {
        self.inner.borrow().state
    }

    pub(crate) fn profile(&self) -> DialProfile {
        self.inner.borrow().profile
    }

    pub(crate) fn rotation(&self) -> f64 {
        let dial = self.inner.borrow();
        dial.profile.rotation(dial.state.value)
    }

    pub(crate) fn exclusion_arcs(&self) -> [ArcSpec; 2] {
        let dial = self.inner.borrow();
        dial.profile.exclusion_arcs(dial.state.radius)
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.inner.borrow().session.is_active()
    }

    /// Programmatic commit; out-of-range values are clamped, non-finite ones ignored.
    pub(crate) fn commit(&self, value: f64) {
        self.update(|dial| dial.store(value));
    }

    pub(crate) fn reconfigure(&self, domain: AngularDomain, profile: DialProfile, radius: f64) {
        self.update(|dial| {
            dial.state.domain = domain;
            dial.state.radius = radius;
            dial.profile = profile;
            dial.store(dial.state.value)
        });
    }

    pub(crate) fn pointer_down(&self) -> Propagation {
        let weak = Rc::downgrade(&self.inner);
        let mut dial = self.inner.borrow_mut();
        let document = dial.document.clone();

        let kind = dial.kind;
        let started = dial
            .session
            .begin(&document, move |event| Self::on_pointer(&weak, event));
        if started == DragStart::AlreadyActive {
            log::debug!("{} dial is already dragging", kind);
        }
        Propagation::Stop
    }

    pub(crate) fn teardown(&self) {
        self.inner.borrow_mut().session.end();
    }

    fn on_pointer(weak: &Weak<RefCell<Dial>>, event: PointerEvent) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let handle = Self { inner };
        match event {
            PointerEvent::Move(pointer) => handle.update(|dial| dial.drag_to(pointer)),
            PointerEvent::Up => {
                handle.inner.borrow_mut().session.end();
            }
        }
    }

    // commits requested from inside `on_commit` are refused before storing
    fn update(&self, change: impl FnOnce(&mut Dial) -> Option<f64>) {
        let (kind, on_commit) = {
            let dial = self.inner.borrow();
            (dial.kind, dial.on_commit.clone())
        };
        let Ok(mut callback) = on_commit.try_borrow_mut() else {
            log::warn!("{} dial refused a commit made while committing", kind);
            return;
        };
        let stored = change(&mut *self.inner.borrow_mut());
        if let Some(stored) = stored {
            (&mut *callback)(stored);
        }
    }
}
