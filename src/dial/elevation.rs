use super::{ControlState, DialHandle};
use crate::arc::ArcSpec;
use crate::domain::DomainError;
use crate::pointer::{Document, HitRegion, Propagation};
use crate::settings::{DialKind, ElevationSettings};

/// Compass span of the band painted behind the elevation needle.
pub const HIGHLIGHT_BAND: (f64, f64) = (58.0, 122.0);

#[derive(Clone)]
pub struct ElevationControl {
    dial: DialHandle,
}

impl ElevationControl {
    pub fn mount(
        settings: &ElevationSettings,
        initial: f64,
        document: &Document,
        region: impl HitRegion + 'static,
        on_commit: impl FnMut(f64) + 'static,
    ) -> Result<Self, DomainError> {
        let state = ControlState {
            value: initial,
            domain: settings.stored_domain()?,
            radius: settings.radius()?,
        };
        let dial = DialHandle::mount(
            DialKind::Elevation,
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

    pub fn exclusion_arcs(&self) -> [ArcSpec; 2] {
        self.dial.exclusion_arcs()
    }

    pub fn highlight_arc(&self) -> ArcSpec {
        let radius = self.dial.state().radius;
        let (start, end) = HIGHLIGHT_BAND;
        ArcSpec::new(start, end, radius - super::ARC_INSET, radius)
    }

    pub fn set_value(&self, value: f64) {
        self.dial.commit(value);
    }

    pub fn reconfigure(&self, settings: &ElevationSettings) -> Result<(), DomainError> {
        self.dial.reconfigure(
            settings.stored_domain()?,
            settings.profile()?,
            settings.radius()?,
        );
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

    pub fn scale(&self) -> f64 {
        self.dial.profile().scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::build_arc;
    use crate::geometry::{Convention, Point, Rect};
    use crate::mapper::{rotation_to_visual, scale_visual_to_stored};
    use crate::pointer::PointerEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    const BOUNDS: Rect = Rect {
        origin: Point { x: 0.0, y: 0.0 },
        width: 80.0,
        height: 80.0,
    };

    fn mount(initial: f64) -> (ElevationControl, Document, Rc<RefCell<Vec<f64>>>) {
        let document = Document::new();
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = commits.clone();
        let control = ElevationControl::mount(
            &ElevationSettings::default(),
            initial,
            &document,
            BOUNDS,
            move |v| sink.borrow_mut().push(v),
        )
        .unwrap();
        (control, document, commits)
    }

    /// Pointer at `degrees` above the east axis (negative is below).
    fn tilted(degrees: f64) -> PointerEvent {
        let radians = degrees.to_radians();
        PointerEvent::Move(Point::new(
            40.0 + 30.0 * radians.cos(),
            40.0 - 30.0 * radians.sin(),
        ))
    }

    #[test]
    fn test_mount_clamps_initial_value() {
        let (control, _document, commits) = mount(40.0);
        assert_eq!(control.value(), 15.0);
        assert_eq!(*commits.borrow(), vec![15.0]);
    }

    #[test]
    fn test_drag_halves_visual_angle() {
        let (control, document, commits) = mount(0.0);
        commits.borrow_mut().clear();

        control.pointer_down();
        document.dispatch(tilted(20.0));
        document.dispatch(tilted(21.0));
        document.dispatch(tilted(-21.0));
        document.dispatch(tilted(12.3));

        assert_eq!(*commits.borrow(), vec![10.0, 10.0, -11.0, 6.0]);
    }

    #[test]
    fn test_drag_clamps_at_both_extremes() {
        let (control, document, _commits) = mount(0.0);
        control.pointer_down();

        document.dispatch(tilted(80.0));
        assert_eq!(control.value(), 15.0);
        // just past the lower limit must not jump to the upper one
        document.dispatch(tilted(-31.0));
        assert_eq!(control.value(), -15.0);
        document.dispatch(tilted(-170.0));
        assert_eq!(control.value(), -15.0);
        document.dispatch(tilted(170.0));
        assert_eq!(control.value(), 15.0);
    }

    #[test]
    fn test_pointer_at_center_commits_zero() {
        let (control, document, _commits) = mount(10.0);
        control.pointer_down();
        document.dispatch(PointerEvent::Move(Point::new(40.0, 40.0)));
        assert_eq!(control.value(), 0.0);
    }

    #[test]
    fn test_rotation_round_trip() {
        let (control, _document, _commits) = mount(10.0);
        assert_eq!(control.rotation(), -290.0);

        let visual = rotation_to_visual(control.rotation(), Convention::ELEVATION);
        assert_eq!(scale_visual_to_stored(visual, control.scale()), 10.0);
    }

    #[test]
    fn test_highlight_arc_is_fixed() {
        let (control, document, _commits) = mount(0.0);
        let before = control.highlight_arc();
        control.pointer_down();
        document.dispatch(tilted(25.0));

        assert_eq!(control.highlight_arc(), before);
        assert_eq!(before, ArcSpec::new(58.0, 122.0, 36.0, 40.0));
        assert!(!build_arc(&before).large_arc);
    }

    #[test]
    fn test_exclusion_arcs_cross_the_seam() {
        let (control, _document, _commits) = mount(0.0);
        let [below, above] = control.exclusion_arcs();

        assert_eq!((below.start_angle, below.end_angle), (120.0, 270.0));
        assert_eq!((above.start_angle, above.end_angle), (-90.0, 60.0));
        assert_eq!(above.span(), 150.0);
        assert!(!build_arc(&below).large_arc);
        assert!(!build_arc(&above).large_arc);
    }

    #[test]
    fn test_teardown_mid_drag_releases_listener() {
        let (control, document, commits) = mount(0.0);
        control.pointer_down();
        assert!(control.is_dragging());
        control.teardown();
        commits.borrow_mut().clear();

        document.dispatch(tilted(20.0));
        assert!(!control.is_dragging());
        assert!(commits.borrow().is_empty());
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_two_controls_drag_independently() {
        let document = Document::new();
        let (heading_commits, elevation_commits) =
            (Rc::new(RefCell::new(Vec::new())), Rc::new(RefCell::new(Vec::new())));

        let sink = heading_commits.clone();
        let heading = crate::dial::HeadingControl::mount(
            &crate::settings::HeadingSettings::default(),
            0.0,
            &document,
            Rect::new(200.0, 0.0, 120.0, 120.0),
            move |v| sink.borrow_mut().push(v),
        )
        .unwrap();
        let sink = elevation_commits.clone();
        let elevation = ElevationControl::mount(
            &ElevationSettings::default(),
            0.0,
            &document,
            BOUNDS,
            move |v| sink.borrow_mut().push(v),
        )
        .unwrap();
        heading_commits.borrow_mut().clear();
        elevation_commits.borrow_mut().clear();

        elevation.pointer_down();
        document.dispatch(tilted(20.0));
        document.dispatch(PointerEvent::Up);

        assert_eq!(*elevation_commits.borrow(), vec![10.0]);
        assert!(heading_commits.borrow().is_empty());
        assert!(!heading.is_dragging());
    }
}
