use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use radial::{Document, HitRegion, Point, PointerEvent, Propagation, Rect};

#[derive(Clone)]
pub struct WidgetRegion {
    widget: glib::WeakRef<gtk::Widget>,
    root: glib::WeakRef<gtk::ApplicationWindow>,
}

impl WidgetRegion {
    pub fn new(widget: &impl IsA<gtk::Widget>, root: &gtk::ApplicationWindow) -> Self {
        Self {
            widget: widget.upcast_ref::<gtk::Widget>().downgrade(),
            root: root.downgrade(),
        }
    }
}

impl HitRegion for WidgetRegion {
    fn bounds(&self) -> Rect {
        self.widget
            .upgrade()
            .zip(self.root.upgrade())
            .and_then(|(widget, root)| widget.compute_bounds(&root))
            .map(|b| {
                Rect::new(
                    b.x() as f64,
                    b.y() as f64,
                    b.width() as f64,
                    b.height() as f64,
                )
            })
            .unwrap_or_default()
    }
}

/// Forwards every pointer move and release inside `window` to `document`,
/// before any widget gets to handle it.
pub fn forward_pointer(window: &gtk::ApplicationWindow, document: &Document) {
    let controller = gtk::EventControllerLegacy::new();
    controller.set_propagation_phase(gtk::PropagationPhase::Capture);

    let document = document.clone();
    let weak_window = window.downgrade();
    controller.connect_event(move |_, event| {
        match event.event_type() {
            gdk::EventType::MotionNotify => {
                let position = event.position().zip(weak_window.upgrade());
                if let Some(((x, y), window)) = position {
                    // event coordinates are surface-relative
                    let (ox, oy) = window.surface_transform();
                    document.dispatch(PointerEvent::Move(Point::new(x - ox, y - oy)));
                }
            }
            gdk::EventType::ButtonRelease | gdk::EventType::GrabBroken => {
                document.dispatch(PointerEvent::Up);
            }
            _ => {}
        }
        glib::Propagation::Proceed
    });

    window.add_controller(controller);
}

pub fn attach_press(area: &gtk::DrawingArea, on_press: impl Fn() -> Propagation + 'static) {
    let gesture = gtk::GestureClick::new();
    gesture.set_button(gdk::BUTTON_PRIMARY);
    gesture.connect_pressed(move |gesture, _, _, _| {
        if on_press() == Propagation::Stop {
            // keep enclosing widgets from claiming the press
            gesture.set_state(gtk::EventSequenceState::Claimed);
        }
    });
    area.add_controller(gesture);
}

pub fn attach_teardown(area: &gtk::DrawingArea, teardown: impl Fn() + 'static) {
    area.connect_destroy(move |_| teardown());
}
