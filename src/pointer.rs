use crate::geometry::{Point, Rect};
use derive_more::Display;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Proceed,
    Stop,
}

/// Where a dial currently sits on screen, asked again on every move.
pub trait HitRegion {
    fn bounds(&self) -> Rect;
}

impl HitRegion for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl<F: Fn() -> Rect> HitRegion for F {
    fn bounds(&self) -> Rect {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(PointerEvent)>;

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerId, Listener>>,
}

#[derive(Clone, Default)]
pub struct Document {
    registry: Rc<Registry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn listen(&self, listener: impl Fn(PointerEvent) + 'static) -> ListenerGuard {
        let id = ListenerId(self.registry.next_id.get());
        self.registry.next_id.set(id.0 + 1);
        self.registry
            .listeners
            .borrow_mut()
            .insert(id, Rc::new(listener));
        log::trace!("Pointer listener {} registered", id);

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// A listener removed earlier in the same dispatch is not called.
    pub fn dispatch(&self, event: PointerEvent) {
        let snapshot: Vec<(ListenerId, Listener)> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, l.clone()))
            .collect();

        for (id, listener) in snapshot {
            let live = self.registry.listeners.borrow().contains_key(&id);
            if live {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<Registry>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.listeners.borrow_mut().remove(&self.id);
            log::trace!("Pointer listener {} released", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(document: &Document) -> (ListenerGuard, Rc<RefCell<Vec<PointerEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let guard = document.listen(move |e| sink.borrow_mut().push(e));
        (guard, seen)
    }

    #[test]
    fn test_guard_releases_listener() {
        let document = Document::new();
        let (guard, seen) = recorder(&document);

        document.dispatch(PointerEvent::Move(Point::new(1.0, 2.0)));
        assert_eq!(document.listener_count(), 1);

        drop(guard);
        document.dispatch(PointerEvent::Up);

        assert_eq!(document.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![PointerEvent::Move(Point::new(1.0, 2.0))]);
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let document = Document::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let guards: Vec<_> = (0..3)
            .map(|i| {
                let order = order.clone();
                document.listen(move |_| order.borrow_mut().push(i))
            })
            .collect();

        document.dispatch(PointerEvent::Up);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_ne!(guards[0].id(), guards[1].id());
    }

    #[test]
    fn test_listener_can_release_itself_while_dispatching() {
        let document = Document::new();
        let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let guard = {
            let slot = slot.clone();
            let calls = calls.clone();
            document.listen(move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(guard);

        document.dispatch(PointerEvent::Up);
        document.dispatch(PointerEvent::Up);

        assert_eq!(calls.get(), 1);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_guard_outliving_document() {
        let document = Document::new();
        let (guard, _seen) = recorder(&document);
        drop(document);
        drop(guard);
    }

    #[test]
    fn test_closure_hit_region() {
        let region = || Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(region.bounds().center(), Some(Point::new(5.0, 5.0)));
    }
}
