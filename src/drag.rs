use crate::pointer::{Document, ListenerGuard, PointerEvent};

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(ListenerGuard),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    Started,
    /// A drag was already running; nothing was registered.
    AlreadyActive,
}

#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn begin(
        &mut self,
        document: &Document,
        listener: impl Fn(PointerEvent) + 'static,
    ) -> DragStart {
        if self.is_active() {
            return DragStart::AlreadyActive;
        }
        let guard = document.listen(listener);
        log::debug!("Drag started (listener {})", guard.id());
        self.state = DragState::Dragging(guard);
        DragStart::Started
    }

    /// Returns whether a drag was actually running.
    pub fn end(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(guard) => {
                log::debug!("Drag ended (listener {})", guard.id());
                true
            }
            DragState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_begin_registers_once() {
        let document = Document::new();
        let mut session = DragSession::new();

        assert_eq!(session.begin(&document, |_| {}), DragStart::Started);
        assert_eq!(session.begin(&document, |_| {}), DragStart::AlreadyActive);
        assert!(session.is_active());
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn test_end_releases_listener() {
        let document = Document::new();
        let mut session = DragSession::new();
        let moves = Rc::new(Cell::new(0));

        let counter = moves.clone();
        session.begin(&document, move |_| counter.set(counter.get() + 1));
        document.dispatch(PointerEvent::Up);
        assert!(session.end());
        assert!(!session.end());
        document.dispatch(PointerEvent::Up);

        assert_eq!(moves.get(), 1);
        assert_eq!(document.listener_count(), 0);
        assert!(!session.is_active());
    }

    #[test]
    fn test_dropping_session_releases_listener() {
        let document = Document::new();
        let mut session = DragSession::new();
        session.begin(&document, |_| {});
        drop(session);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_can_restart_after_end() {
        let document = Document::new();
        let mut session = DragSession::new();
        session.begin(&document, |_| {});
        session.end();
        assert_eq!(session.begin(&document, |_| {}), DragStart::Started);
        assert_eq!(document.listener_count(), 1);
    }
}
