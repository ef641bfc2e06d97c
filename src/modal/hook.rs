use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::modal::controller::{BrowserHost, ModalContent, ModalController, ModalHost, ModalState};

pub type SharedController<H> = Rc<RefCell<Option<ModalController<H>>>>;

#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    pub state: ModalState,
    pub open: Callback<ModalContent>,
    pub close: Callback<()>,
}

/// Closes the controller, if any, and pushes `Closed` to the view when
/// something was actually open.
pub fn close_modal<H: ModalHost>(controller: &SharedController<H>, set_view: &Callback<ModalState>) {
    let closed = controller
        .borrow_mut()
        .as_mut()
        .map(|c| c.close())
        .unwrap_or(false);
    if closed {
        set_view.emit(ModalState::Closed);
    }
}

/// The cancel-key handler. Holds the controller weakly so the key listener
/// never keeps it alive.
fn cancel_callback<H: ModalHost + 'static>(
    controller: &SharedController<H>,
    set_view: Callback<ModalState>,
) -> Callback<()> {
    let weak = Rc::downgrade(controller);
    Callback::from(move |_: ()| {
        if let Some(controller) = weak.upgrade() {
            close_modal(&controller, &set_view);
        }
    })
}

/// Creates the controller on first use, then opens `content` and pushes
/// the new state to the view.
pub fn open_modal<H: ModalHost + 'static>(
    controller: &SharedController<H>,
    host: H,
    content: ModalContent,
    set_view: &Callback<ModalState>,
) {
    let on_cancel = cancel_callback(controller, set_view.clone());
    let state = {
        let mut slot = controller.borrow_mut();
        let active = slot.get_or_insert_with(|| ModalController::new(host, on_cancel));
        active.open(content);
        active.state().clone()
    };
    set_view.emit(state);
}

/// One modal per calling component. The controller is dropped with the
/// component, which releases anything it still holds.
#[hook]
pub fn use_modal() -> ModalHandle {
    let view = use_state(ModalState::default);
    let controller: SharedController<BrowserHost> = use_mut_ref(|| None);

    let set_view = {
        let view = view.clone();
        Callback::from(move |state: ModalState| view.set(state))
    };

    let close = {
        let controller = controller.clone();
        let set_view = set_view.clone();
        Callback::from(move |_: ()| close_modal(&controller, &set_view))
    };

    let open = {
        let controller = controller.clone();
        Callback::from(move |content: ModalContent| {
            open_modal(&controller, BrowserHost, content, &set_view)
        })
    };

    ModalHandle {
        state: (*view).clone(),
        open,
        close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::DemoKind;
    use crate::modal::controller::recording::RecordingHost;

    fn recording_view() -> (Callback<ModalState>, Rc<RefCell<Vec<ModalState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        (Callback::from(move |state: ModalState| log.borrow_mut().push(state)), seen)
    }

    fn content(title: &str) -> ModalContent {
        ModalContent::new(title, "https://www.loom.com/share/abc", DemoKind::Demo)
    }

    fn last(seen: &Rc<RefCell<Vec<ModalState>>>) -> Option<ModalState> {
        seen.borrow().last().cloned()
    }

    #[test]
    fn open_creates_controller_and_updates_view() {
        let host = RecordingHost::with_overflow("auto");
        let controller: SharedController<RecordingHost> = Rc::new(RefCell::new(None));
        let (set_view, seen) = recording_view();

        open_modal(&controller, host.clone(), content("Chat"), &set_view);

        assert!(controller.borrow().is_some());
        assert_eq!(last(&seen), Some(ModalState::Open(content("Chat"))));
        assert_eq!(host.overflow(), "hidden");
        assert_eq!(host.active_listeners(), 1);
    }

    #[test]
    fn escape_closes_and_syncs_the_view() {
        let host = RecordingHost::with_overflow("auto");
        let controller: SharedController<RecordingHost> = Rc::new(RefCell::new(None));
        let (set_view, seen) = recording_view();

        open_modal(&controller, host.clone(), content("Chat"), &set_view);
        host.press("Escape");

        assert_eq!(last(&seen), Some(ModalState::Closed));
        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.overflow(), "auto");
    }

    #[test]
    fn close_syncs_the_view_once() {
        let host = RecordingHost::default();
        let controller: SharedController<RecordingHost> = Rc::new(RefCell::new(None));
        let (set_view, seen) = recording_view();

        open_modal(&controller, host.clone(), content("Chat"), &set_view);
        close_modal(&controller, &set_view);
        close_modal(&controller, &set_view);

        assert_eq!(
            *seen.borrow(),
            vec![ModalState::Open(content("Chat")), ModalState::Closed]
        );
    }

    #[test]
    fn close_before_any_open_leaves_the_view_alone() {
        let controller: SharedController<RecordingHost> = Rc::new(RefCell::new(None));
        let (set_view, seen) = recording_view();

        close_modal(&controller, &set_view);

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn reopening_reuses_the_controller() {
        let host = RecordingHost::default();
        let controller: SharedController<RecordingHost> = Rc::new(RefCell::new(None));
        let (set_view, seen) = recording_view();

        open_modal(&controller, host.clone(), content("First"), &set_view);
        open_modal(&controller, host.clone(), content("Second"), &set_view);

        assert_eq!(last(&seen), Some(ModalState::Open(content("Second"))));
        assert_eq!(host.registrations(), 1);

        host.press("Escape");
        open_modal(&controller, host.clone(), content("Third"), &set_view);
        assert_eq!(host.registrations(), 2);
        assert_eq!(host.active_listeners(), 1);
    }

    #[test]
    fn dropping_the_component_releases_the_session() {
        let host = RecordingHost::with_overflow("scroll");
        let (set_view, seen) = recording_view();
        {
            let controller: SharedController<RecordingHost> = Rc::new(RefCell::new(None));
            open_modal(&controller, host.clone(), content("Chat"), &set_view);
        }

        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.overflow(), "scroll");
        // Nothing left to cancel once the controller is gone
        host.press("Escape");
        assert_eq!(seen.borrow().len(), 1);
    }
}
