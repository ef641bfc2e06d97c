//! Open/closed lifecycle for the demo modal.
//!
//! While a modal is open two document-wide resources are held: a `keydown`
//! listener that routes the cancel key to close, and an override of the
//! body's `overflow` that stops background scrolling. Both live in a
//! [`ModalSession`] and are released when it drops, so every exit path
//! (close, replacement, unmount) gives them back.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, KeyboardEvent};
use yew::Callback;

use crate::embed::DemoKind;

pub const CANCEL_KEY: &str = "Escape";
const SCROLL_LOCKED: &str = "hidden";

pub fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub content_url: String,
    pub kind: DemoKind,
}

impl ModalContent {
    pub fn new(title: impl Into<String>, content_url: impl Into<String>, kind: DemoKind) -> Self {
        Self {
            title: title.into(),
            content_url: content_url.into(),
            kind,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match self {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }
}

/// The document-level pieces a modal needs while open.
pub trait ModalHost: Clone {
    type Listener;

    /// Current inline `overflow` of the scrolling element, empty if unset.
    fn scroll_style(&self) -> String;
    fn set_scroll_style(&self, value: &str);
    fn add_key_listener(&self, handler: Box<dyn Fn(&str)>) -> Self::Listener;
    fn remove_key_listener(&self, listener: Self::Listener);
}

/// Scroll lock and cancel-key listener, held for as long as a modal is open.
pub struct ModalSession<H: ModalHost> {
    host: H,
    listener: Option<H::Listener>,
    prior_scroll: String,
}

impl<H: ModalHost> ModalSession<H> {
    pub fn acquire(host: H, on_cancel: Callback<()>) -> Self {
        let prior_scroll = host.scroll_style();
        host.set_scroll_style(SCROLL_LOCKED);
        let listener = host.add_key_listener(Box::new(move |key: &str| {
            if is_cancel_key(key) {
                on_cancel.emit(());
            }
        }));
        Self {
            host,
            listener: Some(listener),
            prior_scroll,
        }
    }
}

impl<H: ModalHost> Drop for ModalSession<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.remove_key_listener(listener);
        }
        self.host.set_scroll_style(&self.prior_scroll);
    }
}

/// Owns one modal's state. Opening while already open swaps the content
/// and keeps the session that is already held.
pub struct ModalController<H: ModalHost> {
    host: H,
    on_cancel: Callback<()>,
    state: ModalState,
    session: Option<ModalSession<H>>,
}

impl<H: ModalHost> ModalController<H> {
    pub fn new(host: H, on_cancel: Callback<()>) -> Self {
        Self {
            host,
            on_cancel,
            state: ModalState::Closed,
            session: None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn open(&mut self, content: ModalContent) {
        if self.session.is_none() {
            self.session = Some(ModalSession::acquire(
                self.host.clone(),
                self.on_cancel.clone(),
            ));
        }
        debug!("opening {:?} modal for {}", content.kind, content.title);
        self.state = ModalState::Open(content);
    }

    /// Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.state.is_open();
        self.session = None;
        self.state = ModalState::Closed;
        if was_open {
            debug!("modal closed");
        }
        was_open
    }
}

/// The live document: `keydown` on `document`, `overflow` on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

impl ModalHost for BrowserHost {
    type Listener = Closure<dyn Fn(KeyboardEvent)>;

    fn scroll_style(&self) -> String {
        body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_scroll_style(&self, value: &str) {
        let Some(body) = body() else { return };
        let style = body.style();
        if value.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", value);
        }
    }

    fn add_key_listener(&self, handler: Box<dyn Fn(&str)>) -> Self::Listener {
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            handler(&event.key());
        });
        if let Some(document) = document() {
            let _ = document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
        listener
    }

    fn remove_key_listener(&self, listener: Self::Listener) {
        if let Some(document) = document() {
            let _ = document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::recording::RecordingHost;
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn demo(title: &str) -> ModalContent {
        ModalContent::new(title, "https://www.loom.com/share/abc", DemoKind::Demo)
    }

    fn counting_cancel() -> (Callback<()>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        (Callback::from(move |_: ()| counter.set(counter.get() + 1)), count)
    }

    #[test]
    fn starts_closed() {
        let controller = ModalController::new(RecordingHost::default(), Callback::noop());
        assert_eq!(controller.state(), &ModalState::Closed);
        assert!(controller.state().content().is_none());
    }

    #[test]
    fn open_locks_scroll_and_listens() {
        let host = RecordingHost::with_overflow("auto");
        let mut controller = ModalController::new(host.clone(), Callback::noop());

        controller.open(demo("Chat"));

        assert!(controller.state().is_open());
        assert_eq!(host.overflow(), "hidden");
        assert_eq!(host.active_listeners(), 1);
    }

    #[test]
    fn close_restores_prior_scroll_value() {
        let host = RecordingHost::with_overflow("scroll");
        let mut controller = ModalController::new(host.clone(), Callback::noop());

        controller.open(demo("Chat"));
        assert!(controller.close());

        assert_eq!(controller.state(), &ModalState::Closed);
        assert_eq!(host.overflow(), "scroll");
        assert_eq!(host.active_listeners(), 0);
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let host = RecordingHost::with_overflow("auto");
        let mut controller = ModalController::new(host.clone(), Callback::noop());
        assert!(!controller.close());
        assert_eq!(host.overflow(), "auto");
    }

    #[test]
    fn only_the_cancel_key_cancels() {
        let host = RecordingHost::default();
        let (on_cancel, count) = counting_cancel();
        let mut controller = ModalController::new(host.clone(), on_cancel);
        controller.open(demo("Chat"));

        host.press("Enter");
        host.press("a");
        assert_eq!(count.get(), 0);

        host.press("Escape");
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn second_open_replaces_content_without_reacquiring() {
        let host = RecordingHost::with_overflow("auto");
        let mut controller = ModalController::new(host.clone(), Callback::noop());

        controller.open(demo("First"));
        controller.open(ModalContent::new("Second", "https://github.com/a/b", DemoKind::Code));

        assert_eq!(
            controller.state().content().map(|c| c.title.as_str()),
            Some("Second")
        );
        assert_eq!(host.active_listeners(), 1);
        assert_eq!(host.registrations(), 1);

        controller.close();
        assert_eq!(host.overflow(), "auto");
    }

    #[test]
    fn dropping_an_open_controller_releases_everything() {
        let host = RecordingHost::with_overflow("");
        {
            let mut controller = ModalController::new(host.clone(), Callback::noop());
            controller.open(demo("Chat"));
            assert_eq!(host.active_listeners(), 1);
        }
        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.overflow(), "");
    }

    proptest! {
        #[test]
        fn open_close_cycles_leave_nothing_behind(cycles in 1usize..40, prior in "(auto|scroll|visible|)") {
            let host = RecordingHost::with_overflow(&prior);
            let mut controller = ModalController::new(host.clone(), Callback::noop());
            for i in 0..cycles {
                controller.open(demo(&format!("Project {}", i)));
                prop_assert_eq!(host.active_listeners(), 1);
                controller.close();
                prop_assert_eq!(host.active_listeners(), 0);
                prop_assert_eq!(host.overflow(), prior.clone());
            }
        }
    }
}
