use yew::prelude::*;

use crate::embed;
use crate::modal::controller::ModalState;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let Some(content) = props.state.content() else {
        return html! {};
    };

    let resolution = embed::resolve(&content.content_url, content.kind, &content.title);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="demo-modal-backdrop" onclick={close.clone()}>
            <div
                class="demo-modal"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="demo-modal-header">
                    <h2>{resolution.display_title.clone()}</h2>
                    <button class="demo-modal-close" onclick={close} aria-label="Close modal">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        </svg>
                    </button>
                </div>

                <div class="demo-modal-frame">
                    <iframe
                        src={resolution.embed_url.clone()}
                        allow={IFRAME_ALLOW}
                        allowfullscreen=true
                        title={resolution.display_title.clone()}
                    />
                </div>

                <div class="demo-modal-footer">
                    <p>{"Press "}<kbd>{"Esc"}</kbd>{" to close"}</p>
                    <a href={content.content_url.clone()} target="_blank" rel="noopener noreferrer">
                        {format!("{} →", resolution.footer_label)}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .demo-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                    animation: demoModalFade 0.2s ease-out;
                }
                .demo-modal {
                    width: 100%;
                    max-width: 72rem;
                    max-height: 90vh;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: var(--card-bg);
                    color: var(--page-fg);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    animation: demoModalPop 0.25s ease-out;
                }
                .demo-modal-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    border-bottom: 1px solid var(--border);
                }
                .demo-modal-header h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .demo-modal-close {
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: var(--subtle-gray);
                    cursor: pointer;
                }
                .demo-modal-close:hover {
                    background: var(--surface);
                }
                .demo-modal-close svg {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .demo-modal-frame {
                    position: relative;
                    padding-bottom: 56.25%;
                    height: 0;
                }
                .demo-modal-frame iframe {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                .demo-modal-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    border-top: 1px solid var(--border);
                    background: var(--surface);
                    font-size: 0.875rem;
                }
                .demo-modal-footer p {
                    margin: 0;
                    color: var(--subtle-gray);
                }
                .demo-modal-footer kbd {
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    background: var(--border);
                    font-size: 0.75rem;
                }
                .demo-modal-footer a {
                    color: var(--accent-blue);
                    font-weight: 500;
                    text-decoration: none;
                }
                @keyframes demoModalFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes demoModalPop {
                    from { opacity: 0; transform: scale(0.9) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{window, Element, HtmlElement};

    use super::*;
    use crate::embed::DemoKind;
    use crate::modal::controller::ModalContent;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount(state: ModalState) -> (Element, Rc<Cell<u32>>) {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let closes = Rc::new(Cell::new(0));
        let counter = closes.clone();
        let props = DemoModalProps {
            state,
            on_close: Callback::from(move |_: ()| counter.set(counter.get() + 1)),
        };
        yew::Renderer::<DemoModal>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(0).await;
        (root, closes)
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn open_state() -> ModalState {
        ModalState::Open(ModalContent::new("Chat", "about:blank", DemoKind::Demo))
    }

    #[wasm_bindgen_test]
    async fn body_clicks_do_not_reach_the_backdrop() {
        let (root, closes) = mount(open_state()).await;

        click(&root, ".demo-modal");
        click(&root, ".demo-modal-header h2");
        assert_eq!(closes.get(), 0);

        click(&root, ".demo-modal-backdrop");
        assert_eq!(closes.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn close_button_closes_exactly_once() {
        let (root, closes) = mount(open_state()).await;

        click(&root, ".demo-modal-close");
        assert_eq!(closes.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn closed_state_renders_nothing() {
        let (root, _) = mount(ModalState::Closed).await;
        assert!(root.query_selector(".demo-modal-backdrop").unwrap().is_none());
    }
}
