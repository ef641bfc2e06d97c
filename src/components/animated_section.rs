use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

const VIEWPORT_MARGIN: f64 = 10.0;
const EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    FadeUp,
    SlideLeft,
    SlideRight,
    Scale,
    #[default]
    Dramatic,
}

impl Animation {
    fn hidden_transform(self) -> &'static str {
        match self {
            Animation::FadeUp => "translateY(60px)",
            Animation::SlideLeft => "translateX(-100px)",
            Animation::SlideRight => "translateX(100px)",
            Animation::Scale => "scale(0.8)",
            Animation::Dramatic => "perspective(1000px) translateY(100px) scale(0.8) rotateX(-15deg)",
        }
    }
}

/// True once the element's top edge is inside the viewport, less the margin.
pub fn in_viewport(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - VIEWPORT_MARGIN
}

pub fn delay_millis(delay_secs: f64) -> u32 {
    (delay_secs * 1000.0).round().max(0.0) as u32
}

pub fn section_style(animation: Animation, revealed: bool, duration_secs: f64) -> String {
    if revealed {
        format!(
            "opacity: 1; transform: none; transition: opacity {d}s {e}, transform {d}s {e};",
            d = duration_secs,
            e = EASING
        )
    } else {
        format!("opacity: 0; transform: {};", animation.hidden_transform())
    }
}

/// Edge trigger for the in-view signal: fires on the first observation
/// inside the viewport and never again.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealTrigger {
    fired: bool,
}

impl RevealTrigger {
    pub fn observe(&mut self, top: f64, viewport_height: f64) -> bool {
        if self.fired || !in_viewport(top, viewport_height) {
            return false;
        }
        self.fired = true;
        true
    }
}

fn attach_scroll(slot: &RefCell<Option<Closure<dyn FnMut()>>>, check: Box<dyn FnMut()>) {
    let Some(window) = window() else { return };
    let listener = Closure::wrap(check);
    let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    *slot.borrow_mut() = Some(listener);
}

fn detach_scroll(slot: &RefCell<Option<Closure<dyn FnMut()>>>) {
    let Some(listener) = slot.borrow_mut().take() else { return };
    if let Some(window) = window() {
        let _ = window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or(0.4)]
    pub duration: f64,
}

/// Reveals its children once, the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_state(prefers_reduced_motion);
    let in_view = use_state_eq(|| false);
    let revealed = use_state_eq(|| false);
    let scroll_listener: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = use_mut_ref(|| None);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        let scroll_listener = scroll_listener.clone();
        let animate = !*reduced_motion;
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window().filter(|_| animate) {
                    let mut trigger = RevealTrigger::default();
                    let mut check = move || {
                        let Some(element) = node.cast::<Element>() else { return };
                        let height = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        if trigger.observe(element.get_bounding_client_rect().top(), height) {
                            in_view.set(true);
                        }
                    };
                    check();
                    attach_scroll(&scroll_listener, Box::new(check));
                }
                move || detach_scroll(&scroll_listener)
            },
            (),
        );
    }

    // Once revealed there is nothing left to watch
    {
        let scroll_listener = scroll_listener.clone();
        use_effect_with_deps(
            move |in_view| {
                if *in_view {
                    detach_scroll(&scroll_listener);
                }
                || ()
            },
            *in_view,
        );
    }

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(in_view, delay)| {
                let timeout = (*in_view && !*revealed).then(|| {
                    let revealed = revealed.clone();
                    Timeout::new(delay_millis(*delay), move || revealed.set(true))
                });
                // Dropping the Timeout cancels it
                move || drop(timeout)
            },
            (*in_view, props.delay),
        );
    }

    if *reduced_motion {
        return html! {
            <div class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        };
    }

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={section_style(props.animation, *revealed, props.duration)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_check_respects_margin() {
        assert!(in_viewport(100.0, 800.0));
        assert!(in_viewport(789.0, 800.0));
        assert!(!in_viewport(790.0, 800.0));
        assert!(!in_viewport(1200.0, 800.0));
    }

    #[test]
    fn trigger_fires_only_on_first_entry() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.observe(1200.0, 800.0));
        assert!(trigger.observe(300.0, 800.0));
        // Later scroll ticks, in view or not, stay quiet
        assert!(!trigger.observe(200.0, 800.0));
        assert!(!trigger.observe(1200.0, 800.0));
        assert!(!trigger.observe(100.0, 800.0));
    }

    #[test]
    fn trigger_honours_the_viewport_margin() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.observe(790.0, 800.0));
        assert!(trigger.observe(789.0, 800.0));
    }

    #[test]
    fn delays_are_converted_to_millis() {
        assert_eq!(delay_millis(0.0), 0);
        assert_eq!(delay_millis(0.4), 400);
        assert_eq!(delay_millis(0.7 + 3.0 * 0.1), 1000);
        assert_eq!(delay_millis(-1.0), 0);
    }

    #[test]
    fn hidden_style_uses_variant_transform() {
        assert_eq!(
            section_style(Animation::SlideLeft, false, 0.4),
            "opacity: 0; transform: translateX(-100px);"
        );
        assert_eq!(
            section_style(Animation::Scale, false, 0.4),
            "opacity: 0; transform: scale(0.8);"
        );
    }

    #[test]
    fn revealed_style_transitions_to_rest() {
        let style = section_style(Animation::Dramatic, true, 0.6);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 0.6s"));
        assert!(style.contains("transform 0.6s"));
    }
}
