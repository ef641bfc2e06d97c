use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::pages::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    showcase::ProjectShowcase,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Title once on mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = window().and_then(|w| w.document()) {
                    document.set_title(config::SITE_TITLE);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home">
            <Hero />
            <About />
            <ProjectShowcase />
            <Contact />
            <Footer />
        </div>
    }
}
