use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod embed;
mod projects;
mod theme {
    pub mod store;
    pub mod provider;
    pub mod toggle;
}
mod modal {
    pub mod controller;
    pub mod hook;
    pub mod demo_modal;
}
mod components {
    pub mod animated_section;
    pub mod icons;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod about;
    pub mod showcase;
    pub mod project_card;
    pub mod contact;
    pub mod footer;
}

use pages::home::Home;
use theme::provider::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_back_to_the_page() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::recognize("/404"), Some(Route::NotFound));
    }
}
