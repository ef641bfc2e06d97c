use yew::prelude::*;

use crate::theme::provider::use_theme;
use crate::theme::store::ThemePreference;

fn toggle_label(preference: ThemePreference) -> &'static str {
    match preference.toggled() {
        ThemePreference::Light => "Switch to light theme",
        _ => "Switch to dark theme",
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let toggle_theme = theme.toggle_theme.clone();
        Callback::from(move |_: MouseEvent| toggle_theme.emit(()))
    };

    let use_system = {
        let set_theme = theme.set_theme.clone();
        Callback::from(move |_: MouseEvent| set_theme.emit(ThemePreference::System))
    };

    let icon = match theme.preference {
        ThemePreference::Dark => "☾",
        ThemePreference::Light => "☀",
        ThemePreference::System => "◐",
    };

    html! {
        <span class="theme-controls">
            <button
                class="theme-toggle"
                onclick={onclick}
                aria-label={toggle_label(theme.preference)}
                title={format!("Theme: {}", theme.preference.as_str())}
            >
                <span aria-hidden="true">{icon}</span>
            </button>
            {
                if theme.preference != ThemePreference::System {
                    html! {
                        <button class="theme-system" onclick={use_system}>
                            {"Use system theme"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .theme-toggle {
                    padding: 0.75rem;
                    background: transparent;
                    border: none;
                    cursor: pointer;
                    color: var(--subtle-gray);
                    font-size: 1.4rem;
                    line-height: 1;
                    transition: color 0.2s ease;
                }
                .theme-toggle:hover,
                .theme-system:hover {
                    color: var(--accent-blue);
                }
                .theme-controls {
                    display: inline-flex;
                    align-items: center;
                }
                .theme-system {
                    background: transparent;
                    border: none;
                    cursor: pointer;
                    color: var(--subtle-gray);
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </span>
    }
}
