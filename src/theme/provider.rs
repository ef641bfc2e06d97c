use stylist::css;
use stylist::yew::Global;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::theme::store::{BrowserStorage, ThemePreference, ThemeStore};

const DARK_CLASS: &str = "dark";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Whether the app has mounted in the browser yet. Nothing theme-related
/// touches the document while `Pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountPhase {
    Pending,
    Mounted,
}

/// Resolves `system` against the OS signal as it reads right now.
pub fn resolve_scheme(preference: ThemePreference, system_prefers_dark: bool) -> ColorScheme {
    match preference {
        ThemePreference::Light => ColorScheme::Light,
        ThemePreference::Dark => ColorScheme::Dark,
        ThemePreference::System if system_prefers_dark => ColorScheme::Dark,
        ThemePreference::System => ColorScheme::Light,
    }
}

/// The value of the `dark` flag to apply, or `None` before mount. The OS is
/// only queried once mounted.
pub fn dark_flag(
    phase: MountPhase,
    preference: ThemePreference,
    system_prefers_dark: impl FnOnce() -> bool,
) -> Option<bool> {
    match phase {
        MountPhase::Pending => None,
        MountPhase::Mounted => {
            let os_dark = preference == ThemePreference::System && system_prefers_dark();
            Some(resolve_scheme(preference, os_dark) == ColorScheme::Dark)
        }
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_dark_class(dark: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1(DARK_CLASS);
    if dark {
        let _ = classes.add_1(DARK_CLASS);
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub preference: ThemePreference,
    pub set_theme: Callback<ThemePreference>,
    pub toggle_theme: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        preference: ThemePreference::System,
        set_theme: Callback::noop(),
        toggle_theme: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(|| {
        ThemeStore::load(BrowserStorage::detect(), config::THEME_STORAGE_KEY)
    });
    let preference = use_state(|| store.borrow().theme());
    let phase = use_state(|| MountPhase::Pending);

    {
        let phase = phase.clone();
        use_mount(move || phase.set(MountPhase::Mounted));
    }

    // Re-applied on every preference change once mounted
    use_effect_with_deps(
        move |(phase, preference)| {
            if let Some(dark) = dark_flag(*phase, *preference, system_prefers_dark) {
                apply_dark_class(dark);
            }
            || ()
        },
        (*phase, *preference),
    );

    let set_theme = {
        let store = store.clone();
        let preference = preference.clone();
        Callback::from(move |theme: ThemePreference| {
            store.borrow_mut().set_theme(theme);
            preference.set(theme);
        })
    };

    let toggle_theme = {
        let store = store.clone();
        let preference = preference.clone();
        Callback::from(move |_: ()| {
            let next = store.borrow_mut().toggle_theme();
            preference.set(next);
        })
    };

    let context = ThemeContext {
        preference: *preference,
        set_theme,
        toggle_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <Global css={css!(r#"
                :root {
                    --accent-blue: #007aff;
                    --accent-purple: #8b5cf6;
                    --subtle-gray: #6b7280;
                    --page-bg: #ffffff;
                    --page-fg: #000000;
                    --surface: #f9fafb;
                    --card-bg: #ffffff;
                    --border: #e5e7eb;
                }
                html.dark {
                    --page-bg: #000000;
                    --page-fg: #ffffff;
                    --surface: #111827;
                    --card-bg: #1f2937;
                    --border: #374151;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    background: var(--page-bg);
                    color: var(--page-fg);
                    transition: background 0.3s ease, color 0.3s ease;
                }
            "#)} />
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn explicit_preferences_ignore_the_os() {
        assert_eq!(resolve_scheme(ThemePreference::Light, true), ColorScheme::Light);
        assert_eq!(resolve_scheme(ThemePreference::Dark, false), ColorScheme::Dark);
    }

    #[test]
    fn system_follows_the_os() {
        assert_eq!(resolve_scheme(ThemePreference::System, true), ColorScheme::Dark);
        assert_eq!(resolve_scheme(ThemePreference::System, false), ColorScheme::Light);
    }

    #[test]
    fn nothing_is_applied_before_mount() {
        let queried = Cell::new(false);
        let flag = dark_flag(MountPhase::Pending, ThemePreference::Dark, || {
            queried.set(true);
            true
        });
        assert_eq!(flag, None);
        assert!(!queried.get());
    }

    #[test]
    fn mounted_applies_exactly_one_flag() {
        assert_eq!(dark_flag(MountPhase::Mounted, ThemePreference::Dark, || false), Some(true));
        assert_eq!(dark_flag(MountPhase::Mounted, ThemePreference::Light, || true), Some(false));
        assert_eq!(dark_flag(MountPhase::Mounted, ThemePreference::System, || true), Some(true));
        assert_eq!(dark_flag(MountPhase::Mounted, ThemePreference::System, || false), Some(false));
    }

    #[test]
    fn os_is_only_queried_for_system() {
        let queried = Cell::new(false);
        dark_flag(MountPhase::Mounted, ThemePreference::Light, || {
            queried.set(true);
            false
        });
        assert!(!queried.get());
    }
}
