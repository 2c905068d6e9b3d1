// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod combobox;
pub mod compat;
mod components;
pub mod controller;
pub mod conversion;
pub mod hooks;
pub mod rate_cache;
pub mod scroll_lock;
pub mod theme;
pub mod viewport;

#[cfg(test)]
mod test_support;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::converter::Converter;
use components::pico::Container;
use controller::WidgetController;
use theme::ThemeState;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let widget_css = r#"
    * { box-sizing: border-box; }

    :root { --safe-bottom: env(safe-area-inset-bottom, 0px); }

    .widget-root {
        min-height: 100vh;
        padding: 1rem 0;
        background-color: var(--pico-background-color);
    }

    .widget-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .widget-header h1 { margin: 0; font-size: 1.5rem; }

    /* --- CURRENCY PAIR --- */
    .pair {
        display: grid;
        grid-template-columns: 1fr auto 1fr;
        gap: 0.5rem;
        align-items: start;
    }
    .pair > button { margin-top: 0; }

    /* --- COMBOBOX --- */
    .combo {
        position: relative;
        display: flex;
        align-items: center;
        gap: 0.25rem;
    }
    .combo .flag { font-size: 1.4rem; width: 2rem; text-align: center; }
    .combo input { margin-bottom: 0; flex: 1; min-width: 0; }
    .combo-toggle { width: auto; padding: 0.4rem 0.6rem; margin-bottom: 0; }

    .combo-list {
        position: absolute;
        top: calc(100% + 6px);
        left: 0;
        min-width: 100%;
        max-height: 260px;
        overflow-y: auto;
        overscroll-behavior: contain;
        -webkit-overflow-scrolling: touch;
        z-index: 20;
        margin: 0;
        padding: 0.25rem;
        list-style: none;
        background-color: var(--pico-card-background-color);
        border: 1px solid var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
        box-shadow: var(--pico-card-box-shadow);
    }
    .combo-list[hidden] { display: none; }
    .combo-list li {
        display: flex;
        gap: 0.5rem;
        align-items: center;
        padding: 0.3rem 0.5rem;
        cursor: pointer;
        white-space: nowrap;
        list-style: none;
    }
    .combo-list li[aria-selected="true"] {
        background-color: color-mix(in srgb, var(--pico-primary), transparent 85%);
        color: var(--pico-primary);
    }

    /* --- ACTIONS & STATUS --- */
    .actions { display: flex; gap: 0.5rem; }
    .actions button { flex: 1; }
    .result { font-size: 1.25rem; font-weight: bold; min-height: 1.5em; margin-bottom: 0.25rem; }
    .last { color: var(--pico-muted-color); min-height: 1.2em; }
    article footer { display: flex; justify-content: space-between; gap: 1rem; flex-wrap: wrap; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0, viewport-fit=cover",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{widget_css}"
        }
        AppBody {}
    }
}

/// Sets up the shared context and kicks off the first rate load.
#[component]
fn AppBody() -> Element {
    let app_state = use_hook(AppState::from_platform);
    use_context_provider(|| app_state.clone());

    let widget = use_signal(|| {
        let theme = ThemeState::boot(
            app_state.theme_store.as_ref(),
            compat::prefers_dark_scheme(),
        );
        WidgetController::new(app_state.config.credit.clone(), theme)
    });
    let app_state_mut = use_context_provider(|| AppStateMut { widget });

    // Boot: inputs start empty, then rates load in the background.
    use_hook(|| app_state_mut.load_rates(&app_state));

    let mut widget = app_state_mut.widget;
    let theme = widget.read().theme().attribute();

    rsx! {
        div {
            class: "widget-root",
            "data-theme": theme,
            onpointerdown: move |_| widget.write().handle_outside_pointer(),
            Container {
                Converter {}
            }
        }
    }
}
