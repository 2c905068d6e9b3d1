#![allow(non_snake_case)]

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, ButtonType};
use dioxus::prelude::*;

/// Flips between light and dark and remembers the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let app_state = use_context::<AppState>();
    let mut widget = use_context::<AppStateMut>().widget;
    let label = widget.read().theme().label();

    rsx! {
        Button {
            id: "themeToggle",
            button_type: ButtonType::Contrast,
            outline: true,
            on_click: move |_| {
                let theme = widget.write().toggle_theme(app_state.theme_store.as_ref());
                dioxus_logger::tracing::info!("theme set to {}", theme.as_str());
            },
            "{label}"
        }
    }
}
