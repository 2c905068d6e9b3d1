#![allow(non_snake_case)]

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::combobox::{ComboKey, Side};
use crate::components::currency_combobox::CurrencyCombobox;
use crate::components::pico::{Button, ButtonType, Card};
use crate::components::theme_toggle::ThemeToggle;
use dioxus::prelude::*;

/// The whole widget: both pickers, amount, actions and status lines.
#[component]
pub fn Converter() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut widget = app_state_mut.widget;

    let state = widget.read();
    let amount = state.amount().to_string();
    let placeholder = state.amount_placeholder();
    let refreshing = state.is_refreshing();
    let result = state.result_line().to_string();
    let last = state.last_line().to_string();
    let source = state.cache().source_status().to_string();
    let credit = state.cache().credit_line().to_string();
    drop(state);

    let on_enter_state = app_state.clone();
    let convert_state = app_state.clone();
    let refresh_state = app_state;

    rsx! {
        Card {
            header {
                class: "widget-header",
                h1 { "Currency Converter" }
                ThemeToggle {}
            }
            div {
                class: "pair",
                CurrencyCombobox { side: Side::From }
                Button {
                    id: "swap",
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| widget.write().swap(),
                    "⇄"
                }
                CurrencyCombobox { side: Side::To }
            }
            input {
                id: "amount",
                r#type: "text",
                inputmode: "decimal",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{amount}",
                oninput: move |evt| widget.write().set_amount(evt.value()),
                onkeydown: move |evt| {
                    if widget.peek().handle_amount_key(ComboKey::from(&evt.key())) {
                        app_state_mut.convert(&on_enter_state);
                    }
                },
            }
            div {
                class: "actions",
                Button {
                    id: "convert",
                    on_click: move |_| app_state_mut.convert(&convert_state),
                    "Convert"
                }
                Button {
                    id: "refresh",
                    button_type: ButtonType::Secondary,
                    busy: refreshing,
                    on_click: move |_| app_state_mut.refresh(&refresh_state),
                    "Refresh rates"
                }
            }
            p {
                id: "result",
                class: "result",
                "aria-live": "polite",
                "{result}"
            }
            p { id: "last", class: "last", "{last}" }
            footer {
                small { id: "source", "{source}" }
                small { id: "credit", "{credit}" }
            }
        }
    }
}
