// ui/src/components/currency_combobox.rs
#![allow(non_snake_case)]

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::combobox::{ComboKey, KeyOutcome, PointerTarget, Side};
use crate::hooks::use_list_placement::use_list_placement;
use crate::hooks::use_touch_scroll_lock::use_touch_scroll_lock;
use api::flags::currency_icon;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use std::rc::Rc;

impl From<&Key> for ComboKey {
    fn from(key: &Key) -> Self {
        match key {
            Key::ArrowUp => Self::ArrowUp,
            Key::ArrowDown => Self::ArrowDown,
            Key::Enter => Self::Enter,
            Key::Escape => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Props, PartialEq, Clone, Copy)]
pub struct CurrencyComboboxProps {
    pub side: Side,
}

/// A type-ahead currency picker: flag, text input, "show all" toggle and a
/// listbox of matching codes.
///
/// Every part stops pointer-down propagation so the page-level handler in
/// `App` only ever sees presses outside both comboboxes.
pub fn CurrencyCombobox(props: CurrencyComboboxProps) -> Element {
    let side = props.side;
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut widget = app_state_mut.widget;

    let mut input_handle = use_signal(|| None::<Rc<MountedData>>);
    let placement = use_list_placement(widget, side);
    use_touch_scroll_lock(side.list_id());

    let (value, flag, options, highlighted, open, mode) = {
        let state = widget.read();
        let combo = state.combo(side);
        (
            combo.value().to_string(),
            combo.flag().to_string(),
            combo.options().to_vec(),
            combo.highlighted(),
            combo.is_open(),
            combo.mode(),
        )
    };

    rsx! {
        div {
            class: "combo",
            span {
                id: side.flag_id(),
                class: "flag",
                "aria-hidden": "true",
                "{flag}"
            }
            input {
                id: side.input_id(),
                r#type: "text",
                role: "combobox",
                autocomplete: "off",
                spellcheck: "false",
                placeholder: "Search currency",
                "aria-autocomplete": "list",
                "aria-controls": side.list_id(),
                "aria-expanded": if open { "true" } else { "false" },
                value: "{value}",
                onmounted: move |mounted| input_handle.set(Some(mounted.data.clone())),
                onpointerdown: move |evt| {
                    evt.stop_propagation();
                    widget.write().handle_pointer_down(side, PointerTarget::Input);
                },
                onfocus: move |_| widget.write().on_focus(side),
                onblur: move |_| widget.write().on_blur(side),
                oninput: move |evt| widget.write().on_input(side, evt.value()),
                onkeydown: move |evt| {
                    let outcome = widget.write().handle_key_down(side, ComboKey::from(&evt.key()));
                    match outcome {
                        KeyOutcome::Handled | KeyOutcome::Selected(_) => evt.prevent_default(),
                        KeyOutcome::Submit => app_state_mut.convert(&app_state),
                        KeyOutcome::Ignored => {}
                    }
                },
            }
            button {
                r#type: "button",
                class: "combo-toggle secondary outline",
                tabindex: "-1",
                title: "Show all currencies",
                "aria-label": "Show all currencies",
                onpointerdown: move |evt| {
                    evt.stop_propagation();
                    // focus goes to the input, not the button
                    evt.prevent_default();
                    widget.write().handle_pointer_down(side, PointerTarget::Toggle);
                    if let Some(input) = input_handle() {
                        spawn(async move {
                            input.set_focus(true).await.ok();
                        });
                    }
                },
                "▾"
            }
            ul {
                id: side.list_id(),
                class: "combo-list",
                role: "listbox",
                hidden: !open,
                "data-mode": mode.as_str(),
                style: "{placement().style()}",
                onpointerdown: move |evt| {
                    evt.stop_propagation();
                    widget.write().handle_pointer_down(side, PointerTarget::List);
                },
                for (index, code) in options.into_iter().enumerate() {
                    li {
                        key: "{code}",
                        role: "option",
                        "aria-selected": if highlighted == Some(index) { "true" } else { "false" },
                        onpointerdown: move |evt| {
                            evt.stop_propagation();
                            evt.prevent_default();
                            widget.write().handle_pointer_down(side, PointerTarget::Option(index));
                        },
                        span { class: "flag", "{currency_icon(&code)}" }
                        span { class: "code", "{code}" }
                    }
                }
            }
        }
    }
}
