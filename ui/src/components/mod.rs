//! The components module contains the Dioxus components that render the widget.
pub mod converter;
pub mod currency_combobox;
pub mod pico;
pub mod theme_toggle;
