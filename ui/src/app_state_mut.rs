//! Defines the mutable, reactive state for the application's UI.

use crate::app_state::AppState;
use crate::compat;
use crate::controller::{self, WidgetController};
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context.
///
/// Every component reads the widget through this signal, so any change made
/// by an event handler or a finished request re-renders what depends on it.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub widget: Signal<WidgetController>,
}

impl AppStateMut {
    /// Fetches rates in the background. Boot only.
    pub fn load_rates(&self, app_state: &AppState) {
        let api = app_state.api.clone();
        let timeout = app_state.config.rates_timeout;
        let mut widget = self.widget;
        spawn(async move {
            let outcome = controller::load_rates(&api, timeout, &mut widget).await;
            dioxus_logger::tracing::info!("boot rates: {:?}", outcome);
        });
    }

    pub fn refresh(&self, app_state: &AppState) {
        let api = app_state.api.clone();
        let timeout = app_state.config.rates_timeout;
        let mut widget = self.widget;
        spawn(async move {
            controller::refresh(&api, timeout, &mut widget, compat::now_label).await;
        });
    }

    pub fn convert(&self, app_state: &AppState) {
        let api = app_state.api.clone();
        let mut widget = self.widget;
        spawn(async move {
            controller::convert(&api, &mut widget, compat::now_label).await;
        });
    }
}
