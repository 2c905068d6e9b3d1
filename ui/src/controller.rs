//! The top-level widget state and its event entry points.
//!
//! [`WidgetController`] owns the rate cache, both comboboxes, the amount
//! field, the status lines and the theme. Components call into it from event
//! handlers; the async actions at the bottom of this module run the network
//! calls without holding a borrow of the state across an await.

use crate::combobox::{ComboKey, Combobox, KeyOutcome, PointerTarget, Side};
use crate::conversion::{self, CONVERTING};
use crate::rate_cache::{fetch_rates, RateCache, RefreshOutcome};
use crate::theme::{ThemeState, ThemeStore};
use api::client::ExchangeApi;
use api::messages::{ConvertRequest, ConvertResponse, RatesResponse};
use api::prefs::theme::Theme;
use api::ApiError;
use dioxus::prelude::*;
use std::time::Duration;

pub const AMOUNT_PLACEHOLDER: &str = "Amount (e.g. 1234)";

#[derive(Clone, Debug)]
pub struct WidgetController {
    cache: RateCache,
    from: Combobox,
    to: Combobox,
    amount: String,
    result_line: String,
    last_line: String,
    refreshing: bool,
    focused: Option<Side>,
    theme: ThemeState,
}

impl WidgetController {
    /// Fresh state: empty inputs, static codes only, no status text.
    pub fn new(credit: impl Into<String>, theme: ThemeState) -> Self {
        Self {
            cache: RateCache::new(credit),
            from: Combobox::new(Side::From),
            to: Combobox::new(Side::To),
            amount: String::new(),
            result_line: String::new(),
            last_line: String::new(),
            refreshing: false,
            focused: None,
            theme,
        }
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    pub fn combo(&self, side: Side) -> &Combobox {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn amount_placeholder(&self) -> &'static str {
        AMOUNT_PLACEHOLDER
    }

    pub fn result_line(&self) -> &str {
        &self.result_line
    }

    pub fn last_line(&self) -> &str {
        &self.last_line
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn focused(&self) -> Option<Side> {
        self.focused
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    fn combo_and_codes(&mut self, side: Side) -> (&mut Combobox, &[String]) {
        let combo = match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        };
        (combo, self.cache.codes())
    }

    fn combo_mut(&mut self, side: Side) -> &mut Combobox {
        self.combo_and_codes(side).0
    }

    /// Focus arriving on an input. Focus that the toggle already moved here
    /// keeps whatever list the toggle opened.
    pub fn on_focus(&mut self, side: Side) {
        if self.focused == Some(side) {
            return;
        }
        self.focused = Some(side);
        self.combo_mut(side.other()).close();
        let (combo, codes) = self.combo_and_codes(side);
        combo.on_focus(codes);
    }

    /// Focus leaving an input does not close its list; a pointer-down
    /// elsewhere or Escape does.
    pub fn on_blur(&mut self, side: Side) {
        if self.focused == Some(side) {
            self.focused = None;
        }
    }

    pub fn on_input(&mut self, side: Side, text: String) {
        let (combo, codes) = self.combo_and_codes(side);
        combo.on_input(text, codes);
    }

    /// A pointer-down that landed on part of the `side` combobox. The other
    /// combobox sees it as an outside press. The toggle also moves focus to
    /// the input.
    pub fn handle_pointer_down(&mut self, side: Side, target: PointerTarget) -> Option<String> {
        self.combo_mut(side.other()).close();
        if target == PointerTarget::Toggle {
            self.focused = Some(side);
        }
        let (combo, codes) = self.combo_and_codes(side);
        let picked = combo.handle_pointer_down(target, codes);
        if let Some(code) = &picked {
            dioxus_logger::tracing::debug!("picked {} for {}", code, side.label());
        }
        picked
    }

    /// A pointer-down anywhere outside both comboboxes.
    pub fn handle_outside_pointer(&mut self) {
        self.from.close();
        self.to.close();
    }

    /// Key pressed in one of the currency inputs. An Enter the combobox did
    /// not use becomes [`KeyOutcome::Submit`].
    pub fn handle_key_down(&mut self, side: Side, key: ComboKey) -> KeyOutcome {
        match self.combo_mut(side).handle_key_down(key) {
            KeyOutcome::Ignored if key.is_enter() => KeyOutcome::Submit,
            outcome => outcome,
        }
    }

    /// Key pressed in the amount field; `true` means submit.
    pub fn handle_amount_key(&self, key: ComboKey) -> bool {
        key.is_enter()
    }

    pub fn set_amount(&mut self, amount: String) {
        self.amount = amount;
    }

    pub fn swap(&mut self) {
        Combobox::swap_selection(&mut self.from, &mut self.to);
    }

    /// Folds a rate fetch into the cache without touching the secondary
    /// status line. Used at boot.
    pub fn apply_rates(&mut self, result: Result<RatesResponse, ApiError>) -> RefreshOutcome {
        let outcome = self.cache.apply(result);
        self.refilter_focused();
        outcome
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    pub fn finish_refresh(
        &mut self,
        result: Result<RatesResponse, ApiError>,
        now: &str,
    ) -> RefreshOutcome {
        let outcome = self.apply_rates(result);
        self.refreshing = false;
        self.last_line = conversion::refreshed_line(now, outcome.is_fallback);
        outcome
    }

    /// A focused input re-runs its filter so its list reflects new codes.
    fn refilter_focused(&mut self) {
        if let Some(side) = self.focused {
            let (combo, codes) = self.combo_and_codes(side);
            combo.refresh_options(codes);
        }
    }

    /// Validates the form. On success the result line shows the pending
    /// text and the request to send is returned; otherwise the result line
    /// shows why nothing was sent.
    pub fn prepare_convert(&mut self) -> Option<ConvertRequest> {
        match conversion::validate(&self.amount, self.from.value(), self.to.value(), &self.cache)
        {
            Ok(request) => {
                self.result_line = CONVERTING.to_string();
                Some(request)
            }
            Err(e) => {
                dioxus_logger::tracing::debug!("conversion refused locally: {}", e);
                self.result_line = e.to_string();
                None
            }
        }
    }

    pub fn finish_convert(&mut self, result: Result<ConvertResponse, ApiError>, now: &str) {
        match result {
            Ok(resp) => {
                self.result_line = conversion::success_text(&resp);
                self.last_line = conversion::refreshed_line(now, false);
                dioxus_logger::tracing::info!("converted: {}", self.result_line);
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("conversion failed: {}", e);
                self.result_line = conversion::failure_text(&e);
                self.last_line.clear();
            }
        }
    }

    pub fn toggle_theme(&mut self, store: &dyn ThemeStore) -> Theme {
        self.theme.toggle(store)
    }
}

/// Somewhere the widget state lives that async actions can reach back into.
///
/// Implemented for the plain controller (tests) and for the Dioxus signal
/// holding it (components). Each call is a short, synchronous borrow.
pub trait StateHandle {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut WidgetController) -> R) -> R;
}

impl StateHandle for WidgetController {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut WidgetController) -> R) -> R {
        f(self)
    }
}

impl StateHandle for Signal<WidgetController> {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut WidgetController) -> R) -> R {
        f(&mut self.write())
    }
}

/// Boot-time rate load.
pub async fn load_rates<A: ExchangeApi>(
    api: &A,
    timeout: Duration,
    state: &mut impl StateHandle,
) -> RefreshOutcome {
    let result = fetch_rates(api, timeout).await;
    state.with_mut(|w| w.apply_rates(result))
}

/// The refresh button. Overlapping refreshes are not deduplicated; whichever
/// response arrives last is what the widget shows.
pub async fn refresh<A: ExchangeApi>(
    api: &A,
    timeout: Duration,
    state: &mut impl StateHandle,
    now: impl FnOnce() -> String,
) -> RefreshOutcome {
    state.with_mut(|w| w.begin_refresh());
    let result = fetch_rates(api, timeout).await;
    state.with_mut(|w| w.finish_refresh(result, &now()))
}

/// The convert button (or Enter). One attempt, no timeout. Returns whether a
/// request was sent.
pub async fn convert<A: ExchangeApi>(
    api: &A,
    state: &mut impl StateHandle,
    now: impl FnOnce() -> String,
) -> bool {
    let Some(request) = state.with_mut(|w| w.prepare_convert()) else {
        return false;
    };
    let result = api.convert(&request).await;
    state.with_mut(|w| w.finish_convert(result, &now()));
    true
}
