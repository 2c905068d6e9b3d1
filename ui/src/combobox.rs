//! The currency combobox: a text input paired with a filterable option list.
//!
//! Everything here is plain data; the Dioxus component in
//! `components::currency_combobox` forwards DOM events to these methods.

use api::currency::normalize_code;
use api::flags::{currency_icon, GLOBE};

/// Which half of the conversion a combobox belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum Side {
    From,
    To,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Self::From => "fromInput",
            Self::To => "toInput",
        }
    }

    pub fn list_id(self) -> &'static str {
        match self {
            Self::From => "fromList",
            Self::To => "toList",
        }
    }

    pub fn flag_id(self) -> &'static str {
        match self {
            Self::From => "fromFlag",
            Self::To => "toFlag",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

/// How the current option list was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ListMode {
    #[default]
    Filter,
    All,
}

impl ListMode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum ComboState {
    Closed,
    OpenFiltered,
    OpenAll,
}

/// Where a pointer-down landed, relative to one combobox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    Toggle,
    /// Inside the list but not on an option (scrollbar, padding).
    List,
    Option(usize),
    Outside,
}

/// The keys a combobox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum ComboKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum KeyOutcome {
    /// The key means nothing to the combobox.
    Ignored,
    /// The key changed the combobox (highlight moved, list closed).
    Handled,
    /// The highlighted option was picked.
    Selected(String),
    /// Enter was pressed with nothing to pick; the form should submit.
    Submit,
}

/// One input/list/flag triple and its transient state.
#[derive(Clone, Debug, PartialEq)]
pub struct Combobox {
    side: Side,
    value: String,
    flag: String,
    options: Vec<String>,
    highlighted: Option<usize>,
    mode: ListMode,
    open: bool,
}

impl Combobox {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            value: String::new(),
            flag: GLOBE.to_string(),
            options: Vec::new(),
            highlighted: None,
            mode: ListMode::default(),
            open: false,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> ComboState {
        match (self.open, self.mode) {
            (false, _) => ComboState::Closed,
            (true, ListMode::Filter) => ComboState::OpenFiltered,
            (true, ListMode::All) => ComboState::OpenAll,
        }
    }

    /// Value of the option's `aria-selected` attribute.
    pub fn is_option_selected(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }

    /// Replaces the input text and refreshes the flag, leaving the list alone.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.flag = currency_icon(&self.value);
    }

    pub fn on_focus(&mut self, codes: &[String]) {
        self.filter(codes);
    }

    pub fn on_input(&mut self, text: impl Into<String>, codes: &[String]) {
        self.set_value(text);
        self.filter(codes);
    }

    /// Rebuilds the list from `codes` by case-insensitive substring match on
    /// the current text. Empty text shows everything.
    pub fn filter(&mut self, codes: &[String]) {
        let query = normalize_code(&self.value);
        if query.is_empty() {
            self.render(codes.to_vec(), ListMode::All);
        } else {
            let matches = codes
                .iter()
                .filter(|code| code.contains(&query))
                .cloned()
                .collect();
            self.render(matches, ListMode::Filter);
        }
    }

    /// Re-renders an open list against new `codes`, keeping the full list
    /// when that is what is showing.
    pub fn refresh_options(&mut self, codes: &[String]) {
        if self.state().is_open_all() {
            self.render(codes.to_vec(), ListMode::All);
        } else {
            self.filter(codes);
        }
    }

    /// The "show all" affordance: full list regardless of the text, or
    /// close when the full list is already showing.
    pub fn toggle_show_all(&mut self, codes: &[String]) {
        if self.state().is_open_all() {
            self.close();
        } else {
            self.render(codes.to_vec(), ListMode::All);
        }
    }

    pub fn close(&mut self) {
        if self.open {
            dioxus_logger::tracing::debug!("closing {} list", self.side.label());
        }
        self.open = false;
        self.highlighted = None;
    }

    /// Picks the option at `index`, writing it into the input and closing.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let code = self.options.get(index)?.clone();
        self.set_value(code.clone());
        self.close();
        Some(code)
    }

    pub fn handle_key_down(&mut self, key: ComboKey) -> KeyOutcome {
        if key.is_escape() {
            return if self.open {
                self.close();
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            };
        }
        if !self.open || self.options.is_empty() {
            return KeyOutcome::Ignored;
        }

        let count = self.options.len();
        match key {
            ComboKey::ArrowDown => {
                let next = self.highlighted.map_or(0, |i| (i + 1) % count);
                self.highlighted = Some(next);
                KeyOutcome::Handled
            }
            ComboKey::ArrowUp => {
                let prev = self.highlighted.map_or(count - 1, |i| (i + count - 1) % count);
                self.highlighted = Some(prev);
                KeyOutcome::Handled
            }
            ComboKey::Enter => match self.highlighted.and_then(|i| self.select(i)) {
                Some(code) => KeyOutcome::Selected(code),
                None => KeyOutcome::Ignored,
            },
            ComboKey::Escape | ComboKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Returns the picked code when the pointer landed on an option.
    pub fn handle_pointer_down(&mut self, target: PointerTarget, codes: &[String]) -> Option<String> {
        match target {
            PointerTarget::Outside => {
                self.close();
                None
            }
            PointerTarget::Toggle => {
                self.toggle_show_all(codes);
                None
            }
            PointerTarget::Option(index) => self.select(index),
            PointerTarget::Input | PointerTarget::List => None,
        }
    }

    /// Exchanges the text and flag of two comboboxes in one step.
    pub fn swap_selection(a: &mut Self, b: &mut Self) {
        std::mem::swap(&mut a.value, &mut b.value);
        std::mem::swap(&mut a.flag, &mut b.flag);
    }

    fn render(&mut self, items: Vec<String>, mode: ListMode) {
        self.options = items;
        self.mode = mode;
        if self.options.is_empty() {
            self.close();
        } else {
            self.highlighted = Some(0);
            self.open = true;
        }
    }
}
