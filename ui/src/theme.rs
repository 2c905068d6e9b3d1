//! The persisted light/dark toggle.

use api::prefs::theme::Theme;
use std::cell::Cell;
use std::rc::Rc;

/// Somewhere the theme preference survives a reload.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> anyhow::Result<()>;
}

/// Keeps the preference for the lifetime of the process only.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore(Rc<Cell<Option<Theme>>>);

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.0.get()
    }

    fn save(&self, theme: Theme) -> anyhow::Result<()> {
        self.0.set(Some(theme));
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileThemeStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::ThemeStore;
    use anyhow::Context;
    use api::prefs::theme::Theme;
    use std::fs;
    use std::path::PathBuf;

    /// Stores the preference as a one-word file, e.g. `~/.config/fx-widget/theme`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FileThemeStore {
        path: PathBuf,
    }

    impl FileThemeStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn in_config_dir() -> Option<Self> {
            dirs::config_dir().map(|dir| Self::new(dir.join("fx-widget").join(Theme::STORAGE_KEY)))
        }
    }

    impl ThemeStore for FileThemeStore {
        fn load(&self) -> Option<Theme> {
            fs::read_to_string(&self.path).ok()?.trim().parse().ok()
        }

        fn save(&self, theme: Theme) -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&self.path, theme.as_str())
                .with_context(|| format!("writing {}", self.path.display()))
        }
    }
}

/// The theme currently applied to the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    /// Saved preference first, then the platform's ambient signal.
    pub fn boot(store: &dyn ThemeStore, prefers_dark: Option<bool>) -> Self {
        let theme = store
            .load()
            .unwrap_or_else(|| Theme::from_ambient(prefers_dark));
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Value of the `data-theme` attribute.
    pub fn attribute(&self) -> &'static str {
        self.theme.as_str()
    }

    pub fn label(&self) -> &'static str {
        self.theme.label()
    }

    /// Flips the theme and persists it. A failed write is logged; the
    /// toggle still takes effect for this session.
    pub fn toggle(&mut self, store: &dyn ThemeStore) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = store.save(self.theme) {
            dioxus_logger::tracing::warn!("could not persist theme: {:#}", e);
        }
        self.theme
    }
}
