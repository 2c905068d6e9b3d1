// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Wall-clock time as shown in the "Refreshed ..." line.
pub fn now_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use crate::theme::ThemeStore;
    use crate::viewport::{Rect, ViewportCapabilities, ViewportSnapshot, VisualViewport};
    use api::config::ClientConfig;
    use api::prefs::theme::Theme;
    use std::rc::Rc;

    /// Settings baked in at build time; the browser has no environment.
    fn build_time_var(key: &str) -> Option<String> {
        match key {
            "FX_API_BASE_URL" => option_env!("FX_API_BASE_URL"),
            "FX_RATES_TIMEOUT_MS" => option_env!("FX_RATES_TIMEOUT_MS"),
            "FX_CREDIT" => option_env!("FX_CREDIT"),
            _ => None,
        }
        .map(str::to_string)
    }

    pub fn page_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    /// Endpoints default to the origin the page was served from.
    pub fn client_config() -> ClientConfig {
        ClientConfig::from_lookup(build_time_var, &page_origin().unwrap_or_default())
    }

    pub fn prefers_dark_scheme() -> Option<bool> {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()??;
        Some(query.matches())
    }

    pub fn viewport_capabilities() -> ViewportCapabilities {
        match web_sys::window() {
            Some(window) => ViewportCapabilities {
                touch_primary: window.navigator().max_touch_points() > 0,
                visual_viewport: window.visual_viewport().is_some(),
            },
            None => ViewportCapabilities::default(),
        }
    }

    pub fn element_rect(id: &str) -> Option<Rect> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let r = element.get_bounding_client_rect();
        Some(Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        })
    }

    pub fn viewport_snapshot() -> ViewportSnapshot {
        let Some(window) = web_sys::window() else {
            return ViewportSnapshot::default();
        };
        let visual = window.visual_viewport().map(|vv| VisualViewport {
            offset_left: vv.offset_left(),
            offset_top: vv.offset_top(),
            width: vv.width(),
            height: vv.height(),
        });
        ViewportSnapshot {
            visual,
            safe_bottom: safe_bottom(&window).unwrap_or(0.0),
        }
    }

    /// The `--safe-bottom` custom property, which the stylesheet sets from
    /// `env(safe-area-inset-bottom)`.
    fn safe_bottom(window: &web_sys::Window) -> Option<f64> {
        let root = window.document()?.document_element()?;
        let style = window.get_computed_style(&root).ok()??;
        let value = style.get_property_value("--safe-bottom").ok()?;
        value.trim().trim_end_matches("px").trim().parse().ok()
    }

    /// The preference under the `theme` key of `localStorage`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalThemeStore;

    impl LocalThemeStore {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok()?
        }
    }

    impl ThemeStore for LocalThemeStore {
        fn load(&self) -> Option<Theme> {
            Self::storage()?
                .get_item(Theme::STORAGE_KEY)
                .ok()??
                .parse()
                .ok()
        }

        fn save(&self, theme: Theme) -> anyhow::Result<()> {
            let storage =
                Self::storage().ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
            storage
                .set_item(Theme::STORAGE_KEY, theme.as_str())
                .map_err(|e| anyhow::anyhow!("localStorage write failed: {:?}", e))
        }
    }

    pub fn theme_store() -> Rc<dyn ThemeStore> {
        Rc::new(LocalThemeStore)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use crate::theme::{FileThemeStore, MemoryThemeStore, ThemeStore};
    use crate::viewport::{Rect, ViewportCapabilities, ViewportSnapshot};
    use api::config::ClientConfig;
    use std::rc::Rc;

    pub fn page_origin() -> Option<String> {
        None
    }

    pub fn client_config() -> ClientConfig {
        ClientConfig::from_env()
    }

    /// Desktop webviews do not expose the OS scheme to us; the theme module
    /// treats `None` as dark.
    pub fn prefers_dark_scheme() -> Option<bool> {
        None
    }

    pub fn viewport_capabilities() -> ViewportCapabilities {
        ViewportCapabilities::default()
    }

    pub fn element_rect(_id: &str) -> Option<Rect> {
        None
    }

    pub fn viewport_snapshot() -> ViewportSnapshot {
        ViewportSnapshot::default()
    }

    /// A file in the user's config directory, or memory when there is none.
    pub fn theme_store() -> Rc<dyn ThemeStore> {
        match FileThemeStore::in_config_dir() {
            Some(store) => Rc::new(store),
            None => {
                dioxus_logger::tracing::warn!("no config directory; theme will not persist");
                Rc::new(MemoryThemeStore::default())
            }
        }
    }
}
