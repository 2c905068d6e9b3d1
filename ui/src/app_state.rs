//! The stable, non-reactive context shared by every component.

use crate::compat;
use crate::theme::ThemeStore;
use api::client::HttpExchangeApi;
use api::config::ClientConfig;
use std::ops::Deref;
use std::rc::Rc;

pub struct AppStateData {
    pub config: ClientConfig,
    pub api: HttpExchangeApi,
    pub theme_store: Rc<dyn ThemeStore>,
}

#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(config: ClientConfig, theme_store: Rc<dyn ThemeStore>) -> Self {
        let api = HttpExchangeApi::from_config(&config);
        Self(Rc::new(AppStateData {
            config,
            api,
            theme_store,
        }))
    }

    /// Config, endpoints and theme storage for the platform we run on.
    pub fn from_platform() -> Self {
        let config = compat::client_config();
        dioxus_logger::tracing::info!("exchange endpoints at {}", config.base_url);
        Self::new(config, compat::theme_store())
    }
}
