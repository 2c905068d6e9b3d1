//=============================================================================
// File: src/hooks/use_viewport_capabilities.rs
//=============================================================================

use crate::compat;
use crate::viewport::ViewportCapabilities;
use dioxus::prelude::*;

/// Touch-primary and visual-viewport support, detected once after mount.
///
/// Starts out as "neither" so the first render always uses static
/// placement, then flips on platforms that qualify.
pub fn use_viewport_capabilities() -> Signal<ViewportCapabilities> {
    let mut capabilities = use_signal(ViewportCapabilities::default);

    use_effect(move || {
        let detected = compat::viewport_capabilities();
        dioxus_logger::tracing::debug!("viewport capabilities: {:?}", detected);
        capabilities.set(detected);
    });

    capabilities
}
