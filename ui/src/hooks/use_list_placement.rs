//=============================================================================
// File: src/hooks/use_list_placement.rs
//=============================================================================

// The viewport listeners only exist in the browser; elsewhere placement is
// computed once per open/close.

#[cfg(target_arch = "wasm32")]
use self::wasm32::use_viewport_changes;

#[cfg(not(target_arch = "wasm32"))]
use self::fallback::use_viewport_changes;

use crate::combobox::Side;
use crate::compat;
use crate::controller::WidgetController;
use crate::hooks::use_viewport_capabilities::use_viewport_capabilities;
use crate::viewport::{place_for, ListPlacement};
use dioxus::prelude::*;

/// Where the option list for `side` should be drawn right now.
///
/// Recomputed whenever the list opens or closes and, on platforms that use
/// the visual viewport, on every viewport resize or scroll.
pub fn use_list_placement(state: Signal<WidgetController>, side: Side) -> Signal<ListPlacement> {
    let capabilities = use_viewport_capabilities();
    let is_open = use_memo(move || state.read().combo(side).is_open());
    let viewport_changes = use_viewport_changes(capabilities);
    let mut placement = use_signal(|| ListPlacement::Static);

    use_effect(move || {
        // subscribe
        viewport_changes();

        let anchor = if is_open() {
            compat::element_rect(side.input_id())
        } else {
            None
        };
        let next = place_for(capabilities(), anchor, &compat::viewport_snapshot());

        if *placement.peek() != next {
            placement.set(next);
        }
    });

    placement
}

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use crate::viewport::{geometry_for, ViewportCapabilities};
    use dioxus::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// `resize`/`scroll` on the visual viewport and `resize` on the window,
    /// all feeding one callback. Detached on drop.
    struct ViewportListeners {
        window: web_sys::Window,
        visual: web_sys::VisualViewport,
        callback: Closure<dyn FnMut()>,
    }

    impl ViewportListeners {
        fn attach(on_change: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let visual = window.visual_viewport()?;
            let callback = Closure::<dyn FnMut()>::new(on_change);
            let f = callback.as_ref().unchecked_ref();

            visual.add_event_listener_with_callback("resize", f).ok()?;
            visual.add_event_listener_with_callback("scroll", f).ok()?;
            window.add_event_listener_with_callback("resize", f).ok()?;

            Some(Self {
                window,
                visual,
                callback,
            })
        }
    }

    impl Drop for ViewportListeners {
        fn drop(&mut self) {
            let f = self.callback.as_ref().unchecked_ref();
            let _ = self.visual.remove_event_listener_with_callback("resize", f);
            let _ = self.visual.remove_event_listener_with_callback("scroll", f);
            let _ = self.window.remove_event_listener_with_callback("resize", f);
        }
    }

    /// A counter bumped on every viewport change, once the platform turns
    /// out to need visual-viewport placement.
    pub fn use_viewport_changes(capabilities: Signal<ViewportCapabilities>) -> Signal<u64> {
        let mut changes = use_signal(|| 0u64);
        let listeners = use_hook(|| Rc::new(RefCell::new(None::<ViewportListeners>)));

        {
            let listeners = listeners.clone();
            use_effect(move || {
                if !geometry_for(capabilities()).tracks_viewport() || listeners.borrow().is_some() {
                    return;
                }
                *listeners.borrow_mut() = ViewportListeners::attach(move || changes += 1);
                if listeners.borrow().is_none() {
                    dioxus_logger::tracing::warn!("could not listen for visual viewport changes");
                }
            });
        }

        use_drop(move || {
            listeners.borrow_mut().take();
        });

        changes
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    use crate::viewport::ViewportCapabilities;
    use dioxus::prelude::*;

    pub fn use_viewport_changes(_capabilities: Signal<ViewportCapabilities>) -> Signal<u64> {
        use_signal(|| 0u64)
    }
}
