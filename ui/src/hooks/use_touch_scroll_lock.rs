//=============================================================================
// File: src/hooks/use_touch_scroll_lock.rs
//=============================================================================

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::fallback::*;

/// # WebAssembly (WASM) Implementation
/// Listeners go straight onto the list element: touchmove has to be
/// non-passive for `preventDefault` to stop the page from scrolling.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use crate::scroll_lock::{ScrollMetrics, TouchScrollLock};
    use dioxus::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, Element, Event, TouchEvent};

    fn metrics(list: &Element) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: f64::from(list.scroll_top()),
            scroll_height: f64::from(list.scroll_height()),
            client_height: f64::from(list.client_height()),
        }
    }

    fn first_touch_y(evt: &TouchEvent) -> Option<f64> {
        evt.touches().get(0).map(|t| f64::from(t.client_y()))
    }

    struct TouchListeners {
        list: Element,
        start: Closure<dyn FnMut(TouchEvent)>,
        moved: Closure<dyn FnMut(TouchEvent)>,
        wheel: Closure<dyn FnMut(Event)>,
    }

    impl TouchListeners {
        fn attach(list_id: &str) -> Option<Self> {
            let list = web_sys::window()?.document()?.get_element_by_id(list_id)?;
            let lock = Rc::new(RefCell::new(TouchScrollLock::default()));

            let start = {
                let lock = lock.clone();
                let list = list.clone();
                Closure::<dyn FnMut(TouchEvent)>::new(move |evt: TouchEvent| {
                    evt.stop_propagation();
                    let Some(y) = first_touch_y(&evt) else {
                        return;
                    };
                    if let Some(nudged) = lock.borrow_mut().touch_start(y, metrics(&list)) {
                        list.set_scroll_top(nudged as i32);
                    }
                })
            };

            let moved = {
                let list = list.clone();
                Closure::<dyn FnMut(TouchEvent)>::new(move |evt: TouchEvent| {
                    evt.stop_propagation();
                    let Some(y) = first_touch_y(&evt) else {
                        return;
                    };
                    if lock.borrow().blocks_move(y, metrics(&list)) {
                        evt.prevent_default();
                    }
                })
            };

            let wheel = Closure::<dyn FnMut(Event)>::new(|evt: Event| evt.stop_propagation());

            let passive = AddEventListenerOptions::new();
            passive.set_passive(true);
            let active = AddEventListenerOptions::new();
            active.set_passive(false);

            list.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                start.as_ref().unchecked_ref(),
                &passive,
            )
            .ok()?;
            list.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                moved.as_ref().unchecked_ref(),
                &active,
            )
            .ok()?;
            list.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel.as_ref().unchecked_ref(),
                &passive,
            )
            .ok()?;

            Some(Self {
                list,
                start,
                moved,
                wheel,
            })
        }
    }

    impl Drop for TouchListeners {
        fn drop(&mut self) {
            let _ = self.list.remove_event_listener_with_callback(
                "touchstart",
                self.start.as_ref().unchecked_ref(),
            );
            let _ = self.list.remove_event_listener_with_callback(
                "touchmove",
                self.moved.as_ref().unchecked_ref(),
            );
            let _ = self
                .list
                .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        }
    }

    /// Keeps touch drags inside the list element `list_id` from scrolling
    /// the page. The element must be in the DOM after the first render.
    pub fn use_touch_scroll_lock(list_id: &'static str) {
        let listeners = use_hook(|| Rc::new(RefCell::new(None::<TouchListeners>)));

        {
            let listeners = listeners.clone();
            use_effect(move || {
                if listeners.borrow().is_some() {
                    return;
                }
                *listeners.borrow_mut() = TouchListeners::attach(list_id);
                if listeners.borrow().is_none() {
                    dioxus_logger::tracing::warn!("no #{} to attach touch handlers to", list_id);
                }
            });
        }

        use_drop(move || {
            listeners.borrow_mut().take();
        });
    }
}

/// # Fallback Implementation
/// Desktop webviews scroll nested lists without handing off to the page.
#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    pub fn use_touch_scroll_lock(_list_id: &'static str) {}
}
