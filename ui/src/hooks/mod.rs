//! Hooks that bridge the plain-data controllers to the page.
pub mod use_list_placement;
pub mod use_touch_scroll_lock;
pub mod use_viewport_capabilities;
