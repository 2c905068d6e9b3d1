//! Where to put an open option list on screen.
//!
//! On touch devices with an on-screen keyboard the visible part of the page
//! (the visual viewport) shrinks and scrolls independently of the layout
//! viewport. [`VisualViewportLayout`] pins the list under the input and clamps
//! its height to what is still visible above the keyboard; everywhere else
//! [`StaticLayout`] leaves placement to the stylesheet.

/// Space between the input's bottom edge and the list.
pub const LIST_GAP: f64 = 6.0;
/// Space kept free between the list and the bottom of the visual viewport.
pub const BOTTOM_MARGIN: f64 = 8.0;
/// The list never gets shorter than this, even with the keyboard up.
pub const MIN_LIST_HEIGHT: f64 = 160.0;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Offset and size of the visual viewport within the layout viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct VisualViewport {
    pub offset_left: f64,
    pub offset_top: f64,
    pub width: f64,
    pub height: f64,
}

/// What the platform reported about the viewport at the time of placement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportSnapshot {
    pub visual: Option<VisualViewport>,
    /// Bottom safe-area inset (home indicator etc.).
    pub safe_bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListPlacement {
    /// Let the stylesheet position the list under the input.
    Static,
    Fixed {
        left: f64,
        top: f64,
        min_width: f64,
        max_height: f64,
    },
}

impl ListPlacement {
    /// Inline style for the list element.
    pub fn style(&self) -> String {
        match self {
            Self::Static => String::new(),
            Self::Fixed {
                left,
                top,
                min_width,
                max_height,
            } => format!(
                "position: fixed; left: {left}px; top: {top}px; min-width: {min_width}px; max-height: {max_height}px;"
            ),
        }
    }
}

/// Decides where the list for an input at `anchor` goes.
pub trait ViewportGeometry {
    fn place_list(&self, anchor: Rect, viewport: &ViewportSnapshot) -> ListPlacement;

    /// Whether placement must be recomputed on viewport resize/scroll.
    fn tracks_viewport(&self) -> bool;
}

/// Plain layout-relative placement, no height clamp.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticLayout;

impl ViewportGeometry for StaticLayout {
    fn place_list(&self, _anchor: Rect, _viewport: &ViewportSnapshot) -> ListPlacement {
        ListPlacement::Static
    }

    fn tracks_viewport(&self) -> bool {
        false
    }
}

/// Fixed placement that follows the live visual viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisualViewportLayout;

impl ViewportGeometry for VisualViewportLayout {
    fn place_list(&self, anchor: Rect, viewport: &ViewportSnapshot) -> ListPlacement {
        let Some(visual) = viewport.visual else {
            return ListPlacement::Static;
        };

        let available =
            (visual.height - (anchor.bottom() + LIST_GAP) - BOTTOM_MARGIN - viewport.safe_bottom)
                .round();

        ListPlacement::Fixed {
            left: (anchor.left + visual.offset_left).round(),
            top: (anchor.bottom() + visual.offset_top + LIST_GAP).round(),
            min_width: anchor.width,
            max_height: available.max(MIN_LIST_HEIGHT),
        }
    }

    fn tracks_viewport(&self) -> bool {
        true
    }
}

/// Platform features that decide which geometry provider to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewportCapabilities {
    /// The primary input is touch (`maxTouchPoints > 0`).
    pub touch_primary: bool,
    /// A visual viewport API is available.
    pub visual_viewport: bool,
}

impl ViewportCapabilities {
    pub fn wants_visual_viewport(&self) -> bool {
        self.touch_primary && self.visual_viewport
    }
}

pub fn geometry_for(capabilities: ViewportCapabilities) -> Box<dyn ViewportGeometry> {
    if capabilities.wants_visual_viewport() {
        Box::new(VisualViewportLayout)
    } else {
        Box::new(StaticLayout)
    }
}

/// Placement for a list anchored at `anchor`, or static when there is no
/// anchor (list closed or input not mounted). Called again with a fresh
/// snapshot after every viewport resize or scroll.
pub fn place_for(
    capabilities: ViewportCapabilities,
    anchor: Option<Rect>,
    viewport: &ViewportSnapshot,
) -> ListPlacement {
    match anchor {
        Some(anchor) => geometry_for(capabilities).place_list(anchor, viewport),
        None => ListPlacement::Static,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_at(top: f64) -> Rect {
        Rect {
            left: 20.0,
            top,
            width: 240.0,
            height: 40.0,
        }
    }

    fn keyboard_up() -> ViewportSnapshot {
        ViewportSnapshot {
            visual: Some(VisualViewport {
                offset_left: 0.0,
                offset_top: 120.0,
                width: 390.0,
                height: 420.0,
            }),
            safe_bottom: 0.0,
        }
    }

    #[test]
    fn static_layout_never_clamps() {
        let placement = StaticLayout.place_list(input_at(100.0), &keyboard_up());
        assert_eq!(placement, ListPlacement::Static);
        assert_eq!(placement.style(), "");
        assert!(!StaticLayout.tracks_viewport());
    }

    #[test]
    fn visual_layout_pins_under_the_input() {
        let placement = VisualViewportLayout.place_list(input_at(100.0), &keyboard_up());
        // bottom = 140; available = 420 - 146 - 8 = 266
        assert_eq!(
            placement,
            ListPlacement::Fixed {
                left: 20.0,
                top: 266.0,
                min_width: 240.0,
                max_height: 266.0,
            }
        );
    }

    #[test]
    fn visual_layout_enforces_minimum_height() {
        let mut snapshot = keyboard_up();
        snapshot.safe_bottom = 34.0;
        let placement = VisualViewportLayout.place_list(input_at(300.0), &snapshot);
        match placement {
            ListPlacement::Fixed { max_height, .. } => assert_eq!(max_height, MIN_LIST_HEIGHT),
            ListPlacement::Static => panic!("expected fixed placement"),
        }
    }

    #[test]
    fn visual_layout_without_viewport_falls_back() {
        let placement = VisualViewportLayout.place_list(input_at(0.0), &ViewportSnapshot::default());
        assert_eq!(placement, ListPlacement::Static);
    }

    #[test]
    fn capability_flag_picks_the_provider() {
        let touch = ViewportCapabilities {
            touch_primary: true,
            visual_viewport: true,
        };
        assert!(geometry_for(touch).tracks_viewport());

        let mouse = ViewportCapabilities {
            touch_primary: false,
            visual_viewport: true,
        };
        assert!(!geometry_for(mouse).tracks_viewport());
        assert!(!geometry_for(ViewportCapabilities::default()).tracks_viewport());
    }

    #[test]
    fn viewport_scroll_moves_an_open_list() {
        let touch = ViewportCapabilities {
            touch_primary: true,
            visual_viewport: true,
        };
        let anchor = Some(input_at(100.0));
        let before = place_for(touch, anchor, &keyboard_up());

        let mut scrolled = keyboard_up();
        if let Some(visual) = scrolled.visual.as_mut() {
            visual.offset_top = 200.0;
            visual.height = 380.0;
        }
        let after = place_for(touch, anchor, &scrolled);

        assert_ne!(before, after);
        assert_eq!(
            after,
            ListPlacement::Fixed {
                left: 20.0,
                top: 346.0,
                min_width: 240.0,
                max_height: 226.0,
            }
        );
    }

    #[test]
    fn closed_or_mouse_lists_stay_static() {
        let touch = ViewportCapabilities {
            touch_primary: true,
            visual_viewport: true,
        };
        assert_eq!(place_for(touch, None, &keyboard_up()), ListPlacement::Static);
        assert_eq!(
            place_for(ViewportCapabilities::default(), Some(input_at(100.0)), &keyboard_up()),
            ListPlacement::Static
        );
    }

    #[test]
    fn fixed_style_lists_every_property() {
        let style = ListPlacement::Fixed {
            left: 1.0,
            top: 2.0,
            min_width: 3.0,
            max_height: 160.0,
        }
        .style();
        assert_eq!(
            style,
            "position: fixed; left: 1px; top: 2px; min-width: 3px; max-height: 160px;"
        );
    }
}
