//! Keeps touch drags that start inside an open list from scrolling the page.
//!
//! Mobile browsers hand a gesture over to the page once the inner element is
//! at its scroll boundary. Nudging the list 1px off the edge on touch start,
//! and cancelling moves that would overscroll, keeps the gesture in the list.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn at_bottom(&self) -> bool {
        (self.scroll_top + self.client_height).ceil() >= self.scroll_height
    }
}

/// Per-list gesture state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TouchScrollLock {
    start_y: f64,
}

impl TouchScrollLock {
    /// Records where the gesture began. Returns the scroll offset to apply,
    /// if the list sits exactly on a boundary.
    pub fn touch_start(&mut self, y: f64, metrics: ScrollMetrics) -> Option<f64> {
        self.start_y = y;

        let max = metrics.max_scroll();
        if max <= 1.0 {
            return None;
        }
        if metrics.scroll_top <= 0.0 {
            Some(1.0)
        } else if metrics.scroll_top >= max {
            Some(max - 1.0)
        } else {
            None
        }
    }

    /// Whether the move to `y` must be cancelled because the list cannot
    /// scroll further in that direction.
    pub fn blocks_move(&self, y: f64, metrics: ScrollMetrics) -> bool {
        let delta_y = y - self.start_y;
        (metrics.at_top() && delta_y > 0.0) || (metrics.at_bottom() && delta_y < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 1000.0,
            client_height: 300.0,
        }
    }

    #[test]
    fn nudges_off_both_edges() {
        let mut lock = TouchScrollLock::default();
        assert_eq!(lock.touch_start(10.0, metrics(0.0)), Some(1.0));
        assert_eq!(lock.touch_start(10.0, metrics(700.0)), Some(699.0));
        assert_eq!(lock.touch_start(10.0, metrics(350.0)), None);
    }

    #[test]
    fn short_lists_are_left_alone() {
        let mut lock = TouchScrollLock::default();
        let short = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 200.0,
            client_height: 200.0,
        };
        assert_eq!(lock.touch_start(0.0, short), None);
    }

    #[test]
    fn blocks_overscroll_only() {
        let mut lock = TouchScrollLock::default();
        lock.touch_start(100.0, metrics(0.0));

        // Pulling down at the top would drag the page.
        assert!(lock.blocks_move(140.0, metrics(0.0)));
        // Pushing up at the top scrolls the list.
        assert!(!lock.blocks_move(60.0, metrics(0.0)));
        // Pushing up at the bottom would drag the page.
        assert!(lock.blocks_move(60.0, metrics(700.0)));
        assert!(!lock.blocks_move(60.0, metrics(350.0)));
    }
}
