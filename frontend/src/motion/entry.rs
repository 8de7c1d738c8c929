use std::fmt;

/// One-shot viewport-entry latch. `Entered` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryLatch {
    #[default]
    NotEntered,
    Entered,
}

impl EntryLatch {
    /// Feeds one intersection observation. Returns true only on the transition into `Entered`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (EntryLatch::NotEntered, true) => {
                *self = EntryLatch::Entered;
                true
            }
            _ => false,
        }
    }
}

/// Grows (positive) or shrinks (negative) the region that counts as "in view", in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportMargin(pub i32);

impl ViewportMargin {
    pub const NONE: ViewportMargin = ViewportMargin(0);

    /// Value for `IntersectionObserverInit.rootMargin`.
    pub fn root_margin(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ViewportMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_intersection_only() {
        let mut latch = EntryLatch::default();
        assert!(!latch.observe(false));
        assert_eq!(latch, EntryLatch::NotEntered);
        assert!(latch.observe(true));
        assert_eq!(latch, EntryLatch::Entered);
        assert!(!latch.observe(true));
    }

    #[test]
    fn stays_entered_after_leaving_viewport() {
        let mut latch = EntryLatch::default();
        latch.observe(true);
        for intersecting in [false, false, true, false] {
            latch.observe(intersecting);
            assert_eq!(latch, EntryLatch::Entered);
        }
    }

    #[test]
    fn margin_formats_as_css_pixels() {
        assert_eq!(ViewportMargin(-100).root_margin(), "-100px");
        assert_eq!(ViewportMargin::NONE.root_margin(), "0px");
    }
}
