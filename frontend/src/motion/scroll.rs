use crate::config::SCROLL_THRESHOLD_PX;

/// Raw measurements taken from the window on a scroll or resize event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Height that can actually be scrolled through. Zero when the document fits the viewport.
    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// Page-level scroll state owned by the page shell and handed down read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
    pub progress_percent: f64,
}

impl ScrollState {
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self {
            scrolled_past_threshold: metrics.offset > SCROLL_THRESHOLD_PX,
            progress_percent: progress_percent(metrics.offset, metrics.scrollable_height()),
        }
    }
}

pub fn progress_percent(offset: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (100.0 * offset / scrollable_height).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics { offset, viewport_height, document_height }
    }

    #[test]
    fn progress_is_linear_over_scrollable_height() {
        // 3000 px document in a 1000 px viewport: 2000 px to scroll
        for offset in [0.0, 250.0, 1000.0, 1999.0, 2000.0] {
            let state = ScrollState::from_metrics(&metrics(offset, 1000.0, 3000.0));
            assert!((state.progress_percent - offset / 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn progress_is_clamped() {
        // overscroll bounce can report offsets outside the document
        assert_eq!(progress_percent(-40.0, 2000.0), 0.0);
        assert_eq!(progress_percent(2100.0, 2000.0), 100.0);
    }

    #[test]
    fn short_document_has_zero_progress() {
        for offset in [0.0, 10.0, 500.0] {
            let state = ScrollState::from_metrics(&metrics(offset, 900.0, 600.0));
            assert_eq!(state.progress_percent, 0.0);
        }
        assert_eq!(ScrollState::from_metrics(&metrics(0.0, 900.0, 900.0)).progress_percent, 0.0);
    }

    #[test]
    fn threshold_is_strictly_greater_than_100() {
        let at = ScrollState::from_metrics(&metrics(100.0, 800.0, 4000.0));
        let past = ScrollState::from_metrics(&metrics(101.0, 800.0, 4000.0));
        assert!(!at.scrolled_past_threshold);
        assert!(past.scrolled_past_threshold);
        assert!(!ScrollState::default().scrolled_past_threshold);
    }
}
