/// A point along an element or the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::End => 1.0,
        }
    }
}

/// "`element` edge meets `viewport` edge", e.g. `end start` is the element's bottom
/// reaching the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub element: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const START_START: ScrollOffset = ScrollOffset { element: Edge::Start, viewport: Edge::Start };
    pub const END_START: ScrollOffset = ScrollOffset { element: Edge::End, viewport: Edge::Start };

    /// Page scroll offset at which this meeting point happens.
    pub fn resolve(&self, region: &RegionBounds, viewport_height: f64) -> f64 {
        region.top + self.element.fraction() * region.height - self.viewport.fraction() * viewport_height
    }
}

/// Element position in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub height: f64,
}

/// Progress in [0, 1] of `scroll_offset` through the range between `start` and `end`.
pub fn region_progress(
    scroll_offset: f64,
    region: &RegionBounds,
    viewport_height: f64,
    start: ScrollOffset,
    end: ScrollOffset,
) -> f64 {
    let from = start.resolve(region, viewport_height);
    let to = end.resolve(region, viewport_height);
    let span = to - from;
    if span.abs() < f64::EPSILON {
        return if scroll_offset < from { 0.0 } else { 1.0 };
    }
    ((scroll_offset - from) / span).clamp(0.0, 1.0)
}

/// Linear map of `input` from `domain` onto `range`, clamped to the range endpoints.
pub fn interpolate(input: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if (d1 - d0).abs() < f64::EPSILON {
        return if input < d0 { r0 } else { r1 };
    }
    let t = ((input - d0) / (d1 - d0)).clamp(0.0, 1.0);
    r0 + (r1 - r0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hero_scale_interpolation() {
        assert!(close(interpolate(0.5, (0.0, 1.0), (1.15, 1.0)), 1.075));
        assert!(close(interpolate(-0.2, (0.0, 1.0), (1.15, 1.0)), 1.15));
        assert!(close(interpolate(1.7, (0.0, 1.0), (1.15, 1.0)), 1.0));
    }

    #[test]
    fn opacity_fades_out_over_partial_domain() {
        assert!(close(interpolate(0.4, (0.0, 0.8), (1.0, 0.0)), 0.5));
        assert!(close(interpolate(0.9, (0.0, 0.8), (1.0, 0.0)), 0.0));
    }

    #[test]
    fn degenerate_domain_steps() {
        assert_eq!(interpolate(0.1, (0.5, 0.5), (0.0, 10.0)), 0.0);
        assert_eq!(interpolate(0.5, (0.5, 0.5), (0.0, 10.0)), 10.0);
    }

    #[test]
    fn start_start_to_end_start_tracks_element_height() {
        let hero = RegionBounds { top: 0.0, height: 900.0 };
        let progress = |s| region_progress(s, &hero, 800.0, ScrollOffset::START_START, ScrollOffset::END_START);
        assert_eq!(progress(0.0), 0.0);
        assert!(close(progress(450.0), 0.5));
        assert_eq!(progress(900.0), 1.0);
        assert_eq!(progress(5000.0), 1.0);
    }

    #[test]
    fn region_lower_in_the_page_is_independent_of_page_length() {
        let region = RegionBounds { top: 2000.0, height: 400.0 };
        let progress = |s| region_progress(s, &region, 1000.0, ScrollOffset::START_START, ScrollOffset::END_START);
        assert_eq!(progress(1500.0), 0.0);
        assert!(close(progress(2100.0), 0.25));
    }

    #[test]
    fn viewport_relative_offsets() {
        // element top meets viewport bottom -> element top meets viewport top
        let region = RegionBounds { top: 1000.0, height: 200.0 };
        let start = ScrollOffset { element: Edge::Start, viewport: Edge::End };
        assert_eq!(start.resolve(&region, 600.0), 400.0);
        assert!(close(region_progress(700.0, &region, 600.0, start, ScrollOffset::START_START), 0.5));
    }

    #[test]
    fn zero_height_region_does_not_divide_by_zero() {
        let region = RegionBounds { top: 300.0, height: 0.0 };
        let progress = |s| region_progress(s, &region, 800.0, ScrollOffset::START_START, ScrollOffset::END_START);
        assert_eq!(progress(299.0), 0.0);
        assert_eq!(progress(300.0), 1.0);
    }
}
