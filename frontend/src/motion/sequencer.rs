use crate::config::{COLUMN_STAGGER_SECS, ROW_STAGGER_SECS};

/// Position of an element in a layout grid, used to cascade entry animations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stagger {
    pub row: usize,
    pub column: usize,
}

impl Stagger {
    pub fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn delay_secs(&self) -> f64 {
        self.delay_with(ROW_STAGGER_SECS, COLUMN_STAGGER_SECS)
    }

    pub fn delay_with(&self, row_stagger: f64, column_stagger: f64) -> f64 {
        self.row as f64 * row_stagger + self.column as f64 * column_stagger
    }
}

/// Quadratic ease-out for a linear `t` in [0, 1].
fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Transition {
    pub fn new(duration_secs: f64) -> Self {
        Self { duration_secs, delay_secs: 0.0 }
    }

    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn staggered(self, stagger: Stagger) -> Self {
        self.with_delay(stagger.delay_secs())
    }

    /// Time from trigger until the element has settled.
    pub fn total_secs(&self) -> f64 {
        (self.delay_secs + self.duration_secs).max(0.0)
    }

    pub fn is_settled_at(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.total_secs()
    }

    /// Eased animation progress `elapsed_secs` after the trigger.
    pub fn progress_at(&self, elapsed_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return if elapsed_secs >= self.delay_secs { 1.0 } else { 0.0 };
        }
        ease_out((elapsed_secs - self.delay_secs) / self.duration_secs)
    }
}

/// Per-element entry state. Only moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Hidden,
    Animating,
    Visible,
}

impl Phase {
    /// Viewport entered (or mounted). Returns true if this started the animation.
    pub fn enter(&mut self) -> bool {
        if *self == Phase::Hidden {
            *self = Phase::Animating;
            true
        } else {
            false
        }
    }

    /// Transition finished.
    pub fn settle(&mut self) {
        if *self == Phase::Animating {
            *self = Phase::Visible;
        }
    }

    /// Progress to render: the hidden frame before entry, the visible frame once settled,
    /// and `animating` in between.
    pub fn frame_progress(&self, animating: f64) -> f64 {
        match self {
            Phase::Hidden => 0.0,
            Phase::Animating => animating,
            Phase::Visible => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CARD_STAGGER_SECS;

    #[test]
    fn grid_delay_row_one_column_two() {
        let delay = Stagger::at(1, 2).delay_secs();
        assert!((delay - 0.35).abs() < 1e-12);
        assert_eq!(Stagger::at(1, 2).delay_secs(), delay);
    }

    #[test]
    fn cascade_is_ordered_within_a_row() {
        let delays: Vec<f64> = (0..4).map(|c| Stagger::at(2, c).delay_secs()).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Stagger::default().delay_secs(), 0.0);
    }

    #[test]
    fn phase_never_goes_back() {
        let mut phase = Phase::default();
        phase.settle();
        assert_eq!(phase, Phase::Hidden);
        assert!(phase.enter());
        assert_eq!(phase, Phase::Animating);
        assert!(!phase.enter());
        phase.settle();
        assert_eq!(phase, Phase::Visible);
        assert!(!phase.enter());
        assert_eq!(phase, Phase::Visible);
    }

    #[test]
    fn transition_timing() {
        let t = Transition::new(0.7).staggered(Stagger::at(1, 2));
        assert!((t.total_secs() - 1.05).abs() < 1e-12);
        assert!(!t.is_settled_at(1.0));
        assert!(t.is_settled_at(1.05));
        assert_eq!(t.progress_at(0.2), 0.0);
        assert_eq!(t.progress_at(2.0), 1.0);
        let halfway = t.progress_at(0.35 + 0.35);
        assert!(halfway > 0.5 && halfway < 1.0, "ease-out front-loads motion");
    }

    #[test]
    fn zero_duration_jumps() {
        let t = Transition::new(0.0).with_delay(0.5);
        assert_eq!(t.progress_at(0.4), 0.0);
        assert_eq!(t.progress_at(0.5), 1.0);
    }

    #[test]
    fn rendered_progress_follows_phase() {
        let t = Transition::new(0.8);
        let mut phase = Phase::default();
        assert_eq!(phase.frame_progress(t.progress_at(0.4)), 0.0);
        phase.enter();
        let mid = phase.frame_progress(t.progress_at(0.4));
        assert!(mid > 0.5 && mid < 1.0);
        phase.settle();
        assert_eq!(phase.frame_progress(mid), 1.0);
    }

    #[test]
    fn card_delay_grows_per_card() {
        let delays: Vec<f64> = (0..3).map(|i| Stagger::at(0, i).delay_with(ROW_STAGGER_SECS, CARD_STAGGER_SECS)).collect();
        assert_eq!(delays[0], 0.0);
        assert!((delays[2] - 0.3).abs() < 1e-12);
    }
}
