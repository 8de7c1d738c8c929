#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealLabel {
    Before,
    After,
}

/// Everything the before/after reveal renders, derived from the hover flag alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealView {
    pub after_opacity: f64,
    pub emphasized: RevealLabel,
}

impl RevealView {
    pub fn from_hover(hovered: bool) -> Self {
        if hovered {
            Self { after_opacity: 1.0, emphasized: RevealLabel::After }
        } else {
            Self { after_opacity: 0.0, emphasized: RevealLabel::Before }
        }
    }

    pub fn is_emphasized(&self, label: RevealLabel) -> bool {
        self.emphasized == label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_state_shows_before() {
        let view = RevealView::from_hover(false);
        assert_eq!(view.after_opacity, 0.0);
        assert!(view.is_emphasized(RevealLabel::Before));
        assert!(!view.is_emphasized(RevealLabel::After));
    }

    #[test]
    fn hover_shows_after() {
        let view = RevealView::from_hover(true);
        assert_eq!(view.after_opacity, 1.0);
        assert!(view.is_emphasized(RevealLabel::After));
    }

    #[test]
    fn leaving_reverts_to_resting_state() {
        let resting = RevealView::from_hover(false);
        let views: Vec<RevealView> = [true, false, true, true, false].into_iter().map(RevealView::from_hover).collect();
        assert_eq!(views[1], resting);
        assert_eq!(views[4], resting);
        assert_eq!(views[2], views[3]);
    }
}
