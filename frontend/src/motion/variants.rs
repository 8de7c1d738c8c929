use serde::Deserialize;

/// Animatable style properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    X,
    Y,
    Rotate,
    Scale,
}

/// Entry animations available to page elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    FadeUp,
    FadeIn,
    ScaleIn,
    FromLeft,
    FromRight,
    FromBottom,
    Drop,
}

// (property, hidden, visible)
type Track = (Property, f64, f64);

const FADE_UP: &[Track] = &[(Property::Opacity, 0.0, 1.0), (Property::Y, 60.0, 0.0)];
const FADE_IN: &[Track] = &[(Property::Opacity, 0.0, 1.0)];
const SCALE_IN: &[Track] = &[(Property::Opacity, 0.0, 1.0), (Property::Scale, 0.8, 1.0)];
const FROM_LEFT: &[Track] = &[
    (Property::Opacity, 0.0, 1.0),
    (Property::X, -100.0, 0.0),
    (Property::Rotate, -5.0, 0.0),
];
const FROM_RIGHT: &[Track] = &[
    (Property::Opacity, 0.0, 1.0),
    (Property::X, 100.0, 0.0),
    (Property::Rotate, 5.0, 0.0),
];
const FROM_BOTTOM: &[Track] = &[
    (Property::Opacity, 0.0, 1.0),
    (Property::Y, 80.0, 0.0),
    (Property::Scale, 0.8, 1.0),
];
const DROP: &[Track] = &[
    (Property::Opacity, 0.0, 1.0),
    (Property::Y, -120.0, 0.0),
    (Property::Rotate, -10.0, 0.0),
];

impl VariantKind {
    #[cfg(test)]
    pub const ALL: [VariantKind; 7] = [
        VariantKind::FadeUp,
        VariantKind::FadeIn,
        VariantKind::ScaleIn,
        VariantKind::FromLeft,
        VariantKind::FromRight,
        VariantKind::FromBottom,
        VariantKind::Drop,
    ];

    /// Edge columns slide in from their own side; everything between rises into place.
    pub fn for_column(index: usize, count: usize) -> VariantKind {
        match index {
            0 if count > 1 => VariantKind::FromLeft,
            i if i + 1 == count && count > 1 => VariantKind::FromRight,
            _ => VariantKind::FadeUp,
        }
    }

    fn tracks(self) -> &'static [Track] {
        match self {
            VariantKind::FadeUp => FADE_UP,
            VariantKind::FadeIn => FADE_IN,
            VariantKind::ScaleIn => SCALE_IN,
            VariantKind::FromLeft => FROM_LEFT,
            VariantKind::FromRight => FROM_RIGHT,
            VariantKind::FromBottom => FROM_BOTTOM,
            VariantKind::Drop => DROP,
        }
    }

    pub fn variant(self) -> AnimationVariant {
        let mut hidden = StyleFrame::IDENTITY;
        let mut visible = StyleFrame::IDENTITY;
        for &(property, from, to) in self.tracks() {
            hidden.set(property, from);
            visible.set(property, to);
        }
        AnimationVariant { hidden, visible }
    }
}

/// A complete set of animatable values. Properties a variant does not touch stay at identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleFrame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub scale: f64,
}

impl StyleFrame {
    pub const IDENTITY: StyleFrame = StyleFrame { opacity: 1.0, x: 0.0, y: 0.0, rotate: 0.0, scale: 1.0 };

    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Rotate => self.rotate = value,
            Property::Scale => self.scale = value,
        }
    }

    pub fn lerp(&self, other: &StyleFrame, t: f64) -> StyleFrame {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        StyleFrame {
            opacity: mix(self.opacity, other.opacity),
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            rotate: mix(self.rotate, other.rotate),
            scale: mix(self.scale, other.scale),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) rotate({}deg) scale({});",
            self.opacity, self.x, self.y, self.rotate, self.scale
        )
    }
}

/// Paired hidden/visible frames of one entry animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationVariant {
    pub hidden: StyleFrame,
    pub visible: StyleFrame,
}

impl AnimationVariant {
    /// Frame at `progress` (0 = hidden, 1 = visible).
    pub fn sample(&self, progress: f64) -> StyleFrame {
        self.hidden.lerp(&self.visible, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_ends_at_identity() {
        for kind in VariantKind::ALL {
            assert_eq!(kind.variant().visible, StyleFrame::IDENTITY, "{:?}", kind);
            assert_eq!(kind.variant().hidden.opacity, 0.0, "{:?}", kind);
        }
    }

    #[test]
    fn directional_variants_mirror_each_other() {
        let left = VariantKind::FromLeft.variant().hidden;
        let right = VariantKind::FromRight.variant().hidden;
        assert_eq!(left.x, -right.x);
        assert_eq!(left.rotate, -right.rotate);
    }

    #[test]
    fn sample_interpolates_every_track() {
        let mid = VariantKind::Drop.variant().sample(0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, -60.0);
        assert_eq!(mid.rotate, -5.0);
        assert_eq!(mid.scale, 1.0);

        let bottom = VariantKind::FromBottom.variant();
        assert_eq!(bottom.sample(-1.0), bottom.hidden);
        assert_eq!(bottom.sample(2.0), bottom.visible);
    }

    #[test]
    fn column_roles() {
        let kinds: Vec<VariantKind> = (0..3).map(|i| VariantKind::for_column(i, 3)).collect();
        assert_eq!(kinds, vec![VariantKind::FromLeft, VariantKind::FadeUp, VariantKind::FromRight]);
        assert_eq!(VariantKind::for_column(0, 1), VariantKind::FadeUp);
    }

    #[test]
    fn css_renders_transform_chain() {
        let css = VariantKind::ScaleIn.variant().hidden.to_css();
        assert_eq!(css, "opacity: 0; transform: translate(0px, 0px) rotate(0deg) scale(0.8);");
    }

    #[test]
    fn kinds_deserialize_from_snake_case() {
        let kinds: Vec<VariantKind> = serde_json::from_str(r#"["from_left", "drop", "fade_up"]"#).unwrap();
        assert_eq!(kinds, vec![VariantKind::FromLeft, VariantKind::Drop, VariantKind::FadeUp]);
    }
}
