use serde::Deserialize;
use thiserror::Error;

use crate::motion::variants::VariantKind;

const SITE_CONTENT: &str = include_str!("content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("brick row {0} is empty")]
    EmptyBrickRow(usize),
    #[error("stat brick at row {row}, column {column} has negative number {number}")]
    NegativeStat { row: usize, column: usize, number: i32 },
    #[error("service {0} has no title")]
    UntitledService(usize),
    #[error("gallery has no images")]
    EmptyGallery,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub company: String,
    pub logo: String,
    pub metadata: Metadata,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub legacy: Legacy,
    pub transformation: Transformation,
    pub services: Services,
    pub gallery: Gallery,
    pub contact: ContactDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub image: String,
    pub image_alt: String,
    pub badge: String,
    pub headline: Vec<String>,
    pub lead: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Legacy {
    pub heading: String,
    pub body: String,
    pub rows: Vec<Vec<Brick>>,
}

/// One cell of the brick wall.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Brick {
    #[serde(flatten)]
    pub kind: BrickKind,
    pub animation: VariantKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrickKind {
    Empty,
    Word { text: String },
    Stat { number: i32, label: String },
}

impl BrickKind {
    pub fn class(&self) -> &'static str {
        match self {
            BrickKind::Empty => "brick empty",
            BrickKind::Word { .. } => "brick content word",
            BrickKind::Stat { .. } => "brick content stat",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Transformation {
    pub heading: String,
    pub subheading: String,
    pub before: String,
    pub after: String,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Services {
    pub heading: String,
    pub items: Vec<Service>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Gallery {
    pub heading: String,
    pub images: Vec<String>,
}

impl Gallery {
    /// Images twice over, so the carousel can loop without a visible seam.
    pub fn looped(&self) -> impl Iterator<Item = (usize, &String)> {
        self.images.iter().enumerate().chain(self.images.iter().enumerate())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactDetails {
    pub heading: Vec<String>,
    pub body: String,
    pub phone_display: String,
    pub phone_href: String,
    pub whatsapp_display: String,
    pub whatsapp_href: String,
    pub address: String,
    pub acknowledgment: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(SITE_CONTENT)
    }

    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for (row, bricks) in self.legacy.rows.iter().enumerate() {
            if bricks.is_empty() {
                return Err(ContentError::EmptyBrickRow(row));
            }
            for (column, brick) in bricks.iter().enumerate() {
                if let BrickKind::Stat { number, .. } = brick.kind {
                    if number < 0 {
                        return Err(ContentError::NegativeStat { row, column, number });
                    }
                }
            }
        }

        if let Some(index) = self.services.items.iter().position(|s| s.title.trim().is_empty()) {
            return Err(ContentError::UntitledService(index));
        }

        if self.gallery.images.is_empty() {
            return Err(ContentError::EmptyGallery);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().expect("bundled content should be valid");
        assert_eq!(content.legacy.rows.len(), 3);
        assert_eq!(content.services.items.len(), 3);
        assert_eq!(content.nav.len(), 5);
    }

    #[test]
    fn brick_shapes_deserialize() {
        let content = SiteContent::load().unwrap();
        let first = &content.legacy.rows[0];
        assert_eq!(first[0].kind, BrickKind::Empty);
        assert_eq!(first[0].animation, VariantKind::FromLeft);
        assert_eq!(first[1].kind, BrickKind::Stat { number: 30, label: "Years".to_string() });
        assert_eq!(first[1].animation, VariantKind::Drop);
        assert_eq!(content.legacy.rows[1][0].kind, BrickKind::Word { text: "Family Business".to_string() });
    }

    #[test]
    fn gallery_loops_twice() {
        let content = SiteContent::load().unwrap();
        let looped: Vec<_> = content.gallery.looped().collect();
        assert_eq!(looped.len(), content.gallery.images.len() * 2);
        assert_eq!(looped[0], looped[content.gallery.images.len()]);
    }

    fn with_field(pointer: &str, value: serde_json::Value) -> String {
        let mut doc: serde_json::Value = serde_json::from_str(SITE_CONTENT).unwrap();
        *doc.pointer_mut(pointer).unwrap() = value;
        doc.to_string()
    }

    fn with_legacy_rows(rows: serde_json::Value) -> String {
        with_field("/legacy/rows", rows)
    }

    #[test]
    fn rejects_negative_stat() {
        let source = with_legacy_rows(serde_json::json!([[
            { "type": "stat", "number": -3, "label": "Years", "animation": "drop" }
        ]]));
        match SiteContent::parse(&source) {
            Err(ContentError::NegativeStat { row: 0, column: 0, number: -3 }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_row() {
        let source = with_legacy_rows(serde_json::json!([[], []]));
        assert!(matches!(SiteContent::parse(&source), Err(ContentError::EmptyBrickRow(0))));
    }

    #[test]
    fn rejects_unknown_animation() {
        let source = with_legacy_rows(serde_json::json!([[
            { "type": "empty", "animation": "spin" }
        ]]));
        assert!(matches!(SiteContent::parse(&source), Err(ContentError::Parse(_))));
    }

    #[test]
    fn rejects_untitled_service() {
        let source = with_field("/services/items/1/title", serde_json::json!("   "));
        assert!(matches!(SiteContent::parse(&source), Err(ContentError::UntitledService(1))));
    }

    #[test]
    fn rejects_empty_gallery() {
        let source = with_field("/gallery/images", serde_json::json!([]));
        assert!(matches!(SiteContent::parse(&source), Err(ContentError::EmptyGallery)));
    }

    #[test]
    fn shared_handle_compares_equal() {
        let content = std::rc::Rc::new(SiteContent::load().unwrap());
        let handle = content.clone();
        assert!(std::rc::Rc::ptr_eq(&content, &handle));
        assert_eq!(content, handle);
        assert_eq!(*content, SiteContent::load().unwrap());
    }
}
