use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::motion::region::RegionBounds;
use crate::motion::scroll::ScrollMetrics;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("node is not mounted")]
    Unmounted,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn viewport_height(window: &Window) -> Result<f64, DomError> {
    Ok(window.inner_height()?.as_f64().unwrap_or(0.0))
}

/// Current scroll offset, viewport height and full document height.
pub fn scroll_metrics() -> Result<ScrollMetrics, DomError> {
    let window = window()?;
    let root = window
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::NoRootElement)?;

    Ok(ScrollMetrics {
        offset: window.scroll_y()?,
        viewport_height: viewport_height(&window)?,
        document_height: root.scroll_height() as f64,
    })
}

/// Element bounds in document coordinates, independent of the current scroll offset.
pub fn document_region(element: &Element) -> Result<RegionBounds, DomError> {
    let rect = element.get_bounding_client_rect();
    Ok(RegionBounds {
        top: rect.top() + window()?.scroll_y()?,
        height: rect.height(),
    })
}

pub fn set_title(title: &str) -> Result<(), DomError> {
    document()?.set_title(title);
    Ok(())
}

pub fn set_meta_description(description: &str) -> Result<(), DomError> {
    let document = document()?;
    let meta = match document.query_selector("meta[name=description]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            document.head().ok_or(DomError::NoRootElement)?.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", description)?;
    Ok(())
}
