use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, DomError};
use crate::hooks::listener::WindowListener;
use crate::motion::region::{region_progress, ScrollOffset};

const EVENTS: &[&str] = &["scroll", "resize"];

fn sample(node: &NodeRef, start: ScrollOffset, end: ScrollOffset) -> Result<f64, DomError> {
    let element = node.cast::<Element>().ok_or(DomError::Unmounted)?;
    let metrics = dom::scroll_metrics()?;
    let region = dom::document_region(&element)?;
    Ok(region_progress(metrics.offset, &region, metrics.viewport_height, start, end))
}

/// Scroll progress in [0, 1] through `node`'s own region, from `start` to `end`.
#[hook]
pub fn use_region_progress(node: NodeRef, start: ScrollOffset, end: ScrollOffset) -> f64 {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, start, end)| {
                let (node, start, end) = (node.clone(), *start, *end);
                let listener = WindowListener::register(EVENTS, move || match sample(&node, start, end) {
                    Ok(value) => progress.set(value),
                    Err(err) => warn!("region sample failed: {}", err),
                });

                let listener = match listener {
                    Ok(listener) => {
                        listener.fire();
                        Some(listener)
                    }
                    Err(err) => {
                        warn!("region tracking disabled: {}", err);
                        None
                    }
                };

                move || drop(listener)
            },
            (node, start, end),
        );
    }

    *progress
}
