use log::warn;
use yew::prelude::*;

use crate::dom;
use crate::hooks::listener::WindowListener;
use crate::motion::scroll::ScrollState;

const EVENTS: &[&str] = &["scroll", "resize"];

/// Page scroll state, live for as long as the calling component is mounted.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::register(EVENTS, move || match dom::scroll_metrics() {
                    Ok(metrics) => state.set(ScrollState::from_metrics(&metrics)),
                    Err(err) => warn!("scroll sample failed: {}", err),
                });

                let listener = match listener {
                    Ok(listener) => {
                        listener.fire();
                        Some(listener)
                    }
                    Err(err) => {
                        warn!("scroll tracking disabled: {}", err);
                        None
                    }
                };

                move || drop(listener)
            },
            (),
        );
    }

    *state
}
