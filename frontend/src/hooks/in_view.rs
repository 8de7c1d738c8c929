use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom::DomError;
use crate::motion::entry::{EntryLatch, ViewportMargin};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes one element until it first intersects the viewport, then disconnects.
struct EntryWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl EntryWatcher {
    fn observe<F>(node: &NodeRef, margin: ViewportMargin, on_enter: F) -> Result<Self, DomError>
    where
        F: Fn() + 'static,
    {
        let element = node.cast::<Element>().ok_or(DomError::Unmounted)?;
        let mut latch = EntryLatch::default();

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.observe(intersecting) {
                observer.disconnect();
                on_enter();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&margin.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&element);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for EntryWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True from the first time `node` intersects the viewport (grown or shrunk by `margin`) onwards.
/// No observer is created while `enabled` is false.
#[hook]
pub fn use_in_view(node: NodeRef, margin: ViewportMargin, enabled: bool) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |(node, margin, enabled)| {
                let watcher = if *entered || !*enabled {
                    None
                } else {
                    let on_enter = {
                        let entered = entered.clone();
                        move || {
                            debug!("element entered viewport");
                            entered.set(true);
                        }
                    };
                    match EntryWatcher::observe(node, *margin, on_enter) {
                        Ok(watcher) => Some(watcher),
                        Err(err) => {
                            // No observer means no trigger; show the element rather than hide it forever.
                            warn!("viewport entry detection unavailable: {}", err);
                            entered.set(true);
                            None
                        }
                    }
                };

                move || drop(watcher)
            },
            (node, margin, enabled),
        );
    }

    *entered
}
