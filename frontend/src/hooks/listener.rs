use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Window};

use crate::dom::{self, DomError};

/// Passive window event listener that deregisters itself when dropped.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn register<F>(events: &'static [&'static str], callback: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let window = dom::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for event in events {
            window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
        }
        debug!("registered window listener for {:?}", events);

        Ok(Self { window, events, callback })
    }

    /// Runs the callback once outside of any event, to pick up the initial state.
    pub fn fire(&self) {
        let _ = self
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL);
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        debug!("removed window listener for {:?}", self.events);
    }
}
