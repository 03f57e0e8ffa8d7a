use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

/// Passive window listener; dropping it without [`remove`](Self::remove)
/// leaves the listener attached but invalidates the callback.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn remove(self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(&self.event_name, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Passive `resize` listener on the window.
pub fn on_window_resize(mut cb: impl FnMut() + 'static) -> WindowListener {
    let event_name = leptos::ev::resize.name().into_owned();
    let callback = Closure::wrap(Box::new(move |_: Event| cb()) as Box<dyn FnMut(Event)>);

    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
    }

    WindowListener { event_name, callback }
}
