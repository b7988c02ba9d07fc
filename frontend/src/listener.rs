use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, Window};

/// A window event subscription that lives exactly as long as this value.
/// Dropping it removes the listener again.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(window: &Window, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, err);
        }
    }
}

/// Subscribes `handler` to `event` on the global window. Returns `None` (and
/// logs) when there is no window or the browser refuses the listener.
pub fn on_window<F>(event: &'static str, handler: F) -> Option<WindowListener>
where
    F: FnMut(Event) + 'static,
{
    let Some(window) = web_sys::window() else {
        warn!("No window available, {} events will be ignored", event);
        return None;
    };
    match WindowListener::new(&window, event, handler) {
        Ok(listener) => Some(listener),
        Err(err) => {
            warn!("Failed to add {} listener: {:?}", event, err);
            None
        }
    }
}

/// Current vertical scroll offset of the page, if the browser reports one.
pub fn scroll_offset() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}
