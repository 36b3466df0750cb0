// =============================================================================
// Bexa Web - Event Listener Bindings
// =============================================================================
// RAII wrapper around addEventListener/removeEventListener. Every listener
// the shield installs is owned by one of these; dropping the binding (or
// calling unbind twice) is always safe, which is what guarantees teardown
// leaves nothing behind.
// =============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use super::ShieldError;

/// One live event subscription on a DOM target.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventBinding {
    /// Attach `handler` to `event` on `target`.
    pub fn bind(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, ShieldError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| ShieldError::Listener {
                event,
                detail: format!("{err:?}"),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    /// Event name this binding listens for.
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Whether the listener is still attached.
    pub fn is_bound(&self) -> bool {
        self.closure.is_some()
    }

    /// Detach the listener. Calling this more than once is a no-op.
    pub fn unbind(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}
