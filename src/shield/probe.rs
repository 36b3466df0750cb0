// =============================================================================
// Bexa Web - Developer Tools Probe
// =============================================================================
// Optional capability behind the shield's periodic check. Detection of an
// open devtools panel from page script is unreliable on every platform, so
// the whole mechanism is pluggable and a deployment can simply pass no
// probe.
// =============================================================================

use wasm_bindgen::JsValue;

/// Capability interface for the periodic developer-tools check.
pub trait DevtoolsProbe {
    /// Best-effort answer to "does a devtools panel look open right now?".
    fn devtools_open(&self) -> bool;
}

/// Default probe: honors a `window.devtools.isOpen` flag, the convention
/// used by devtools-detect shims. Without such a shim on the page this
/// always reports closed; it is a stub, not a detector.
pub struct ReflectProbe;

impl DevtoolsProbe for ReflectProbe {
    fn devtools_open(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let devtools = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("devtools"))
            .unwrap_or(JsValue::UNDEFINED);
        if devtools.is_undefined() || devtools.is_null() {
            return false;
        }
        js_sys::Reflect::get(&devtools, &JsValue::from_str("isOpen"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}
