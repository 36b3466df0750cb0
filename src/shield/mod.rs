// =============================================================================
// Bexa Web - Content Shield
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Errors
// 3. Options
// 4. Style Watchdog
// 5. Shield Handles (install / teardown)
// 6. ContentShield Component
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Submodules
// -----------------------------------------------------------------------------

pub mod listeners;
pub mod policy;
pub mod probe;

pub use listeners::EventBinding;
pub use probe::{DevtoolsProbe, ReflectProbe};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MutationObserver, MutationObserverInit, VisibilityState};

use crate::services::toast::{Notifier, ToastHub};
use policy::CaptureSentinel;

// -----------------------------------------------------------------------------
// 2. Errors
// -----------------------------------------------------------------------------

/// Wiring failures while arming the shield. Every variant is logged and the
/// corresponding deterrent is left absent; nothing is surfaced to the
/// visitor.
#[derive(Debug, thiserror::Error)]
pub enum ShieldError {
    #[error("failed to attach `{event}` listener: {detail}")]
    Listener { event: &'static str, detail: String },

    #[error("failed to start style observer: {detail}")]
    Observer { detail: String },
}

// -----------------------------------------------------------------------------
// 3. Options
// -----------------------------------------------------------------------------

/// Recognized shield behaviors. One configurable component rather than
/// parallel component variants.
#[derive(Clone)]
pub struct ShieldOptions {
    /// Obscure the wrapper while the tab is hidden and raise a capture
    /// warning when it stays hidden past the grace delay.
    pub visibility_blur: bool,

    /// Watch the wrapper's `style` attribute and reapply the no-selection
    /// style if something else rewrites it.
    pub mutation_watchdog: bool,

    /// Periodic developer-tools check. `None` disables the poll entirely.
    pub devtools_probe: Option<Rc<dyn DevtoolsProbe>>,
}

impl Default for ShieldOptions {
    fn default() -> Self {
        Self {
            visibility_blur: true,
            mutation_watchdog: true,
            devtools_probe: Some(Rc::new(ReflectProbe)),
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Style Watchdog
// -----------------------------------------------------------------------------

/// Apply the scoped no-selection style to the wrapper, if missing.
///
/// The guard against rewriting an already-correct value keeps the mutation
/// observer from feeding itself.
fn ensure_no_select(el: &HtmlElement) {
    let style = el.style();
    let current = style.get_property_value("user-select").unwrap_or_default();
    if current != "none" {
        let _ = style.set_property("user-select", "none");
        let _ = style.set_property("-webkit-user-select", "none");
    }
}

/// Reapplies the no-selection style whenever the wrapper's `style` attribute
/// is rewritten from outside. Reactive, not preventive: a mutator faster
/// than the observer still wins the race.
struct StyleWatchdog {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl StyleWatchdog {
    fn watch(el: &HtmlElement) -> Result<Self, ShieldError> {
        let wrapper = el.clone();
        let callback = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _observer: MutationObserver| {
                ensure_no_select(&wrapper);
            },
        )
            as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| ShieldError::Observer {
                detail: format!("{err:?}"),
            })?;

        let init = MutationObserverInit::new();
        init.set_attributes(true);
        let filter = js_sys::Array::of1(&JsValue::from_str("style"));
        init.set_attribute_filter(&filter);

        observer
            .observe_with_options(el, &init)
            .map_err(|err| ShieldError::Observer {
                detail: format!("{err:?}"),
            })?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for StyleWatchdog {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// -----------------------------------------------------------------------------
// 5. Shield Handles
// -----------------------------------------------------------------------------

/// State shared between the visibility listener and its delayed check.
#[derive(Default)]
struct CaptureState {
    sentinel: CaptureSentinel,
    pending: Option<Timeout>,
}

/// Everything the shield installed. Dropping this releases every listener,
/// observer and timer; each release is independently idempotent, so teardown
/// order does not matter.
pub struct ShieldHandles {
    bindings: Vec<EventBinding>,
    watchdog: Option<StyleWatchdog>,
    probe: Option<Interval>,
    capture: Option<Rc<RefCell<CaptureState>>>,
}

impl ShieldHandles {
    /// Arm the shield around `root`. Deterrents the platform refuses are
    /// logged and skipped; everything else stays active.
    pub fn install<N>(root: &HtmlElement, options: &ShieldOptions, notifier: N) -> Self
    where
        N: Notifier + Clone + 'static,
    {
        let document = crate::utils::document();
        let target: &EventTarget = document.as_ref();

        // Scoped no-selection style on the wrapper only, not the whole page.
        ensure_no_select(root);

        let mut bindings = Vec::new();

        // Context menu: suppress and warn.
        {
            let toast = notifier.clone();
            try_bind(&mut bindings, target, "contextmenu", move |event| {
                event.prevent_default();
                toast.warning(policy::CONTEXT_MENU_WARNING);
            });
        }

        // Keyboard shortcuts for copy/print/save, PrintScreen, F12.
        {
            let toast = notifier.clone();
            try_bind(&mut bindings, target, "keydown", move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(action) = policy::blocked_action(&key_event.key(), key_event.ctrl_key())
                else {
                    return;
                };
                event.prevent_default();
                if let Some(message) = action.warning() {
                    toast.warning(message);
                }
            });
        }

        // Clipboard events: suppress and warn.
        for event_name in ["copy", "cut"] {
            let toast = notifier.clone();
            try_bind(&mut bindings, target, event_name, move |event| {
                event.prevent_default();
                toast.warning(policy::CLIPBOARD_WARNING);
            });
        }

        // Image dragging: suppress silently.
        try_bind(&mut bindings, target, "dragstart", move |event| {
            event.prevent_default();
        });

        // Visibility-based obfuscation.
        let capture = if options.visibility_blur {
            let state = Rc::new(RefCell::new(CaptureState::default()));
            let shared = Rc::clone(&state);
            let doc = document.clone();
            let wrapper = root.clone();
            let toast = notifier.clone();
            try_bind(&mut bindings, target, "visibilitychange", move |_event| {
                if doc.visibility_state() != VisibilityState::Hidden {
                    return;
                }
                let _ = wrapper.class_list().add_1(policy::OBFUSCATION_CLASS);
                let epoch = shared.borrow_mut().sentinel.arm();

                let check_state = Rc::clone(&shared);
                let check_doc = doc.clone();
                let check_wrapper = wrapper.clone();
                let check_toast = toast.clone();
                // Replacing `pending` cancels any previous grace timer.
                let pending = Timeout::new(policy::CAPTURE_GRACE_MS, move || {
                    let still_hidden = check_doc.visibility_state() == VisibilityState::Hidden;
                    let outcome = {
                        let mut state = check_state.borrow_mut();
                        state.pending = None;
                        state.sentinel.elapse(epoch, still_hidden)
                    };
                    if let Some(warn) = outcome {
                        let _ = check_wrapper.class_list().remove_1(policy::OBFUSCATION_CLASS);
                        if warn {
                            check_toast.warning(policy::CAPTURE_WARNING);
                        }
                    }
                });
                shared.borrow_mut().pending = Some(pending);
            });
            Some(state)
        } else {
            None
        };

        // Style attribute watchdog.
        let watchdog = if options.mutation_watchdog {
            match StyleWatchdog::watch(root) {
                Ok(watchdog) => Some(watchdog),
                Err(err) => {
                    log::warn!("content shield: {err}");
                    None
                }
            }
        } else {
            None
        };

        // Periodic devtools check. Reloading the page on detection is a
        // best-effort carry-over of dubious value; the probe is the real
        // switch.
        let probe = options.devtools_probe.clone().map(|probe| {
            Interval::new(policy::DEVTOOLS_POLL_MS, move || {
                if probe.devtools_open() {
                    log::debug!("content shield: devtools reported open, reloading");
                    reload_page();
                }
            })
        });

        log::debug!(
            "content shield: armed with {} listeners (watchdog: {}, probe: {})",
            bindings.len(),
            watchdog.is_some(),
            probe.is_some(),
        );

        Self {
            bindings,
            watchdog,
            probe,
            capture,
        }
    }

    /// Names of the events with a live listener, for teardown checks.
    pub fn installed_events(&self) -> Vec<&'static str> {
        self.bindings
            .iter()
            .filter(|binding| binding.is_bound())
            .map(|binding| binding.event())
            .collect()
    }
}

impl Drop for ShieldHandles {
    fn drop(&mut self) {
        // Abandon a pending grace timer so no callback runs after teardown.
        if let Some(capture) = &self.capture {
            capture.borrow_mut().pending = None;
        }
        log::debug!("content shield: released");
    }
}

fn try_bind(
    bindings: &mut Vec<EventBinding>,
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    match EventBinding::bind(target, event, handler) {
        Ok(binding) => bindings.push(binding),
        Err(err) => log::warn!("content shield: {err}"),
    }
}

fn reload_page() {
    let location = crate::utils::window().location();
    if let Ok(href) = location.href() {
        let _ = location.set_href(&href);
    }
}

// -----------------------------------------------------------------------------
// 6. ContentShield Component
// -----------------------------------------------------------------------------

/// Wraps page content with copy/capture deterrents.
///
/// This is a deterrent, not a security boundary: everything here runs in
/// the visitor's browser and can be bypassed by anyone with developer
/// tools. It exists to discourage casual copying, nothing more.
#[component]
pub fn ContentShield(
    #[prop(optional)] options: Option<ShieldOptions>,
    children: Children,
) -> impl IntoView {
    let options = options.unwrap_or_default();
    let hub = expect_context::<ToastHub>();
    let root = NodeRef::<Div>::new();
    let handles = StoredValue::new_local(None::<ShieldHandles>);

    // Arm once the wrapper element exists.
    Effect::new(move |_| {
        if handles.with_value(|installed| installed.is_some()) {
            return;
        }
        let Some(element) = root.get() else {
            return;
        };
        handles.set_value(Some(ShieldHandles::install(&element, &options, hub)));
    });

    // Dropping the handles releases every listener and timer.
    on_cleanup(move || handles.set_value(None));

    view! {
        <div class="content-shield" node_ref=root>
            {children()}
        </div>
    }
}
