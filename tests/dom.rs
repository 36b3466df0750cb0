// =============================================================================
// Bexa Web - DOM Integration Tests
// =============================================================================
// Browser-run checks for the shield's listener lifecycle and the accordion.
// Run with: wasm-pack test --headless --chrome
// =============================================================================

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

use bexa_web::components::AccordionItem;
use bexa_web::services::toast::Notifier;
use bexa_web::shield::{policy, EventBinding, ShieldHandles, ShieldOptions};

wasm_bindgen_test_configure!(run_in_browser);

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Notifier that records messages instead of rendering toasts.
#[derive(Clone, Default)]
struct RecordingNotifier {
    infos: Rc<RefCell<Vec<String>>>,
    warnings: Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh wrapper element attached to the test page body.
fn shield_root() -> HtmlElement {
    let el = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&el).unwrap();
    el.dyn_into::<HtmlElement>().unwrap()
}

/// Shield options with nothing periodic, for listener-focused tests.
fn quiet_options() -> ShieldOptions {
    ShieldOptions {
        visibility_blur: false,
        mutation_watchdog: false,
        devtools_probe: None,
    }
}

fn cancelable_event(name: &str) -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict(name, &init).unwrap()
}

fn keydown(key: &str, ctrl: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

// -----------------------------------------------------------------------------
// Event Binding Lifecycle
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn event_binding_detaches_cleanly() {
    let count = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&count);
    let doc = document();

    let mut binding = EventBinding::bind(doc.as_ref(), "copy", move |_event| {
        *seen.borrow_mut() += 1;
    })
    .unwrap();

    document().dispatch_event(&Event::new("copy").unwrap()).unwrap();
    assert_eq!(*count.borrow(), 1);
    assert!(binding.is_bound());

    binding.unbind();
    binding.unbind(); // second release is a no-op
    assert!(!binding.is_bound());

    document().dispatch_event(&Event::new("copy").unwrap()).unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[wasm_bindgen_test]
fn teardown_releases_every_listener() {
    let root = shield_root();
    let notifier = RecordingNotifier::default();
    let options = ShieldOptions {
        visibility_blur: true,
        mutation_watchdog: true,
        devtools_probe: None,
    };
    let handles = ShieldHandles::install(&root, &options, notifier.clone());

    let mut installed = handles.installed_events();
    installed.sort();
    assert_eq!(
        installed,
        vec!["contextmenu", "copy", "cut", "dragstart", "keydown", "visibilitychange"]
    );

    drop(handles);

    // With the shield gone, nothing intercepts or warns.
    let event = cancelable_event("contextmenu");
    document().dispatch_event(&event).unwrap();
    assert!(!event.default_prevented());
    assert!(notifier.warnings.borrow().is_empty());

    root.remove();
}

// -----------------------------------------------------------------------------
// Interception Behavior
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn context_menu_is_suppressed_with_one_warning() {
    let root = shield_root();
    let notifier = RecordingNotifier::default();
    let handles = ShieldHandles::install(&root, &quiet_options(), notifier.clone());

    let event = cancelable_event("contextmenu");
    document().dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    assert_eq!(notifier.warnings.borrow().len(), 1);
    assert_eq!(notifier.warnings.borrow()[0], policy::CONTEXT_MENU_WARNING);

    drop(handles);
    root.remove();
}

#[wasm_bindgen_test]
fn ctrl_c_is_suppressed_and_plain_c_passes() {
    let root = shield_root();
    let notifier = RecordingNotifier::default();
    let handles = ShieldHandles::install(&root, &quiet_options(), notifier.clone());

    let blocked = keydown("c", true);
    document().dispatch_event(&blocked).unwrap();
    assert!(blocked.default_prevented());
    assert_eq!(notifier.warnings.borrow().len(), 1);
    assert_eq!(notifier.warnings.borrow()[0], policy::SHORTCUT_WARNING);

    let plain = keydown("c", false);
    document().dispatch_event(&plain).unwrap();
    assert!(!plain.default_prevented());
    assert_eq!(notifier.warnings.borrow().len(), 1);

    drop(handles);
    root.remove();
}

#[wasm_bindgen_test]
fn copy_and_cut_are_suppressed() {
    let root = shield_root();
    let notifier = RecordingNotifier::default();
    let handles = ShieldHandles::install(&root, &quiet_options(), notifier.clone());

    for name in ["copy", "cut"] {
        let event = cancelable_event(name);
        document().dispatch_event(&event).unwrap();
        assert!(event.default_prevented());
    }
    assert_eq!(notifier.warnings.borrow().len(), 2);

    drop(handles);
    root.remove();
}

// -----------------------------------------------------------------------------
// Scoped Style & Watchdog
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn no_select_style_is_scoped_to_wrapper() {
    let root = shield_root();
    let notifier = RecordingNotifier::default();
    let handles = ShieldHandles::install(&root, &quiet_options(), notifier);

    assert_eq!(root.style().get_property_value("user-select").unwrap(), "none");

    // The body is untouched; the style belongs to the wrapper alone.
    let body_style = document()
        .body()
        .unwrap()
        .style()
        .get_property_value("user-select")
        .unwrap();
    assert!(body_style.is_empty());

    drop(handles);
    root.remove();
}

#[wasm_bindgen_test]
async fn watchdog_reapplies_no_select() {
    let root = shield_root();
    let notifier = RecordingNotifier::default();
    let options = ShieldOptions {
        visibility_blur: false,
        mutation_watchdog: true,
        devtools_probe: None,
    };
    let handles = ShieldHandles::install(&root, &options, notifier);

    root.style().set_property("user-select", "text").unwrap();
    gloo_timers::future::TimeoutFuture::new(50).await;
    assert_eq!(root.style().get_property_value("user-select").unwrap(), "none");

    drop(handles);
    root.remove();
}

// -----------------------------------------------------------------------------
// Accordion Independence
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn toggling_one_row_leaves_others_alone() {
    let parent = shield_root();
    let handle = leptos::mount::mount_to(parent.clone(), || {
        view! {
            <AccordionItem question="First question" answer="First answer" position=0 />
            <AccordionItem question="Second question" answer="Second answer" position=1 />
        }
    });

    let question = |index: usize| -> HtmlElement {
        parent
            .query_selector(&format!(".faq-item:nth-child({}) .faq-question", index + 1))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    };
    let answer_open = |index: usize| -> bool {
        parent
            .query_selector(&format!(".faq-item:nth-child({}) .faq-answer", index + 1))
            .unwrap()
            .unwrap()
            .class_list()
            .contains("open")
    };

    assert!(!answer_open(0));
    assert!(!answer_open(1));

    question(0).click();
    assert!(answer_open(0));
    assert!(!answer_open(1));

    question(1).click();
    assert!(answer_open(0));
    assert!(answer_open(1));

    question(0).click();
    assert!(!answer_open(0));
    assert!(answer_open(1));

    drop(handle);
    parent.remove();
}
