// =============================================================================
// Bexa Web - Toaster Component
// =============================================================================
// Viewport-corner shelf rendering the hub's live toasts
// =============================================================================

use leptos::prelude::*;

use crate::services::toast::ToastHub;

/// Renders the toast shelf in the viewport corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let hub = expect_context::<ToastHub>();

    view! {
        <div class="toast-shelf">
            <For
                each=move || hub.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let dismiss_id = toast.id;
                    view! {
                        <div class=toast.level.class()>
                            <span class="toast-icon">{toast.level.icon()}</span>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| hub.dismiss(dismiss_id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
