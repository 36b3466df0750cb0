// =============================================================================
// Bexa Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Toaster;
use crate::pages::FaqPage;
use crate::services::toast::ToastHub;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing and the toast overlay.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide the notification hub to every component below.
    let toasts = ToastHub::new();
    provide_context(toasts);

    view! {
        <Title text="Bexa Physician Resource Center" />
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=path!("/") view=FaqPage />
            </Routes>
        </Router>
        <Toaster />
    }
}
