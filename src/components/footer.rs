// =============================================================================
// Bexa Web - Footer Component
// =============================================================================
// Global footer with the copyright line and confidentiality note
// =============================================================================

use leptos::prelude::*;

use crate::utils;

/// Page footer.
#[component]
pub fn Footer() -> impl IntoView {
    let year = utils::current_year();

    view! {
        <footer class="page-footer">
            <div class="footer-inner">
                <p class="footer-copyright">
                    {format!("© {} Bexa Medical Technologies. All rights reserved.", year)}
                </p>
                <p class="footer-note">
                    "The information contained in this document is confidential and intended for healthcare professionals only."
                </p>
            </div>
        </footer>
    }
}
