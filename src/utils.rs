// =============================================================================
// Bexa Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Date Utilities
// =============================================================================

use web_sys::{Document, Window};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Window {
    web_sys::window().expect("No window object available")
}

/// Get the browser document object.
pub fn document() -> Document {
    window().document().expect("No document object available")
}

// -----------------------------------------------------------------------------
// 2. Date Utilities
// -----------------------------------------------------------------------------

/// Current year in the visitor's local timezone, for the footer copyright.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year() as u32
}
