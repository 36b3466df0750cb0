// =============================================================================
// Bexa Web - Page Components
// =============================================================================

pub mod faq;

pub use faq::FaqPage;
