// =============================================================================
// Bexa Web - Accordion Components
// =============================================================================
// One collapsible question/answer row. Rows keep their own open state, so
// expanding one never collapses another.
// =============================================================================

use leptos::prelude::*;

/// Seconds of entrance-animation stagger per row position.
const STAGGER_STEP_SECS: f64 = 0.1;

/// One collapsible question/answer row.
///
/// # Arguments
/// * `question` - Header text, always visible
/// * `answer` - Body text, revealed on toggle
/// * `position` - Zero-based row index; staggers the entrance animation
#[component]
pub fn AccordionItem(
    #[prop(into)] question: String,
    #[prop(into)] answer: String,
    position: usize,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let stagger = format!("animation-delay: {:.1}s", position as f64 * STAGGER_STEP_SECS);

    view! {
        <div class="faq-item" style=stagger>
            <button
                class="faq-question"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <h3 class="faq-question-text">{question}</h3>
                <span class="faq-chevron" class:rotated=move || is_open.get()>"⌄"</span>
            </button>
            <div class="faq-answer" class:open=move || is_open.get()>
                <p class="faq-answer-text">{answer}</p>
            </div>
        </div>
    }
}
