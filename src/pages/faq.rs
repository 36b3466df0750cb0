// =============================================================================
// Bexa Web - Physician FAQ Page
// =============================================================================
// Table of Contents:
// 1. Data
// 2. Mount Notice Guard
// 3. FaqPage Component
// =============================================================================

use leptos::prelude::*;
use web_sys::VisibilityState;

use crate::components::{AccordionItem, Footer};
use crate::services::toast::{Notifier, ToastHub};
use crate::shield::{ContentShield, EventBinding};
use crate::utils;

/// Shown once when the page mounts.
pub const PROTECTION_NOTICE: &str =
    "This content is protected. Screenshots and copying are disabled.";

/// Shown every time the tab goes hidden while the page is mounted.
pub const TAB_HIDDEN_WARNING: &str = "Content is protected while tab is inactive";

// -----------------------------------------------------------------------------
// 1. Data
// -----------------------------------------------------------------------------

/// One question/answer pair. Display order is list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The physician-facing FAQ content. Static for now; would come from a CMS.
pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What is Bexa's approach to patient care?",
            answer: "Bexa focuses on a holistic approach to patient care, integrating advanced medical technologies with personalized treatment plans. Our methodology emphasizes preventative measures alongside responsive care, ensuring patients receive comprehensive medical attention tailored to their specific needs.",
        },
        FaqEntry {
            question: "How does Bexa's technology integrate with existing hospital systems?",
            answer: "Bexa's technology is designed with compatibility in mind, offering seamless integration with most major hospital information systems through standard HL7 and FHIR protocols. Our dedicated integration teams work closely with your IT department to ensure minimal disruption during implementation, typically completing the process within 2-4 weeks.",
        },
        FaqEntry {
            question: "What security measures does Bexa implement to protect patient data?",
            answer: "Bexa employs enterprise-grade security measures including end-to-end encryption, multi-factor authentication, and regular security audits. Our systems are HIPAA compliant and adhere to international data protection standards including GDPR. We also provide comprehensive audit trails for all data access and modifications.",
        },
        FaqEntry {
            question: "How does Bexa support continuous medical education?",
            answer: "Bexa provides ongoing educational resources through our physician portal, including webinars, case studies, and peer-reviewed research. Our platform also offers personalized learning paths based on your specialty and interests, with CME-eligible activities available for professional development credits.",
        },
        FaqEntry {
            question: "What clinical trials is Bexa currently supporting?",
            answer: "Bexa is actively supporting clinical trials across multiple therapeutic areas including oncology, cardiology, and neurology. Our platform facilitates efficient patient recruitment, data collection, and analysis while maintaining rigorous compliance with international research standards. For specific trial information, please contact our clinical research department.",
        },
        FaqEntry {
            question: "How does Bexa handle international regulatory differences?",
            answer: "Bexa maintains dedicated regulatory teams for major global markets who ensure our solutions comply with local healthcare regulations. Our modular system architecture allows for market-specific configurations while maintaining core functionality, making it adaptable to various regulatory environments from FDA to EMA and beyond.",
        },
        FaqEntry {
            question: "What support options are available for physicians using Bexa systems?",
            answer: "Bexa offers 24/7 technical support through multiple channels including phone, email, and in-app messaging. Our dedicated physician support team consists of medical professionals who understand clinical workflows and can provide context-appropriate assistance. Additionally, we offer scheduled training sessions and personalized onboarding for new team members.",
        },
    ]
}

// -----------------------------------------------------------------------------
// 2. Mount Notice Guard
// -----------------------------------------------------------------------------

/// One-shot guard for the mount-time protection notice. Re-renders must not
/// repeat the notice; only a fresh mount resets it.
#[derive(Debug, Default)]
pub(crate) struct MountNotice {
    shown: bool,
}

impl MountNotice {
    /// True exactly once.
    pub fn should_announce(&mut self) -> bool {
        if self.shown {
            false
        } else {
            self.shown = true;
            true
        }
    }
}

// -----------------------------------------------------------------------------
// 3. FaqPage Component
// -----------------------------------------------------------------------------

/// The Physician Resource Center page: hero header, FAQ accordion and
/// footer, all wrapped in the content shield.
#[component]
pub fn FaqPage() -> impl IntoView {
    let hub = expect_context::<ToastHub>();
    let entries = faq_entries();

    // One-time protection notice on mount.
    let announced = StoredValue::new(MountNotice::default());
    Effect::new(move |_| {
        if announced
            .try_update_value(|notice| notice.should_announce())
            .unwrap_or(false)
        {
            hub.info(PROTECTION_NOTICE);
        }
    });

    // Warn on every hide transition for as long as the page is mounted.
    let hide_watch = StoredValue::new_local(None::<EventBinding>);
    let document = utils::document();
    match EventBinding::bind(document.as_ref(), "visibilitychange", move |_event| {
        if utils::document().visibility_state() == VisibilityState::Hidden {
            hub.warning(TAB_HIDDEN_WARNING);
        }
    }) {
        Ok(binding) => hide_watch.set_value(Some(binding)),
        Err(err) => log::warn!("faq page: {err}"),
    }
    on_cleanup(move || hide_watch.set_value(None));

    view! {
        <ContentShield>
            <div class="page page-faq">
                // Hero Section with Logo
                <header class="faq-hero">
                    <img
                        src="/assets/bexa-logo.svg"
                        alt="Bexa"
                        class="hero-logo"
                        draggable="false"
                    />
                    <h1 class="hero-title">"Physician Resource Center"</h1>
                    <p class="hero-subtitle">
                        "Frequently asked questions for medical professionals. This information is confidential and protected."
                    </p>
                </header>

                // FAQ Section
                <main class="faq-main">
                    <div class="faq-card">
                        <div class="faq-card-header">
                            <h2 class="faq-card-title">"Frequently Asked Questions"</h2>
                        </div>
                        <div class="faq-list">
                            {entries.into_iter().enumerate().map(|(position, entry)| {
                                view! {
                                    <AccordionItem
                                        question=entry.question
                                        answer=entry.answer
                                        position=position
                                    />
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </main>

                <Footer />
            </div>
        </ContentShield>
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_insertion_order() {
        let entries = faq_entries();
        assert_eq!(entries.len(), 7);
        assert!(entries[0].question.contains("patient care"));
        assert!(entries[6].question.contains("support options"));
    }

    #[test]
    fn test_entries_are_complete() {
        for entry in faq_entries() {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }

    #[test]
    fn test_mount_notice_fires_once() {
        let mut notice = MountNotice::default();
        assert!(notice.should_announce());
        assert!(!notice.should_announce());
        assert!(!notice.should_announce());
    }
}
