use dioxus::prelude::*;

use crate::components::{nav_link, NavTarget};

struct UseCase {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const USE_CASES: [UseCase; 4] = [
    UseCase {
        icon: "🏥",
        title: "Healthcare",
        body: "Give clinicians a structured summary of a patient's affect across a session.",
    },
    UseCase {
        icon: "🎓",
        title: "Education",
        body: "Spot disengagement and frustration early in remote and in-person classrooms.",
    },
    UseCase {
        icon: "💼",
        title: "Workplace wellbeing",
        body: "Track team mood over time without storing a single frame of video.",
    },
    UseCase {
        icon: "🎮",
        title: "User research",
        body: "See how people actually feel while they use your product.",
    },
];

#[component]
pub fn Home() -> Element {
    let primary_cta = nav_link(NavTarget::Dashboard, "Try the Dashboard");
    let secondary_cta = nav_link(NavTarget::Register, "Create an Account");

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                span { class: "hero__badge", "Hackstrom 2025" }
                h1 { class: "hero__title",
                    "Understand emotions with "
                    span { class: "gradient-text", "MindFuse" }
                }
                p { class: "hero__lead",
                    "Real-time emotion tracking with AI-written clinical summaries. "
                    "Tag what you observe, watch the distribution evolve and export "
                    "a doctor-ready PDF in one click."
                }
                div { class: "hero__actions",
                    if let Some(link) = primary_cta {
                        {link}
                    }
                }
            }

            div { class: "use-cases",
                h2 { class: "section-title", "Where MindFuse helps" }
                ul { class: "use-cases__grid",
                    for case in USE_CASES.iter() {
                        li { key: "{case.title}", class: "card use-case",
                            span { class: "use-case__icon", "{case.icon}" }
                            h3 { class: "use-case__title", "{case.title}" }
                            p { class: "use-case__body", "{case.body}" }
                        }
                    }
                }
            }

            div { class: "cta",
                h2 { class: "cta__title", "Ready to get started?" }
                p { class: "cta__body",
                    "Create a free account and generate your first emotion report today."
                }
                if let Some(link) = secondary_cta {
                    {link}
                }
            }
        }
    }
}
