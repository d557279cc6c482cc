use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = time::OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__mark", "MindFuse" }
                    p { class: "footer__tagline",
                        "Understanding emotions through AI, for teams, classrooms and clinics."
                    }
                }
                p { class: "footer__notice",
                    "Emotion analysis is observational and not a medical diagnosis."
                }
                p { class: "footer__copyright", "© {year} MindFuse. Built for Hackstrom 2025." }
            }
        }
    }
}
