use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Akshat Singh",
        role: "AI/ML Engineer",
        description: "Specializes in computer vision and deep learning for emotion recognition.",
        avatar: "🧑‍💻",
        github: Some("https://github.com/Axshatt"),
        linkedin: Some("https://www.linkedin.com/in/axshattt/"),
    },
    TeamMember {
        name: "Shifa Praveen",
        role: "Frontend Developer",
        description: "Creates beautiful, responsive user interfaces with modern CSS.",
        avatar: "👩‍💻",
        github: Some("https://github.com/shifa-23"),
        linkedin: Some("https://www.linkedin.com/in/shifa-parveen-45a5b0326/"),
    },
    TeamMember {
        name: "Vinayak Pandey",
        role: "Backend Developer",
        description: "Builds scalable APIs and manages database architecture.",
        avatar: "🧑‍🔬",
        github: Some("https://github.com/vinayakpandeycode"),
        linkedin: Some("https://www.linkedin.com/in/vinayakpandeya/"),
    },
    TeamMember {
        name: "Aditi Mall",
        role: "UI/UX Designer",
        description: "Designs intuitive user experiences and compelling visual designs.",
        avatar: "👨‍🎨",
        github: None,
        linkedin: Some("https://www.linkedin.com/in/aditi-mall-27658b28a/"),
    },
];

#[component]
pub fn Team() -> Element {
    rsx! {
        section { class: "page page-team",
            header { class: "page-team__header",
                h1 { class: "section-title", "Meet the Team" }
                p { class: "section-subtitle",
                    "The passionate minds behind MindFuse, built for Hackstrom 2025."
                }
            }

            ul { class: "team-grid",
                for member in TEAM.iter() {
                    li { key: "{member.name}", class: "card team-card",
                        div { class: "team-card__avatar", "{member.avatar}" }
                        h3 { class: "team-card__name", "{member.name}" }
                        p { class: "team-card__role", "{member.role}" }
                        p { class: "team-card__description", "{member.description}" }
                        div { class: "team-card__socials",
                            if let Some(url) = member.github {
                                a { class: "team-card__social", href: "{url}", target: "_blank", rel: "noopener", "GitHub" }
                            }
                            if let Some(url) = member.linkedin {
                                a { class: "team-card__social", href: "{url}", target: "_blank", rel: "noopener", "LinkedIn" }
                            }
                        }
                    }
                }
            }

            div { class: "team-badge",
                span { class: "team-badge__icon", "🏆" }
                div {
                    div { class: "team-badge__label", "Built for" }
                    div { class: "team-badge__event", "Hackstrom 2025" }
                }
            }
        }
    }
}
