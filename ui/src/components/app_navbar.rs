use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the label and returns a link that already contains
/// it as its child:
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///         dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///         team: |label| rsx!( Link { class: "navbar__link", to: Route::Team {}, "{label}" } ),
///         register: |label| rsx!( Link { class: "navbar__link navbar__link--cta", to: Route::RegisterPage {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a builder the navbar renders whatever `children` it is given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub team: fn(label: &str) -> Element,
    pub register: fn(label: &str) -> Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Dashboard,
    Team,
    Register,
}

impl NavBuilder {
    pub fn link(&self, target: NavTarget, label: &str) -> Element {
        match target {
            NavTarget::Home => (self.home)(label),
            NavTarget::Dashboard => (self.dashboard)(label),
            NavTarget::Team => (self.team)(label),
            NavTarget::Register => (self.register)(label),
        }
    }
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// A platform link for `target`, if a builder has been registered. Views use
/// this for in-page calls to action.
pub fn nav_link(target: NavTarget, label: &str) -> Option<Element> {
    NAV_BUILDER.get().map(|b| b.link(target, label))
}

pub const TAGLINE: &str = "AI Powered Emotional Intelligence";

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav = NAV_BUILDER.get().map(|b| {
        let home = b.link(NavTarget::Home, "Home");
        let dashboard = b.link(NavTarget::Dashboard, "Dashboard");
        let team = b.link(NavTarget::Team, "Team");
        let register = b.link(NavTarget::Register, "Get Started");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {dashboard}
                {team}
                {register}
            }
        }
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true", "🧠" }
                        span { class: "navbar__brand-mark", "MindFuse" }
                    }
                    span { class: "navbar__brand-subtitle", "{TAGLINE}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
