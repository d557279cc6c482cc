use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Footer};
use ui::views::{Dashboard, Home, Register, Team};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/team")]
    Team {},
    #[route("/register")]
    RegisterPage {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_team(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Team {},
        "{label}"
    })
}
fn nav_register(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link navbar__link--cta",
        to: Route::RegisterPage {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        dashboard: nav_dashboard,
        team: nav_team,
        register: nav_register,
    });

    rsx! {
        document::Title { "MindFuse" }
        document::Style { {ui::THEME_CSS} }

        Router::<Route> {}
    }
}

/// Navbar and footer around the routed page, using the web `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
        Footer { }
    }
}

/// Sign-up form that lands on the dashboard once the account is "created".
#[component]
fn RegisterPage() -> Element {
    let nav = navigator();
    rsx! {
        Register {
            on_registered: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
