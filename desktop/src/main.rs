#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Footer};
use ui::views::{Dashboard, Home, Register, Team};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/team")]
    Team {},
    #[route("/register")]
    RegisterPage {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("MindFuse – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_team(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Team {}, "{label}" })
}
fn nav_register(label: &str) -> Element {
    rsx!(Link { class: "navbar__link navbar__link--cta", to: Route::RegisterPage {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        dashboard: nav_dashboard,
        team: nav_team,
        register: nav_register,
    });

    // Some window managers drop the maximized flag set at creation.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { {ui::THEME_CSS} }

        Router::<Route> { }
    }
}

/// A desktop-specific layout around the shared navbar and footer, using the
/// desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
        Footer { }
    }
}

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
