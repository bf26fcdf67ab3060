use dioxus::prelude::*;

use ui::components::{register_nav, AppFooter, AppHeader, NavBuilder, SessionGate};
use ui::core::session::SessionProvider;
use ui::i18n::LanguageProvider;
use ui::routes::{register_routes, RouteActions};
use ui::views::{
    About, Blog, Cookies, Faqs, Home, Login, Pricing, Privacy, Signup, Terms, Upload,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteFrame)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/blogs")]
    Blog {},
    #[route("/faqs")]
    Faqs {},
    #[route("/pricing")]
    Pricing {},
    #[route("/ask")]
    Ask {},
    #[route("/stewardship")]
    Upload {},
    #[route("/privacy")]
    Privacy {},
    #[route("/terms")]
    Terms {},
    #[route("/cookies")]
    Cookies {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/admin")]
    Admin {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::Home {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::About {}, "{label}" })
}
fn nav_upload(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::Upload {}, "{label}" })
}
fn nav_ask(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::Ask {}, "{label}" })
}
fn nav_blog(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::Blog {}, "{label}" })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "header__action header__action--login",
        to: Route::Login {},
        "{label}"
    })
}
fn nav_signup(label: &str) -> Element {
    rsx!(Link {
        class: "header__action header__action--signup",
        to: Route::Signup {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
            upload: nav_upload,
            ask: nav_ask,
            blog: nav_blog,
            login: nav_login,
            signup: nav_signup,
        });
        // Views navigate through these, so `ui` stays Route-agnostic.
        register_routes(RouteActions {
            home: || {
                navigator().push(Route::Home {});
            },
            login: || {
                navigator().push(Route::Login {});
            },
            dashboard: || {
                navigator().push(Route::Admin {});
            },
        });
    }

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LanguageProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Web-specific layout: shared header and footer around every routed page.
#[component]
fn SiteFrame() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
        AppFooter {}
    }
}

#[component]
fn Ask() -> Element {
    rsx! {
        ui::board::BoardView {}
    }
}

/// Admin dashboard behind the session gate.
#[component]
fn Admin() -> Element {
    rsx! {
        SessionGate { require_admin: true,
            ui::views::Dashboard {}
        }
    }
}
