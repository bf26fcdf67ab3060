use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::content;
use crate::core::session::use_session;
use crate::i18n::{self, use_lang, Lang};
use crate::site::SITE;

// Header stylesheet (inlined on release native builds where asset URLs
// cannot be served).
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Platforms register a `NavBuilder` whose closures construct fully formed
/// `Link` elements, so `ui` never needs to know each platform's `Route` enum.
/// `AppHeader` passes the localized label in and renders whatever comes back.
///
/// Registration happens once, at the top of the platform's `App()`:
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "header__link", to: Route::Home {}, "{label}" } ),
///     ..
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
    pub upload: fn(label: &str) -> Element,
    pub ask: fn(label: &str) -> Element,
    pub blog: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
    pub signup: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppHeader() -> Element {
    let lang = use_lang();
    let mut session = use_session();
    let copy = content::header(lang());
    let logo_alt = crate::site::brand(&copy.logo_alt);

    let on_lang = move |evt: FormEvent| {
        let next = Lang::resolve(&evt.value());
        i18n::switch_lang(lang, next);
    };

    let on_logout = move |_| {
        session.write().logout();
        crate::routes::go_home();
    };

    let nav = NAV_BUILDER.get().map(|b| {
        rsx! {
            nav { class: "header__links",
                {(b.home)(&copy.nav.home)}
                {(b.about)(&copy.nav.about)}
                {(b.upload)(&copy.nav.upload)}
                {(b.ask)(&copy.nav.ask)}
                {(b.blog)(&copy.nav.blog)}
            }
        }
    });

    let auth_links = NAV_BUILDER.get().map(|b| {
        rsx! {
            {(b.login)(&copy.nav.login)}
            {(b.signup)(&copy.nav.signup)}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "header", class: "header",
            div { class: "header__inner",
                div { class: "header__brand",
                    img {
                        class: "header__logo",
                        src: "{SITE.logo}",
                        alt: "{logo_alt}",
                    }
                    span { class: "header__brand-mark", "{SITE.name}" }
                }

                if let Some(nav) = nav {
                    {nav}
                }

                div { class: "header__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        "{copy.language_heading}"
                    }
                    select {
                        id: "locale-select",
                        value: "{lang().code()}",
                        oninput: on_lang,
                        { Lang::ALL.iter().map(|l| rsx! {
                            option { key: "{l.code()}", value: "{l.code()}",
                                "{l.flag()} {l.name()}"
                            }
                        })}
                    }
                }

                div { class: "header__actions",
                    if session().is_authenticated() {
                        button {
                            class: "header__action header__action--logout",
                            onclick: on_logout,
                            "{copy.nav.logout}"
                        }
                    } else {
                        {auth_links}
                    }
                }
            }
        }
    }
}
