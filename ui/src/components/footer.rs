use dioxus::prelude::*;

use crate::content;
use crate::i18n::use_lang;
use crate::site::{self, SITE};

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");
const FOOTER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/footer.css"
));

/// Site-wide footer: localized link sections plus the static contact block.
/// Links are plain anchors; full page loads are fine for footer navigation.
#[component]
pub fn AppFooter() -> Element {
    let lang = use_lang();
    let copy = content::footer(lang());
    let tagline = site::brand(&copy.tagline);
    let copyright = site::brand(&copy.copyright);

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{FOOTER_CSS_INLINE}" }
        }

        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "{SITE.name}" }
                    p { class: "footer__tagline", "{tagline}" }
                    div { class: "footer__socials",
                        for (name, url) in [
                            ("LinkedIn", SITE.linkedin),
                            ("Instagram", SITE.instagram),
                            ("Facebook", SITE.facebook),
                        ] {
                            a {
                                key: "{name}",
                                class: "footer__social",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener",
                                "{name}"
                            }
                        }
                    }
                }

                for section in copy.sections.iter() {
                    div { key: "{section.title}", class: "footer__section",
                        h3 { class: "footer__heading", "{section.title}" }
                        ul { class: "footer__links",
                            for link in section.links.iter() {
                                li { key: "{link.href}",
                                    a { class: "footer__link", href: "{link.href}", "{link.label}" }
                                }
                            }
                        }
                    }
                }

                div { class: "footer__section",
                    h3 { class: "footer__heading", "{copy.contact_heading}" }
                    ul { class: "footer__links",
                        li { a { class: "footer__link", href: "mailto:{SITE.mail}", "{SITE.mail}" } }
                        li { a { class: "footer__link", href: "tel:{SITE.phone}", "{SITE.phone}" } }
                    }
                }
            }

            div { class: "footer__legal", "{copyright}" }
        }
    }
}
