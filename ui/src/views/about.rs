use dioxus::prelude::*;

use crate::content;
use crate::i18n::use_lang;
use crate::site;

#[component]
pub fn About() -> Element {
    let lang = use_lang();
    let copy = content::about(lang());
    let title = site::brand(&copy.title);

    rsx! {
        section { class: "page page-about",
            h1 { class: "page__title", "{title}" }
            p { class: "page__subtitle", "{copy.subtitle}" }

            for section in copy.sections.iter() {
                section { key: "{section.title}", class: "page-about__section",
                    h2 { "{section.title}" }
                    p { {site::brand(&section.content)} }
                }
            }
        }
    }
}
