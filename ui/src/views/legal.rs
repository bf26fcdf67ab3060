use dioxus::prelude::*;

use crate::content::{self, LegalDoc};
use crate::i18n::use_lang;

fn render_doc(doc: &LegalDoc) -> Element {
    rsx! {
        section { class: "page page-legal",
            h1 { class: "page__title", "{doc.title}" }
            p { class: "page-legal__updated", "{doc.updated}" }

            for section in doc.sections.iter() {
                section { key: "{section.title}", class: "page-legal__section",
                    h2 { "{section.title}" }
                    p { "{section.content}" }
                }
            }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    let lang = use_lang();
    render_doc(&content::legal(lang()).privacy)
}

#[component]
pub fn Terms() -> Element {
    let lang = use_lang();
    render_doc(&content::legal(lang()).terms)
}

#[component]
pub fn Cookies() -> Element {
    let lang = use_lang();
    render_doc(&content::legal(lang()).cookies)
}
