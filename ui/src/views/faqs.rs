use dioxus::prelude::*;

use crate::content;
use crate::i18n::use_lang;

/// Accordion FAQ page. One open entry at a time; clicking the open entry
/// closes it.
#[component]
pub fn Faqs() -> Element {
    let lang = use_lang();
    let copy = content::faqs(lang());
    let mut open = use_signal(|| Option::<u32>::None);

    rsx! {
        section { class: "page page-faqs",
            h1 { class: "page__title", "{copy.title}" }
            p { class: "page__subtitle", "{copy.subtitle}" }

            ul { class: "page-faqs__list",
                for faq in copy.faqs.iter() {
                    {
                        let id = faq.id;
                        let expanded = open() == Some(id);
                        rsx! {
                            li { key: "{id}", class: "page-faqs__item",
                                button {
                                    class: "page-faqs__question",
                                    aria_expanded: "{expanded}",
                                    onclick: move |_| {
                                        open.set(if expanded { None } else { Some(id) })
                                    },
                                    "{faq.question}"
                                }
                                if expanded {
                                    p { class: "page-faqs__answer", "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
