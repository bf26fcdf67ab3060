use dioxus::prelude::*;

use crate::content;
use crate::i18n::use_lang;

#[component]
pub fn Blog() -> Element {
    let lang = use_lang();
    let copy = content::blog(lang());

    rsx! {
        section { class: "page page-blog",
            h1 { class: "page__title", "{copy.title}" }
            p { class: "page__subtitle", "{copy.subtitle}" }

            ul { class: "page-blog__posts",
                for post in copy.posts.iter() {
                    li { key: "{post.title}", class: "page-blog__post",
                        span { class: "page-blog__date", "{post.date}" }
                        h2 { class: "page-blog__headline", "{post.title}" }
                        span { class: "page-blog__author", "{post.author}" }
                        p { class: "page-blog__summary", "{post.summary}" }
                    }
                }
            }
        }
    }
}
