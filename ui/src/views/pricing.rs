use dioxus::prelude::*;

use crate::content;
use crate::i18n::use_lang;

#[component]
pub fn Pricing() -> Element {
    let lang = use_lang();
    let copy = content::pricing(lang());

    rsx! {
        section { class: "page page-pricing",
            h1 { class: "page__title", "{copy.title}" }
            p { class: "page__subtitle", "{copy.subtitle}" }

            div { class: "page-pricing__tiers",
                for tier in copy.tiers.iter() {
                    div {
                        key: "{tier.id}",
                        class: if tier.highlighted {
                            "page-pricing__tier page-pricing__tier--highlighted"
                        } else {
                            "page-pricing__tier"
                        },
                        h2 { class: "page-pricing__name", "{tier.name}" }
                        p { class: "page-pricing__price",
                            span { class: "page-pricing__amount", "{tier.price}" }
                            span { class: "page-pricing__period", " {copy.period}" }
                        }
                        p { class: "page-pricing__description", "{tier.description}" }
                        ul { class: "page-pricing__features",
                            for feature in tier.features.iter() {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                        a { class: "page-pricing__cta", href: "/signup", "{tier.cta}" }
                    }
                }
            }
        }
    }
}
