use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::LazyImage;
use crate::content;
use crate::core::timing;
use crate::i18n::use_lang;
use crate::site;

const SLIDE_INTERVAL_MS: u64 = 5000;

enum SlideEvent {
    Jump(usize),
}

#[component]
pub fn Home() -> Element {
    let lang = use_lang();
    let copy = content::home(lang());
    let hero_description = site::brand(&copy.hero.description);
    let mission = site::brand(&copy.mission.content);

    let slide_count = copy.slides.len();
    let active_slide = use_signal(|| 0usize);

    // Auto-rotate the carousel; manual selection restarts the clock from
    // the chosen slide.
    let rotation = {
        let mut active = active_slide.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<SlideEvent>| async move {
            loop {
                let event = futures_util::future::select(
                    Box::pin(rx.next()),
                    Box::pin(timing::sleep_ms(SLIDE_INTERVAL_MS)),
                )
                .await;
                match event {
                    futures_util::future::Either::Left((Some(SlideEvent::Jump(index)), _)) => {
                        active.set(index % slide_count.max(1));
                    }
                    futures_util::future::Either::Right(_) => {
                        if slide_count > 0 {
                            active.set((active() + 1) % slide_count);
                        }
                    }
                    futures_util::future::Either::Left((None, _)) => break,
                }
            }
        })
    };

    rsx! {
        section { class: "page page-home",
            // Hero
            section { class: "hero",
                h1 { class: "hero__title", "{copy.hero.title}" }
                p { class: "hero__description", "{hero_description}" }
                a { class: "hero__cta", href: "/ask", "{copy.hero.cta}" }
            }

            // Feature grid
            section { class: "features",
                div { class: "features__grid",
                    for feature in copy.features.iter() {
                        div { key: "{feature.title}", class: "features__card",
                            span { class: "features__icon", "{feature.icon.glyph()}" }
                            h3 { class: "features__title", "{feature.title}" }
                            p { class: "features__description", "{feature.description}" }
                        }
                    }
                }
            }

            // Carousel
            if slide_count > 0 {
                section { class: "carousel",
                    for (index, slide) in copy.slides.iter().enumerate() {
                        div {
                            key: "{slide.image}",
                            class: if index == active_slide() {
                                "carousel__slide carousel__slide--active"
                            } else {
                                "carousel__slide"
                            },
                            LazyImage {
                                src: slide.image.clone(),
                                alt: slide.title.clone(),
                                class: "carousel__image".to_string(),
                            }
                            div { class: "carousel__caption",
                                h3 { "{slide.title}" }
                                p { "{slide.text}" }
                            }
                        }
                    }
                    div { class: "carousel__dots",
                        for index in 0..slide_count {
                            button {
                                key: "{index}",
                                class: if index == active_slide() {
                                    "carousel__dot carousel__dot--active"
                                } else {
                                    "carousel__dot"
                                },
                                onclick: move |_| rotation.send(SlideEvent::Jump(index)),
                            }
                        }
                    }
                }
            }

            // News
            section { class: "news",
                h2 { "{copy.news.title}" }
                ul { class: "news__list",
                    for item in copy.news.items.iter() {
                        li { key: "{item.title}", class: "news__item",
                            span { class: "news__date", "{item.date}" }
                            h3 { class: "news__headline", "{item.title}" }
                            span { class: "news__author", "{item.author}" }
                        }
                    }
                }
            }

            // Mission and coverage
            section { class: "passages",
                div { class: "passages__block",
                    h2 { "{copy.mission.title}" }
                    p { "{mission}" }
                }
                div { class: "passages__block",
                    h2 { "{copy.coverage.title}" }
                    p { "{copy.coverage.content}" }
                }
            }

            // Reviews
            section { class: "reviews",
                h2 { "{copy.reviews.title}" }
                div { class: "reviews__grid",
                    for review in copy.reviews.entries.iter() {
                        div { key: "{review.name}", class: "reviews__card",
                            p { class: "reviews__quote", "\u{201c}{review.quote}\u{201d}" }
                            span { class: "reviews__stars",
                                {"★".repeat(review.rating as usize)}
                            }
                            span { class: "reviews__name", "{review.name}" }
                            span { class: "reviews__role", "{review.role}" }
                        }
                    }
                }
            }
        }
    }
}
