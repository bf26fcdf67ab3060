//! Viewport-deferred image loading.
//!
//! The `img` starts on a lightweight placeholder. On the web an
//! `IntersectionObserver` with a 200px root margin swaps in the real source
//! shortly before the element scrolls into view, then disconnects (the swap
//! is one-way). A load error drops back to the placeholder permanently.
//! Native builds have no viewport to observe, so they load eagerly.

use dioxus::prelude::*;
use uuid::Uuid;

pub const PLACEHOLDER_SRC: &str = "/assets/images/placeholder.svg";

/// Pure phase machine behind the component, kept separate so the
/// transitions are testable off the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyPhase {
    Placeholder,
    Target,
    Fallback,
}

impl LazyPhase {
    /// First intersection promotes the placeholder; later callbacks and
    /// failed images stay where they are.
    pub fn on_intersect(self) -> Self {
        match self {
            LazyPhase::Placeholder => LazyPhase::Target,
            other => other,
        }
    }

    /// A broken target image falls back for good. Placeholder errors are
    /// ignored so a missing placeholder asset cannot loop.
    pub fn on_error(self) -> Self {
        match self {
            LazyPhase::Target => LazyPhase::Fallback,
            other => other,
        }
    }

    pub fn src<'a>(self, target: &'a str) -> &'a str {
        match self {
            LazyPhase::Target => target,
            LazyPhase::Placeholder | LazyPhase::Fallback => PLACEHOLDER_SRC,
        }
    }
}

#[component]
pub fn LazyImage(src: String, alt: String, #[props(default)] class: String) -> Element {
    let mut phase = use_signal(|| LazyPhase::Placeholder);
    // Stable per-instance element id for the observer to find.
    let element_id = use_signal(|| format!("lazy-{}", Uuid::new_v4()));

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&element_id()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_ref::<web_sys::IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    phase.set(phase().on_intersect());
                    observer.disconnect();
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin("200px");
        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(&element);
                // The observer owns the closure for the element's lifetime.
                callback.forget();
            }
            Err(err) => {
                eprintln!("[lazy-image] observer unavailable: {err:?}, loading eagerly");
                phase.set(phase().on_intersect());
            }
        }
    });

    // No viewport on native: load immediately.
    #[cfg(not(target_arch = "wasm32"))]
    use_effect(move || {
        phase.set(phase().on_intersect());
    });

    let current = phase().src(&src).to_string();

    rsx! {
        img {
            id: "{element_id()}",
            class: "lazy-image {class}",
            src: "{current}",
            alt: "{alt}",
            onerror: move |_| phase.set(phase().on_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_promotes_once_on_intersection() {
        let phase = LazyPhase::Placeholder;
        assert_eq!(phase.src("/img/a.jpg"), PLACEHOLDER_SRC);

        let phase = phase.on_intersect();
        assert_eq!(phase, LazyPhase::Target);
        assert_eq!(phase.src("/img/a.jpg"), "/img/a.jpg");

        // Duplicate callbacks are no-ops.
        assert_eq!(phase.on_intersect(), LazyPhase::Target);
    }

    #[test]
    fn broken_target_falls_back_permanently() {
        let phase = LazyPhase::Placeholder.on_intersect().on_error();
        assert_eq!(phase, LazyPhase::Fallback);
        assert_eq!(phase.src("/img/a.jpg"), PLACEHOLDER_SRC);

        // Scrolling back into view never resurrects a broken image.
        assert_eq!(phase.on_intersect(), LazyPhase::Fallback);
    }

    #[test]
    fn placeholder_errors_are_ignored() {
        assert_eq!(LazyPhase::Placeholder.on_error(), LazyPhase::Placeholder);
    }
}
