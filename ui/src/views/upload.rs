use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::content;
use crate::core::timing;
use crate::i18n::use_lang;

const TICK_MS: u64 = 500;
const TICK_STEP: u8 = 10;

/// Simulated upload progress. Files never leave the browser; the bar just
/// advances a fixed step per tick until full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSim {
    pub progress: u8,
    pub running: bool,
}

impl UploadSim {
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.progress = 0;
        self.running = true;
        true
    }

    /// Advance one tick. Returns false once complete; the timer loop stops.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.progress = self.progress.saturating_add(TICK_STEP).min(100);
        if self.progress >= 100 {
            self.running = false;
        }
        self.running
    }

    pub fn complete(&self) -> bool {
        self.progress >= 100
    }
}

enum UploadEvent {
    Start,
}

#[component]
pub fn Upload() -> Element {
    let lang = use_lang();
    let copy = content::upload(lang());

    let sim = use_signal(UploadSim::default);
    let mut files = use_signal(Vec::<String>::new);
    let mut site_name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut era = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut tags = use_signal(String::new);

    let runner = {
        let mut sim = sim.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<UploadEvent>| async move {
            while let Some(UploadEvent::Start) = rx.next().await {
                if !sim.with_mut(|s| s.start()) {
                    continue;
                }
                loop {
                    timing::sleep_ms(TICK_MS).await;
                    if !sim.with_mut(|s| s.tick()) {
                        break;
                    }
                }
                println!("[upload] simulated transfer finished");
            }
        })
    };

    let on_files = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            files.set(file_engine.files());
        }
    };

    let state = sim();
    let can_submit = !files().is_empty() && !state.running;

    rsx! {
        section { class: "page page-upload",
            h1 { class: "page__title", "{copy.title}" }
            p { class: "page__subtitle", "{copy.subtitle}" }

            section { class: "upload__dropzone",
                h2 { "{copy.dropzone.title}" }
                p { "{copy.dropzone.description}" }
                label { class: "upload__picker",
                    "{copy.dropzone.button}"
                    input {
                        r#type: "file",
                        multiple: true,
                        class: "upload__picker-input",
                        onchange: on_files,
                    }
                }
            }

            if !files().is_empty() {
                section { class: "upload__selected",
                    h3 { "{copy.selected_files}" }
                    ul {
                        for name in files().iter() {
                            li { key: "{name}", "{name}" }
                        }
                    }
                }
            }

            if state.running || state.complete() {
                section { class: "upload__progress",
                    h3 { "{copy.progress_title}" }
                    div { class: "upload__bar",
                        div {
                            class: "upload__bar-fill",
                            style: "width: {state.progress}%",
                        }
                    }
                    span { class: "upload__percent", "{state.progress}%" }
                    if state.complete() {
                        p { class: "upload__complete", "{copy.complete}" }
                    }
                }
            }

            section { class: "upload__metadata",
                h2 { "{copy.metadata.title}" }
                p { "{copy.metadata.description}" }

                label { class: "upload__label", "{copy.metadata.site_name}" }
                input {
                    class: "upload__input",
                    value: "{site_name()}",
                    oninput: move |evt| site_name.set(evt.value()),
                }

                label { class: "upload__label", "{copy.metadata.location}" }
                input {
                    class: "upload__input",
                    value: "{location()}",
                    oninput: move |evt| location.set(evt.value()),
                }

                label { class: "upload__label", "{copy.metadata.era}" }
                input {
                    class: "upload__input",
                    value: "{era()}",
                    oninput: move |evt| era.set(evt.value()),
                }

                label { class: "upload__label", "{copy.metadata.notes}" }
                textarea {
                    class: "upload__textarea",
                    value: "{notes()}",
                    oninput: move |evt| notes.set(evt.value()),
                }

                label { class: "upload__label", "{copy.metadata.tags}" }
                input {
                    class: "upload__input",
                    placeholder: "{copy.metadata.tags_placeholder}",
                    value: "{tags()}",
                    oninput: move |evt| tags.set(evt.value()),
                }

                button {
                    class: "upload__submit",
                    disabled: !can_submit,
                    onclick: move |_| runner.send(UploadEvent::Start),
                    if state.running { "{copy.uploading}" } else { "{copy.submit}" }
                }
            }

            section { class: "upload__supported",
                h2 { "{copy.supported_title}" }
                div { class: "upload__types",
                    for file_type in copy.file_types.iter() {
                        div { key: "{file_type.name}", class: "upload__type",
                            span { class: "upload__type-icon", "{file_type.icon.glyph()}" }
                            span { class: "upload__type-name", "{file_type.name}" }
                            span { class: "upload__type-formats", "{file_type.formats}" }
                        }
                    }
                }
            }

            section { class: "upload__how",
                h2 { "{copy.how_title}" }
                ol { class: "upload__steps",
                    for step in copy.steps.iter() {
                        li { key: "{step.title}",
                            h3 { "{step.title}" }
                            p { "{step.content}" }
                        }
                    }
                }
            }

            section { class: "upload__faqs",
                h2 { "{copy.faq_title}" }
                for faq in copy.faqs.iter() {
                    details { key: "{faq.id}", class: "upload__faq",
                        summary { "{faq.question}" }
                        p { "{faq.answer}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_resets_and_runs() {
        let mut sim = UploadSim::default();
        assert!(sim.start());
        assert_eq!(sim.progress, 0);
        assert!(sim.running);

        // Starting again mid-run is refused.
        assert!(!sim.start());
    }

    #[test]
    fn ticks_advance_in_fixed_steps_to_completion() {
        let mut sim = UploadSim::default();
        sim.start();

        for expected in (10..=90).step_by(10) {
            assert!(sim.tick());
            assert_eq!(sim.progress, expected);
        }

        // Final tick reaches 100 and stops the run.
        assert!(!sim.tick());
        assert_eq!(sim.progress, 100);
        assert!(sim.complete());
        assert!(!sim.running);

        // Further ticks are no-ops.
        assert!(!sim.tick());
        assert_eq!(sim.progress, 100);
    }

    #[test]
    fn restart_after_completion() {
        let mut sim = UploadSim::default();
        sim.start();
        while sim.tick() {}
        assert!(sim.complete());

        assert!(sim.start());
        assert_eq!(sim.progress, 0);
        assert!(!sim.complete());
    }
}
