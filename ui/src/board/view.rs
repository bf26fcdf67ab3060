use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use uuid::Uuid;

use api::completion::CompletionClient;
use api::ApiError;

use crate::content;
use crate::core::platform;
use crate::i18n::use_lang;

use super::engine::{BoardEngine, BoardTab, Question};

/// Prompt prefix sent ahead of the question text.
const COMPLETION_TASK: &str =
    "Answer this archaeology question concisely, for a professional audience:";

enum BoardEvent {
    SubmitQuestion,
    SubmitAnswer { question_id: Uuid },
    RequestCompletion { question_id: Uuid },
    CompletionArrived { question_id: Uuid, result: Result<String, String> },
}

#[component]
pub fn BoardView() -> Element {
    let lang = use_lang();
    let copy = content::board(lang());

    let engine = use_signal(|| BoardEngine::seed_samples(copy));
    let tab = use_signal(BoardTab::default);
    let mut search = use_signal(String::new);
    let mut draft_title = use_signal(String::new);
    let mut draft_body = use_signal(String::new);
    let mut draft_tags = use_signal(String::new);
    // Per-question answer drafts, keyed by question id.
    let answer_drafts = use_signal(HashMap::<Uuid, String>::new);
    // Questions with an AI request in flight.
    let pending_ai = use_signal(HashSet::<Uuid>::new);
    let ai_error = use_signal(|| Option::<String>::None);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<BoardEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let engine_ref = engine.clone();
        let drafts_ref = answer_drafts.clone();
        let pending_ref = pending_ai.clone();
        let error_ref = ai_error.clone();
        let title_ref = draft_title.clone();
        let body_ref = draft_body.clone();
        let tags_ref = draft_tags.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<BoardEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut engine_signal = engine_ref.clone();
            let mut drafts_signal = drafts_ref.clone();
            let mut pending_signal = pending_ref.clone();
            let mut error_signal = error_ref.clone();
            let mut title_signal = title_ref.clone();
            let mut body_signal = body_ref.clone();
            let mut tags_signal = tags_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        BoardEvent::SubmitQuestion => {
                            let posted = engine_signal.with_mut(|eng| {
                                eng.submit_question(&title_signal(), &body_signal(), &tags_signal())
                            });
                            if let Some(question_id) = posted {
                                title_signal.set(String::new());
                                body_signal.set(String::new());
                                tags_signal.set(String::new());
                                // Every fresh post gets an AI answer requested
                                // for it, keyed by the new question's id.
                                if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
                                    let _ = sender.unbounded_send(BoardEvent::RequestCompletion {
                                        question_id,
                                    });
                                }
                            }
                        }
                        BoardEvent::SubmitAnswer { question_id } => {
                            let draft = drafts_signal
                                .with(|d| d.get(&question_id).cloned())
                                .unwrap_or_default();
                            let posted = engine_signal
                                .with_mut(|eng| eng.submit_answer(question_id, &draft));
                            if posted {
                                drafts_signal.with_mut(|d| {
                                    d.remove(&question_id);
                                });
                            }
                        }
                        BoardEvent::RequestCompletion { question_id } => {
                            let already_pending =
                                pending_signal.with(|p| p.contains(&question_id));
                            if already_pending {
                                continue;
                            }
                            let prompt = engine_signal.with(|eng| {
                                eng.questions
                                    .iter()
                                    .find(|q| q.id == question_id)
                                    .map(|q| format!("{} {}", q.title, q.body))
                            });
                            let Some(prompt) = prompt else { continue };

                            pending_signal.with_mut(|p| {
                                p.insert(question_id);
                            });
                            error_signal.set(None);
                            queue_completion(sender_slot.clone(), question_id, prompt);
                        }
                        BoardEvent::CompletionArrived { question_id, result } => {
                            pending_signal.with_mut(|p| {
                                p.remove(&question_id);
                            });
                            match result {
                                Ok(text) => {
                                    let attached = engine_signal
                                        .with_mut(|eng| eng.attach_completion(question_id, &text));
                                    if !attached {
                                        eprintln!(
                                            "[board] completion for removed question {question_id}, dropped"
                                        );
                                    }
                                }
                                Err(message) => {
                                    eprintln!("[board] completion failed: {message}");
                                    error_signal.set(Some(message));
                                }
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send = {
        let coroutine = coroutine.clone();
        move |event: BoardEvent| {
            coroutine.send(event);
        }
    };

    let visible: Vec<Question> = engine
        .read()
        .filtered(tab(), &search())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { class: "board",
            header { class: "board__masthead",
                h1 { class: "board__title", "{copy.title}" }
                p { class: "board__subtitle", "{copy.subtitle}" }
            }

            section { class: "board__categories",
                h2 { "{copy.categories_title}" }
                div { class: "board__category-grid",
                    for category in copy.categories.iter() {
                        div { key: "{category.id}", class: "board__category",
                            span { class: "board__category-icon", "{category.icon.glyph()}" }
                            span { class: "board__category-name", "{category.name}" }
                            span { class: "board__category-count", "{category.count}" }
                        }
                    }
                }
            }

            section { class: "board__ask",
                h2 { "{copy.ask_title}" }
                input {
                    class: "board__input",
                    placeholder: "{copy.form.title_placeholder}",
                    value: "{draft_title()}",
                    oninput: move |evt| draft_title.set(evt.value()),
                }
                textarea {
                    class: "board__textarea",
                    placeholder: "{copy.form.body_placeholder}",
                    value: "{draft_body()}",
                    oninput: move |evt| draft_body.set(evt.value()),
                }
                input {
                    class: "board__input",
                    placeholder: "{copy.form.tags_placeholder}",
                    value: "{draft_tags()}",
                    oninput: move |evt| draft_tags.set(evt.value()),
                }
                p { class: "board__hint", "{copy.form.tags_hint}" }
                button {
                    class: "board__submit",
                    disabled: draft_title().trim().is_empty() || draft_body().trim().is_empty(),
                    onclick: {
                        let send = send.clone();
                        move |_| send(BoardEvent::SubmitQuestion)
                    },
                    "{copy.submit_question}"
                }
            }

            section { class: "board__controls",
                input {
                    class: "board__search",
                    placeholder: "{copy.search_placeholder}",
                    value: "{search()}",
                    oninput: move |evt| search.set(evt.value()),
                }
                div { class: "board__tabs",
                    {tab_button(tab, BoardTab::Recent, &copy.filters.recent)}
                    {tab_button(tab, BoardTab::Unanswered, &copy.filters.unanswered)}
                    {tab_button(tab, BoardTab::Popular, &copy.filters.popular)}
                }
            }

            if let Some(message) = ai_error() {
                p { class: "board__error", "{message}" }
            }

            if visible.is_empty() {
                section { class: "board__empty",
                    h3 { "{copy.no_questions_title}" }
                    p { "{copy.no_questions_description}" }
                }
            } else {
                ul { class: "board__questions",
                    for question in visible {
                        QuestionCard {
                            key: "{question.id}",
                            question: question.clone(),
                            engine,
                            answer_drafts,
                            pending: pending_ai.read().contains(&question.id),
                            on_ai: {
                                let send = send.clone();
                                let id = question.id;
                                EventHandler::new(move |_| {
                                    send(BoardEvent::RequestCompletion { question_id: id })
                                })
                            },
                            on_answer: {
                                let send = send.clone();
                                let id = question.id;
                                EventHandler::new(move |_| {
                                    send(BoardEvent::SubmitAnswer { question_id: id })
                                })
                            },
                        }
                    }
                }
            }
        }
    }
}

fn tab_button(mut tab: Signal<BoardTab>, target: BoardTab, label: &str) -> Element {
    let active = tab() == target;
    let label = label.to_string();
    rsx! {
        button {
            class: if active { "board__tab board__tab--active" } else { "board__tab" },
            onclick: move |_| tab.set(target),
            "{label}"
        }
    }
}

#[component]
fn QuestionCard(
    question: Question,
    engine: Signal<BoardEngine>,
    answer_drafts: Signal<HashMap<Uuid, String>>,
    pending: bool,
    on_ai: EventHandler<()>,
    on_answer: EventHandler<()>,
) -> Element {
    let lang = use_lang();
    let copy = content::board(lang());

    let qid = question.id;
    let answer_count = question.answers.len();
    let answer_label = if answer_count == 1 {
        &copy.answer_singular
    } else {
        &copy.answer_plural
    };
    let draft = answer_drafts
        .read()
        .get(&qid)
        .cloned()
        .unwrap_or_default();

    let mut engine_up = engine.clone();
    let mut engine_toggle = engine.clone();
    let mut drafts = answer_drafts.clone();

    rsx! {
        li { class: "board__question",
            div { class: "board__question-head",
                button {
                    class: "board__upvote",
                    onclick: move |_| engine_up.with_mut(|eng| eng.upvote_question(qid)),
                    "▲ {question.upvotes}"
                }
                div { class: "board__question-meta",
                    h3 {
                        class: "board__question-title",
                        onclick: move |_| engine_toggle.with_mut(|eng| eng.toggle_expand(qid)),
                        "{question.title}"
                    }
                    span { class: "board__question-byline",
                        "{question.author} · {question.date} · {answer_count} {answer_label}"
                    }
                    div { class: "board__tags",
                        for tag in question.tags.iter() {
                            span { key: "{tag}", class: "board__tag", "{tag}" }
                        }
                    }
                }
                button {
                    class: "board__ai-button",
                    disabled: pending,
                    onclick: move |_| on_ai.call(()),
                    if pending { "{copy.loading_ai}" } else { "{copy.get_ai_answer}" }
                }
            }

            if question.expanded {
                p { class: "board__question-body", "{question.body}" }

                if question.answers.is_empty() {
                    p { class: "board__no-answers", "{copy.no_answers}" }
                } else {
                    ul { class: "board__answers",
                        for answer in question.answers.iter() {
                            AnswerRow {
                                key: "{answer.id}",
                                question_id: qid,
                                answer: answer.clone(),
                                engine,
                            }
                        }
                    }
                }

                div { class: "board__answer-form",
                    textarea {
                        class: "board__textarea",
                        placeholder: "{copy.add_answer_placeholder}",
                        value: "{draft}",
                        oninput: move |evt| {
                            drafts.with_mut(|d| {
                                d.insert(qid, evt.value());
                            });
                        },
                    }
                    button {
                        class: "board__submit",
                        onclick: move |_| on_answer.call(()),
                        "{copy.post_answer}"
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerRow(question_id: Uuid, answer: super::engine::Answer, engine: Signal<BoardEngine>) -> Element {
    let lang = use_lang();
    let copy = content::board(lang());
    let aid = answer.id;
    let mut engine = engine.clone();

    // The AI author label is localized for display; the stored author stays
    // canonical so the expert flag logic is language-independent.
    let author = if answer.author == super::engine::AI_AUTHOR {
        copy.ai_assistant.clone()
    } else {
        answer.author.clone()
    };

    rsx! {
        li { class: "board__answer",
            div { class: "board__answer-head",
                span { class: "board__answer-author", "{author}" }
                if answer.expert {
                    span { class: "board__answer-badge", "{copy.expert}" }
                }
                span { class: "board__answer-date", "{answer.date}" }
            }
            p { class: "board__answer-body", "{answer.body}" }
            button {
                class: "board__upvote board__upvote--answer",
                onclick: move |_| {
                    engine.with_mut(|eng| eng.upvote_answer(question_id, aid));
                },
                "▲ {answer.upvotes}"
            }
        }
    }
}

/// Fire the completion request off the UI loop. Only Send-safe values cross
/// into the spawned future; the result comes back as an event.
fn queue_completion(
    sender_slot: Rc<RefCell<Option<UnboundedSender<BoardEvent>>>>,
    question_id: Uuid,
    prompt: String,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let client = CompletionClient::groq();
            let result = client
                .complete(COMPLETION_TASK, &prompt)
                .await
                .map_err(|err: ApiError| err.user_message());
            let _ = sender.unbounded_send(BoardEvent::CompletionArrived {
                question_id,
                result,
            });
        });
    }
}
