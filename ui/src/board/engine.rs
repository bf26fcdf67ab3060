//! Question-board state machine.
//!
//! Pure data and transitions, no Dioxus types, so the whole board behaves
//! identically under native unit tests and in the browser. The view layer
//! owns signals and async; this module owns the rules:
//!
//! - new questions are prepended (newest first is the natural order),
//! - upvotes are unbounded tallies, not toggles,
//! - an AI completion attaches to the question that requested it, found by
//!   id, so late responses land correctly even after reordering or new posts.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::content::BoardContent;

/// Author label for AI-generated answers.
pub const AI_AUTHOR: &str = "AI Assistant";
/// Author label for answers and questions posted from this session.
pub const LOCAL_AUTHOR: &str = "You";
/// Strictly-greater-than threshold for the Popular filter.
pub const POPULAR_UPVOTES: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: String,
    pub tags: Vec<String>,
    pub upvotes: u32,
    pub answers: Vec<Answer>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub id: Uuid,
    pub body: String,
    pub author: String,
    pub date: String,
    pub upvotes: u32,
    /// Marks trusted answers (AI responses and curated seed answers).
    pub expert: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardTab {
    #[default]
    Recent,
    Unanswered,
    Popular,
}

/// Seed metadata paired positionally with the localized sample questions:
/// (author, date, tags, question upvotes, per-answer (author, upvotes)).
type SeedMeta = (
    &'static str,
    &'static str,
    &'static [&'static str],
    u32,
    &'static [(&'static str, u32)],
);

const SEED_META: &[SeedMeta] = &[
    (
        "Researcher123",
        "2023-05-15",
        &["radiocarbon", "shell", "midwest"],
        24,
        &[("Dr. Elena Forsythe", 18), ("C14LabTech", 9)],
    ),
    (
        "FieldTech_Sam",
        "2023-06-02",
        &["survey", "plowzone", "methods"],
        12,
        &[("CRM_Veteran", 15)],
    ),
    (
        "ArchiveVolunteer",
        "2023-06-20",
        &["digitization", "photographs"],
        7,
        &[],
    ),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardEngine {
    pub questions: Vec<Question>,
}

fn today() -> String {
    OffsetDateTime::now_utc().date().to_string()
}

impl BoardEngine {
    /// Build the initial board from the localized sample questions.
    pub fn seed_samples(copy: &BoardContent) -> Self {
        let questions = copy
            .sample_questions
            .iter()
            .zip(SEED_META)
            .map(|(sample, (author, date, tags, upvotes, answer_meta))| Question {
                id: Uuid::new_v4(),
                title: sample.title.clone(),
                body: sample.body.clone(),
                author: (*author).to_string(),
                date: (*date).to_string(),
                tags: tags.iter().map(|t| (*t).to_string()).collect(),
                upvotes: *upvotes,
                answers: sample
                    .answers
                    .iter()
                    .zip(*answer_meta)
                    .map(|(body, (answer_author, answer_upvotes))| Answer {
                        id: Uuid::new_v4(),
                        body: body.clone(),
                        author: (*answer_author).to_string(),
                        date: (*date).to_string(),
                        upvotes: *answer_upvotes,
                        expert: true,
                    })
                    .collect(),
                expanded: false,
            })
            .collect();
        Self { questions }
    }

    /// Post a new question. Empty title or body is rejected; tags are
    /// comma-split and trimmed. Returns the new question's id.
    pub fn submit_question(&mut self, title: &str, body: &str, tags: &str) -> Option<Uuid> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() || body.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        self.questions.insert(
            0,
            Question {
                id,
                title: title.to_string(),
                body: body.to_string(),
                author: LOCAL_AUTHOR.to_string(),
                date: today(),
                tags: tags
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect(),
                upvotes: 0,
                answers: Vec::new(),
                expanded: true,
            },
        );
        Some(id)
    }

    /// Post a community answer under a question. Empty bodies are rejected.
    pub fn submit_answer(&mut self, question_id: Uuid, body: &str) -> bool {
        let body = body.trim();
        if body.is_empty() {
            return false;
        }
        let Some(question) = self.find_mut(question_id) else {
            return false;
        };
        question.answers.push(Answer {
            id: Uuid::new_v4(),
            body: body.to_string(),
            author: LOCAL_AUTHOR.to_string(),
            date: today(),
            upvotes: 0,
            expert: false,
        });
        true
    }

    /// Attach an AI completion to the question that requested it. Returns
    /// false when the question has since disappeared; the caller drops the
    /// response rather than guessing at a target.
    pub fn attach_completion(&mut self, question_id: Uuid, text: &str) -> bool {
        let Some(question) = self.find_mut(question_id) else {
            return false;
        };
        question.answers.push(Answer {
            id: Uuid::new_v4(),
            body: text.to_string(),
            author: AI_AUTHOR.to_string(),
            date: today(),
            upvotes: 0,
            expert: true,
        });
        question.expanded = true;
        true
    }

    pub fn upvote_question(&mut self, question_id: Uuid) {
        if let Some(question) = self.find_mut(question_id) {
            question.upvotes += 1;
        }
    }

    pub fn upvote_answer(&mut self, question_id: Uuid, answer_id: Uuid) {
        if let Some(question) = self.find_mut(question_id) {
            if let Some(answer) = question.answers.iter_mut().find(|a| a.id == answer_id) {
                answer.upvotes += 1;
            }
        }
    }

    pub fn toggle_expand(&mut self, question_id: Uuid) {
        if let Some(question) = self.find_mut(question_id) {
            question.expanded = !question.expanded;
        }
    }

    /// The visible slice for a tab and search query. Search matches title,
    /// body, and tags, case-insensitively.
    pub fn filtered(&self, tab: BoardTab, query: &str) -> Vec<&Question> {
        let needle = query.trim().to_lowercase();
        self.questions
            .iter()
            .filter(|q| match tab {
                BoardTab::Recent => true,
                BoardTab::Unanswered => q.answers.is_empty(),
                BoardTab::Popular => q.upvotes > POPULAR_UPVOTES,
            })
            .filter(|q| {
                needle.is_empty()
                    || q.title.to_lowercase().contains(&needle)
                    || q.body.to_lowercase().contains(&needle)
                    || q.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn find_mut(&mut self, question_id: Uuid) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::i18n::Lang;

    fn seeded() -> BoardEngine {
        BoardEngine::seed_samples(content::board(Lang::En))
    }

    #[test]
    fn seeds_match_localized_samples() {
        let engine = seeded();
        assert_eq!(engine.questions.len(), 3);
        assert_eq!(engine.questions[0].author, "Researcher123");
        assert_eq!(engine.questions[0].answers.len(), 2);
        assert!(engine.questions[0].answers.iter().all(|a| a.expert));
        assert!(engine.questions[2].answers.is_empty());
    }

    #[test]
    fn new_questions_are_prepended_with_split_tags() {
        let mut engine = seeded();
        let id = engine
            .submit_question("Obsidian sourcing?", "Which lab?", " xrf , obsidian ,, ")
            .unwrap();

        let first = &engine.questions[0];
        assert_eq!(first.id, id);
        assert_eq!(first.author, LOCAL_AUTHOR);
        assert_eq!(first.tags, vec!["xrf", "obsidian"]);
        assert_eq!(first.upvotes, 0);
        assert!(first.expanded);
    }

    #[test]
    fn blank_questions_and_answers_are_rejected() {
        let mut engine = seeded();
        assert_eq!(engine.submit_question("  ", "body", ""), None);
        assert_eq!(engine.submit_question("title", "", ""), None);

        let qid = engine.questions[0].id;
        assert!(!engine.submit_answer(qid, "   "));
        assert!(!engine.submit_answer(Uuid::new_v4(), "orphan"));
    }

    #[test]
    fn upvotes_are_unbounded_tallies() {
        let mut engine = seeded();
        let qid = engine.questions[2].id;
        let before = engine.questions[2].upvotes;
        engine.upvote_question(qid);
        engine.upvote_question(qid);
        assert_eq!(engine.questions[2].upvotes, before + 2);

        let aid = engine.questions[0].answers[0].id;
        let qid0 = engine.questions[0].id;
        let answer_before = engine.questions[0].answers[0].upvotes;
        engine.upvote_answer(qid0, aid);
        assert_eq!(engine.questions[0].answers[0].upvotes, answer_before + 1);
    }

    #[test]
    fn completion_lands_on_originating_question() {
        let mut engine = seeded();
        let target = engine.questions[2].id;

        // New posts reorder the list while the request is in flight.
        engine.submit_question("Newer question", "body", "");
        engine.upvote_question(engine.questions[0].id);

        assert!(engine.attach_completion(target, "Scan at 2400 dpi for slides."));
        let question = engine.questions.iter().find(|q| q.id == target).unwrap();
        assert_eq!(question.answers.len(), 1);
        assert_eq!(question.answers[0].author, AI_AUTHOR);
        assert!(question.answers[0].expert);
        assert!(question.expanded);
    }

    #[test]
    fn submission_id_routes_the_follow_up_completion() {
        // Posting a question immediately requests an AI answer for it; the
        // id returned by submit_question is the handle that request carries.
        let mut engine = seeded();
        let id = engine
            .submit_question("Flotation samples?", "Mesh size for seeds?", "")
            .unwrap();

        assert!(engine.attach_completion(id, "Use 0.5 mm mesh for seeds."));
        let question = &engine.questions[0];
        assert_eq!(question.id, id);
        assert_eq!(question.answers.len(), 1);
        assert_eq!(question.answers[0].author, AI_AUTHOR);
    }

    #[test]
    fn completion_for_unknown_question_is_dropped() {
        let mut engine = seeded();
        assert!(!engine.attach_completion(Uuid::new_v4(), "late response"));
    }

    #[test]
    fn tab_filters() {
        let mut engine = seeded();
        engine.submit_question("Fresh", "body", "");

        let unanswered = engine.filtered(BoardTab::Unanswered, "");
        assert!(unanswered.iter().all(|q| q.answers.is_empty()));
        assert!(unanswered.iter().any(|q| q.title == "Fresh"));

        // Popular is strictly greater than the threshold.
        let popular = engine.filtered(BoardTab::Popular, "");
        assert!(popular.iter().all(|q| q.upvotes > POPULAR_UPVOTES));
        assert_eq!(popular.len(), 2);

        let recent = engine.filtered(BoardTab::Recent, "");
        assert_eq!(recent.len(), engine.questions.len());
        assert_eq!(recent[0].title, "Fresh");
    }

    #[test]
    fn search_matches_title_body_and_tags() {
        let engine = seeded();
        assert_eq!(engine.filtered(BoardTab::Recent, "RADIOCARBON").len(), 1);
        assert_eq!(engine.filtered(BoardTab::Recent, "plowzone").len(), 1);
        assert!(engine.filtered(BoardTab::Recent, "zzz-no-match").is_empty());
        // Blank query is a no-op filter.
        assert_eq!(
            engine.filtered(BoardTab::Recent, "   ").len(),
            engine.questions.len()
        );
    }

    #[test]
    fn toggle_expand_flips_state() {
        let mut engine = seeded();
        let qid = engine.questions[0].id;
        assert!(!engine.questions[0].expanded);
        engine.toggle_expand(qid);
        assert!(engine.questions[0].expanded);
        engine.toggle_expand(qid);
        assert!(!engine.questions[0].expanded);
    }
}
