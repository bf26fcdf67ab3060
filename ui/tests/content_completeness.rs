//! Localized content completeness test.
//!
//! Every supported language must ship a parseable record for every page.
//! The runtime tolerates a missing translation (it serves English), but a
//! release should never rely on that: this test makes a broken or missing
//! file a hard failure before it ships.
//!
//! If you add a new page:
//! 1. Add its record type to `ui/src/content/model.rs`.
//! 2. Create `ui/content/<lang>/<page>.json` for every language.
//! 3. Register the page in `PAGES` below.

use ui::content::{
    AboutContent, BlogContent, BoardContent, FaqContent, FooterContent, HeaderContent,
    HomeContent, LegalContent, PricingContent, UploadContent,
};
use ui::i18n::Lang;

const PAGES: &[&str] = &[
    "header", "footer", "home", "about", "blog", "faqs", "pricing", "legal", "board", "upload",
];

fn parse_page(lang: Lang, page: &str) -> Result<(), String> {
    let path = format!(
        "{}/content/{}/{page}.json",
        env!("CARGO_MANIFEST_DIR"),
        lang.code()
    );
    let raw = std::fs::read_to_string(&path).map_err(|err| format!("{path}: {err}"))?;

    let parsed = match page {
        "header" => serde_json::from_str::<HeaderContent>(&raw).map(drop),
        "footer" => serde_json::from_str::<FooterContent>(&raw).map(drop),
        "home" => serde_json::from_str::<HomeContent>(&raw).map(drop),
        "about" => serde_json::from_str::<AboutContent>(&raw).map(drop),
        "blog" => serde_json::from_str::<BlogContent>(&raw).map(drop),
        "faqs" => serde_json::from_str::<FaqContent>(&raw).map(drop),
        "pricing" => serde_json::from_str::<PricingContent>(&raw).map(drop),
        "legal" => serde_json::from_str::<LegalContent>(&raw).map(drop),
        "board" => serde_json::from_str::<BoardContent>(&raw).map(drop),
        "upload" => serde_json::from_str::<UploadContent>(&raw).map(drop),
        other => panic!("unregistered page '{other}'"),
    };

    parsed.map_err(|err| format!("{path}: {err}"))
}

#[test]
fn every_language_parses_every_page() {
    let mut failures = Vec::new();

    for lang in Lang::ALL {
        for page in PAGES {
            if let Err(message) = parse_page(lang, page) {
                failures.push(message);
            }
        }
    }

    assert!(
        failures.is_empty(),
        "Broken localized content:\n  {}",
        failures.join("\n  ")
    );
}

#[test]
fn sample_question_seeds_line_up_across_languages() {
    // The board engine pairs sample questions with fixed seed metadata by
    // position, so every language must ship the same number of samples and
    // the same per-question answer counts as English.
    let read = |lang: Lang| -> BoardContent {
        let path = format!(
            "{}/content/{}/board.json",
            env!("CARGO_MANIFEST_DIR"),
            lang.code()
        );
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap()
    };

    let english = read(Lang::En);
    for lang in Lang::ALL {
        let localized = read(lang);
        assert_eq!(
            localized.sample_questions.len(),
            english.sample_questions.len(),
            "{}: sample question count diverges from English",
            lang.code()
        );
        for (ours, theirs) in localized
            .sample_questions
            .iter()
            .zip(&english.sample_questions)
        {
            assert_eq!(
                ours.answers.len(),
                theirs.answers.len(),
                "{}: answer count diverges for '{}'",
                lang.code(),
                theirs.title
            );
        }
    }
}
