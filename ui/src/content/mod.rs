//! Embedded localized page content.
//!
//! Every page's copy lives in `ui/content/<lang>/<page>.json`, compiled into
//! the binary with `rust-embed` and deserialized once into a typed record.
//! English is the reference set and must parse for every page; a missing or
//! broken translation logs and serves English instead, so a half-finished
//! locale can ship without breaking any view.

pub mod model;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::de::DeserializeOwned;

use crate::i18n::Lang;

pub use model::*;

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

/// One page's record in every language, English guaranteed.
pub struct ContentSet<T> {
    records: Vec<(Lang, T)>,
}

impl<T: DeserializeOwned> ContentSet<T> {
    /// Load `<lang>/<page>.json` for each supported language.
    ///
    /// Panics if the English record is missing or malformed. That is a build
    /// defect, not a runtime condition, and the completeness test catches it
    /// before any release.
    fn load(page: &str) -> Self {
        let mut records = Vec::with_capacity(Lang::ALL.len());
        for lang in Lang::ALL {
            match Self::parse(lang, page) {
                Ok(record) => records.push((lang, record)),
                Err(err) if lang == Lang::FALLBACK => {
                    panic!("content: english record for '{page}' unusable: {err}")
                }
                Err(err) => {
                    eprintln!(
                        "[content] {}/{page}: {err}, serving english",
                        lang.code()
                    );
                }
            }
        }
        Self { records }
    }

    fn parse(lang: Lang, page: &str) -> Result<T, String> {
        let path = format!("{}/{page}.json", lang.code());
        let file = ContentAssets::get(&path).ok_or_else(|| format!("missing {path}"))?;
        serde_json::from_slice(&file.data).map_err(|err| format!("{path}: {err}"))
    }

    /// Total lookup: the requested language, else English.
    pub fn get(&self, lang: Lang) -> &T {
        self.records
            .iter()
            .find(|(l, _)| *l == lang)
            .or_else(|| self.records.iter().find(|(l, _)| *l == Lang::FALLBACK))
            .map(|(_, record)| record)
            .expect("english record always loaded")
    }
}

macro_rules! content_page {
    ($fn_name:ident, $ty:ty, $page:literal) => {
        pub fn $fn_name(lang: Lang) -> &'static $ty {
            static SET: Lazy<ContentSet<$ty>> = Lazy::new(|| ContentSet::load($page));
            SET.get(lang)
        }
    };
}

content_page!(header, HeaderContent, "header");
content_page!(footer, FooterContent, "footer");
content_page!(home, HomeContent, "home");
content_page!(about, AboutContent, "about");
content_page!(blog, BlogContent, "blog");
content_page!(faqs, FaqContent, "faqs");
content_page!(pricing, PricingContent, "pricing");
content_page!(legal, LegalContent, "legal");
content_page!(board, BoardContent, "board");
content_page!(upload, UploadContent, "upload");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_serves_english() {
        let fallback = home(Lang::resolve("fr"));
        let english = home(Lang::En);
        assert_eq!(fallback, english);
    }

    #[test]
    fn languages_serve_distinct_copy() {
        assert_ne!(home(Lang::En).hero.title, home(Lang::Ja).hero.title);
        assert_ne!(board(Lang::En).title, board(Lang::Zh).title);
    }

    #[test]
    fn icon_tags_deserialize_strictly() {
        let err = serde_json::from_str::<IconTag>("\"sparkles\"");
        assert!(err.is_err());
        let ok: IconTag = serde_json::from_str("\"database\"").unwrap();
        assert_eq!(ok, IconTag::Database);
    }
}
