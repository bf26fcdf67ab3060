//! Language selection for `trove-ui`.
//!
//! The site ships four languages. The current one lives in a `Signal<Lang>`
//! provided at the composition root (see [`LanguageProvider`]); every page
//! subscribes through [`use_lang`] and re-renders on change. The choice is
//! persisted under [`storage::LANG_KEY`] and restored on start.
//!
//! Content lookup itself lives in [`crate::content`]; this module only owns
//! which language is active. Unknown codes never fail: [`Lang::resolve`]
//! falls back to English.

use dioxus::prelude::*;

use crate::core::storage;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Ja,
    Zh,
    Es,
}

impl Lang {
    pub const ALL: [Lang; 4] = [Lang::En, Lang::Ja, Lang::Zh, Lang::Es];

    /// Every unrecognized code resolves here.
    pub const FALLBACK: Lang = Lang::En;

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
            Lang::Zh => "zh",
            Lang::Es => "es",
        }
    }

    /// Display name in the language itself (for the picker).
    pub fn name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ja => "日本語",
            Lang::Zh => "中文",
            Lang::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Lang::En => "🇺🇸",
            Lang::Ja => "🇯🇵",
            Lang::Zh => "🇨🇳",
            Lang::Es => "🇪🇸",
        }
    }

    /// Lenient parse: case-insensitive, accepts regional variants
    /// ("en-US" ⇒ `En`, "zh_CN" ⇒ `Zh`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "ja" => Some(Lang::Ja),
            "zh" => Some(Lang::Zh),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// Total resolution: unknown codes fall back to English.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::FALLBACK)
    }
}

/// Provide `Signal<Lang>` to the component tree, restoring any persisted
/// choice (garbage in storage resolves to English like any unknown code).
#[component]
pub fn LanguageProvider(children: Element) -> Element {
    let lang = use_signal(|| {
        storage::get(storage::LANG_KEY)
            .as_deref()
            .map(Lang::resolve)
            .unwrap_or(Lang::FALLBACK)
    });
    use_context_provider(|| lang);

    rsx! {
        {children}
    }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for mis-ordered providers so views never panic in production.
    eprintln!("[i18n] missing LanguageProvider context, using local English signal");
    use_signal(|| Lang::FALLBACK)
}

/// Switch language: update the shared signal and persist the code.
pub fn switch_lang(mut current: Signal<Lang>, next: Lang) {
    current.set(next);
    storage::set(storage::LANG_KEY, next.code());
    println!("[i18n] language switched to {}", next.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_regional_variants() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_code("zh_CN"), Some(Lang::Zh));
        assert_eq!(Lang::from_code("JA"), Some(Lang::Ja));
        assert_eq!(Lang::from_code("es-MX"), Some(Lang::Es));
    }

    #[test]
    fn unknown_codes_resolve_to_english() {
        assert_eq!(Lang::resolve("fr"), Lang::En);
        assert_eq!(Lang::resolve(""), Lang::En);
        assert_eq!(Lang::resolve("klingon"), Lang::En);
    }

    #[test]
    fn all_lists_each_language_once() {
        let codes: std::collections::HashSet<_> = Lang::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), Lang::ALL.len());
    }
}
