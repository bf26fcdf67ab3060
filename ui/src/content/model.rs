//! Typed page-content records deserialized from the embedded JSON.
//!
//! Field names match the JSON keys one-to-one (snake_case on both sides).
//! Icon references are the strict [`IconTag`] enum: an unknown tag is a
//! deserialization error caught by the completeness test, never an icon that
//! silently renders as nothing.

use serde::Deserialize;

/// Enumerated icon vocabulary shared by content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    Search,
    Upload,
    Shield,
    Users,
    Globe,
    Calendar,
    Layers,
    Compass,
    Book,
    Document,
    Image,
    Map,
    Database,
}

impl IconTag {
    /// Exhaustive glyph mapping; new tags must pick a glyph here to compile.
    pub fn glyph(self) -> &'static str {
        match self {
            IconTag::Search => "🔍",
            IconTag::Upload => "⬆️",
            IconTag::Shield => "🛡️",
            IconTag::Users => "👥",
            IconTag::Globe => "🌐",
            IconTag::Calendar => "📅",
            IconTag::Layers => "🪨",
            IconTag::Compass => "🧭",
            IconTag::Book => "📖",
            IconTag::Document => "📄",
            IconTag::Image => "🖼️",
            IconTag::Map => "🗺️",
            IconTag::Database => "🗄️",
        }
    }
}

/// A titled block of prose, reused across pages.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Passage {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FaqItem {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeaderContent {
    pub logo_alt: String,
    pub nav: HeaderNav,
    pub language_heading: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeaderNav {
    pub home: String,
    pub about: String,
    pub upload: String,
    pub ask: String,
    pub blog: String,
    pub login: String,
    pub signup: String,
    pub logout: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FooterContent {
    pub tagline: String,
    pub sections: Vec<FooterSection>,
    pub contact_heading: String,
    pub copyright: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

// ---------------------------------------------------------------------------
// Marketing pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HomeContent {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub slides: Vec<Slide>,
    pub news: NewsSection,
    pub mission: Passage,
    pub coverage: Passage,
    pub reviews: ReviewSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: IconTag,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsSection {
    pub title: String,
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsItem {
    pub date: String,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReviewSection {
    pub title: String,
    pub entries: Vec<Review>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Review {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Passage>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BlogContent {
    pub title: String,
    pub subtitle: String,
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BlogPost {
    pub date: String,
    pub title: String,
    pub author: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FaqContent {
    pub title: String,
    pub subtitle: String,
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PricingContent {
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LegalContent {
    pub privacy: LegalDoc,
    pub terms: LegalDoc,
    pub cookies: LegalDoc,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LegalDoc {
    pub title: String,
    pub updated: String,
    pub sections: Vec<Passage>,
}

// ---------------------------------------------------------------------------
// Question board
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BoardContent {
    pub title: String,
    pub subtitle: String,
    pub categories_title: String,
    pub categories: Vec<Category>,
    pub ask_title: String,
    pub form: BoardForm,
    pub submit_question: String,
    pub search_placeholder: String,
    pub filters: BoardFilters,
    pub answer_singular: String,
    pub answer_plural: String,
    pub get_ai_answer: String,
    pub loading_ai: String,
    pub ai_assistant: String,
    pub expert: String,
    pub no_answers: String,
    pub add_answer_placeholder: String,
    pub post_answer: String,
    pub no_questions_title: String,
    pub no_questions_description: String,
    pub sample_questions: Vec<SampleQuestion>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub icon: IconTag,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BoardForm {
    pub title_placeholder: String,
    pub body_placeholder: String,
    pub tags_placeholder: String,
    pub tags_hint: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BoardFilters {
    pub recent: String,
    pub unanswered: String,
    pub popular: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SampleQuestion {
    pub title: String,
    pub body: String,
    pub answers: Vec<String>,
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadContent {
    pub title: String,
    pub subtitle: String,
    pub dropzone: Dropzone,
    pub selected_files: String,
    pub progress_title: String,
    pub complete: String,
    pub metadata: MetadataForm,
    pub submit: String,
    pub uploading: String,
    pub supported_title: String,
    pub file_types: Vec<FileType>,
    pub how_title: String,
    pub steps: Vec<Passage>,
    pub faq_title: String,
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Dropzone {
    pub title: String,
    pub description: String,
    pub button: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MetadataForm {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub location: String,
    pub era: String,
    pub notes: String,
    pub tags: String,
    pub tags_placeholder: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FileType {
    pub icon: IconTag,
    pub name: String,
    pub formats: String,
}
