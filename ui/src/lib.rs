//! Shared UI crate for Trove. All cross-platform views and logic live here.

pub mod board;
pub mod content;
pub mod core;
pub mod i18n;
pub mod routes;
pub mod site;
pub mod views;

pub mod components {
    // Localized site header with nav builder + language picker (components/app_header.rs)
    pub mod app_header;
    pub use app_header::register_nav;
    pub use app_header::AppHeader;
    pub use app_header::NavBuilder;

    // Localized footer (components/footer.rs)
    pub mod footer;
    pub use footer::AppFooter;

    // Viewport-lazy image with placeholder fallback (components/lazy_image.rs)
    pub mod lazy_image;
    pub use lazy_image::LazyImage;

    // Token-gated wrapper for protected views (components/session_gate.rs)
    pub mod session_gate;
    pub use session_gate::SessionGate;
}
