//! Static site identity. The one place brand facts live; localized copy
//! interpolates `{siteName}` from here.

#[derive(Debug, Clone, Copy)]
pub struct SiteInfo {
    pub name: &'static str,
    pub slogan: &'static str,
    pub logo: &'static str,
    pub favicon: &'static str,
    pub mail: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Trove",
    slogan: "Your AI-powered archaeology & heritage data archive",
    logo: "/assets/images/logo.png",
    favicon: "/assets/favicon.ico",
    mail: "curators@trove-archive.org",
    phone: "+1 480 555 0117",
    linkedin: "https://www.linkedin.com/company/trove-archive",
    instagram: "https://www.instagram.com/trove.archive",
    facebook: "https://www.facebook.com/trovearchive",
};

/// Replace the `{siteName}` token localized copy uses for the brand name.
pub fn brand(text: &str) -> String {
    text.replace("{siteName}", SITE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_interpolates_site_name() {
        assert_eq!(brand("Welcome to {siteName}!"), "Welcome to Trove!");
    }

    #[test]
    fn brand_leaves_plain_text_alone() {
        assert_eq!(brand("No token here"), "No token here");
    }
}
