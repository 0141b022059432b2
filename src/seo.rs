//! Canonical/alternate link metadata rendered into every page head.

use crate::i18n::Locale;

pub const DEFAULT_SHARE_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a3/Kosa_Tiligul_Progresivka.jpg/2560px-Kosa_Tiligul_Progresivka.jpg";

pub struct AlternateLink {
    pub hreflang: &'static str,
    pub href: String,
}

pub struct SeoMeta {
    pub full_title: String,
    pub description: String,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub html_lang: &'static str,
    pub og_locale: &'static str,
    pub og_type: &'static str,
    pub image: String,
}

impl SeoMeta {
    /// `path` is the locale-less page path ("" for the home page, "/news",
    /// "/news/<id>", ...). Titles get the " | Neusatz" suffix of the
    /// original site.
    pub fn new(base_url: &str, locale: Locale, path: &str, title: &str, description: &str) -> Self {
        let canonical = format!("{}/{}{}", base_url, locale.as_str(), path);

        let mut alternates: Vec<AlternateLink> = Locale::ALL
            .iter()
            .map(|l| AlternateLink {
                hreflang: l.hreflang(),
                href: format!("{}/{}{}", base_url, l.as_str(), path),
            })
            .collect();
        alternates.push(AlternateLink {
            hreflang: "x-default",
            href: format!("{}/{}{}", base_url, Locale::DEFAULT.as_str(), path),
        });

        Self {
            full_title: format!("{} | Neusatz", title),
            description: description.to_string(),
            canonical,
            alternates,
            html_lang: locale.hreflang(),
            og_locale: locale.og_locale(),
            og_type: "website",
            image: DEFAULT_SHARE_IMAGE.to_string(),
        }
    }

    pub fn article(mut self) -> Self {
        self.og_type = "article";
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_carries_locale_and_path() {
        let meta = SeoMeta::new("https://neusatz.online", Locale::De, "/news", "Aktuelles", "d");
        assert_eq!(meta.canonical, "https://neusatz.online/de/news");
        assert_eq!(meta.full_title, "Aktuelles | Neusatz");
        assert_eq!(meta.html_lang, "de");
        assert_eq!(meta.og_locale, "de_DE");
    }

    #[test]
    fn alternates_cover_all_locales_plus_x_default() {
        let meta = SeoMeta::new("https://neusatz.online", Locale::En, "/projects", "t", "d");
        let hreflangs: Vec<&str> = meta.alternates.iter().map(|a| a.hreflang).collect();
        assert_eq!(hreflangs, vec!["uk", "en", "de", "x-default"]);
        // ua URLs use the site's "ua" segment even though hreflang says "uk".
        assert_eq!(meta.alternates[0].href, "https://neusatz.online/ua/projects");
        assert_eq!(
            meta.alternates.last().unwrap().href,
            "https://neusatz.online/ua/projects"
        );
    }

    #[test]
    fn article_switches_og_type() {
        let meta =
            SeoMeta::new("https://x.y", Locale::Ua, "/news/1", "t", "d").article();
        assert_eq!(meta.og_type, "article");
    }
}
