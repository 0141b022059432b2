pub mod translations;

pub use translations::Translations;

/// Supported display languages. Closed set; "ua" is the Ukrainian-flavored
/// code used in URLs (hreflang maps it to ISO "uk").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Ua,
    En,
    De,
}

/// Outcome of examining the locale path segment. Content only renders once a
/// locale is `Active`; everything else becomes an address-level redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleResolution {
    Active(Locale),
    Redirect(&'static str),
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ua, Locale::En, Locale::De];
    pub const DEFAULT: Locale = Locale::Ua;

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "ua" => Some(Locale::Ua),
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ua => "ua",
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// ISO 639-1 code for hreflang / <html lang> attributes.
    pub fn hreflang(&self) -> &'static str {
        match self {
            Locale::Ua => "uk",
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::Ua => "uk_UA",
            Locale::En => "en_US",
            Locale::De => "de_DE",
        }
    }

    pub fn translations(&self) -> &'static Translations {
        translations::table(*self)
    }
}

/// Resolve the first path segment to an active locale. Missing, misspelled or
/// unknown segments redirect to the default locale root, dropping the rest of
/// the path (matches the original site's behavior).
pub fn resolve_segment(segment: Option<&str>) -> LocaleResolution {
    match segment.and_then(Locale::from_code) {
        Some(locale) => LocaleResolution::Active(locale),
        None => LocaleResolution::Redirect("/ua"),
    }
}

/// Recompute a path with the locale segment substituted, preserving the
/// remainder: switching "de" -> "en" on "/de/news/42" yields "/en/news/42".
pub fn switch_locale_path(path: &str, locale: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((_, rest)) => format!("/{}/{}", locale.as_str(), rest),
        None => format!("/{}", locale.as_str()),
    }
}

/// Expand `{placeholder}` tokens in a translation template.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in args {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

/// Localized long date ("15 серпня 2025", "August 15, 2025", "15. August 2025")
/// from epoch seconds. Falls back to the raw timestamp if it is out of range.
pub fn long_date(locale: Locale, timestamp: i64) -> String {
    use chrono::Datelike;

    let Some(date) = chrono::DateTime::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };
    let month = locale.translations().month_names[date.month0() as usize];
    match locale {
        Locale::Ua => format!("{} {} {}", date.day(), month, date.year()),
        Locale::En => format!("{} {}, {}", month, date.day(), date.year()),
        Locale::De => format!("{}. {} {}", date.day(), month, date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_segments_resolve_to_active() {
        assert_eq!(
            resolve_segment(Some("ua")),
            LocaleResolution::Active(Locale::Ua)
        );
        assert_eq!(
            resolve_segment(Some("en")),
            LocaleResolution::Active(Locale::En)
        );
        assert_eq!(
            resolve_segment(Some("de")),
            LocaleResolution::Active(Locale::De)
        );
    }

    #[test]
    fn invalid_segment_redirects_to_default_root() {
        // The redirect target is the bare default root, not /ua/<rest>.
        assert_eq!(resolve_segment(Some("xx")), LocaleResolution::Redirect("/ua"));
        assert_eq!(resolve_segment(Some("UA")), LocaleResolution::Redirect("/ua"));
        assert_eq!(resolve_segment(None), LocaleResolution::Redirect("/ua"));
    }

    #[test]
    fn switch_preserves_trailing_path() {
        assert_eq!(switch_locale_path("/de/news/42", Locale::En), "/en/news/42");
        assert_eq!(
            switch_locale_path("/ua/projects", Locale::De),
            "/de/projects"
        );
    }

    #[test]
    fn switch_on_root_path_yields_locale_root() {
        assert_eq!(switch_locale_path("/ua", Locale::En), "/en");
        assert_eq!(switch_locale_path("/", Locale::De), "/de");
    }

    #[test]
    fn fill_expands_placeholders() {
        let t = Locale::En.translations();
        let line = fill(
            t.news.showing_results,
            &[("count", "8"), ("total", "42")],
        );
        assert_eq!(line, "Showing 8 of 42 results");
    }

    #[test]
    fn fill_ignores_unknown_placeholders() {
        assert_eq!(fill("page {current}", &[("total", "9")]), "page {current}");
    }

    #[test]
    fn long_date_localizes_month_names() {
        // 2025-08-15 12:00:00 UTC
        let ts = 1755259200;
        assert_eq!(long_date(Locale::En, ts), "August 15, 2025");
        assert_eq!(long_date(Locale::Ua, ts), "15 серпня 2025");
        assert_eq!(long_date(Locale::De, ts), "15. August 2025");
    }

    #[test]
    fn hreflang_maps_ua_to_uk() {
        assert_eq!(Locale::Ua.hreflang(), "uk");
        assert_eq!(Locale::Ua.og_locale(), "uk_UA");
    }
}
