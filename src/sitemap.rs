//! Sitemap generation: one URL entry per (locale x static page) and per
//! (locale x post id). Served at /sitemap.xml and writable as a batch job
//! via the `sitemap` subcommand.

use chrono::NaiveDate;

use crate::feed::Post;
use crate::i18n::Locale;

pub const STATIC_PAGES: [&str; 6] = ["", "projects", "news", "about", "donate", "community"];

fn url_entry(loc: &str, lastmod: &str, changefreq: &str, priority: &str) -> String {
    format!(
        "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>"
    )
}

pub fn generate(base_url: &str, posts: &[Post], date: NaiveDate) -> String {
    let lastmod = date.format("%Y-%m-%d").to_string();
    let mut urls = Vec::new();

    for locale in Locale::ALL {
        for page in STATIC_PAGES {
            let path = if page.is_empty() {
                format!("/{}", locale.as_str())
            } else {
                format!("/{}/{}", locale.as_str(), page)
            };
            let priority = if page.is_empty() { "1.0" } else { "0.8" };
            urls.push(url_entry(
                &format!("{base_url}{path}"),
                &lastmod,
                "monthly",
                priority,
            ));
        }
    }

    for locale in Locale::ALL {
        for post in posts {
            urls.push(url_entry(
                &format!("{}/{}/news/{}", base_url, locale.as_str(), post.id),
                &lastmod,
                "weekly",
                "0.6",
            ));
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        urls.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            timestamp: 0,
            date: String::new(),
            text: String::new(),
            image_url: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 29).unwrap()
    }

    #[test]
    fn counts_static_pages_and_posts_per_locale() {
        let posts = vec![post("a"), post("b")];
        let xml = generate("https://neusatz.online", &posts, date());
        let url_count = xml.matches("<url>").count();
        assert_eq!(url_count, 3 * STATIC_PAGES.len() + 3 * posts.len());
    }

    #[test]
    fn home_pages_get_top_priority() {
        let xml = generate("https://neusatz.online", &[], date());
        assert!(xml.contains("<loc>https://neusatz.online/ua</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<loc>https://neusatz.online/de/projects</loc>"));
    }

    #[test]
    fn post_entries_use_stable_ids() {
        let xml = generate("https://neusatz.online", &[post("1234_5678")], date());
        assert!(xml.contains("<loc>https://neusatz.online/en/news/1234_5678</loc>"));
        assert!(xml.contains("<lastmod>2025-08-29</lastmod>"));
    }

    #[test]
    fn output_is_a_urlset_document() {
        let xml = generate("https://neusatz.online", &[], date());
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.ends_with("</urlset>"));
    }
}
