pub mod assets;
pub mod assistant;
pub mod news;
pub mod pages;

use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::i18n::{self, Locale, Translations};
use crate::seo::SeoMeta;
use crate::sitemap;
use crate::state::AppState;

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// One entry in the language switcher; href preserves the rest of the path.
pub struct LangLink {
    pub code: &'static str,
    pub href: String,
    pub active: bool,
}

/// Everything the base layout needs: active translations, head metadata,
/// and the language switcher links for the current path.
pub struct PageContext {
    pub lang: &'static str,
    pub t: &'static Translations,
    pub seo: SeoMeta,
    pub lang_links: Vec<LangLink>,
}

impl PageContext {
    /// `path` is the locale-less page path ("" for home, "/news", ...).
    pub fn new(
        state: &AppState,
        locale: Locale,
        path: &str,
        title: &str,
        description: &str,
    ) -> Self {
        let seo = SeoMeta::new(&state.config.site.base_url, locale, path, title, description);
        let current = format!("/{}{}", locale.as_str(), path);
        let lang_links = Locale::ALL
            .iter()
            .map(|l| LangLink {
                code: l.as_str(),
                href: i18n::switch_locale_path(&current, *l),
                active: *l == locale,
            })
            .collect();

        Self {
            lang: locale.as_str(),
            t: locale.translations(),
            seo,
            lang_links,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_default))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/assets/{*path}", get(assets::serve))
        .route("/api/assistant", post(assistant::ask))
        .route("/{lang}", get(pages::home))
        .route("/{lang}/projects", get(pages::projects))
        .route("/{lang}/about", get(pages::about))
        .route("/{lang}/donate", get(pages::donate))
        .route("/{lang}/community", get(pages::community))
        .route("/{lang}/news", get(news::listing))
        .route("/{lang}/news/{post_id}", get(news::detail))
        .fallback(redirect_to_default)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any route outside the locale structure lands on the default locale root.
async fn redirect_to_default() -> Redirect {
    Redirect::temporary("/ua")
}

async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let xml = sitemap::generate(
        &state.config.site.base_url,
        state.store.all(),
        chrono::Utc::now().date_naive(),
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
}
