use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::ActiveLocale;
use crate::feed::{page_markers, text, FeedController, PageMarker, Post};
use crate::i18n::{self, fill, Locale};
use crate::routes::{Html, PageContext};
use crate::state::AppState;

const DEFAULT_POST_IMAGE: &str = "/assets/images/default-post.svg";
const RELATED_POSTS: usize = 4;

#[derive(Deserialize)]
pub struct NewsQuery {
    pub page: Option<i64>,
    pub q: Option<String>,
}

#[derive(Template)]
#[template(path = "pages/news.html")]
pub struct NewsTemplate {
    pub ctx: PageContext,
    pub search_term: String,
    pub search_action: String,
    pub cards: Vec<PostCard>,
    pub results_line: String,
    pub page_line: String,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub page_links: Vec<PageLink>,
    pub total_pages: usize,
}

#[derive(Template)]
#[template(path = "pages/news_post.html")]
pub struct NewsPostTemplate {
    pub ctx: PageContext,
    pub date_line: String,
    pub image: String,
    pub body_html: String,
    pub back_href: String,
    pub share_href: String,
    pub newer: Option<NeighborLink>,
    pub older: Option<NeighborLink>,
    pub related: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
    pub back_href: String,
}

pub struct PostCard {
    pub href: String,
    pub image: String,
    pub date_line: String,
    pub excerpt: String,
}

pub struct NeighborLink {
    pub href: String,
    pub excerpt: String,
}

pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
    pub ellipsis: bool,
}

fn image_or_default(post: &Post) -> String {
    post.image_url
        .clone()
        .unwrap_or_else(|| DEFAULT_POST_IMAGE.to_string())
}

fn card(post: &Post, locale: Locale) -> PostCard {
    PostCard {
        href: format!("/{}/news/{}", locale.as_str(), post.id),
        image: image_or_default(post),
        date_line: i18n::long_date(locale, post.timestamp),
        excerpt: text::truncate(&post.text, 120),
    }
}

fn listing_href(locale: Locale, page: usize, term: &str) -> String {
    if term.is_empty() {
        format!("/{}/news?page={}", locale.as_str(), page)
    } else {
        format!(
            "/{}/news?page={}&q={}",
            locale.as_str(),
            page,
            urlencoding::encode(term)
        )
    }
}

pub async fn listing(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
    Query(query): Query<NewsQuery>,
) -> AppResult<Response> {
    let t = locale.translations();

    let mut feed = FeedController::new(state.config.content.page_size);
    feed.set_search_term(query.q.as_deref().unwrap_or(""));
    feed.set_page(query.page.unwrap_or(1));
    let page = feed.resolve(&state.store);

    let term = feed.search_term().trim().to_string();
    let cards: Vec<PostCard> = page.items.iter().map(|p| card(p, locale)).collect();

    let mut results_line = fill(
        t.news.showing_results,
        &[
            ("count", &cards.len().to_string()),
            ("total", &page.total_items.to_string()),
        ],
    );
    if !term.is_empty() {
        results_line.push(' ');
        results_line.push_str(&fill(t.news.for_query, &[("query", &term)]));
    }
    let page_line = fill(
        t.news.page_of,
        &[
            ("current", &page.current_page.to_string()),
            ("total", &page.total_pages.to_string()),
        ],
    );

    let prev_href = (page.current_page > 1)
        .then(|| listing_href(locale, page.current_page - 1, &term));
    let next_href = (page.current_page < page.total_pages)
        .then(|| listing_href(locale, page.current_page + 1, &term));

    let page_links = page_markers(page.current_page, page.total_pages)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(n) => PageLink {
                number: n,
                href: listing_href(locale, n, &term),
                current: n == page.current_page,
                ellipsis: false,
            },
            PageMarker::Ellipsis => PageLink {
                number: 0,
                href: String::new(),
                current: false,
                ellipsis: true,
            },
        })
        .collect();

    let ctx = PageContext::new(
        &state,
        locale,
        "/news",
        t.seo.news.title,
        t.seo.news.description,
    );

    Ok(Html(NewsTemplate {
        ctx,
        search_term: term,
        search_action: format!("/{}/news", locale.as_str()),
        cards,
        results_line,
        page_line,
        prev_href,
        next_href,
        page_links,
        total_pages: page.total_pages,
    })
    .into_response())
}

pub async fn detail(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
    Path((_, post_id)): Path<(String, String)>,
) -> AppResult<Response> {
    let t = locale.translations();
    let back_href = format!("/{}/news", locale.as_str());

    let Some(post) = state.store.get(&post_id) else {
        // Dedicated not-found view with a way back, not a generic error page.
        let ctx = PageContext::new(
            &state,
            locale,
            "/news",
            t.news.post_not_found,
            t.seo.news.description,
        );
        return Ok((
            StatusCode::NOT_FOUND,
            Html(NotFoundTemplate { ctx, back_href }),
        )
            .into_response());
    };

    let mut ctx = PageContext::new(
        &state,
        locale,
        &format!("/news/{}", post.id),
        &text::truncate(&post.text, 60),
        &text::truncate(&post.text, 160),
    );
    ctx.seo = ctx.seo.article();
    if let Some(image) = &post.image_url {
        ctx.seo = ctx.seo.with_image(image);
    }
    let share_href = format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        urlencoding::encode(&ctx.seo.canonical)
    );

    let neighbor = |p: &Post| NeighborLink {
        href: format!("/{}/news/{}", locale.as_str(), p.id),
        excerpt: text::truncate(&p.text, 60),
    };
    let (newer, older) = state.store.neighbors(&post.id);

    let related = state
        .store
        .related(&post.id, RELATED_POSTS)
        .into_iter()
        .map(|p| card(p, locale))
        .collect();

    Ok(Html(NewsPostTemplate {
        date_line: i18n::long_date(locale, post.timestamp),
        image: image_or_default(post),
        body_html: text::body_html(&post.text),
        back_href,
        share_href,
        newer: newer.map(neighbor),
        older: older.map(neighbor),
        related,
        ctx,
    })
    .into_response())
}
