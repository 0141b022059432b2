use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::content::{Project, PROJECTS};
use crate::error::AppResult;
use crate::extractors::ActiveLocale;
use crate::feed::text;
use crate::i18n;
use crate::routes::{Html, PageContext};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "pages/projects.html")]
pub struct ProjectsTemplate {
    pub ctx: PageContext,
    pub projects: Vec<ProjectCard>,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "pages/donate.html")]
pub struct DonateTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "pages/community.html")]
pub struct CommunityTemplate {
    pub ctx: PageContext,
    pub posts: Vec<CommunityPost>,
    pub retry_href: String,
}

pub struct ProjectCard {
    pub title: &'static str,
    pub category: &'static str,
    pub status_label: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub image: &'static str,
}

pub struct CommunityPost {
    pub date_line: String,
    pub excerpt: String,
}

pub async fn home(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
) -> AppResult<Response> {
    let t = locale.translations();
    let ctx = PageContext::new(&state, locale, "", t.seo.home.title, t.seo.home.description);
    Ok(Html(HomeTemplate { ctx }).into_response())
}

pub async fn projects(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
) -> AppResult<Response> {
    let t = locale.translations();
    let ctx = PageContext::new(
        &state,
        locale,
        "/projects",
        t.seo.projects.title,
        t.seo.projects.description,
    );

    let projects = PROJECTS
        .iter()
        .map(|p: &Project| ProjectCard {
            title: p.title.get(locale),
            category: p.category,
            status_label: p.status.label(t),
            description: p.description.get(locale),
            impact: p.impact.get(locale),
            image: p.image,
        })
        .collect();

    Ok(Html(ProjectsTemplate { ctx, projects }).into_response())
}

pub async fn about(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
) -> AppResult<Response> {
    let t = locale.translations();
    let ctx = PageContext::new(
        &state,
        locale,
        "/about",
        t.seo.about.title,
        t.seo.about.description,
    );
    Ok(Html(AboutTemplate { ctx }).into_response())
}

pub async fn donate(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
) -> AppResult<Response> {
    let t = locale.translations();
    let ctx = PageContext::new(
        &state,
        locale,
        "/donate",
        t.seo.donate.title,
        t.seo.donate.description,
    );
    Ok(Html(DonateTemplate { ctx }).into_response())
}

/// Latest snapshot posts. An empty store is ambiguous between "no posts"
/// and "snapshot failed to load", so the empty state shows the error text
/// with a retry link.
pub async fn community(
    State(state): State<AppState>,
    ActiveLocale(locale): ActiveLocale,
) -> AppResult<Response> {
    let t = locale.translations();
    let ctx = PageContext::new(
        &state,
        locale,
        "/community",
        t.seo.community.title,
        t.seo.community.description,
    );

    let posts = state
        .store
        .all()
        .iter()
        .take(state.config.content.community_posts)
        .map(|post| CommunityPost {
            date_line: i18n::long_date(locale, post.timestamp),
            excerpt: text::truncate(&post.text, 280),
        })
        .collect();

    let retry_href = format!("/{}/community", locale.as_str());
    Ok(Html(CommunityTemplate {
        ctx,
        posts,
        retry_href,
    })
    .into_response())
}
