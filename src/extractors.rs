use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use crate::i18n::{self, Locale, LocaleResolution};

/// The locale resolved from the `{lang}` path segment.
///
/// Handlers never see an unresolved locale: an invalid or missing segment
/// rejects with a redirect to the default locale root, so content rendering
/// is gated behind one of the three active locales.
#[derive(Debug, Clone, Copy)]
pub struct ActiveLocale(pub Locale);

/// Rejection that sends the visitor to the default locale instead of an
/// error page.
pub struct LocaleRedirect(&'static str);

impl IntoResponse for LocaleRedirect {
    fn into_response(self) -> Response {
        Redirect::temporary(self.0).into_response()
    }
}

impl<S> FromRequestParts<S> for ActiveLocale
where
    S: Send + Sync,
{
    type Rejection = LocaleRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| LocaleRedirect("/ua"))?;

        match i18n::resolve_segment(params.get("lang").map(String::as_str)) {
            LocaleResolution::Active(locale) => Ok(ActiveLocale(locale)),
            LocaleResolution::Redirect(target) => Err(LocaleRedirect(target)),
        }
    }
}
