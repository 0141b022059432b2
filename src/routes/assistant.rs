use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Chat widget endpoint. Always returns 200 with an answer string; service
/// failures are already degraded to a localized apology by the client.
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let locale = request
        .lang
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or(Locale::DEFAULT);

    let question = request.question.trim();
    if question.is_empty() {
        return Json(AskResponse {
            answer: locale.translations().assistant.greeting.to_string(),
        });
    }

    let answer = state.assistant.ask(question, locale).await;
    Json(AskResponse { answer })
}
