//! Embedded static assets: the compiled stylesheet, the chat-widget script,
//! and fallback images. Everything ships inside the binary.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/"]
struct Assets;

pub async fn serve(Path(path): Path<String>) -> Response {
    let Some(file) = Assets::get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        file.data.to_vec(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_script_and_placeholder_image_are_embedded() {
        assert!(Assets::get("js/assistant.js").is_some());
        assert!(Assets::get("images/default-post.svg").is_some());
        assert!(Assets::get("../src/main.rs").is_none());
    }

    #[tokio::test]
    async fn unknown_asset_is_a_404() {
        let response = serve(Path("nope.css".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn svg_gets_the_right_content_type() {
        let response = serve(Path("images/default-post.svg".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("image/svg"));
    }
}
