use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the public asset directory at compile time
#[derive(RustEmbed)]
#[folder = "public"]
pub struct PublicAssets;

/// Serve the public directory from the server root.
///
/// `/` maps to index.html; anything else is file-or-404. No SPA fallback:
/// the pages here are plain static documents, not a client-side router.
pub async fn serve_public(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match PublicAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
