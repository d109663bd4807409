use crate::errors::ApiError;
use axum::{
    http::{Method, Uri, header},
    response::{IntoResponse, Response},
};
use mime_guess::from_path;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static"]
struct Assets;

/// Fallback for every unmatched route.
///
/// GET requests receive the named page asset, or `index.html` when the path
/// names nothing embedded. Anything else is a 404.
pub async fn serve_page(method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return ApiError::NotFound.into_response();
    }

    let requested = uri.path().trim_start_matches('/');
    let (file_path, file) = match Assets::get(requested) {
        Some(file) if !requested.is_empty() => (requested, file),
        _ => match Assets::get("index.html") {
            Some(file) => ("index.html", file),
            None => return ApiError::NotFound.into_response(),
        },
    };

    let mime = from_path(file_path).first_or_octet_stream();

    (
        [(header::CONTENT_TYPE, mime.to_string())],
        file.data.into_owned(),
    )
        .into_response()
}
