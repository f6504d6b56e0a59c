//! Landing page and its static assets, embedded at compile time from `static/`.

use axum::{
    extract::Path,
    http::{Uri, header},
    response::{Html, IntoResponse, Response},
};
use include_dir::{Dir, include_dir};

use super::error::ApiError;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX_FILE: &str = "index.html";

pub async fn index() -> Result<Html<&'static str>, ApiError> {
    STATIC_DIR
        .get_file(INDEX_FILE)
        .and_then(|file| file.contents_utf8())
        .map(Html)
        .ok_or_else(|| ApiError::NotFound(INDEX_FILE.to_string()))
}

pub async fn static_asset(Path(path): Path<String>) -> Result<Response, ApiError> {
    let file = STATIC_DIR.get_file(&path).ok_or_else(|| ApiError::NotFound(path.clone()))?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], file.contents()).into_response())
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
