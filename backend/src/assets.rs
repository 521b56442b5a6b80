//! Frontend bundle embedded into the server binary.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`; the files are baked
//! in at compile time and served from memory.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Maps a request path to a file path inside the bundle.
pub fn resolve_asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        INDEX
    } else {
        path
    }
}

pub fn has_index() -> bool {
    STATIC_DIR.get_file(INDEX).is_some()
}

/// Serves a bundled file, falling back to `index.html` for unknown paths.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = resolve_asset_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => {
                debug!("No asset at {}, serving {}", file_path, INDEX);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
