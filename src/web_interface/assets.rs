//! Embedded web front-end.
//!
//! The files under `web/` are compiled into the binary and served on `/` and by path.

use log::debug;
use rust_embed::RustEmbed;
use warp::path::Tail;
use warp::reply::Response;
use warp::{reply, Filter, Rejection, Reply};

use super::routes::get_or_not_found;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/web/"]
struct WebAssets;

const INDEX: &str = "index.html";

/// GET / and GET /<asset>
pub fn web_ui_route() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(get_or_not_found())
        .and_then(|| serve_asset(INDEX.to_string()));
    let files = get_or_not_found()
        .and(warp::path::tail())
        .and_then(|tail: Tail| serve_asset(tail.as_str().to_string()));
    index.or(files)
}

async fn serve_asset(path: String) -> Result<Response, Rejection> {
    let file = WebAssets::get(&path).ok_or_else(warp::reject::not_found)?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    debug!("Serving asset {} as {}", path, mime);
    Ok(reply::with_header(file.data.into_owned(), "content-type", mime.to_string()).into_response())
}
