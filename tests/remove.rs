//! End-to-end behavior of remove mode: slash-ending requests are redirected
//! to registered slash-less routes.

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use slashward::{Config, Mode, Request, Response, Router, TrailingSlash};

async fn root(_req: Request) -> Response {
    Response::text("root")
}

async fn no_slash(_req: Request) -> Response {
    Response::text("no slash")
}

async fn band_page(req: Request) -> Response {
    Response::text(format!("band: {}", req.param("band").unwrap_or("?")))
}

fn app() -> Router {
    let app = Router::new()
        .on(Method::GET, "/", root)
        .on(Method::GET, "/no/slash", no_slash)
        .on(Method::GET, "/no/slash/{band}", band_page);
    let slashes = TrailingSlash::new(Config::new(Mode::Remove), app.patterns().to_vec());
    app.layer(slashes)
}

async fn inject(app: &Router, method: Method, target: &str) -> Response {
    app.dispatch(method, target, HeaderMap::new(), Bytes::new()).await
}

#[tokio::test]
async fn slashless_path_works_normally() {
    let app = app();
    let resp = inject(&app, Method::GET, "/no/slash").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.body(), b"no slash");
}

#[tokio::test]
async fn get_with_slash_redirects() {
    let app = app();
    let resp = inject(&app, Method::GET, "/no/slash/").await;
    assert_eq!(resp.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(resp.header("location"), Some("/no/slash"));
}

#[tokio::test]
async fn head_with_slash_redirects() {
    let app = app();
    let resp = inject(&app, Method::HEAD, "/no/slash/").await;
    assert_eq!(resp.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(resp.header("location"), Some("/no/slash"));
}

#[tokio::test]
async fn parameterized_route_resolves_without_slash() {
    let app = app();
    let resp = inject(&app, Method::GET, "/no/slash/velvet_revolver").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.body(), b"band: velvet_revolver");
}

#[tokio::test]
async fn parameterized_redirect_preserves_query() {
    let app = app();
    let resp = inject(&app, Method::GET, "/no/slash/velvet_revolver/?p1=hi").await;
    assert_eq!(resp.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(resp.header("location"), Some("/no/slash/velvet_revolver?p1=hi"));
}

#[tokio::test]
async fn post_is_never_redirected() {
    let app = app();
    let resp = inject(&app, Method::POST, "/no/slash/velvet_revolver/?p1=hi").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.header("location"), None);
}

#[tokio::test]
async fn root_is_never_stripped() {
    let app = app();
    let resp = inject(&app, Method::GET, "/").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.body(), b"root");
}

#[tokio::test]
async fn routes_added_after_snapshot_still_resolve_exactly() {
    // The middleware sees an immutable snapshot; a route registered after
    // layering resolves normally but never triggers a redirect.
    let app = Router::new().on(Method::GET, "/no/slash", no_slash);
    let slashes = TrailingSlash::new(Config::new(Mode::Remove), app.patterns().to_vec());
    let app = app
        .layer(slashes)
        .on(Method::POST, "/late/", |_req: Request| async {
            Response::text("late")
        });

    let hit = inject(&app, Method::POST, "/late/").await;
    assert_eq!(hit.status_code(), StatusCode::OK);
    assert_eq!(hit.body(), b"late");

    let miss = inject(&app, Method::POST, "/late").await;
    assert_eq!(miss.status_code(), StatusCode::NOT_FOUND);

    // Not in the snapshot, so no redirect either: plain 404.
    let get = inject(&app, Method::GET, "/other/").await;
    assert_eq!(get.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn slashless_miss_is_not_toggled() {
    let app = app();
    // Remove mode only ever strips; /absent stays a 404 even if /absent/
    // could never exist. Nothing to strip, nothing to do.
    let resp = inject(&app, Method::GET, "/absent").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}
