//! Minimal slashward example — slash-ending routes with append-mode redirects.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example redirects
//!
//! Try:
//!   curl -i http://localhost:3000/bands/            # 200
//!   curl -i http://localhost:3000/bands             # 301 → /bands/
//!   curl -i http://localhost:3000/bands/slint?tab=1 # 301 → /bands/slint/?tab=1
//!   curl -i -X POST http://localhost:3000/bands     # 404, POST is never redirected

use http::Method;
use slashward::{Config, Mode, Request, Response, Router, Server, TrailingSlash};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .on(Method::GET, "/bands/", list_bands)
        .on(Method::GET, "/bands/{id}/", get_band);

    // Register every route first, then snapshot and layer. verbose(true)
    // logs each redirect at info level.
    let slashes = TrailingSlash::new(
        Config::new(Mode::Append).verbose(true),
        app.patterns().to_vec(),
    );
    let app = app.layer(slashes);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

async fn list_bands(_req: Request) -> Response {
    Response::json(br#"["slint","low"]"#.to_vec())
}

async fn get_band(req: Request) -> Response {
    let id = req.param("id").unwrap_or("unknown");
    Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes())
}
