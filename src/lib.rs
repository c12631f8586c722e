//! # slashward
//!
//! Trailing-slash redirect middleware for HTTP services. Nothing more.
//! Nothing less.
//!
//! ## The contract
//!
//! A route table usually commits to one slash convention: either every path
//! ends in `/` or none does. Clients don't. slashward sits in front of
//! routing and, when a request's path differs from a registered route only
//! by its trailing slash, answers one question: redirect, or leave it alone.
//!
//! The rules, in order:
//!
//! - The root path `/` is never rewritten.
//! - An exact route match always wins. If `/has/slash` is registered, a
//!   request for it is never redirected to `/has/slash/`, even when both
//!   forms exist.
//! - Only GET and HEAD are redirected. A POST whose slash-toggled form is
//!   registered still 404s: transparently replaying a state-changing request
//!   against a different URL is how double submissions happen.
//! - Query strings ride along byte-for-byte. Only the trailing slash changes.
//!
//! Two mutually exclusive modes, fixed at startup: [`Mode::Append`] redirects
//! `/bands` to a registered `/bands/`, [`Mode::Remove`] redirects `/bands/`
//! to a registered `/bands`. An unrecognized mode string is a registration
//! error; the server does not start with one.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use http::Method;
//! use slashward::{Config, Mode, Request, Response, Router, Server, TrailingSlash};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .on(Method::GET, "/bands/", list_bands)
//!         .on(Method::GET, "/bands/{id}/", get_band);
//!
//!     // Snapshot the route table, then layer the middleware on.
//!     let slashes = TrailingSlash::new(Config::new(Mode::Append), app.patterns().to_vec());
//!     let app = app.layer(slashes);
//!
//!     // GET /bands → 301 Location: /bands/
//!     // GET /bands/slint?tab=discog → 301 Location: /bands/slint/?tab=discog
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//!
//! async fn list_bands(_req: Request) -> Response {
//!     Response::json(br#"["slint"]"#.to_vec())
//! }
//!
//! async fn get_band(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or("unknown");
//!     Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes())
//! }
//! ```
//!
//! The decision core ([`Normalizer`]) is a pure function of the mode, an
//! immutable route-table snapshot, and the request line. It does no I/O,
//! holds no mutable state, and needs no locking under any amount of request
//! concurrency.

mod config;
mod error;
mod handler;
mod index;
mod normalize;
mod pattern;
mod request;
mod response;
mod router;
mod server;

pub mod middleware;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use index::RouteIndex;
pub use middleware::{Middleware, TrailingSlash};
pub use normalize::{Mode, Normalizer, Verdict};
pub use pattern::{RoutePattern, Segment};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
