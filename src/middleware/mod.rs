//! Middleware layer.
//!
//! Middleware runs once per inbound request, before the router resolves a
//! handler. A hook either returns `None` (continue normal processing) or
//! `Some(response)` (short-circuit the pipeline; the handler never runs).
//!
//! The built-in [`TrailingSlash`] middleware is the reason this crate
//! exists: it redirects requests whose path differs from a registered route
//! only by a trailing slash.

use http::Method;
use tracing::{debug, info};

use crate::config::Config;
use crate::index::RouteIndex;
use crate::normalize::{Normalizer, Verdict};
use crate::pattern::RoutePattern;
use crate::response::Response;

/// A pre-routing request hook.
///
/// Receives the request line only; bodies have not been read at this point.
/// Implementations must be pure with respect to the request: the same input
/// always yields the same answer, so hooks need no locking under the
/// server's connection concurrency.
pub trait Middleware: Send + Sync + 'static {
    /// `Some` short-circuits routing with the returned response.
    fn before_route(&self, method: &Method, path: &str, query: Option<&str>) -> Option<Response>;
}

/// Trailing-slash normalization middleware.
///
/// Built from a [`Config`] and a snapshot of the router's registered
/// patterns, taken after all routes are registered:
///
/// ```rust
/// use http::Method;
/// use slashward::{Config, Mode, Response, Router, TrailingSlash};
///
/// # async fn bands(_req: slashward::Request) -> Response { Response::text("") }
/// let app = Router::new().on(Method::GET, "/bands/{id}/", bands);
/// let slashes = TrailingSlash::new(Config::new(Mode::Append), app.patterns().to_vec());
/// let app = app.layer(slashes);
/// ```
///
/// Routes registered after the snapshot is taken are invisible to the
/// normalizer; they still resolve normally, they just never trigger a
/// redirect.
pub struct TrailingSlash {
    normalizer: Normalizer,
    verbose: bool,
}

impl TrailingSlash {
    pub fn new(config: Config, patterns: Vec<RoutePattern>) -> Self {
        Self {
            normalizer: Normalizer::new(config.method, RouteIndex::new(patterns)),
            verbose: config.verbose,
        }
    }
}

impl Middleware for TrailingSlash {
    fn before_route(&self, method: &Method, path: &str, query: Option<&str>) -> Option<Response> {
        match self.normalizer.evaluate(method, path, query) {
            Verdict::Pass => None,
            Verdict::UnsafeMethod => {
                // An alternate-slash route exists, but redirecting a
                // state-changing method invites double submission. Let the
                // router 404 it.
                debug!(%method, path, "trailing-slash candidate not redirected: unsafe method");
                None
            }
            Verdict::Redirect { path: target, query } => {
                let location = match query {
                    Some(q) if !q.is_empty() => format!("{target}?{q}"),
                    _ => target,
                };
                let mode = self.normalizer.mode();
                if self.verbose {
                    info!(%mode, %method, from = path, to = %location, "trailing-slash redirect");
                } else {
                    debug!(%mode, %method, from = path, to = %location, "trailing-slash redirect");
                }
                Some(Response::moved_permanently(&location))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Mode;

    fn middleware(mode: Mode, routes: &[(Method, &str)]) -> TrailingSlash {
        let patterns = routes
            .iter()
            .map(|(m, p)| RoutePattern::parse(m.clone(), p).unwrap())
            .collect();
        TrailingSlash::new(Config::new(mode), patterns)
    }

    #[test]
    fn redirect_verdict_becomes_301_with_location() {
        let mw = middleware(Mode::Append, &[(Method::GET, "/has/slash/")]);
        let resp = mw
            .before_route(&Method::GET, "/has/slash", Some("temp=hi"))
            .expect("should short-circuit");
        assert_eq!(resp.status_code(), http::StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.header("location"), Some("/has/slash/?temp=hi"));
    }

    #[test]
    fn location_omits_question_mark_without_query() {
        let mw = middleware(Mode::Remove, &[(Method::GET, "/no/slash")]);
        let resp = mw.before_route(&Method::GET, "/no/slash/", None).unwrap();
        assert_eq!(resp.header("location"), Some("/no/slash"));
    }

    #[test]
    fn empty_query_is_treated_as_absent() {
        let mw = middleware(Mode::Remove, &[(Method::GET, "/no/slash")]);
        let resp = mw.before_route(&Method::GET, "/no/slash/", Some("")).unwrap();
        assert_eq!(resp.header("location"), Some("/no/slash"));
    }

    #[test]
    fn pass_and_unsafe_method_continue_processing() {
        let mw = middleware(
            Mode::Append,
            &[(Method::GET, "/has/slash/"), (Method::POST, "/has/slash/")],
        );
        assert!(mw.before_route(&Method::GET, "/has/slash/", None).is_none());
        assert!(mw.before_route(&Method::POST, "/has/slash", None).is_none());
        assert!(mw.before_route(&Method::GET, "/unknown", None).is_none());
    }

    #[test]
    fn verbose_changes_logging_only() {
        let patterns = vec![RoutePattern::parse(Method::GET, "/has/slash/").unwrap()];
        let mw = TrailingSlash::new(Config::new(Mode::Append).verbose(true), patterns);
        let resp = mw.before_route(&Method::GET, "/has/slash", None).unwrap();
        assert_eq!(resp.header("location"), Some("/has/slash/"));
    }
}
