//! Radix-tree request router and the per-request dispatch pipeline.
//!
//! One tree per HTTP method, O(path-length) lookup via [`matchit`]. Beyond
//! the bare lookup, the router owns the request pipeline:
//! layered [`Middleware`] hooks run first and may short-circuit (that is
//! where trailing-slash redirects come from), then the matched handler runs,
//! then 404.
//!
//! [`Router::dispatch`] is public so tests can inject requests without a
//! socket; the live server funnels every connection through the same method.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::middleware::Middleware;
use crate::pattern::RoutePattern;
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup; register routes first, snapshot
/// [`patterns`](Router::patterns) for any middleware that wants the route
/// table, then [`layer`](Router::layer) the middleware on. Each call returns
/// `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    patterns: Vec<RoutePattern>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            patterns: Vec::new(),
            middleware: Vec::new(),
        }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves
    /// them. `/users/{id}` and `/users/{id}/` are distinct routes.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting path, at startup, before the
    /// server accepts anything.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let pattern = RoutePattern::parse(method.clone(), path)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self.patterns.push(pattern);
        self
    }

    /// Attach a pre-routing middleware hook. Hooks run in layering order.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// The registered route patterns, in registration order.
    ///
    /// Middleware that needs a route-table snapshot clones this; the router
    /// keeps no reference back, so later registrations do not leak into an
    /// already-taken snapshot.
    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    /// Runs one request through the full pipeline: middleware, then routing,
    /// then the handler (or 404).
    ///
    /// `target` is the request target as it appears on the wire: a path,
    /// optionally followed by `?` and a raw query string.
    pub async fn dispatch(
        &self,
        method: Method,
        target: &str,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        // A bare `?` with nothing after it is an empty query string; treat
        // it as absent so redirect Locations never end in a dangling `?`.
        let (path, query) = match target.split_once('?') {
            Some((path, query)) if !query.is_empty() => (path, Some(query)),
            Some((path, _)) => (path, None),
            None => (target, None),
        };

        for hook in &self.middleware {
            if let Some(response) = hook.before_route(&method, path, query) {
                return response;
            }
        }

        match self.lookup(&method, path) {
            Some((handler, params)) => {
                let request = Request::new(
                    method,
                    path.to_owned(),
                    query.map(str::to_owned),
                    headers,
                    body,
                    params,
                );
                handler.call(request).await
            }
            None => Response::status(StatusCode::NOT_FOUND),
        }
    }

    fn lookup(&self, method: &Method, path: &str) -> Option<(BoxedHandler, HashMap<String, String>)> {
        self.lookup_in(method, path).or_else(|| {
            // HEAD is served by GET handlers when no HEAD route exists.
            if *method == Method::HEAD {
                self.lookup_in(&Method::GET, path)
            } else {
                None
            }
        })
    }

    fn lookup_in(&self, method: &Method, path: &str) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn hello(_req: Request) -> Response {
        Response::text("hello")
    }

    async fn echo_param(req: Request) -> Response {
        Response::text(req.param("id").unwrap_or("none").to_owned())
    }

    async fn inject(router: &Router, method: Method, target: &str) -> Response {
        router.dispatch(method, target, HeaderMap::new(), Bytes::new()).await
    }

    #[tokio::test]
    async fn dispatch_routes_and_extracts_params() {
        let app = Router::new().on(Method::GET, "/users/{id}", echo_param);
        let resp = inject(&app, Method::GET, "/users/42").await;
        assert_eq!(resp.status_code(), StatusCode::OK);
        assert_eq!(resp.body(), b"42");
    }

    #[tokio::test]
    async fn dispatch_404s_unmatched_paths_and_methods() {
        let app = Router::new().on(Method::GET, "/x", hello);
        assert_eq!(inject(&app, Method::GET, "/y").await.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(inject(&app, Method::POST, "/x").await.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn head_falls_back_to_get_routes() {
        let app = Router::new().on(Method::GET, "/x", hello);
        assert_eq!(inject(&app, Method::HEAD, "/x").await.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn lookup_is_slash_sensitive() {
        let app = Router::new().on(Method::GET, "/x/", hello);
        assert_eq!(inject(&app, Method::GET, "/x/").await.status_code(), StatusCode::OK);
        assert_eq!(inject(&app, Method::GET, "/x").await.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bare_query_separator_yields_no_query() {
        let app = Router::new().on(Method::GET, "/q", |req: Request| async move {
            Response::text(req.query().unwrap_or("none").to_owned())
        });
        assert_eq!(inject(&app, Method::GET, "/q?").await.body(), b"none");
        assert_eq!(inject(&app, Method::GET, "/q?a=1").await.body(), b"a=1");
    }

    #[tokio::test]
    async fn middleware_short_circuits_before_routing() {
        struct Deny;
        impl Middleware for Deny {
            fn before_route(&self, _: &Method, _: &str, _: Option<&str>) -> Option<Response> {
                Some(Response::status(StatusCode::FORBIDDEN))
            }
        }
        let app = Router::new().on(Method::GET, "/x", hello).layer(Deny);
        assert_eq!(inject(&app, Method::GET, "/x").await.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn patterns_record_registration_order() {
        let app = Router::new()
            .on(Method::GET, "/a", hello)
            .on(Method::POST, "/b/{id}/", hello);
        let paths: Vec<_> = app.patterns().iter().map(|p| p.path()).collect();
        assert_eq!(paths, ["/a", "/b/{id}/"]);
    }
}
