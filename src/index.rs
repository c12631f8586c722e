//! Queryable snapshot of the registered route table.
//!
//! The normalizer never asks the live router anything. It takes a snapshot
//! of the route patterns at registration time and answers two questions per
//! request: does this exact path match a route, and does the path with its
//! trailing slash toggled match one. Routes added after the snapshot is
//! taken are invisible to it.

use http::Method;

use crate::pattern::RoutePattern;

/// Immutable view of the route table, indexed for slash-variant lookups.
pub struct RouteIndex {
    patterns: Vec<RoutePattern>,
}

impl RouteIndex {
    /// Builds the index from a route-pattern snapshot.
    pub fn new(patterns: Vec<RoutePattern>) -> Self {
        Self { patterns }
    }

    /// True iff some registered pattern matches `path` exactly
    /// (slash-sensitive) for `method`.
    pub fn has_exact_route(&self, method: &Method, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| method_matches(p.method(), method) && p.matches(path))
    }

    /// True iff some registered pattern matches `path` with its trailing
    /// slash toggled: appended if absent, stripped if present.
    ///
    /// The caller guards the root path; toggling `/` is never meaningful.
    pub fn has_alternate_slash_route(&self, method: &Method, path: &str) -> bool {
        self.has_exact_route(method, &toggle_slash(path))
    }
}

/// Appends a trailing slash if `path` lacks one, strips it otherwise.
pub(crate) fn toggle_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(stripped) => stripped.to_owned(),
        None => format!("{path}/"),
    }
}

/// HEAD requests are served by GET handlers when no HEAD route exists, so
/// the index must count GET routes as matches for HEAD. Anything else is an
/// exact comparison.
fn method_matches(registered: &Method, requested: &Method) -> bool {
    registered == requested || (*requested == Method::HEAD && *registered == Method::GET)
}
