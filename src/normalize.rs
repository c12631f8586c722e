//! The normalization decision algorithm.
//!
//! Everything else in this crate is glue around [`Normalizer::evaluate`]:
//! a pure function of (mode, route index, request line) with three possible
//! outcomes. It holds no mutable state, performs no I/O, and can run on any
//! number of requests concurrently without coordination.

use std::fmt;
use std::str::FromStr;

use http::Method;
use serde::Deserialize;

use crate::error::Error;
use crate::index::{RouteIndex, toggle_slash};

/// Which slash form registered routes are expected to carry.
///
/// Fixed at registration time for the lifetime of the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Redirect slash-less paths to the slash-ending route, if one exists.
    Append,
    /// Redirect slash-ending paths to the slash-less route, if one exists.
    Remove,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Remove => "remove",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(Self::Append),
            "remove" => Ok(Self::Remove),
            other => Err(Error::InvalidMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one request against the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to do: the request resolves as-is, is already in the
    /// normalized form, or no alternate-slash route exists. Normal routing
    /// proceeds (and may 404).
    Pass,
    /// A safe-method request whose slash-toggled form is registered.
    /// `query` is carried through untouched.
    Redirect { path: String, query: Option<String> },
    /// An alternate-slash route exists, but the method is not GET or HEAD.
    /// Redirecting a state-changing request risks double submission, so it
    /// falls through to normal resolution and 404s.
    UnsafeMethod,
}

/// The decision engine: a mode plus an immutable route-table snapshot.
pub struct Normalizer {
    mode: Mode,
    index: RouteIndex,
}

impl Normalizer {
    pub fn new(mode: Mode, index: RouteIndex) -> Self {
        Self { mode, index }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Decides what to do with one request line.
    ///
    /// The root path is never rewritten, an exact route match always wins
    /// over normalization, and only GET/HEAD are eligible for redirects.
    pub fn evaluate(&self, method: &Method, path: &str, query: Option<&str>) -> Verdict {
        if path == "/" {
            return Verdict::Pass;
        }

        // A path already in the mode's preferred form has nothing to toggle.
        let candidate = match self.mode {
            Mode::Append => !path.ends_with('/'),
            Mode::Remove => path.ends_with('/'),
        };
        if !candidate {
            return Verdict::Pass;
        }

        // Both slash forms can be registered deliberately; the exact one wins.
        if self.index.has_exact_route(method, path) {
            return Verdict::Pass;
        }

        if !self.index.has_alternate_slash_route(method, path) {
            return Verdict::Pass;
        }

        if is_safe_method(method) {
            Verdict::Redirect {
                path: toggle_slash(path),
                query: query.map(str::to_owned),
            }
        } else {
            Verdict::UnsafeMethod
        }
    }
}

/// GET and HEAD are the only methods eligible for transparent redirects.
fn is_safe_method(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}
