//! Route patterns as structured data.
//!
//! The router keeps its radix trees for dispatch; the normalizer needs
//! something it can walk segment-by-segment. [`RoutePattern`] is that
//! representation: an ordered list of segments, each a literal or a `{name}`
//! placeholder, plus whether the registered path ends in a slash. The slash
//! is significant — `/has/slash` and `/has/slash/` are different routes.

use http::Method;

use crate::error::Error;

/// One path segment of a registered route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// A `{name}` placeholder. Matches any single non-empty segment.
    Param(String),
}

/// A registered route, parsed into matchable form.
///
/// Immutable once built. The root route `/` parses to zero segments with
/// `trailing_slash == false`.
#[derive(Clone, Debug)]
pub struct RoutePattern {
    method: Method,
    raw: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl RoutePattern {
    /// Parses a route path in the same `{name}` syntax the router accepts.
    pub fn parse(method: Method, path: &str) -> Result<Self, Error> {
        if !path.starts_with('/') {
            return Err(Error::InvalidPattern {
                pattern: path.to_owned(),
                reason: "must start with `/`".to_owned(),
            });
        }

        let trailing_slash = path.len() > 1 && path.ends_with('/');
        let core = path.trim_start_matches('/').trim_end_matches('/');

        let mut segments = Vec::new();
        if !core.is_empty() {
            for seg in core.split('/') {
                segments.push(parse_segment(path, seg)?);
            }
        }

        Ok(Self {
            method,
            raw: path.to_owned(),
            segments,
            trailing_slash,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path string the route was registered with.
    pub fn path(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Positional match of a concrete request path against this pattern.
    ///
    /// Slash-sensitive: the path's trailing slash must agree with the
    /// pattern's. Segment counts must agree, literals must compare equal,
    /// and each placeholder consumes exactly one non-empty segment.
    pub fn matches(&self, path: &str) -> bool {
        if !path.starts_with('/') {
            return false;
        }
        if path == "/" {
            return self.segments.is_empty() && !self.trailing_slash;
        }

        if path.ends_with('/') != self.trailing_slash {
            return false;
        }

        let core = path.trim_start_matches('/').trim_end_matches('/');
        let mut got = core.split('/');
        let mut want = self.segments.iter();

        loop {
            match (want.next(), got.next()) {
                (None, None) => return true,
                (Some(_), None) | (None, Some(_)) => return false,
                (Some(Segment::Literal(lit)), Some(seg)) => {
                    if lit != seg {
                        return false;
                    }
                }
                (Some(Segment::Param(_)), Some(seg)) => {
                    if seg.is_empty() {
                        return false;
                    }
                }
            }
        }
    }
}

fn parse_segment(path: &str, seg: &str) -> Result<Segment, Error> {
    if let Some(inner) = seg.strip_prefix('{') {
        let Some(name) = inner.strip_suffix('}') else {
            return Err(Error::InvalidPattern {
                pattern: path.to_owned(),
                reason: format!("unclosed placeholder `{seg}`"),
            });
        };
        if name.is_empty() || name.contains(['{', '}']) {
            return Err(Error::InvalidPattern {
                pattern: path.to_owned(),
                reason: format!("malformed placeholder `{seg}`"),
            });
        }
        Ok(Segment::Param(name.to_owned()))
    } else if seg.contains(['{', '}']) {
        Err(Error::InvalidPattern {
            pattern: path.to_owned(),
            reason: format!("stray brace in segment `{seg}`"),
        })
    } else {
        Ok(Segment::Literal(seg.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(path: &str) -> RoutePattern {
        RoutePattern::parse(Method::GET, path).unwrap()
    }

    #[test]
    fn parses_literals_and_params() {
        let p = pat("/has/slash/{band}/");
        assert_eq!(
            p.segments(),
            &[
                Segment::Literal("has".into()),
                Segment::Literal("slash".into()),
                Segment::Param("band".into()),
            ]
        );
        assert!(p.trailing_slash());
        assert_eq!(p.path(), "/has/slash/{band}/");
    }

    #[test]
    fn root_is_zero_segments_without_slash_flag() {
        let p = pat("/");
        assert!(p.segments().is_empty());
        assert!(!p.trailing_slash());
        assert!(p.matches("/"));
        assert!(!p.matches("/x"));
    }

    #[test]
    fn rejects_bad_patterns() {
        assert!(RoutePattern::parse(Method::GET, "no/leading/slash").is_err());
        assert!(RoutePattern::parse(Method::GET, "/x/{unclosed").is_err());
        assert!(RoutePattern::parse(Method::GET, "/x/{}").is_err());
        assert!(RoutePattern::parse(Method::GET, "/x/a{b}c").is_err());
    }

    #[test]
    fn matching_is_slash_sensitive() {
        let p = pat("/has/slash/");
        assert!(p.matches("/has/slash/"));
        assert!(!p.matches("/has/slash"));

        let p = pat("/no/slash");
        assert!(p.matches("/no/slash"));
        assert!(!p.matches("/no/slash/"));
    }

    #[test]
    fn params_match_any_nonempty_segment() {
        let p = pat("/has/slash/{band}/");
        assert!(p.matches("/has/slash/gnr/"));
        assert!(p.matches("/has/slash/velvet_revolver/"));
        assert!(!p.matches("/has/slash//"));
        assert!(!p.matches("/has/slash/gnr/extra/"));
        assert!(!p.matches("/has/slash/"));
    }

    #[test]
    fn segment_counts_must_agree() {
        let p = pat("/a/{x}/c");
        assert!(p.matches("/a/b/c"));
        assert!(!p.matches("/a/b"));
        assert!(!p.matches("/a/b/c/d"));
        assert!(!p.matches("/a/b/d"));
    }
}
