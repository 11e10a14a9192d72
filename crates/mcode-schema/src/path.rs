//! # Instance Paths
//!
//! Locations of validation violations inside a document, and the total
//! order over them that makes violation reports deterministic.
//!
//! The `jsonschema` engine reports locations as RFC 6901 JSON Pointers
//! (`/sections/0/title`). This module parses that form into typed
//! segments and renders the dotted form (`sections.0.title`) used in
//! human-facing reports.

use std::cmp::Ordering;
use std::fmt;

/// One step into a document: an object property name or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object property name.
    Key(String),
    /// Array index.
    Index(usize),
}

impl PathSegment {
    /// Parse a single JSON Pointer reference token.
    ///
    /// The token must already be split out of the pointer; `~1` and `~0`
    /// escapes are decoded here. All-digit tokens without a leading zero
    /// are array indices (RFC 6901 array indexing forbids leading
    /// zeros); everything else is a property name.
    fn from_pointer_token(token: &str) -> Self {
        let decoded = token.replace("~1", "/").replace("~0", "~");
        let is_index = !decoded.is_empty()
            && decoded.bytes().all(|b| b.is_ascii_digit())
            && (decoded == "0" || !decoded.starts_with('0'));
        if is_index {
            match decoded.parse::<usize>() {
                Ok(i) => PathSegment::Index(i),
                // Out of usize range: keep it as a key so nothing is lost.
                Err(_) => PathSegment::Key(decoded),
            }
        } else {
            PathSegment::Key(decoded)
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{k}"),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl Ord for PathSegment {
    /// Total order across mixed segment types.
    ///
    /// Same-type pairs compare naturally: indices numerically, keys as
    /// strings. Mixed pairs order by variant, every index before every
    /// key. Comparing by variant first keeps the order transitive
    /// (a rendered-string rule for mixed pairs would not be, since
    /// `Key("10")` would sort below `Index(2)` but above `Index(10)`)
    /// and defined for every pair of segments.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PathSegment::Index(a), PathSegment::Index(b)) => a.cmp(b),
            (PathSegment::Key(a), PathSegment::Key(b)) => a.cmp(b),
            (PathSegment::Index(_), PathSegment::Key(_)) => Ordering::Less,
            (PathSegment::Key(_), PathSegment::Index(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PathSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The location of a violation inside the validated document.
///
/// The derived `Ord` compares segment sequences pairwise in order, and a
/// shorter path that is a prefix of a longer one sorts first. This is
/// the ordering violation reports rely on for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    /// The root path (empty segment sequence).
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Parse an RFC 6901 JSON Pointer (`""`, `/a/b/0`, ...).
    ///
    /// The empty pointer is the root. A pointer not starting with `/` is
    /// treated as a single reference token; the engine never emits that
    /// form, but parsing stays total.
    pub fn from_json_pointer(pointer: &str) -> Self {
        if pointer.is_empty() {
            return Self::root();
        }
        let tokens = match pointer.strip_prefix('/') {
            Some(rest) => rest.split('/').collect::<Vec<_>>(),
            None => vec![pointer],
        };
        Self {
            segments: tokens
                .into_iter()
                .map(PathSegment::from_pointer_token)
                .collect(),
        }
    }

    /// Returns the segments in document order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for InstancePath {
    /// Dotted rendering: segments joined with `.`; root renders empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
