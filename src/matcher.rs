//! Segment patterns for the special-cased route shapes
//!
//! Breadcrumb rules only need a handful of shapes (`/programs/:degree/:slug`,
//! `/programs/*`, `/admin/view-student/:id`), so patterns are plain segment
//! lists matched left to right.

use crate::trace_log;
use std::collections::HashMap;

/// Name under which a wildcard stores the remainder it swallowed.
pub const REST: &str = "*";

/// A single segment in a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must match exactly
    Static(String),
    /// Captures one segment under `name`
    Param(String),
    /// Captures one or more trailing segments
    Wildcard,
}

impl Segment {
    /// Parse a segment:
    /// - `"programs"` -> `Static`
    /// - `":slug"` -> `Param`
    /// - `"*"` -> `Wildcard`
    pub fn parse(s: &str) -> Self {
        if s == REST {
            Segment::Wildcard
        } else if let Some(name) = s.strip_prefix(':') {
            Segment::Param(name.to_string())
        } else {
            Segment::Static(s.to_string())
        }
    }
}

/// Values captured by a successful match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    values: HashMap<String, String>,
}

impl Captures {
    /// Captured value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Remainder swallowed by a trailing wildcard
    pub fn rest(&self) -> Option<&str> {
        self.get(REST)
    }

    /// Number of captured values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `/programs/:degree/:slug`.
    pub fn from_path(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();
        Self { segments }
    }

    /// Parsed segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match the pattern against a location path.
    pub fn matches(&self, path: &str) -> Option<Captures> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut captures = Captures::default();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if parts.get(index) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(index)?;
                    captures.values.insert(name.clone(), (*value).to_string());
                }
                Segment::Wildcard => {
                    if index >= parts.len() {
                        return None;
                    }
                    captures
                        .values
                        .insert(REST.to_string(), parts[index..].join("/"));
                    trace_log!("pattern {:?} matched '{}' via wildcard", self.segments, path);
                    return Some(captures);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(captures)
    }
}
