//! Location descriptors and navigation requests
//!
//! A [`Location`] is what the host router reports on every navigation; a
//! [`NavigationRequest`] is what the controller hands back to the router when
//! it wants the URL to change.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Programme page a navigation started from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramOrigin {
    /// Path of the programme detail page, e.g. `/programs/master-degree/ai`
    pub path: String,
    /// Title the programme page displayed
    pub title: String,
}

impl ProgramOrigin {
    /// Create a programme origin
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// Metadata attached by the page that initiated a navigation.
///
/// Only meaningful for the single navigation it travels with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OriginContext {
    /// Set when the user followed a "related school" link on a programme page
    pub from_program: Option<ProgramOrigin>,
}

impl OriginContext {
    /// Origin pointing back at a programme page
    pub fn from_program(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            from_program: Some(ProgramOrigin::new(path, title)),
        }
    }

    /// Whether the context carries anything at all
    pub fn is_empty(&self) -> bool {
        self.from_program.is_none()
    }
}

/// Current logical location as reported by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Canonical path without query string or hash
    pub path: String,
    /// In-page anchor, stored without the leading `#`
    pub hash: Option<String>,
    /// Optional navigation-origin payload
    pub origin: Option<OriginContext>,
}

impl Location {
    /// Create a location for `path`, normalising trailing slashes.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            hash: None,
            origin: None,
        }
    }

    /// Parse a router href of the form `path?query#hash`.
    ///
    /// The query string is discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use portal_breadcrumbs::Location;
    ///
    /// let location = Location::parse("/admissions/?tab=1#fees-scholarships");
    /// assert_eq!(location.path, "/admissions");
    /// assert_eq!(location.hash.as_deref(), Some("fees-scholarships"));
    /// ```
    pub fn parse(href: &str) -> Self {
        let (before_hash, hash) = match href.split_once('#') {
            Some((before, hash)) => (before, Some(hash)),
            None => (href, None),
        };
        let path = before_hash
            .split_once('?')
            .map_or(before_hash, |(path, _query)| path);

        let mut location = Self::new(path);
        if let Some(hash) = hash {
            location = location.with_hash(hash);
        }
        location
    }

    /// Attach an anchor. A leading `#` is accepted; an empty anchor clears it.
    pub fn with_hash(mut self, hash: impl AsRef<str>) -> Self {
        let hash = hash.as_ref().trim_start_matches('#');
        self.hash = (!hash.is_empty()).then(|| hash.to_string());
        self
    }

    /// Attach an origin context. Empty contexts are dropped.
    pub fn with_origin(mut self, origin: OriginContext) -> Self {
        self.origin = (!origin.is_empty()).then_some(origin);
        self
    }

    /// Anchor without the `#`, or `""`.
    pub fn hash_str(&self) -> &str {
        self.hash.as_deref().unwrap_or("")
    }

    /// Path plus `#hash` when an anchor is present.
    pub fn href(&self) -> String {
        match &self.hash {
            Some(hash) => format!("{}#{}", self.path, hash),
            None => self.path.clone(),
        }
    }

    /// Whether two locations point at the same path and anchor.
    ///
    /// Origin context is ignored.
    pub fn same_place(&self, other: &Location) -> bool {
        self.path == other.path && self.hash == other.hash
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Request for the host router to change the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Target href; may carry a `#hash`
    pub to: String,
    /// Origin context to hand back with the resulting location
    pub state: Option<OriginContext>,
}

impl NavigationRequest {
    /// Create a request without state
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            state: None,
        }
    }

    /// Attach origin state
    pub fn with_state(mut self, state: Option<OriginContext>) -> Self {
        self.state = state;
        self
    }

    /// The location the router is expected to report once it has complied.
    pub fn to_location(&self) -> Location {
        let location = Location::parse(&self.to);
        match &self.state {
            Some(origin) => location.with_origin(origin.clone()),
            None => location,
        }
    }
}

/// Strip trailing slashes (keeping the root) and default empty paths to `/`.
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    let without_trailing = trimmed.trim_end_matches('/');
    if without_trailing.is_empty() {
        "/".to_string()
    } else if without_trailing.starts_with('/') {
        without_trailing.to_string()
    } else {
        format!("/{}", without_trailing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/schools/"), "/schools");
        assert_eq!(normalize_path("schools/cs"), "/schools/cs");
    }

    #[test]
    fn test_parse_plain_path() {
        let location = Location::parse("/programs");
        assert_eq!(location.path, "/programs");
        assert_eq!(location.hash, None);
        assert_eq!(location.origin, None);
    }

    #[test]
    fn test_parse_query_and_hash() {
        let location = Location::parse("/admissions?ref=home#fees-scholarships");
        assert_eq!(location.path, "/admissions");
        assert_eq!(location.hash_str(), "fees-scholarships");
        assert_eq!(location.href(), "/admissions#fees-scholarships");
    }

    #[test]
    fn test_empty_hash_is_dropped() {
        let location = Location::parse("/admissions#");
        assert_eq!(location.hash, None);

        let location = Location::new("/admissions").with_hash("#");
        assert_eq!(location.hash, None);
    }

    #[test]
    fn test_with_hash_accepts_leading_marker() {
        let a = Location::new("/admissions").with_hash("#requirements");
        let b = Location::new("/admissions").with_hash("requirements");
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_place_ignores_origin() {
        let plain = Location::new("/schools/cs");
        let referred = Location::new("/schools/cs")
            .with_origin(OriginContext::from_program("/programs/master-degree/ai", "AI"));
        assert!(plain.same_place(&referred));
        assert_ne!(plain, referred);
    }

    #[test]
    fn test_empty_origin_is_dropped() {
        let location = Location::new("/schools").with_origin(OriginContext::default());
        assert_eq!(location.origin, None);
    }

    #[test]
    fn test_request_to_location() {
        let request = NavigationRequest::new("/schools/cs").with_state(Some(
            OriginContext::from_program("/programs/master-degree/ai", "AI Masters"),
        ));
        let location = request.to_location();
        assert_eq!(location.path, "/schools/cs");
        assert_eq!(
            location
                .origin
                .and_then(|origin| origin.from_program)
                .map(|program| program.title),
            Some("AI Masters".to_string())
        );
    }
}
