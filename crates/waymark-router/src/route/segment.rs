/// Typed path segments
///
/// A registered route's path is an ordered sequence of these. The same
/// sequence drives three views of a route: the placeholder URI shipped to
/// templates, the parameter list, and URL substitution.

/// Placeholder name used for an anonymous wildcard segment
pub const WILDCARD_NAME: &str = "wildcard";

/// Placeholder name used for a catch-all segment
pub const CATCH_ALL_NAME: &str = "fallbackPlaceholder";

/// Pattern a catch-all placeholder accepts on the client side
pub const CATCH_ALL_WHERE: &str = ".*";

/// One atomic piece of a route pattern
///
/// # Examples
///
/// ```
/// use waymark_router::PathSegment;
///
/// assert_eq!(PathSegment::constant("users").token(), "users");
/// assert_eq!(PathSegment::parameter("id").token(), "{id}");
/// assert_eq!(PathSegment::Wildcard.token(), "{wildcard}");
/// assert_eq!(PathSegment::CatchAll.token(), "{fallbackPlaceholder}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Fixed text
    Constant(String),
    /// Named capture of a single component
    Parameter(String),
    /// Unnamed capture of a single component
    Wildcard,
    /// Capture of every remaining component
    CatchAll,
}

impl PathSegment {
    pub fn constant(text: impl Into<String>) -> Self {
        PathSegment::Constant(text.into())
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        PathSegment::Parameter(name.into())
    }

    /// Renders the segment as it appears in a URI template
    pub fn token(&self) -> String {
        match self {
            PathSegment::Constant(text) => text.clone(),
            PathSegment::Parameter(name) => format!("{{{}}}", name),
            PathSegment::Wildcard => format!("{{{}}}", WILDCARD_NAME),
            PathSegment::CatchAll => format!("{{{}}}", CATCH_ALL_NAME),
        }
    }

    /// Placeholder name contributed to the parameter list, `None` for constants
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            PathSegment::Constant(_) => None,
            PathSegment::Parameter(name) => Some(name),
            PathSegment::Wildcard => Some(WILDCARD_NAME),
            PathSegment::CatchAll => Some(CATCH_ALL_NAME),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, PathSegment::CatchAll)
    }
}

/// Joins segment tokens into a URI template (no leading slash)
pub fn render_uri(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(PathSegment::token)
        .collect::<Vec<_>>()
        .join("/")
}
