/// Route module
///
/// Contains the registered route record plus the pure functions that parse
/// and render its path segments.
pub mod parser;
pub mod segment;

pub use parser::{classify_segment, parse_path, to_axum_path};
pub use segment::{render_uri, PathSegment};

use std::collections::VecDeque;

use crate::{HttpMethod, RouteError};

/// A route as the host router registered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredRoute {
    /// HTTP verb the route answers
    pub method: HttpMethod,
    /// Ordered path segments
    pub segments: Vec<PathSegment>,
    /// Optional name for URL generation
    pub name: Option<String>,
}

impl RegisteredRoute {
    /// Creates an unnamed route from a path pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{HttpMethod, RegisteredRoute};
    ///
    /// let route = RegisteredRoute::new(HttpMethod::Get, "/users/:id/edit");
    /// assert_eq!(route.uri(), "users/{id}/edit");
    /// assert_eq!(route.name, None);
    /// ```
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self::from_segments(method, parser::parse_path(path))
    }

    pub fn from_segments(method: HttpMethod, segments: Vec<PathSegment>) -> Self {
        Self {
            method,
            segments,
            name: None,
        }
    }

    /// Sets a name for this route
    ///
    /// ```
    /// use waymark_router::{HttpMethod, RegisteredRoute};
    ///
    /// let route = RegisteredRoute::new(HttpMethod::Get, "/users/:id").with_name("users.show");
    /// assert_eq!(route.name.as_deref(), Some("users.show"));
    /// ```
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The route's name, if it has a non-empty one
    pub fn route_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// URI template with placeholder tokens, without a leading slash
    pub fn uri(&self) -> String {
        render_uri(&self.segments)
    }

    /// Placeholder names in traversal order
    pub fn parameters(&self) -> Vec<String> {
        self.segments
            .iter()
            .filter_map(PathSegment::placeholder)
            .map(str::to_string)
            .collect()
    }

    pub fn has_catch_all(&self) -> bool {
        self.segments.iter().any(PathSegment::is_catch_all)
    }

    /// Number of single-component placeholders that must be supplied
    pub fn required_parameters(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::Parameter(_) | PathSegment::Wildcard))
            .count()
    }

    /// Substitutes positional parameters into the path
    ///
    /// Parameters are consumed left to right. A catch-all takes everything
    /// that remains, joined with `/`. Surplus parameters are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{HttpMethod, RegisteredRoute};
    ///
    /// let route = RegisteredRoute::new(HttpMethod::Get, "/files/{path...}");
    /// assert_eq!(route.generate_url(&["a", "b", "c"]).unwrap(), "/files/a/b/c");
    /// ```
    pub fn generate_url<S: AsRef<str>>(&self, params: &[S]) -> Result<String, RouteError> {
        let mut remaining: VecDeque<&str> = params.iter().map(AsRef::as_ref).collect();

        let tokens = self
            .segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Constant(text) => Ok(text.clone()),
                PathSegment::Parameter(_) | PathSegment::Wildcard => remaining
                    .pop_front()
                    .map(str::to_string)
                    .ok_or_else(|| self.missing(segment, params.len())),
                PathSegment::CatchAll => {
                    Ok(remaining.drain(..).collect::<Vec<_>>().join("/"))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("/{}", tokens.join("/")))
    }

    fn missing(&self, segment: &PathSegment, supplied: usize) -> RouteError {
        RouteError::MissingParameter {
            route: self.route_name().unwrap_or_default().to_string(),
            placeholder: segment.placeholder().unwrap_or_default().to_string(),
            supplied,
            required: self.required_parameters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_url_substitutes_in_order() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/teams/:team/users/:user");
        assert_eq!(route.generate_url(&["a", "b"]).unwrap(), "/teams/a/users/b");
    }

    #[test]
    fn test_generate_url_ignores_extra_params() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/users/:id/edit");
        assert_eq!(route.generate_url(&["1", "2", "3"]).unwrap(), "/users/1/edit");
    }

    #[test]
    fn test_generate_url_wildcard_consumes_one() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/a/*/b");
        assert_eq!(route.generate_url(&["x"]).unwrap(), "/a/x/b");
    }

    #[test]
    fn test_generate_url_missing_param() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/teams/:team/users/:user")
            .with_name("teams.users");
        let err = route.generate_url(&["a"]).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParameter {
                route: "teams.users".to_string(),
                placeholder: "user".to_string(),
                supplied: 1,
                required: 2,
            }
        );
    }

    #[test]
    fn test_generate_url_root() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/");
        assert_eq!(route.generate_url::<&str>(&[]).unwrap(), "/");
    }

    #[test]
    fn test_catch_all_after_params() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/repos/:repo/blob/*path");
        assert_eq!(
            route.generate_url(&["waymark", "src", "lib.rs"]).unwrap(),
            "/repos/waymark/blob/src/lib.rs"
        );
    }

    #[test]
    fn test_catch_all_with_nothing_left() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/files/**");
        assert_eq!(route.generate_url::<&str>(&[]).unwrap(), "/files/");
    }

    #[test]
    fn test_parameters_and_required() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/a/:id/*/rest/**");
        assert_eq!(
            route.parameters(),
            vec!["id", "wildcard", "fallbackPlaceholder"]
        );
        assert_eq!(route.required_parameters(), 2);
        assert!(route.has_catch_all());
    }

    #[test]
    fn test_empty_name_is_unnamed() {
        let route = RegisteredRoute::new(HttpMethod::Get, "/").with_name("");
        assert_eq!(route.route_name(), None);
    }
}
