/// Path pattern parsing
///
/// Accepts both axum syntax (`/users/:id`, `/files/*path`) and brace syntax
/// (`/users/{id}`, `/files/{*path}`, `/files/{path...}`). A lone `*` is an
/// anonymous wildcard and `**` is an unnamed catch-all.
///
/// All functions are pure: same input, same output.
use super::segment::{PathSegment, CATCH_ALL_NAME, WILDCARD_NAME};

/// Capture kind of a raw segment, keeping borrowed names
#[derive(Debug, PartialEq)]
enum Capture<'a> {
    Constant(&'a str),
    Parameter(&'a str),
    Wildcard,
    CatchAll(Option<&'a str>),
}

fn capture(segment: &str) -> Capture<'_> {
    match segment {
        "**" => return Capture::CatchAll(None),
        "*" => return Capture::Wildcard,
        _ => {}
    }

    if let Some(inner) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        if let Some(name) = inner.strip_prefix('*') {
            return Capture::CatchAll(Some(name).filter(|n| !n.is_empty()));
        }
        if let Some(name) = inner.strip_suffix("...") {
            return Capture::CatchAll(Some(name).filter(|n| !n.is_empty()));
        }
        if inner.is_empty() {
            return Capture::Wildcard;
        }
        return Capture::Parameter(inner);
    }

    if let Some(name) = segment.strip_prefix('*') {
        return Capture::CatchAll(Some(name));
    }

    match segment.strip_prefix(':') {
        Some("") => Capture::Wildcard,
        Some(name) => Capture::Parameter(name),
        None => Capture::Constant(segment),
    }
}

/// Classifies a single raw segment
///
/// # Examples
///
/// ```
/// use waymark_router::{classify_segment, PathSegment};
///
/// assert_eq!(classify_segment("users"), PathSegment::constant("users"));
/// assert_eq!(classify_segment(":id"), PathSegment::parameter("id"));
/// assert_eq!(classify_segment("{id}"), PathSegment::parameter("id"));
/// assert_eq!(classify_segment("*"), PathSegment::Wildcard);
/// assert_eq!(classify_segment("{path...}"), PathSegment::CatchAll);
/// ```
pub fn classify_segment(segment: &str) -> PathSegment {
    match capture(segment) {
        Capture::Constant(text) => PathSegment::constant(text),
        Capture::Parameter(name) => PathSegment::parameter(name),
        Capture::Wildcard => PathSegment::Wildcard,
        Capture::CatchAll(_) => PathSegment::CatchAll,
    }
}

/// Splits a path into typed segments, skipping empty components
///
/// # Examples
///
/// ```
/// use waymark_router::{parse_path, PathSegment};
///
/// let segments = parse_path("/users/{id}/edit");
/// assert_eq!(segments, vec![
///     PathSegment::constant("users"),
///     PathSegment::parameter("id"),
///     PathSegment::constant("edit"),
/// ]);
/// ```
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}

/// Rewrites a path into the syntax axum's router accepts
///
/// Named captures keep their names. Anonymous wildcards become `:wildcard`,
/// `:wildcard2`, ... so that every capture in the path is unique, and an
/// unnamed catch-all becomes `*fallbackPlaceholder`.
///
/// # Examples
///
/// ```
/// use waymark_router::to_axum_path;
///
/// assert_eq!(to_axum_path("/users/{id}/edit"), "/users/:id/edit");
/// assert_eq!(to_axum_path("/files/{path...}"), "/files/*path");
/// assert_eq!(to_axum_path("/a/*/b/*"), "/a/:wildcard/b/:wildcard2");
/// assert_eq!(to_axum_path("/"), "/");
/// ```
pub fn to_axum_path(path: &str) -> String {
    let mut wildcards = 0usize;

    let rendered: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match capture(segment) {
            Capture::Constant(text) => text.to_string(),
            Capture::Parameter(name) => format!(":{}", name),
            Capture::Wildcard => {
                wildcards += 1;
                if wildcards == 1 {
                    format!(":{}", WILDCARD_NAME)
                } else {
                    format!(":{}{}", WILDCARD_NAME, wildcards)
                }
            }
            Capture::CatchAll(name) => format!("*{}", name.unwrap_or(CATCH_ALL_NAME)),
        })
        .collect();

    format!("/{}", rendered.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("about", PathSegment::constant("about"))]
    #[case(":id", PathSegment::parameter("id"))]
    #[case("{id}", PathSegment::parameter("id"))]
    #[case("*", PathSegment::Wildcard)]
    #[case("{}", PathSegment::Wildcard)]
    #[case("**", PathSegment::CatchAll)]
    #[case("*rest", PathSegment::CatchAll)]
    #[case("{*rest}", PathSegment::CatchAll)]
    #[case("{rest...}", PathSegment::CatchAll)]
    fn test_classify(#[case] raw: &str, #[case] expected: PathSegment) {
        assert_eq!(classify_segment(raw), expected);
    }

    #[test]
    fn test_parse_path_skips_empty_components() {
        assert_eq!(
            parse_path("//users///:id/"),
            vec![PathSegment::constant("users"), PathSegment::parameter("id")]
        );
        assert!(parse_path("/").is_empty());
    }

    #[test]
    fn test_to_axum_path_keeps_catch_all_name() {
        assert_eq!(to_axum_path("/docs/*slug"), "/docs/*slug");
        assert_eq!(to_axum_path("/docs/{*slug}"), "/docs/*slug");
        assert_eq!(to_axum_path("/docs/**"), "/docs/*fallbackPlaceholder");
    }

    #[test]
    fn test_to_axum_path_mixed() {
        assert_eq!(
            to_axum_path("teams/{team}/*/files/{path...}"),
            "/teams/:team/:wildcard/files/*path"
        );
    }
}
