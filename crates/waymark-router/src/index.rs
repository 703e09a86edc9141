//! Name-indexed view of the route table
//!
//! Rebuilt on every call from the live table. Routes sharing a name and an
//! identical URI collapse into one entry with merged methods; a name rebound
//! to a different URI keeps only the later route.

use std::collections::BTreeMap;

use crate::{HttpMethod, RegisteredRoute};

/// One named route as exposed to templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRouteEntry {
    /// URI template, placeholders rendered as `{name}`
    pub uri: String,
    /// Declared verbs, duplicate-free, first-seen order
    pub methods: Vec<HttpMethod>,
    /// Placeholder names in traversal order
    pub parameters: Vec<String>,
    pub has_catch_all: bool,
}

impl NamedRouteEntry {
    pub fn from_route(route: &RegisteredRoute) -> Self {
        Self {
            uri: route.uri(),
            methods: vec![route.method],
            parameters: route.parameters(),
            has_catch_all: route.has_catch_all(),
        }
    }
}

/// Builds the name → entry index from routes in registration order
///
/// # Examples
///
/// ```
/// use waymark_router::{build_index, HttpMethod, RegisteredRoute};
///
/// let routes = vec![
///     RegisteredRoute::new(HttpMethod::Get, "/users/:id").with_name("users.show"),
///     RegisteredRoute::new(HttpMethod::Put, "/users/:id").with_name("users.show"),
///     RegisteredRoute::new(HttpMethod::Get, "/health"),
/// ];
///
/// let index = build_index(&routes);
/// assert_eq!(index.len(), 1);
/// assert_eq!(index["users.show"].methods, vec![HttpMethod::Get, HttpMethod::Put]);
/// ```
pub fn build_index<'a, I>(routes: I) -> BTreeMap<String, NamedRouteEntry>
where
    I: IntoIterator<Item = &'a RegisteredRoute>,
{
    routes
        .into_iter()
        .filter_map(|route| route.route_name().map(|name| (name, route)))
        .fold(BTreeMap::new(), |mut index, (name, route)| {
            let candidate = NamedRouteEntry::from_route(route);

            match index.get_mut(name) {
                None => {
                    index.insert(name.to_string(), candidate);
                }
                Some(existing) if existing.uri == candidate.uri => {
                    if !existing.methods.contains(&route.method) {
                        existing.methods.push(route.method);
                    }
                }
                Some(existing) => {
                    tracing::warn!(
                        route = name,
                        previous = %existing.uri,
                        current = %candidate.uri,
                        "route name rebound to a different uri, keeping the later registration"
                    );
                    *existing = candidate;
                }
            }

            index
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(method: HttpMethod, path: &str, name: &str) -> RegisteredRoute {
        RegisteredRoute::new(method, path).with_name(name)
    }

    #[test]
    fn test_unnamed_routes_are_skipped() {
        let routes = vec![
            RegisteredRoute::new(HttpMethod::Get, "/"),
            RegisteredRoute::new(HttpMethod::Get, "/about").with_name(""),
        ];
        assert!(build_index(&routes).is_empty());
    }

    #[test]
    fn test_same_uri_merges_without_duplicates() {
        let routes = vec![
            named(HttpMethod::Get, "/posts/:id", "posts.show"),
            named(HttpMethod::Patch, "/posts/:id", "posts.show"),
            named(HttpMethod::Get, "/posts/:id", "posts.show"),
            named(HttpMethod::Delete, "/posts/:id", "posts.show"),
        ];
        let index = build_index(&routes);
        assert_eq!(
            index["posts.show"].methods,
            vec![HttpMethod::Get, HttpMethod::Patch, HttpMethod::Delete]
        );
    }

    #[test]
    fn test_different_uri_later_wins() {
        let routes = vec![
            named(HttpMethod::Get, "/old", "home"),
            named(HttpMethod::Post, "/old", "home"),
            named(HttpMethod::Put, "/new", "home"),
        ];
        let index = build_index(&routes);
        assert_eq!(
            index["home"],
            NamedRouteEntry {
                uri: "new".to_string(),
                methods: vec![HttpMethod::Put],
                parameters: vec![],
                has_catch_all: false,
            }
        );
    }

    #[test]
    fn test_same_uri_text_from_different_syntax_merges() {
        let routes = vec![
            named(HttpMethod::Get, "/users/:id", "users"),
            named(HttpMethod::Post, "/users/{id}", "users"),
        ];
        assert_eq!(
            build_index(&routes)["users"].methods,
            vec![HttpMethod::Get, HttpMethod::Post]
        );
    }
}
