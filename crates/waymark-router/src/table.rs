use std::collections::BTreeMap;

use crate::{build_index, Manifest, NamedRouteEntry, RegisteredRoute, RouteError};

/// The registered routes of an application, in registration order
///
/// The table is the only state; the name index, resolution and the manifest
/// are all derived from it on each call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RegisteredRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route (immutable builder)
    ///
    /// ```
    /// use waymark_router::{HttpMethod, RegisteredRoute, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route(RegisteredRoute::new(HttpMethod::Get, "/about").with_name("about"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn with_route(mut self, route: RegisteredRoute) -> Self {
        self.add_route(route);
        self
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = RegisteredRoute>,
    {
        self.routes.extend(routes);
        self
    }

    pub fn add_route(&mut self, route: RegisteredRoute) {
        self.routes.push(route);
    }

    /// The most recently added route, for attaching a name after registration
    pub fn last_mut(&mut self) -> Option<&mut RegisteredRoute> {
        self.routes.last_mut()
    }

    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    /// Routes carrying a non-empty name, in registration order
    pub fn named_routes(&self) -> impl Iterator<Item = &RegisteredRoute> {
        self.routes.iter().filter(|r| r.route_name().is_some())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Name → entry index, merging methods for identical URIs
    pub fn index(&self) -> BTreeMap<String, NamedRouteEntry> {
        build_index(&self.routes)
    }

    /// The route a name resolves to: the last one registered under it
    pub fn find(&self, name: &str) -> Option<&RegisteredRoute> {
        self.routes
            .iter()
            .rev()
            .find(|r| r.route_name() == Some(name))
    }

    /// Builds a path from a route name and positional parameters
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{HttpMethod, RegisteredRoute, RouteError, RouteTable};
    ///
    /// let table = RouteTable::new().with_route(
    ///     RegisteredRoute::new(HttpMethod::Get, "/users/{id}/edit").with_name("users.edit"),
    /// );
    ///
    /// assert_eq!(table.resolve("users.edit", &["1"]).unwrap(), "/users/1/edit");
    /// assert_eq!(
    ///     table.resolve::<&str>("nonexistent", &[]),
    ///     Err(RouteError::NotFound("nonexistent".to_string()))
    /// );
    /// ```
    pub fn resolve<S: AsRef<str>>(&self, name: &str, params: &[S]) -> Result<String, RouteError> {
        let route = self
            .find(name)
            .ok_or_else(|| RouteError::NotFound(name.to_string()))?;

        let url = route.generate_url(params)?;
        tracing::debug!(route = name, %url, "resolved named route");
        Ok(url)
    }

    /// Like [`resolve`](Self::resolve), collapsing every failure into `None`
    pub fn url_for<S: AsRef<str>>(&self, name: &str, params: &[S]) -> Option<String> {
        self.resolve(name, params)
            .map_err(|e| tracing::debug!(error = %e, "named route did not resolve"))
            .ok()
    }

    /// Snapshot of the named routes for a request's base URL
    pub fn manifest(&self, url: Option<String>, port: Option<u16>) -> Manifest {
        Manifest::new(url, port, self.index())
    }
}

impl FromIterator<RegisteredRoute> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RegisteredRoute>>(iter: I) -> Self {
        Self::new().with_routes(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpMethod;

    #[test]
    fn test_find_returns_last_registration() {
        let table: RouteTable = vec![
            RegisteredRoute::new(HttpMethod::Get, "/old").with_name("home"),
            RegisteredRoute::new(HttpMethod::Get, "/new").with_name("home"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.resolve::<&str>("home", &[]).unwrap(), "/new");
    }

    #[test]
    fn test_url_for_collapses_errors() {
        let table = RouteTable::new()
            .with_route(RegisteredRoute::new(HttpMethod::Get, "/users/:id").with_name("users"));

        assert_eq!(table.url_for::<&str>("users", &[]), None);
        assert_eq!(table.url_for::<&str>("missing", &[]), None);
        assert_eq!(table.url_for("users", &["7"]), Some("/users/7".to_string()));
    }

    #[test]
    fn test_last_mut_names_latest_route() {
        let mut table = RouteTable::new();
        assert!(table.last_mut().is_none());

        table.add_route(RegisteredRoute::new(HttpMethod::Get, "/a"));
        table.add_route(RegisteredRoute::new(HttpMethod::Get, "/b"));
        if let Some(route) = table.last_mut() {
            route.name = Some("b".to_string());
        }

        let names: Vec<_> = table.named_routes().filter_map(|r| r.route_name()).collect();
        assert_eq!(names, vec!["b"]);
    }
}
