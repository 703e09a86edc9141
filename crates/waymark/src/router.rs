//! Route registration with names
//!
//! `NamedRouter` wraps an `axum::Router`: every route added through it is
//! registered with axum for dispatch and recorded in a [`RouteTable`] for
//! URL generation. `.name()` tags the route added last.
//!
//! ```ignore
//! let app = NamedRouter::new()
//!     .get("/users/:id/edit", edit_user).name("users.edit")
//!     .get("/files/{path...}", show_file).name("files.show")
//!     .into_router();
//! ```

use axum::{extract::Extension, handler::Handler, http::Method, routing::MethodFilter, Router};
use waymark_router::{to_axum_path, HttpMethod, RegisteredRoute, RouteError, RouteTable};

use crate::{Config, Waymark};

fn method_filter(method: HttpMethod) -> Option<MethodFilter> {
    match method {
        HttpMethod::Get => Some(MethodFilter::GET),
        HttpMethod::Head => Some(MethodFilter::HEAD),
        HttpMethod::Post => Some(MethodFilter::POST),
        HttpMethod::Put => Some(MethodFilter::PUT),
        HttpMethod::Patch => Some(MethodFilter::PATCH),
        HttpMethod::Delete => Some(MethodFilter::DELETE),
        HttpMethod::Options => Some(MethodFilter::OPTIONS),
        HttpMethod::Trace => Some(MethodFilter::TRACE),
        HttpMethod::Connect => None,
    }
}

/// Converts an axum request method; extension methods are rejected
pub fn http_method(method: &Method) -> Result<HttpMethod, RouteError> {
    method.as_str().parse()
}

/// An axum router that remembers its routes' names
pub struct NamedRouter<S = ()> {
    router: Router<S>,
    table: RouteTable,
}

impl<S> Default for NamedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NamedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            table: RouteTable::new(),
        }
    }

    /// Registers `handler` for `method` on `path`
    ///
    /// `path` may use axum syntax (`:id`, `*rest`) or brace syntax (`{id}`,
    /// `{*rest}`, `{rest...}`); a lone `*` is an anonymous wildcard.
    ///
    /// # Panics
    ///
    /// Panics for `CONNECT`, which axum's method router cannot dispatch, and
    /// wherever `axum::Router::route` itself panics (conflicting routes,
    /// the same method registered twice on a path).
    pub fn on<H, T>(mut self, method: HttpMethod, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let Some(filter) = method_filter(method) else {
            panic!("cannot register `{} {}`: method not supported by the router", method, path);
        };

        let axum_path = to_axum_path(path);
        tracing::debug!(%method, path, %axum_path, "registering route");

        self.router = self
            .router
            .route(&axum_path, axum::routing::on(filter, handler));
        self.table.add_route(RegisteredRoute::new(method, path));
        self
    }

    pub fn get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.on(HttpMethod::Get, path, handler)
    }

    pub fn post<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.on(HttpMethod::Post, path, handler)
    }

    pub fn put<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.on(HttpMethod::Put, path, handler)
    }

    pub fn patch<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.on(HttpMethod::Patch, path, handler)
    }

    pub fn delete<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.on(HttpMethod::Delete, path, handler)
    }

    /// Names the most recently registered route
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match self.table.last_mut() {
            Some(route) => route.name = Some(name),
            None => tracing::warn!(%name, "`name` called before any route was registered"),
        }
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Splits into the plain axum router and the recorded table
    pub fn into_parts(self) -> (Router<S>, RouteTable) {
        (self.router, self.table)
    }

    /// Finishes with defaults; handlers can extract [`Routes`](crate::Routes)
    pub fn into_router(self) -> Router<S> {
        let (router, table) = self.into_parts();
        Self::install(router, Waymark::new(table))
    }

    /// Finishes using the TLS flag and script global from `config`
    pub fn into_router_with_config(self, config: &Config) -> Router<S> {
        let (router, table) = self.into_parts();
        Self::install(router, Waymark::from_config(table, config))
    }

    fn install(router: Router<S>, waymark: Waymark) -> Router<S> {
        tracing::info!(
            routes = waymark.table().len(),
            named = waymark.table().named_routes().count(),
            "route registry installed"
        );
        router.layer(Extension(waymark))
    }
}
