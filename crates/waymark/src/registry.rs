use maud::Markup;
use std::sync::Arc;
use waymark_router::{RouteError, RouteTable};

use crate::{script, Config, RedirectResponse, RequestOrigin, WaymarkError};

/// Application-wide access to the named routes
///
/// Cheap to clone; the route table is shared and never mutated after the
/// router is built.
#[derive(Debug, Clone)]
pub struct Waymark {
    table: Arc<RouteTable>,
    tls: bool,
    global: Arc<str>,
}

impl Waymark {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(table),
            tls: false,
            global: Arc::from(script::DEFAULT_GLOBAL),
        }
    }

    pub fn from_config(table: RouteTable, config: &Config) -> Self {
        Self::new(table)
            .with_tls(config.server.tls)
            .with_global(config.script.global.as_str())
    }

    /// Whether this server terminates TLS itself
    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    /// JavaScript identifier the manifest script assigns to
    pub fn with_global(mut self, global: impl Into<Arc<str>>) -> Self {
        self.global = global.into();
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn tls(&self) -> bool {
        self.tls
    }

    pub fn global(&self) -> &str {
        &self.global
    }

    /// Build a URL for the given route and parameters.
    ///
    /// ```ignore
    /// waymark.route("users.edit", &[user.id]) // Some("/users/1/edit")
    /// ```
    pub fn route<S: AsRef<str>>(&self, name: &str, params: &[S]) -> Option<String> {
        self.table.url_for(name, params)
    }

    pub fn resolve<S: AsRef<str>>(&self, name: &str, params: &[S]) -> Result<String, RouteError> {
        self.table.resolve(name, params)
    }

    pub fn redirect<S: AsRef<str>>(&self, name: &str, params: &[S]) -> RedirectResponse {
        RedirectResponse::route(&self.table, name, params)
    }

    /// Manifest script tag for a request; `None` means no request is in scope
    pub fn script(&self, origin: Option<&RequestOrigin>) -> Result<Markup, WaymarkError> {
        script::routes_script(&self.table, origin, &self.global)
    }
}
