use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use waymark_router::RouteTable;

use crate::WaymarkError;

/// How a redirect should be cached by clients
///
/// Defaults to `Normal` so browsers don't cache the redirect unexpectedly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedirectType {
    /// 301 Moved Permanently
    Permanent,
    /// 303 See Other
    #[default]
    Normal,
    /// 307 Temporary Redirect, preserves the method
    Temporary,
}

impl RedirectType {
    pub fn status(&self) -> StatusCode {
        match self {
            RedirectType::Permanent => StatusCode::MOVED_PERMANENTLY,
            RedirectType::Normal => StatusCode::SEE_OTHER,
            RedirectType::Temporary => StatusCode::TEMPORARY_REDIRECT,
        }
    }
}

/// Redirect to a path built from a named route.
///
/// ```ignore
/// routes.redirect("users.edit", &[user.id.to_string()]).permanent()
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResponse {
    location: String,
    kind: RedirectType,
}

impl RedirectResponse {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            kind: RedirectType::default(),
        }
    }

    /// Resolves `route` against the table; an unknown or unresolvable name is
    /// used as a literal path instead
    pub fn route<S: AsRef<str>>(table: &RouteTable, route: &str, params: &[S]) -> Self {
        let location = table.url_for(route, params).unwrap_or_else(|| {
            tracing::debug!(route, "redirecting to literal path");
            route.to_string()
        });

        Self::to(location)
    }

    pub fn kind(mut self, kind: RedirectType) -> Self {
        self.kind = kind;
        self
    }

    pub fn permanent(self) -> Self {
        self.kind(RedirectType::Permanent)
    }

    pub fn temporary(self) -> Self {
        self.kind(RedirectType::Temporary)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl IntoResponse for RedirectResponse {
    fn into_response(self) -> Response {
        match HeaderValue::from_str(&self.location) {
            Ok(value) => (self.kind.status(), [(header::LOCATION, value)]).into_response(),
            Err(_) => WaymarkError::InvalidLocation(self.location).into_response(),
        }
    }
}
