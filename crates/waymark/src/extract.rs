// ./crates/waymark/src/extract.rs

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use maud::Markup;
use waymark_router::RouteError;

use crate::{RedirectResponse, RequestOrigin, Waymark, WaymarkError};

/// Request-scoped access to named routes
///
/// ```ignore
/// async fn update(routes: Routes) -> RedirectResponse {
///     routes.redirect("users.edit", &["1"])
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Routes {
    waymark: Waymark,
    origin: RequestOrigin,
}

#[async_trait]
impl<S> FromRequestParts<S> for Routes
where
    S: Send + Sync,
{
    type Rejection = WaymarkError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let waymark = parts
            .extensions
            .get::<Waymark>()
            .cloned()
            .ok_or(WaymarkError::NotInstalled)?;

        let origin = RequestOrigin::from_headers(&parts.headers, waymark.tls());

        Ok(Routes { waymark, origin })
    }
}

impl Routes {
    pub fn new(waymark: Waymark, origin: RequestOrigin) -> Self {
        Self { waymark, origin }
    }

    pub fn waymark(&self) -> &Waymark {
        &self.waymark
    }

    pub fn origin(&self) -> &RequestOrigin {
        &self.origin
    }

    /// Build a URL for the given route and parameters.
    pub fn route<S: AsRef<str>>(&self, name: &str, params: &[S]) -> Option<String> {
        self.waymark.route(name, params)
    }

    pub fn resolve<S: AsRef<str>>(&self, name: &str, params: &[S]) -> Result<String, RouteError> {
        self.waymark.resolve(name, params)
    }

    /// Redirect to a named route, or to `name` as a literal path if it does
    /// not resolve. Non-permanent unless changed with `.permanent()`.
    pub fn redirect<S: AsRef<str>>(&self, name: &str, params: &[S]) -> RedirectResponse {
        self.waymark.redirect(name, params)
    }

    /// Manifest script tag for this request
    pub fn script(&self) -> Result<Markup, WaymarkError> {
        self.waymark.script(Some(&self.origin))
    }
}
