// File: src/script.rs
// Purpose: Route manifest embedded as a <script> tag for client-side URL building

use maud::{html, Markup, PreEscaped};
use waymark_router::RouteTable;

use crate::{RequestOrigin, WaymarkError};

/// Default JavaScript identifier, the one client-side route helpers read
pub const DEFAULT_GLOBAL: &str = "Ziggy";

/// Serializes the named routes for the current request as JSON
///
/// Rendering outside a request is a usage error, not a missing route.
pub fn manifest_json(
    table: &RouteTable,
    origin: Option<&RequestOrigin>,
) -> Result<String, WaymarkError> {
    let origin = origin.ok_or(WaymarkError::MissingRequest)?;
    let (url, port) = origin.manifest_location();
    let manifest = table.manifest(url, port);

    tracing::debug!(routes = manifest.routes.len(), "serialized route manifest");
    Ok(manifest.to_json()?)
}

/// Renders `<script type="text/javascript">const {global}={manifest};</script>`
///
/// The table is passed in explicitly; nothing is registered globally.
pub fn routes_script(
    table: &RouteTable,
    origin: Option<&RequestOrigin>,
    global: &str,
) -> Result<Markup, WaymarkError> {
    let json = manifest_json(table, origin)?;
    // "</" inside a string would close the script element early
    let json = json.replace("</", "<\\/");

    Ok(html! {
        script type="text/javascript" {
            (PreEscaped(format!("const {}={};", global, json)))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;
    use pretty_assertions::assert_eq;
    use waymark_router::{HttpMethod, Manifest, RegisteredRoute};

    fn table() -> RouteTable {
        RouteTable::new()
            .with_route(RegisteredRoute::new(HttpMethod::Get, "/users/:id/edit").with_name("users.edit"))
    }

    fn origin() -> RequestOrigin {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        headers.insert("x-forwarded-host", "example.com".parse().unwrap());
        RequestOrigin::from_headers(&headers, false)
    }

    #[test]
    fn test_missing_request_is_fatal() {
        assert!(matches!(
            routes_script(&table(), None, DEFAULT_GLOBAL),
            Err(WaymarkError::MissingRequest)
        ));
    }

    #[test]
    fn test_script_markup() {
        let markup = routes_script(&table(), Some(&origin()), DEFAULT_GLOBAL)
            .unwrap()
            .into_string();

        let prefix = r#"<script type="text/javascript">const Ziggy="#;
        let suffix = ";</script>";
        assert!(markup.starts_with(prefix));
        assert!(markup.ends_with(suffix));

        let json = &markup[prefix.len()..markup.len() - suffix.len()];
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.url.as_deref(), Some("https://example.com"));
        assert_eq!(manifest.port, None);
        assert_eq!(manifest.routes["users.edit"].uri, "users/{id}/edit");
    }

    #[test]
    fn test_custom_global() {
        let markup = routes_script(&table(), Some(&origin()), "Routes")
            .unwrap()
            .into_string();
        assert!(markup.contains("const Routes={"));
    }

    #[test]
    fn test_closing_tag_is_escaped() {
        let table = RouteTable::new()
            .with_route(RegisteredRoute::new(HttpMethod::Get, "/x").with_name("</script>"));
        let markup = routes_script(&table, Some(&origin()), DEFAULT_GLOBAL)
            .unwrap()
            .into_string();
        assert_eq!(markup.matches("</script>").count(), 1);
    }
}
