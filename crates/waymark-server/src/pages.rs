// Sample pages showing named routes from handlers and templates

use axum::{extract::Path, response::Html};
use maud::{html, Markup, DOCTYPE};
use waymark::{NamedRouter, RedirectResponse, Routes, WaymarkError};

/// Application routes, every user-facing one named
pub fn routes() -> NamedRouter {
    NamedRouter::new()
        .get("/", index)
        .name("home")
        .get("/users/:id", show_user)
        .name("users.show")
        .get("/users/:id/edit", edit_user)
        .name("users.edit")
        .post("/users/:id/edit", update_user)
        .name("users.edit")
        .get("/docs/{page...}", show_doc)
        .name("docs.show")
        .get("/dashboard", dashboard)
        .name("dashboard")
}

fn layout(routes: &Routes, title: &str, body: Markup) -> Result<Html<String>, WaymarkError> {
    let script = routes.script()?;
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                (script)
            }
            body { (body) }
        }
    };
    Ok(Html(markup.into_string()))
}

async fn index(routes: Routes) -> Result<Html<String>, WaymarkError> {
    let profile = routes.resolve("users.show", &["1"])?;
    let docs = routes.resolve("docs.show", &["guide", "getting-started"])?;

    layout(
        &routes,
        "Waymark",
        html! {
            h1 { "Named routes" }
            ul {
                li { a href=(profile) { "First user" } }
                li { a href=(docs) { "Getting started" } }
                li { a href="/dashboard" { "Dashboard" } }
            }
        },
    )
}

async fn show_user(Path(id): Path<String>, routes: Routes) -> Result<Html<String>, WaymarkError> {
    let edit = routes.resolve("users.edit", &[id.as_str()])?;

    layout(
        &routes,
        "User",
        html! {
            h1 { "User " (id) }
            a href=(edit) { "Edit" }
        },
    )
}

async fn edit_user(Path(id): Path<String>, routes: Routes) -> Result<Html<String>, WaymarkError> {
    let action = routes.resolve("users.edit", &[id.as_str()])?;

    layout(
        &routes,
        "Edit user",
        html! {
            form method="post" action=(action) {
                button type="submit" { "Save" }
            }
        },
    )
}

async fn update_user(Path(id): Path<String>, routes: Routes) -> RedirectResponse {
    tracing::info!(%id, "user updated");
    routes.redirect("users.show", &[id])
}

async fn show_doc(Path(page): Path<String>, routes: Routes) -> Result<Html<String>, WaymarkError> {
    layout(&routes, &page, html! { h1 { (page) } })
}

async fn dashboard(routes: Routes) -> RedirectResponse {
    routes.redirect::<&str>("home", &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, "localhost:3000")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_named_routes() {
        let table = routes().table().clone();
        let names: Vec<_> = table.index().into_keys().collect();
        assert_eq!(
            names,
            vec!["dashboard", "docs.show", "home", "users.edit", "users.show"]
        );
        assert_eq!(
            table.url_for("docs.show", &["guide", "intro"]).as_deref(),
            Some("/docs/guide/intro")
        );
    }

    #[tokio::test]
    async fn test_index_embeds_manifest_and_links() {
        let response = routes()
            .into_router()
            .oneshot(request("GET", "/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("const Ziggy="));
        assert!(body.contains(r#"href="/users/1""#));
        assert!(body.contains(r#"href="/docs/guide/getting-started""#));
    }

    #[tokio::test]
    async fn test_update_redirects_to_profile() {
        let response = routes()
            .into_router()
            .oneshot(request("POST", "/users/7/edit"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/users/7");
    }

    #[tokio::test]
    async fn test_dashboard_redirects_home() {
        let response = routes()
            .into_router()
            .oneshot(request("GET", "/dashboard"))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}
