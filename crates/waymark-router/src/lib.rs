//! # Waymark Router
//!
//! Named route registry and URL builder. Routes are recorded with an HTTP
//! method, typed path segments and an optional name; from that table this
//! crate derives:
//! - a name index merging routes that share a name and URI
//! - concrete paths from a name plus positional parameters
//! - a JSON manifest of every named route for client-side URL building
//!
//! Matching and dispatch stay with the host router.
//!
//! ## Path syntax
//!
//! - Constant: `users`
//! - Parameter: `:id` or `{id}`
//! - Anonymous wildcard: `*`
//! - Catch-all: `*rest`, `{*rest}`, `{rest...}` or `**`
//!
//! ## Example
//!
//! ```
//! use waymark_router::{HttpMethod, RegisteredRoute, RouteTable};
//!
//! let table = RouteTable::new()
//!     .with_route(RegisteredRoute::new(HttpMethod::Get, "/users/:id/edit").with_name("users.edit"))
//!     .with_route(RegisteredRoute::new(HttpMethod::Get, "/files/{path...}").with_name("files.show"));
//!
//! assert_eq!(table.url_for("users.edit", &["1"]).unwrap(), "/users/1/edit");
//! assert_eq!(table.url_for("files.show", &["a", "b", "c"]).unwrap(), "/files/a/b/c");
//! assert!(table.url_for::<&str>("nonexistent", &[]).is_none());
//! ```

mod error;
mod index;
mod manifest;
mod method;
pub mod route;
mod table;

pub use error::RouteError;
pub use index::{build_index, NamedRouteEntry};
pub use manifest::{Manifest, RouteDescriptor};
pub use method::HttpMethod;
pub use route::segment::{CATCH_ALL_NAME, CATCH_ALL_WHERE, WILDCARD_NAME};
pub use route::{classify_segment, parse_path, render_uri, to_axum_path, PathSegment, RegisteredRoute};
pub use table::RouteTable;
