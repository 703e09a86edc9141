// Waymark - named routes for Axum + Maud
// Server-side URL generation, a route manifest for client-side code, and
// redirect-by-name

pub mod config;
pub mod error;
pub mod extract;
pub mod origin;
pub mod redirect;
pub mod registry;
pub mod router;
pub mod script;

pub use config::Config;
pub use error::WaymarkError;
pub use extract::Routes;
pub use origin::RequestOrigin;
pub use redirect::{RedirectResponse, RedirectType};
pub use registry::Waymark;
pub use router::{http_method, NamedRouter};
pub use script::{manifest_json, routes_script, DEFAULT_GLOBAL};

// Re-export the registry core so applications need a single dependency
pub use waymark_router::{
    HttpMethod, Manifest, NamedRouteEntry, PathSegment, RegisteredRoute, RouteDescriptor,
    RouteError, RouteTable,
};

// Re-export commonly used types from dependencies
pub use axum;
pub use maud::{Markup, PreEscaped};
