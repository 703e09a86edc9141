//! Serializable snapshot of the named-route table
//!
//! This is the document client-side code reads to build the same URLs the
//! server does:
//!
//! ```text
//! { "url": "https://example.com", "port": null,
//!   "routes": { "users.edit": { "uri": "users/{id}/edit", "methods": ["GET"],
//!                               "parameters": ["id"], "wheres": null } },
//!   "defaults": {} }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::route::segment::{CATCH_ALL_NAME, CATCH_ALL_WHERE};
use crate::{HttpMethod, NamedRouteEntry};

/// One named route in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub uri: String,
    pub methods: Vec<HttpMethod>,
    /// `None` when the route has no placeholders
    pub parameters: Option<Vec<String>>,
    /// Present only for routes with a catch-all segment
    pub wheres: Option<BTreeMap<String, String>>,
}

impl From<NamedRouteEntry> for RouteDescriptor {
    fn from(entry: NamedRouteEntry) -> Self {
        let wheres = entry.has_catch_all.then(|| {
            BTreeMap::from([(CATCH_ALL_NAME.to_string(), CATCH_ALL_WHERE.to_string())])
        });

        Self {
            uri: entry.uri,
            methods: entry.methods,
            parameters: Some(entry.parameters).filter(|p| !p.is_empty()),
            wheres,
        }
    }
}

/// The full document: request base URL plus every named route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub url: Option<String>,
    pub port: Option<u16>,
    pub routes: BTreeMap<String, RouteDescriptor>,
    /// Default parameter values; always empty for now
    pub defaults: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new(
        url: Option<String>,
        port: Option<u16>,
        index: BTreeMap<String, NamedRouteEntry>,
    ) -> Self {
        Self {
            url,
            port,
            routes: index
                .into_iter()
                .map(|(name, entry)| (name, RouteDescriptor::from(entry)))
                .collect(),
            defaults: BTreeMap::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
