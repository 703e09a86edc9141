use thiserror::Error;

/// Failures of route resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered route carries this name
    #[error("route not found: {0}")]
    NotFound(String),

    /// Fewer parameters were supplied than the route has placeholders
    #[error("route `{route}` is missing a value for `{placeholder}` ({supplied} supplied, {required} required)")]
    MissingParameter {
        route: String,
        placeholder: String,
        supplied: usize,
        required: usize,
    },

    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl RouteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound(_))
    }
}
