use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use waymark_router::RouteError;

/// Errors raised by the axum integration
#[derive(Debug, Error)]
pub enum WaymarkError {
    /// The route manifest was rendered without an inbound request
    #[error(
        "rendering the route manifest requires a request; \
         render views from a request handler, not from application setup"
    )]
    MissingRequest,

    /// A handler asked for routes on a router built without `NamedRouter::into_router`
    #[error("no route registry on this router; build it with `NamedRouter::into_router`")]
    NotInstalled,

    #[error("invalid redirect location: {0}")]
    InvalidLocation(String),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("failed to serialize route manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for WaymarkError {
    fn into_response(self) -> Response {
        match self {
            WaymarkError::Route(RouteError::NotFound(name)) => {
                tracing::debug!(route = %name, "named route not found");
                (StatusCode::NOT_FOUND, format!("route not found: {}", name)).into_response()
            }
            err => {
                tracing::error!("waymark error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = WaymarkError::Route(RouteError::NotFound("x".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_request_maps_to_500() {
        let resp = WaymarkError::MissingRequest.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_request_message_suggests_fix() {
        assert!(WaymarkError::MissingRequest
            .to_string()
            .contains("render views from a request handler"));
    }
}
