//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Status marker carried by every successful response body.
pub const STATUS_SUCCESS: &str = "success";

/// Wrapper for successful responses.
///
/// The payload fields are flattened next to a `status` marker, mirroring the
/// `ProblemDetails` shape used for failures.
///
/// # Example
///
/// ```
/// use roadnet_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Info {
///     nodes: usize,
///     edges: usize,
/// }
///
/// let response = ServiceResponse::new(Info { nodes: 9, edges: 17 });
/// assert_eq!(response.status, "success");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// Always `"success"`.
    pub status: String,

    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,
}

impl<T> ServiceResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data,
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
