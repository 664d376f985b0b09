use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request succeeds without returning a resource
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human readable outcome of the request
    pub message: String,
}

/// Listing of every path served by the API
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    /// Paths in OpenAPI template form, e.g. `/planets/{id}`
    pub endpoints: Vec<String>,
}
