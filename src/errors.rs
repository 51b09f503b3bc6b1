use astra::Response;

use crate::client::FetchError;

/// Errors a route handler can end with. Each maps to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// The directory API failed on a call whose failure cannot be hidden
    /// (detail pages, CRUD actions).
    #[error("Upstream Error: {0}")]
    Upstream(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

impl From<FetchError> for ServerError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidArgument(msg) => ServerError::BadRequest(msg),
            FetchError::Status { status: 404, .. } => ServerError::NotFound,
            other => ServerError::Upstream(other.to_string()),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
