pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;
pub use html::{html_response, redirect};
