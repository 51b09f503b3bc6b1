pub mod error;
pub mod home;
pub mod my_services;
pub mod nearby;
pub mod provider;
pub mod service_form;

pub use error::error_page;
pub use home::home_page;
pub use my_services::user_services_page;
pub use nearby::{nearby_page, NearbyVm};
pub use provider::provider_page;
pub use service_form::{edit_service_page, new_service_page};
