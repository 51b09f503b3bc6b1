pub mod category;
pub mod flows;
pub mod provider;

pub use category::Category;
pub use flows::ServiceFlow;
pub use provider::{Coordinates, ProviderRecord};
