//! Dashboard resources and URL construction.
mod resolver;
mod resource;
mod url;

pub use resolver::resources_from_config;
pub use resource::{Resource, ResourceType};
pub use url::{build_dashboard_url, DASHBOARD_BASE_URL};
