//! Typed clients for the contributor dashboard backend API.

pub mod admin;
pub mod collections;
pub mod http;
pub mod opportunities;
pub mod urls;

pub use admin::AdminClient;
pub use collections::CollectionClient;
pub use http::ApiClient;
pub use opportunities::OpportunityClient;
