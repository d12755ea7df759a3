//! Contribhub - contributor dashboard API client
//!
//! Client-side service layer for an educational platform's contributor
//! dashboard: typed wrappers over the backend HTTP API, an in-memory
//! read-through collection cache, and the small application services the
//! dashboard surfaces are built from.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): errors and pure data models
//! - **Service Layer** (`services`): feed accumulation and active-content
//!   tracking
//! - **Infrastructure Layer** (`infrastructure`): HTTP API clients and
//!   configuration loading
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use contribhub::domain::models::OpportunityKind;
//! use contribhub::infrastructure::api::{ApiClient, OpportunityClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = ApiClient::new("http://localhost:8181", std::time::Duration::from_secs(30))?;
//!     let client = OpportunityClient::new(api);
//!     let page = client
//!         .fetch_first_page(OpportunityKind::Translation, Some("es"))
//!         .await?;
//!     println!("{} opportunities, more: {}", page.items.len(), page.has_more());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ClientError, ClientResult};
pub use domain::models::{
    Collection, CollectionDetails, Config, Opportunity, OpportunityKind, Page, PageCursor,
    RoleForm, RoleUpdateForm, RoleViewForm, RoleViewMethod,
};
pub use infrastructure::api::{AdminClient, ApiClient, CollectionClient, OpportunityClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ActiveContentTracker, LoadOutcome, OpportunityFeed};
