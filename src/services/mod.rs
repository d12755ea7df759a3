//! Application services built on top of the API clients.

pub mod active_content;
pub mod opportunity_feed;

pub use active_content::{ActiveContentEvent, ActiveContentTracker};
pub use opportunity_feed::{LoadOutcome, OpportunityFeed};
