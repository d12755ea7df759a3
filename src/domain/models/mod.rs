//! Data models for the contributor dashboard client.

pub mod collection;
pub mod config;
pub mod opportunity;
pub mod roles;

pub use collection::{Collection, CollectionDetails, CollectionNode};
pub use config::{ApiConfig, Config, LanguageConfig, LoggingConfig};
pub use opportunity::{
    Opportunity, OpportunityKind, Page, PageCursor, SkillOpportunity, TranslationOpportunity,
    VoiceoverOpportunity,
};
pub use roles::{RoleForm, RoleUpdateForm, RoleViewForm, RoleViewMethod};
