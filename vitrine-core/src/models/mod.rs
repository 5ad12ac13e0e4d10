//! Domain models for the project feed.
//!
//! - [`project`] - Individual repository records
//! - [`collection`] - The feed-level container
//! - [`branding`] - Language color lookup for the presentation layer

pub mod branding;
pub mod collection;
pub mod project;

pub use branding::LanguageBranding;
pub use collection::ProjectCollection;
pub use project::ProjectRecord;
