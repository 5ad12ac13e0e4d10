// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Vitrine Core
//!
//! Core models for the Vitrine project showcase.
//!
//! This crate provides the domain types shared by the fetch pipeline and
//! the CLI:
//!
//! - [`ProjectRecord`] - One repository's metadata, as served by the feed
//! - [`ProjectCollection`] - An ordered set of records plus a timestamp
//! - [`LanguageBranding`] - Static language → color lookup for the view layer
//!
//! All wire names follow the feed's JSON shape (`full_name`,
//! `stargazers_count`, `lastUpdated`, ...). Records are immutable once
//! deserialized; nothing in this crate mutates them after construction.

pub mod models;

// Re-export all model types
pub use models::{LanguageBranding, ProjectCollection, ProjectRecord};
