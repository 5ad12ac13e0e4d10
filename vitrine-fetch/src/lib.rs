// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Vitrine Fetch
//!
//! The acquisition and validation pipeline for the Vitrine project feed.
//!
//! One activation runs five stages in order, each passing a value forward
//! or short-circuiting to a typed failure:
//!
//! 1. [`chain::SourceChain`] - tries sources in order, stops at the first
//!    success ([`source::SourceAttempter`] is the seam tests fake)
//! 2. [`sanitize::sanitize`] - trims the body and strips any diagnostic
//!    trailer the static host appended after the JSON object
//! 3. [`parse::decode`] - parses the repaired text into a JSON value
//! 4. [`parse::validate`] - checks the top-level shape and assembles the
//!    typed [`vitrine_core::ProjectCollection`]
//! 5. [`outcome::PipelineOutcome`] - the single observable terminal state
//!
//! ## Example
//!
//! ```ignore
//! use vitrine_fetch::{Activation, FeedPipeline, SourcePlan};
//!
//! let plan = SourcePlan::for_base("http://localhost:8080")?;
//! let pipeline = FeedPipeline::new(plan);
//!
//! let mut activation = Activation::new();
//! activation.run(&pipeline).await;
//!
//! if let Some(message) = activation.outcome().error_message() {
//!     eprintln!("feed unavailable: {message}");
//! }
//! ```

pub mod chain;
pub mod error;
pub mod http;
pub mod outcome;
pub mod parse;
pub mod pipeline;
pub mod sanitize;
pub mod source;

// Re-export key types at crate root

// Errors
pub use error::{FetchError, SourceError};

// Transport
pub use http::HttpClient;
pub use source::{HttpAttempter, Source, SourceAttempter, SourcePlan};

// Chain & Pipeline
pub use chain::{Resolved, SourceAttempt, SourceChain};
pub use outcome::{Activation, PipelineOutcome};
pub use pipeline::FeedPipeline;
pub use sanitize::sanitize;
