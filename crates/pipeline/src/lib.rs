//! Content-to-template matching pipeline.
//!
//! Stages run strictly in sequence within one request:
//!
//! ```text
//! image payload ──> ImageClassifier ──┐
//!                                     ├──> ContentMatcher ──> rank_templates
//! transcript ─────────────────────────┘          ^
//!                                  CatalogSource ┘
//! ```
//!
//! Every stage receives its collaborators explicitly; nothing here holds
//! global state.

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod matcher;
pub mod prompt;
pub mod suggest;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::CatalogSource;
pub use classifier::ImageClassifier;
pub use error::PipelineError;
pub use matcher::{ContentMatcher, MatchInput};
pub use suggest::{Suggestions, TemplateSuggester};
