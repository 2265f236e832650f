//! Domain types and pure logic for the Grow backend.
//!
//! Nothing in this crate performs I/O: the template catalog, model response
//! parsing, ranking, workflow instantiation and input validation all live
//! here so the pipeline and API crates can share them.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod payload;
pub mod ranking;
pub mod subscription;
pub mod template;
pub mod types;
pub mod workflow;
