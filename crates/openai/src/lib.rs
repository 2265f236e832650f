//! Client for the hosted vision, text and transcription models.
//!
//! The pipeline depends only on the [`ChatModel`] and [`Transcriber`]
//! traits; [`OpenAIClient`] is the production implementation, constructed
//! once at startup and shared behind an `Arc`.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod types;

pub use client::OpenAIClient;
pub use config::ModelConfig;
pub use error::ModelError;
pub use model::{ChatModel, Transcriber};
