pub mod analysis;
pub mod subscriptions;
pub mod templates;
pub mod transcription;
pub mod workflows;
