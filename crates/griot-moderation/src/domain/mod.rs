//! Domain model for the Publication Moderation context.

pub mod classifier;
pub mod commands;
pub mod events;
pub mod request;
pub mod workflow;
