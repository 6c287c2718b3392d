//! Domain model for the Curation context.

pub mod commands;
pub mod content;
pub mod family;
pub mod profile;
pub mod user;
