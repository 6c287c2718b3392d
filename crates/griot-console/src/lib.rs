//! Griot console — command-line front end.
//!
//! Wires configuration, the operator session and the HTTP gateway into the
//! moderation and curation contexts, and renders their derived views.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod state;
