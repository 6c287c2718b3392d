//! Griot console — Publication Moderation bounded context.
//!
//! Responsible for the publication-request queue: the one-shot load, the
//! approve/reject workflow, and the tab/search views the operator works
//! from. Views are always derived from the canonical queue; nothing here
//! re-fetches after a command.

pub mod application;
pub mod domain;
