//! Griot console — Curation bounded context.
//!
//! Read-mostly directories the super-admin browses next to the moderation
//! queue: families, the content library of each kind, and user accounts.
//! Each one is a canonical list loaded once and narrowed by the shared
//! filterable-collection predicates. The context also creates riddles and
//! edits the signed-in account's own profile.

pub mod application;
pub mod domain;
