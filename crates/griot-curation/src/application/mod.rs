//! Application services for the Curation context.

pub mod command_handlers;
pub mod contents;
pub mod families;
pub mod profile;
pub mod users;
