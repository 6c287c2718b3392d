//! Application services for the Publication Moderation context.

pub mod command_handlers;
pub mod console;
pub mod query_handlers;
pub mod queue;
pub mod view;
