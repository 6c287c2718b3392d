//! Griot Core — shared console abstractions.
//!
//! This crate defines the traits and types that every console context
//! depends on: time, commands, errors, the operator session, the remote
//! gateway ports with their wire shapes, the generic filterable collection
//! and the canonical list store. It contains no HTTP code.

pub mod clock;
pub mod command;
pub mod dto;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod session;
pub mod store;
