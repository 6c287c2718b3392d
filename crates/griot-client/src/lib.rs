//! Griot console — HTTP gateway.
//!
//! Implements the `griot-core` gateway ports with `reqwest`. The session is
//! read on every request, so ending it stops sending the bearer token
//! without rebuilding the gateway.

pub mod gateway;
pub mod routes;

pub use gateway::{DEFAULT_API_URL, HttpGateway};
