//! Shared test mocks and utilities for the Griot curation console.

mod clock;
mod curation;
mod fixtures;
mod moderation;
mod profile;

pub use clock::{FixedClock, SequenceClock};
pub use curation::{CREATED_RIDDLE_ID, CurationCall, RecordingCurationGateway};
pub use fixtures::{content_dto, family_dto, profile_dto, request_dto, user_dto};
pub use moderation::{
    FailingModerationGateway, GatedModerationGateway, ModerationCall, RecordingModerationGateway,
};
pub use profile::{ProfileCall, RecordingProfileGateway};
