//! Domain logic for the song request front-end.
//!
//! Everything here is pure: entity types mirroring the studio API, the
//! option catalog, field validators and the questionnaire state machine.
//! Network access lives in `songcraft-client`.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod questionnaire;
pub mod types;
pub mod validation;
