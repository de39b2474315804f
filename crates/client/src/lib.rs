//! Client for the studio API, the external service that owns submissions,
//! approvals and generated audio.
//!
//! Views depend on the [`StudioApi`] trait rather than on a concrete HTTP
//! client so tests can substitute an in-memory fake.

pub mod api;
pub mod error;

pub use api::{HttpStudioApi, StudioApi};
pub use error::ApiError;
