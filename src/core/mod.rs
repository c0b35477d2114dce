//! Core domain models for Loip.
//!
//! The fixed word bank and the generation request types. Pure data with no
//! I/O dependencies.

pub mod request;
pub mod words;

pub use request::{GenerationRequest, Unit};
pub use words::WORDS;
