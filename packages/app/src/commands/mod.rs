//! Commands - the front end's entry points
//!
//! Request/response wrappers around the core session and the speech service.
//! Every command takes the shared [`AppState`](crate::state::AppState) and
//! returns a serializable response; errors surface inside the response, never
//! as panics.
//!
//! Modules:
//! - `study`: navigation, answering, scoring, reset
//! - `tts`: pronunciation playback and voice status

pub mod study;
pub mod tts;

// Re-export all command functions for convenient registration
pub use study::*;
pub use tts::*;
