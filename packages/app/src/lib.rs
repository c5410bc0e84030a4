//! # almani-app - German A1 study guide application shell
//!
//! Wires the pure core ([`almani_core`]) to a host front end:
//!
//! - [`state`] - shared application state (catalog + session + speech)
//! - [`commands`] - serializable request/response entry points
//! - [`platform`] - host speech capability behind a narrow trait
//! - [`speech`] - voice discovery and fire-and-forget playback
//!
//! The host provides a [`SpeechSynthesizer`] (its web view's speech API, a
//! native engine, or [`UnsupportedSynthesizer`] when it has none) and drives
//! the commands from its UI events. All quiz and content logic stays in the
//! core crate; this crate only adds state sharing, the speech fallback
//! chain, and response shaping.

pub mod commands;
pub mod platform;
pub mod speech;
pub mod state;

pub use platform::tts::{
    SpeechConfig, SpeechError, SpeechSynthesizer, UnsupportedSynthesizer, Voice,
};
pub use speech::{SpeakOutcome, SpeechService, SpeechStatus};
pub use state::AppState;
