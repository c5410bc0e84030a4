//! TTS commands
//!
//! Pronunciation playback for the front end. Playback is fire-and-forget:
//! the response only says whether the request was accepted; outcomes are
//! logged by the speech service.

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::platform::tts::SpeechConfig;
use crate::state::AppState;

/// Playback request
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakRequest {
    /// The text to pronounce
    pub text: String,
    /// Language tag (defaults to "de-DE")
    pub language: Option<String>,
    /// Speech rate (defaults to 0.7)
    pub rate: Option<f32>,
    /// Pitch (defaults to 1.0)
    pub pitch: Option<f32>,
    /// Volume (defaults to 1.0)
    pub volume: Option<f32>,
}

impl SpeakRequest {
    /// A plain request for one German term
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            rate: None,
            pitch: None,
            volume: None,
        }
    }

    fn config(&self) -> SpeechConfig {
        let defaults = SpeechConfig::default();
        SpeechConfig {
            language: self.language.clone().unwrap_or(defaults.language),
            rate: self.rate.unwrap_or(defaults.rate),
            pitch: self.pitch.unwrap_or(defaults.pitch),
            volume: self.volume.unwrap_or(defaults.volume),
        }
    }
}

/// Playback response
#[derive(Debug, Clone, Serialize)]
pub struct SpeakResponse {
    /// Whether the request was accepted
    pub success: bool,
    /// User-visible notice when it was not
    pub error: Option<String>,
}

/// Speech capability status
#[derive(Debug, Clone, Serialize)]
pub struct SpeechStatusResponse {
    /// Whether the host has a speech capability
    pub available: bool,
    /// Name of the first discovered German voice, if any
    pub german_voice: Option<String>,
    /// Platform name
    pub platform: String,
    /// User-visible notice when the capability is missing
    pub error: Option<String>,
}

fn status_response(state: &AppState) -> SpeechStatusResponse {
    let status = state.speech().status();
    SpeechStatusResponse {
        available: status.available,
        german_voice: status.german_voice,
        platform: platform::get_platform().to_string(),
        error: status.error,
    }
}

/// Request pronunciation of a text. Accepted requests play detached; a
/// missing capability surfaces as a user-visible notice, never an error.
pub async fn tts_speak(state: &AppState, request: SpeakRequest) -> SpeakResponse {
    let status = state.speech().status();
    if !status.available {
        return SpeakResponse {
            success: false,
            error: status.error,
        };
    }

    // fire-and-forget: the outcome is logged by the service
    let _handle = state.speech().speak(request.text.clone(), request.config());
    SpeakResponse {
        success: true,
        error: None,
    }
}

/// Current speech availability and discovered German voice
pub fn tts_status(state: &AppState) -> SpeechStatusResponse {
    status_response(state)
}

/// Re-run voice discovery (host voices-changed notification)
pub fn tts_refresh_voices(state: &AppState) -> SpeechStatusResponse {
    state.speech().refresh_voices();
    status_response(state)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::tts::{
        SpeechError, SpeechSynthesizer, UnsupportedSynthesizer, Voice,
    };
    use std::sync::{Arc, Mutex};

    struct RecordingSynthesizer {
        spoken: Mutex<Vec<String>>,
    }

    impl RecordingSynthesizer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                spoken: Mutex::new(Vec::new()),
            })
        }
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn list_voices(&self) -> Vec<Voice> {
            vec![Voice::new("Anna", "de-DE")]
        }

        fn speak(
            &self,
            text: &str,
            _config: &SpeechConfig,
            _voice: Option<&Voice>,
        ) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_speak_accepted_on_capable_host() {
        let synth = RecordingSynthesizer::new();
        let state = AppState::new(synth.clone());

        let response = tts_speak(&state, SpeakRequest::text("Guten Tag")).await;
        assert!(response.success);
        assert_eq!(response.error, None);

        // wait for the detached playback task
        tokio::task::yield_now().await;
        for _ in 0..100 {
            if !synth.spoken.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }
        assert_eq!(synth.spoken.lock().unwrap().as_slice(), ["Guten Tag"]);
    }

    #[tokio::test]
    async fn test_speak_surfaces_notice_when_unavailable() {
        let state = AppState::new(Arc::new(UnsupportedSynthesizer));
        let response = tts_speak(&state, SpeakRequest::text("Hallo")).await;
        assert!(!response.success);
        assert!(response.error.unwrap().contains("not available"));
    }

    #[test]
    fn test_request_config_defaults() {
        let config = SpeakRequest::text("Hallo").config();
        assert_eq!(config.language, "de-DE");
        assert_eq!(config.rate, 0.7);

        let request = SpeakRequest {
            rate: Some(1.0),
            ..SpeakRequest::text("Hallo")
        };
        assert_eq!(request.config().rate, 1.0);
        assert_eq!(request.config().pitch, 1.0);
    }

    #[test]
    fn test_status_includes_platform() {
        let state = AppState::new(Arc::new(UnsupportedSynthesizer));
        let status = tts_status(&state);
        assert!(!status.available);
        assert!(!status.platform.is_empty());
        assert!(status.error.is_some());
    }

    #[test]
    fn test_refresh_voices_returns_status() {
        let synth = RecordingSynthesizer::new();
        let state = AppState::new(synth);
        let status = tts_refresh_voices(&state);
        assert!(status.available);
        assert_eq!(status.german_voice.as_deref(), Some("Anna"));
    }
}
