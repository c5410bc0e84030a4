// TTS (Text-to-Speech) platform module
//
// Narrow interface over the host speech capability, so the rest of the app
// (and the tests) never talk to a concrete engine directly. The host injects
// its synthesizer; hosts without one use [`UnsupportedSynthesizer`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One voice offered by the host speech capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Voice name as reported by the host (e.g. "Anna", "Microsoft Hedda")
    pub name: String,
    /// BCP-47 language tag (e.g. "de-DE", "en-US")
    pub language: String,
    /// Whether the host marks this voice as its default
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            is_default: false,
        }
    }
}

/// Speech request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Language tag (e.g. "de-DE")
    pub language: String,
    /// Speech rate (1.0 is normal)
    pub rate: f32,
    /// Pitch (1.0 is normal)
    pub pitch: f32,
    /// Volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: "de-DE".to_string(),
            rate: 0.7, // slower than normal, easier for learners
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Speech capability errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SpeechError {
    /// The host has no speech capability at all
    #[error("speech synthesis is not supported on this host")]
    NotSupported,
    /// Playback failed (engine error, voice gone, ...)
    #[error("speech playback failed: {0}")]
    SpeakFailed(String),
}

/// Host speech capability.
///
/// `speak` plays synchronously from the engine's point of view and reports
/// the outcome; the app layer wraps it into a fire-and-forget task. Passing
/// `None` as the voice requests the host's default voice.
pub trait SpeechSynthesizer: Send + Sync {
    /// Whether the capability exists on this host
    fn is_available(&self) -> bool {
        true
    }

    /// Voices currently offered by the host
    fn list_voices(&self) -> Vec<Voice>;

    /// Play the text with the given configuration and optional voice
    fn speak(
        &self,
        text: &str,
        config: &SpeechConfig,
        voice: Option<&Voice>,
    ) -> Result<(), SpeechError>;
}

/// Synthesizer for hosts without any speech capability. Browsing and quizzes
/// stay usable; every speech request reports `NotSupported`.
#[derive(Debug, Default)]
pub struct UnsupportedSynthesizer;

impl SpeechSynthesizer for UnsupportedSynthesizer {
    fn is_available(&self) -> bool {
        false
    }

    fn list_voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(
        &self,
        _text: &str,
        _config: &SpeechConfig,
        _voice: Option<&Voice>,
    ) -> Result<(), SpeechError> {
        Err(SpeechError::NotSupported)
    }
}

// ==================== Voice selection ====================

/// Name fragments that identify female German voices, preferred for
/// pronunciation clarity
const FEMALE_VOICE_HINTS: [&str; 6] = ["female", "anna", "petra", "gisela", "hedda", "katrin"];

/// Whether a voice speaks German, by language tag or name heuristic
pub fn is_german_voice(voice: &Voice) -> bool {
    let name = voice.name.to_lowercase();
    voice.language.starts_with("de")
        || voice.language.contains("DE")
        || name.contains("german")
        || name.contains("deutsch")
}

/// The German subset of a host voice list, order preserved
pub fn german_voices(voices: &[Voice]) -> Vec<Voice> {
    voices.iter().filter(|v| is_german_voice(v)).cloned().collect()
}

/// Pick the voice to speak with: a female German voice when one exists,
/// otherwise the first German voice, otherwise none (host default)
pub fn preferred_voice(german: &[Voice]) -> Option<&Voice> {
    german
        .iter()
        .find(|v| {
            let name = v.name.to_lowercase();
            FEMALE_VOICE_HINTS.iter().any(|hint| name.contains(hint))
        })
        .or_else(|| german.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, language: &str) -> Voice {
        Voice::new(name, language)
    }

    // ============ SpeechConfig ============

    #[test]
    fn test_default_config() {
        let config = SpeechConfig::default();
        assert_eq!(config.language, "de-DE");
        assert!(config.rate > 0.0 && config.rate < 1.0);
        assert_eq!(config.pitch, 1.0);
        assert_eq!(config.volume, 1.0);
    }

    // ============ is_german_voice() ============

    #[test]
    fn test_german_detection_by_language_tag() {
        assert!(is_german_voice(&voice("Anna", "de-DE")));
        assert!(is_german_voice(&voice("Markus", "de-AT")));
        assert!(is_german_voice(&voice("Odd", "nb-DE")));
        assert!(!is_german_voice(&voice("Samantha", "en-US")));
    }

    #[test]
    fn test_german_detection_by_name() {
        assert!(is_german_voice(&voice("German Male", "unknown")));
        assert!(is_german_voice(&voice("Deutsch Stimme", "unknown")));
        assert!(!is_german_voice(&voice("French Female", "fr-FR")));
    }

    // ============ preferred_voice() ============

    #[test]
    fn test_preferred_voice_favors_female_names() {
        let german = vec![
            voice("Markus", "de-DE"),
            voice("Microsoft Hedda", "de-DE"),
            voice("Anna", "de-DE"),
        ];
        assert_eq!(preferred_voice(&german).unwrap().name, "Microsoft Hedda");
    }

    #[test]
    fn test_preferred_voice_falls_back_to_first_german() {
        let german = vec![voice("Markus", "de-DE"), voice("Klaus", "de-DE")];
        assert_eq!(preferred_voice(&german).unwrap().name, "Markus");
    }

    #[test]
    fn test_preferred_voice_none_when_list_empty() {
        assert_eq!(preferred_voice(&[]), None);
    }

    #[test]
    fn test_german_voices_preserves_order() {
        let voices = vec![
            voice("Samantha", "en-US"),
            voice("Markus", "de-DE"),
            voice("Anna", "de-DE"),
        ];
        let german = german_voices(&voices);
        let names: Vec<_> = german.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Markus", "Anna"]);
    }

    // ============ UnsupportedSynthesizer ============

    #[test]
    fn test_unsupported_synthesizer() {
        let synth = UnsupportedSynthesizer;
        assert!(!synth.is_available());
        assert!(synth.list_voices().is_empty());
        assert_eq!(
            synth.speak("Hallo", &SpeechConfig::default(), None),
            Err(SpeechError::NotSupported)
        );
    }

    #[test]
    fn test_speech_error_display() {
        assert!(SpeechError::NotSupported.to_string().contains("not supported"));
        assert!(SpeechError::SpeakFailed("engine busy".into())
            .to_string()
            .contains("engine busy"));
    }
}
