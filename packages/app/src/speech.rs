//! Speech service
//!
//! Owns the discovered German voice list and turns speech requests into
//! fire-and-forget tasks. Outcomes are logged, never propagated: a failed
//! pronunciation is cosmetic and must not disturb the quiz flow.
//!
//! Fallback chain per request: preferred German voice → host default voice
//! (one retry after a playback failure) → logged failure. In-flight speech
//! is never cancelled; a new request simply issues independently.

use std::sync::{Arc, RwLock};

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::platform::tts::{
    german_voices, preferred_voice, SpeechConfig, SpeechError, SpeechSynthesizer, Voice,
};

/// Outcome of one speech request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakOutcome {
    /// Played with the selected German voice (or the default when none was
    /// selected)
    Spoken,
    /// The selected voice failed; the retry with the host default succeeded
    SpokenWithDefaultVoice,
    /// Playback failed; the failure was logged and dropped
    Failed(SpeechError),
}

/// User-visible speech availability, for the front end's notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechStatus {
    /// Whether the host has a speech capability at all
    pub available: bool,
    /// Name of the first discovered German voice, if any
    pub german_voice: Option<String>,
    /// Human-readable notice when the capability is missing
    pub error: Option<String>,
}

/// Speech service: voice discovery plus detached playback tasks
pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    german_voices: RwLock<Vec<Voice>>,
}

impl SpeechService {
    /// Create the service and run the initial voice discovery
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        let service = Self {
            synthesizer,
            german_voices: RwLock::new(Vec::new()),
        };
        service.refresh_voices();
        service
    }

    /// Re-run voice discovery. The host calls this on its voices-changed
    /// notification; some hosts populate the voice list asynchronously.
    pub fn refresh_voices(&self) {
        let voices = self.synthesizer.list_voices();
        let german = german_voices(&voices);
        log::info!(
            "voice discovery: {} host voices, {} German",
            voices.len(),
            german.len()
        );
        *self.write_voices() = german;
    }

    /// Current availability and discovered German voice
    pub fn status(&self) -> SpeechStatus {
        let available = self.synthesizer.is_available();
        SpeechStatus {
            available,
            german_voice: self.read_voices().first().map(|v| v.name.clone()),
            error: (!available).then(|| {
                "speech synthesis is not available on this host; \
                 pronunciation audio is disabled"
                    .to_string()
            }),
        }
    }

    /// Request playback of `text` as a detached task.
    ///
    /// The returned handle carries the outcome for callers that want it
    /// (tests, mainly); dropping it keeps the request fire-and-forget.
    pub fn speak(&self, text: impl Into<String>, config: SpeechConfig) -> JoinHandle<SpeakOutcome> {
        let text = text.into();
        let synthesizer = Arc::clone(&self.synthesizer);
        let voice = preferred_voice(&self.read_voices()).cloned();

        tokio::spawn(async move {
            match synthesizer.speak(&text, &config, voice.as_ref()) {
                Ok(()) => {
                    log::info!("spoke \"{text}\" ({})", config.language);
                    SpeakOutcome::Spoken
                }
                Err(SpeechError::SpeakFailed(reason)) if voice.is_some() => {
                    // selected voice failed, retry once with the host default
                    log::warn!(
                        "voice \"{}\" failed ({reason}), retrying with default voice",
                        voice.as_ref().map(|v| v.name.as_str()).unwrap_or_default()
                    );
                    match synthesizer.speak(&text, &config, None) {
                        Ok(()) => SpeakOutcome::SpokenWithDefaultVoice,
                        Err(err) => {
                            log::warn!("speech playback failed: {err}");
                            SpeakOutcome::Failed(err)
                        }
                    }
                }
                Err(err) => {
                    log::warn!("speech playback failed: {err}");
                    SpeakOutcome::Failed(err)
                }
            }
        })
    }

    fn read_voices(&self) -> std::sync::RwLockReadGuard<'_, Vec<Voice>> {
        self.german_voices
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_voices(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Voice>> {
        self.german_voices
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ==================== Tests ====================
