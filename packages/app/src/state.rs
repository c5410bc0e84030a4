//! Application state
//!
//! One catalog, one study session, one speech service. The session sits
//! behind a mutex because commands mutate it; there is a single logical
//! actor, so contention never matters here.

use std::sync::{Arc, Mutex};

use almani_core::{Catalog, StudySession};

use crate::platform::tts::SpeechSynthesizer;
use crate::speech::SpeechService;

/// Shared application state handed to every command
pub struct AppState {
    catalog: Catalog,
    session: Mutex<StudySession>,
    speech: SpeechService,
}

impl AppState {
    /// Build the state with the German A1 catalog and the host's synthesizer
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            catalog: Catalog::german_a1(),
            session: Mutex::new(StudySession::new()),
            speech: SpeechService::new(synthesizer),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn speech(&self) -> &SpeechService {
        &self.speech
    }

    /// Run a closure against the locked session
    pub fn with_session<T>(&self, f: impl FnOnce(&mut StudySession) -> T) -> T {
        let mut session = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::tts::UnsupportedSynthesizer;

    #[test]
    fn test_fresh_state() {
        let state = AppState::new(Arc::new(UnsupportedSynthesizer));
        assert_eq!(state.catalog().sections().len(), 13);
        assert_eq!(state.with_session(|s| s.current_section()), 0);
        assert!(!state.speech().status().available);
    }
}
