//! Study commands
//!
//! Navigation, answering, and scoring over the shared study session. Every
//! command returns a fresh view snapshot so the front end never tracks
//! state of its own.

use serde::Serialize;

use almani_core::{
    Category, CategoryFilter, ExerciseReview, QuizScore, StudyPhase,
};

use crate::state::AppState;

// ==================== Responses ====================

/// Snapshot of the session for the view layer
#[derive(Debug, Clone, Serialize)]
pub struct StudyView {
    /// Active category filter
    pub filter: CategoryFilter,
    /// Current quiz phase
    pub phase: StudyPhase,
    /// Index of the active section (into the full section list)
    pub section_index: usize,
    /// Title of the active section
    pub section_title: String,
    /// Category of the active section
    pub category: Category,
    /// Index of the active exercise within the section
    pub exercise_index: usize,
    /// Number of exercises in the active section
    pub exercise_total: usize,
    /// How many exercises have a recorded answer
    pub answered: usize,
    /// Whether the scoring action is available
    pub can_check: bool,
    /// The score, once checked
    pub score: Option<QuizScore>,
}

/// Result of a study command
#[derive(Debug, Clone, Serialize)]
pub struct StudyResponse {
    /// Whether the command applied
    pub success: bool,
    /// Error message when it did not
    pub error: Option<String>,
    /// Session snapshot after the command
    pub view: StudyView,
}

/// One entry of the section navigation
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    /// Index into the full section list
    pub index: usize,
    /// Display title
    pub title: String,
    /// Section category
    pub category: Category,
    /// Number of exercises
    pub exercise_count: usize,
}

/// Result of the scoring command
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// Whether scoring ran
    pub success: bool,
    /// Error message (e.g. not every exercise answered yet)
    pub error: Option<String>,
    /// Aggregate score when scoring ran
    pub score: Option<QuizScore>,
    /// Per-exercise review when scoring ran
    pub review: Vec<ExerciseReview>,
}

/// Content of the active section, shaped per table kind
#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    /// Section title
    pub title: String,
    /// Section category
    pub category: Category,
    /// The content table (kind + entries)
    pub content: serde_json::Value,
}

fn view(state: &AppState) -> StudyView {
    state.with_session(|session| {
        let catalog = state.catalog();
        // the session index always points at a real section
        let section = catalog
            .section(session.current_section())
            .expect("session points at a catalog section");
        StudyView {
            filter: session.filter(),
            phase: session.phase(),
            section_index: session.current_section(),
            section_title: section.title.clone(),
            category: section.category,
            exercise_index: session.current_exercise(),
            exercise_total: section.exercises.len(),
            answered: session.answered_count(),
            can_check: session.can_check(catalog),
            score: session.score(),
        }
    })
}

fn ok(state: &AppState) -> StudyResponse {
    StudyResponse {
        success: true,
        error: None,
        view: view(state),
    }
}

fn failed(state: &AppState, error: impl ToString) -> StudyResponse {
    StudyResponse {
        success: false,
        error: Some(error.to_string()),
        view: view(state),
    }
}

// ==================== Commands ====================

/// Current session snapshot
pub fn study_view(state: &AppState) -> StudyView {
    view(state)
}

/// The section navigation under the active filter (ordering-stable)
pub fn list_sections(state: &AppState) -> Vec<SectionSummary> {
    state.with_session(|session| {
        session
            .filtered_sections(state.catalog())
            .into_iter()
            .map(|(index, section)| SectionSummary {
                index,
                title: section.title.clone(),
                category: section.category,
                exercise_count: section.exercises.len(),
            })
            .collect()
    })
}

/// Content of the active section
pub fn section_content(state: &AppState) -> ContentResponse {
    state.with_session(|session| {
        let catalog = state.catalog();
        let section = catalog
            .section(session.current_section())
            .expect("session points at a catalog section");
        let content = catalog.content(section.content);
        ContentResponse {
            title: section.title.clone(),
            category: section.category,
            content: serde_json::to_value(content)
                .expect("catalog content serializes"),
        }
    })
}

/// Switch the category filter (resets answers, exercise index, and score)
pub fn set_filter(state: &AppState, filter: CategoryFilter) -> StudyResponse {
    state.with_session(|session| session.set_filter(filter, state.catalog()));
    ok(state)
}

/// Switch the active section (resets answers, exercise index, and score)
pub fn select_section(state: &AppState, index: usize) -> StudyResponse {
    match state.with_session(|session| session.select_section(index, state.catalog())) {
        Ok(()) => ok(state),
        Err(err) => failed(state, err),
    }
}

/// Record the learner's choice for the active exercise
pub fn select_answer(state: &AppState, choice: usize) -> StudyResponse {
    match state.with_session(|session| session.select_answer(choice, state.catalog())) {
        Ok(()) => ok(state),
        Err(err) => failed(state, err),
    }
}

/// Move to the next exercise
pub fn next_exercise(state: &AppState) -> StudyResponse {
    state.with_session(|session| session.next_exercise(state.catalog()));
    ok(state)
}

/// Move to the previous exercise
pub fn prev_exercise(state: &AppState) -> StudyResponse {
    state.with_session(|session| session.prev_exercise());
    ok(state)
}

/// Score the active section. Unavailable until every exercise is answered.
pub fn check_answers(state: &AppState) -> CheckResponse {
    state.with_session(|session| {
        let catalog = state.catalog();
        match session.check_answers(catalog) {
            Ok(score) => CheckResponse {
                success: true,
                error: None,
                score: Some(score),
                review: session.review(catalog),
            },
            Err(err) => CheckResponse {
                success: false,
                error: Some(err.to_string()),
                score: None,
                review: Vec::new(),
            },
        }
    })
}

/// Clear answers and score for a retry
pub fn reset_exercises(state: &AppState) -> StudyResponse {
    state.with_session(|session| session.reset_exercises());
    ok(state)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::tts::UnsupportedSynthesizer;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(UnsupportedSynthesizer))
    }

    #[test]
    fn test_initial_view() {
        let state = state();
        let view = study_view(&state);
        assert_eq!(view.filter, CategoryFilter::All);
        assert_eq!(view.phase, StudyPhase::Browsing);
        assert_eq!(view.section_index, 0);
        assert_eq!(view.exercise_total, 3); // Auxiliary Verbs
        assert!(!view.can_check);
    }

    #[test]
    fn test_list_sections_follows_filter() {
        let state = state();
        assert_eq!(list_sections(&state).len(), 13);

        let response = set_filter(&state, CategoryFilter::Vocabulary);
        assert!(response.success);
        let sections = list_sections(&state);
        assert_eq!(sections.len(), 8);
        assert!(sections.iter().all(|s| s.category == Category::Vocabulary));
        // active section jumped into the filtered set
        assert_eq!(response.view.category, Category::Vocabulary);
    }

    #[test]
    fn test_answer_and_check_flow() {
        let state = state();
        select_section(&state, 1).expect_success(); // Articles, 2 exercises

        let response = select_answer(&state, 0);
        assert!(response.success);
        assert_eq!(response.view.answered, 1);
        assert!(!response.view.can_check);

        // scoring is withheld while an exercise is unanswered
        let check = check_answers(&state);
        assert!(!check.success);
        assert!(check.error.unwrap().contains("1 of 2"));
        assert_eq!(check.score, None);

        next_exercise(&state);
        select_answer(&state, 1);
        let check = check_answers(&state);
        assert!(check.success);
        let score = check.score.unwrap();
        assert_eq!((score.correct_count, score.total), (2, 2));
        assert_eq!(check.review.len(), 2);
        assert!(check.review.iter().all(|r| r.is_correct));
        assert_eq!(study_view(&state).phase, StudyPhase::Results);
    }

    #[test]
    fn test_reset_returns_to_browsing() {
        let state = state();
        select_section(&state, 4).expect_success(); // Numbers
        select_answer(&state, 1);
        check_answers(&state);

        let response = reset_exercises(&state);
        assert!(response.success);
        assert_eq!(response.view.phase, StudyPhase::Browsing);
        assert_eq!(response.view.answered, 0);
        assert_eq!(response.view.score, None);
    }

    #[test]
    fn test_errors_surface_in_response() {
        let state = state();
        let response = select_section(&state, 99);
        assert!(!response.success);
        assert!(response.error.unwrap().contains("99"));

        let response = select_answer(&state, 42);
        assert!(!response.success);
        assert!(response.error.is_some());
    }

    #[test]
    fn test_section_content_shape() {
        let state = state();
        select_section(&state, 4).expect_success(); // Numbers
        let content = section_content(&state);
        assert_eq!(content.category, Category::Grammar);
        assert_eq!(content.content["kind"], "numbers");
        assert_eq!(content.content["entries"][3]["german"], "drei");
    }

    impl StudyResponse {
        fn expect_success(&self) {
            assert!(self.success, "command failed: {:?}", self.error);
        }
    }
}
