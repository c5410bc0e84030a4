//! Study Session
//!
//! The explicit, serializable view state: active section, active exercise,
//! category filter, recorded answers, and the score once checked. All
//! transitions are synchronous; the session never holds content itself, so
//! every operation takes the [`Catalog`] it navigates.
//!
//! The flow is linear: browsing → answering → viewing results → reset.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::quiz::{self, AnswerState, ExerciseReview, QuizError, QuizScore};
use crate::types::{CategoryFilter, Section};

/// Where the learner currently is in the section's quiz flow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyPhase {
    /// Viewing content, no answer recorded yet
    Browsing,
    /// At least one answer recorded, score not yet checked
    Answering,
    /// Score checked, results visible
    Results,
}

/// Serializable study session state.
///
/// Holds indices into the catalog rather than content. Switching section or
/// filter performs a full reset of answers, exercise index, and score, so
/// answer state never leaks between sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    current_section: usize,
    current_exercise: usize,
    filter: CategoryFilter,
    answers: AnswerState,
    score: Option<QuizScore>,
}

impl StudySession {
    /// Fresh session: first section, first exercise, no filter, no answers
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn current_section(&self) -> usize {
        self.current_section
    }

    pub fn current_exercise(&self) -> usize {
        self.current_exercise
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn score(&self) -> Option<QuizScore> {
        self.score
    }

    /// Current phase of the quiz flow
    pub fn phase(&self) -> StudyPhase {
        if self.score.is_some() {
            StudyPhase::Results
        } else if self.answers.is_empty() {
            StudyPhase::Browsing
        } else {
            StudyPhase::Answering
        }
    }

    /// The sections visible under the active filter, with their catalog
    /// indices. Stable: original catalog order is preserved.
    pub fn filtered_sections<'a>(&self, catalog: &'a Catalog) -> Vec<(usize, &'a Section)> {
        catalog
            .sections()
            .iter()
            .enumerate()
            .filter(|(_, s)| self.filter.matches(s.category))
            .collect()
    }

    /// How many exercises of the active section have an answer
    pub fn answered_count(&self) -> usize {
        self.answers.answered_count(self.current_section)
    }

    /// Whether the scoring action is available (every exercise answered)
    pub fn can_check(&self, catalog: &Catalog) -> bool {
        let total = self.exercise_total(catalog);
        total > 0 && self.answered_count() == total
    }

    // ==================== Navigation ====================

    /// Switch the category filter. Jumps to the first section visible under
    /// the new filter and fully resets the quiz state.
    pub fn set_filter(&mut self, filter: CategoryFilter, catalog: &Catalog) {
        self.filter = filter;
        self.current_section = catalog
            .sections()
            .iter()
            .position(|s| filter.matches(s.category))
            .unwrap_or(0);
        self.reset_exercises();
    }

    /// Switch the active section (index into the full section list) and
    /// fully reset the quiz state.
    pub fn select_section(&mut self, index: usize, catalog: &Catalog) -> Result<(), QuizError> {
        if catalog.section(index).is_none() {
            return Err(QuizError::UnknownSection(index));
        }
        self.current_section = index;
        self.reset_exercises();
        Ok(())
    }

    /// Move to the next exercise (clamped at the last one)
    pub fn next_exercise(&mut self, catalog: &Catalog) {
        let last = self.exercise_total(catalog).saturating_sub(1);
        self.current_exercise = (self.current_exercise + 1).min(last);
    }

    /// Move to the previous exercise (clamped at the first one)
    pub fn prev_exercise(&mut self) {
        self.current_exercise = self.current_exercise.saturating_sub(1);
    }

    // ==================== Answering ====================

    /// Record the learner's choice for the active exercise
    pub fn select_answer(&mut self, choice: usize, catalog: &Catalog) -> Result<(), QuizError> {
        let section = catalog
            .section(self.current_section)
            .ok_or(QuizError::UnknownSection(self.current_section))?;
        let exercise = &section.exercises[self.current_exercise];
        if choice >= exercise.options.len() {
            return Err(QuizError::InvalidOption {
                choice,
                available: exercise.options.len(),
            });
        }
        self.answers
            .record(self.current_section, self.current_exercise, choice);
        Ok(())
    }

    /// Score the active section.
    ///
    /// Withheld until every exercise is answered: returns
    /// [`QuizError::Incomplete`] otherwise.
    pub fn check_answers(&mut self, catalog: &Catalog) -> Result<QuizScore, QuizError> {
        let section = catalog
            .section(self.current_section)
            .ok_or(QuizError::UnknownSection(self.current_section))?;
        let total = section.exercises.len();
        let answered = self.answered_count();
        if answered < total {
            return Err(QuizError::Incomplete { answered, total });
        }
        let score = quiz::score(&section.exercises, &self.answers, self.current_section);
        self.score = Some(score);
        Ok(score)
    }

    /// Per-exercise review of the active section
    pub fn review(&self, catalog: &Catalog) -> Vec<ExerciseReview> {
        match catalog.section(self.current_section) {
            Some(section) => quiz::review(&section.exercises, &self.answers, self.current_section),
            None => Vec::new(),
        }
    }

    /// Clear answers and score, back to the first exercise
    pub fn reset_exercises(&mut self) {
        self.answers.clear();
        self.score = None;
        self.current_exercise = 0;
    }

    fn exercise_total(&self, catalog: &Catalog) -> usize {
        catalog
            .section(self.current_section)
            .map_or(0, |s| s.exercises.len())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn setup() -> (Catalog, StudySession) {
        (Catalog::german_a1(), StudySession::new())
    }

    // ============ Filtering ============

    #[test]
    fn test_filter_is_stable_and_superset() {
        let (catalog, mut session) = setup();
        let all: Vec<usize> = session
            .filtered_sections(&catalog)
            .iter()
            .map(|(i, _)| *i)
            .collect();

        session.set_filter(CategoryFilter::Grammar, &catalog);
        let grammar: Vec<usize> = session
            .filtered_sections(&catalog)
            .iter()
            .map(|(i, _)| *i)
            .collect();

        // filtered indices appear in the same relative order as in `all`
        assert!(grammar.windows(2).all(|w| w[0] < w[1]));
        assert!(grammar.iter().all(|i| all.contains(i)));

        // re-filtering by All restores the original ordered superset
        session.set_filter(CategoryFilter::All, &catalog);
        let again: Vec<usize> = session
            .filtered_sections(&catalog)
            .iter()
            .map(|(i, _)| *i)
            .collect();
        assert_eq!(all, again);
    }

    #[test]
    fn test_filter_shows_only_matching_categories() {
        let (catalog, mut session) = setup();
        session.set_filter(CategoryFilter::Vocabulary, &catalog);
        for (_, section) in session.filtered_sections(&catalog) {
            assert_eq!(section.category, Category::Vocabulary);
        }
        // active section jumped to the first vocabulary section
        let active = catalog.section(session.current_section()).unwrap();
        assert_eq!(active.category, Category::Vocabulary);
    }

    #[test]
    fn test_filter_change_resets_quiz_state() {
        let (catalog, mut session) = setup();
        session.select_answer(0, &catalog).unwrap();
        assert_eq!(session.phase(), StudyPhase::Answering);

        session.set_filter(CategoryFilter::Grammar, &catalog);
        assert_eq!(session.phase(), StudyPhase::Browsing);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.current_exercise(), 0);
    }

    // ============ Section switching ============

    #[test]
    fn test_section_switch_never_leaks_answers() {
        let (catalog, mut session) = setup();
        session.select_answer(0, &catalog).unwrap();

        session.select_section(4, &catalog).unwrap(); // Numbers
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.score(), None);

        // answering and scoring in the new section sees only its own answers
        session.select_answer(1, &catalog).unwrap();
        let score = session.check_answers(&catalog).unwrap();
        assert_eq!(score.correct_count, 1);
        assert_eq!(score.total, 1);
    }

    #[test]
    fn test_select_section_out_of_range() {
        let (catalog, mut session) = setup();
        assert_eq!(
            session.select_section(99, &catalog),
            Err(QuizError::UnknownSection(99))
        );
    }

    // ============ Exercise navigation ============

    #[test]
    fn test_exercise_navigation_is_clamped() {
        let (catalog, mut session) = setup();
        // section 0 (Auxiliary Verbs) has 3 exercises
        session.prev_exercise();
        assert_eq!(session.current_exercise(), 0);
        session.next_exercise(&catalog);
        session.next_exercise(&catalog);
        session.next_exercise(&catalog);
        assert_eq!(session.current_exercise(), 2);
        session.prev_exercise();
        assert_eq!(session.current_exercise(), 1);
    }

    // ============ Answering and scoring ============

    #[test]
    fn test_invalid_option_is_rejected() {
        let (catalog, mut session) = setup();
        let err = session.select_answer(9, &catalog).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidOption {
                choice: 9,
                available: 4
            }
        );
    }

    #[test]
    fn test_check_is_withheld_until_all_answered() {
        let (catalog, mut session) = setup();
        // section 1 (Articles) has 2 exercises
        session.select_section(1, &catalog).unwrap();
        session.select_answer(0, &catalog).unwrap();

        assert!(!session.can_check(&catalog));
        assert_eq!(
            session.check_answers(&catalog),
            Err(QuizError::Incomplete {
                answered: 1,
                total: 2
            })
        );
        assert_eq!(session.phase(), StudyPhase::Answering);

        session.next_exercise(&catalog);
        session.select_answer(1, &catalog).unwrap();
        assert!(session.can_check(&catalog));
        let score = session.check_answers(&catalog).unwrap();
        assert_eq!(score.correct_count, 2);
        assert_eq!(session.phase(), StudyPhase::Results);
    }

    #[test]
    fn test_reset_clears_answers_and_score() {
        let (catalog, mut session) = setup();
        session.select_section(4, &catalog).unwrap(); // Numbers, 1 exercise
        session.select_answer(1, &catalog).unwrap();
        session.check_answers(&catalog).unwrap();
        assert!(session.score().is_some());

        session.reset_exercises();
        assert_eq!(session.score(), None);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.current_exercise(), 0);
        assert_eq!(session.phase(), StudyPhase::Browsing);
    }

    #[test]
    fn test_review_after_check() {
        let (catalog, mut session) = setup();
        session.select_section(4, &catalog).unwrap();
        session.select_answer(0, &catalog).unwrap(); // wrong: "zwei"
        session.check_answers(&catalog).unwrap();

        let reviews = session.review(&catalog);
        assert_eq!(reviews.len(), 1);
        assert!(!reviews[0].is_correct);
        assert_eq!(reviews[0].chosen_option.as_deref(), Some("zwei"));
        assert_eq!(reviews[0].correct_option, "drei");
    }

    // ============ Serialization ============

    #[test]
    fn test_session_round_trips_through_json() {
        let (catalog, mut session) = setup();
        session.set_filter(CategoryFilter::Grammar, &catalog);
        session.select_answer(0, &catalog).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let back: StudySession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
        assert_eq!(back.phase(), StudyPhase::Answering);
    }
}
