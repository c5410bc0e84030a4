//! Quiz Evaluator
//!
//! Pure scoring over a section's exercise list and the recorded answers.
//! Unanswered exercises never count as correct; scoring is a reduction with
//! no ordering sensitivity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Exercise;

// ==================== Answer State ====================

/// Recorded answers, keyed by (section index, exercise index).
///
/// Created empty, populated while the learner answers, and cleared whenever
/// the active section changes or a retry is requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerState {
    answers: BTreeMap<usize, BTreeMap<usize, usize>>,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the chosen option for one exercise
    pub fn record(&mut self, section: usize, exercise: usize, choice: usize) {
        self.answers
            .entry(section)
            .or_default()
            .insert(exercise, choice);
    }

    /// The recorded choice for one exercise, if any
    pub fn get(&self, section: usize, exercise: usize) -> Option<usize> {
        self.answers.get(&section)?.get(&exercise).copied()
    }

    /// How many exercises of the given section have a recorded answer
    pub fn answered_count(&self, section: usize) -> usize {
        self.answers.get(&section).map_or(0, BTreeMap::len)
    }

    /// Drop every recorded answer
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.answers.values().all(BTreeMap::is_empty)
    }
}

// ==================== Scoring ====================

/// Aggregate quiz result for one section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    /// Number of correctly answered exercises
    pub correct_count: usize,
    /// Total number of exercises in the section
    pub total: usize,
}

/// Per-exercise review record for the results view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseReview {
    /// The question text
    pub question: String,
    /// Index the learner chose, if any
    pub chosen: Option<usize>,
    /// Text of the chosen option, if any
    pub chosen_option: Option<String>,
    /// Index of the correct option
    pub correct: usize,
    /// Text of the correct option
    pub correct_option: String,
    /// Whether the chosen answer was correct
    pub is_correct: bool,
    /// Explanation shown with the result
    pub explanation: String,
}

/// Score a section's exercises against the recorded answers.
///
/// An exercise counts as correct iff a recorded answer exists and equals the
/// exercise's correct index; absent answers are incorrect.
pub fn score(exercises: &[Exercise], answers: &AnswerState, section: usize) -> QuizScore {
    let correct_count = exercises
        .iter()
        .enumerate()
        .filter(|(i, exercise)| answers.get(section, *i) == Some(exercise.correct))
        .count();
    QuizScore {
        correct_count,
        total: exercises.len(),
    }
}

/// Build the per-exercise review list for a section
pub fn review(exercises: &[Exercise], answers: &AnswerState, section: usize) -> Vec<ExerciseReview> {
    exercises
        .iter()
        .enumerate()
        .map(|(i, exercise)| {
            let chosen = answers.get(section, i);
            ExerciseReview {
                question: exercise.question.clone(),
                chosen,
                chosen_option: chosen.and_then(|c| exercise.options.get(c).cloned()),
                correct: exercise.correct,
                correct_option: exercise.options[exercise.correct].clone(),
                is_correct: chosen == Some(exercise.correct),
                explanation: exercise.explanation.clone(),
            }
        })
        .collect()
}

// ==================== Errors ====================

/// Quiz/session error type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizError {
    /// Scoring was requested before every exercise was answered
    Incomplete { answered: usize, total: usize },
    /// Section index out of range
    UnknownSection(usize),
    /// Chosen option index out of range for the current exercise
    InvalidOption { choice: usize, available: usize },
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Incomplete { answered, total } => {
                write!(f, "only {answered} of {total} exercises answered")
            }
            QuizError::UnknownSection(index) => write!(f, "unknown section index: {index}"),
            QuizError::InvalidOption { choice, available } => {
                write!(f, "option {choice} out of range ({available} options)")
            }
        }
    }
}

impl std::error::Error for QuizError {}

// ==================== Tests ====================
