//! # almani-core - German A1 study guide core
//!
//! Pure Rust core of the Almani study guide for Arabic-speaking learners of
//! German:
//!
//! - **Content Catalog** - static German/Arabic vocabulary and grammar tables
//! - **Quiz Evaluator** - scoring of multiple-choice exercises
//! - **Study Session** - explicit, serializable navigation and answer state
//!
//! ## Design
//!
//! - **No I/O** - content is compiled in, lookups cannot fail
//! - **Explicit state** - the session is a plain serializable value, not
//!   ambient globals; every operation takes the catalog it navigates
//! - **Fully tested** - catalog invariants and scoring properties are
//!   verified by unit tests
//!
//! ## Modules
//!
//! - [`catalog`] - content tables and the ordered section list
//! - [`quiz`] - answer state, scoring, per-exercise review
//! - [`session`] - view state machine (browse → answer → results → reset)
//! - [`types`] - shared content and exercise types
//!
//! ## Example
//!
//! ```rust
//! use almani_core::{Catalog, StudySession};
//!
//! let catalog = Catalog::german_a1();
//! let mut session = StudySession::new();
//! session.select_section(4, &catalog).unwrap(); // Numbers
//! session.select_answer(1, &catalog).unwrap(); // "drei"
//! let score = session.check_answers(&catalog).unwrap();
//! assert_eq!((score.correct_count, score.total), (1, 1));
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod catalog;
pub mod quiz;
pub mod session;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export the shared types
pub use types::*;

/// Re-export the content catalog
pub use catalog::{Articles, AuxiliaryVerbs, Catalog, SectionContent};

/// Re-export the quiz evaluator
pub use quiz::{score, AnswerState, ExerciseReview, QuizError, QuizScore};

/// Re-export the study session
pub use session::{StudyPhase, StudySession};
