//! Common Types
//!
//! Shared data structures used across the catalog, quiz, and session modules.
//! All content entry types are immutable records, built once at startup by the
//! catalog and never mutated afterwards.

use serde::{Deserialize, Serialize};

// ==================== Categories ====================

/// Section category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Grammar rules (conjugation tables, articles, pronouns, ...)
    Grammar,
    /// Vocabulary sets (greetings, family, colors, ...)
    Vocabulary,
}

/// Category filter for the section navigation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Show every section
    #[default]
    All,
    /// Grammar sections only
    Grammar,
    /// Vocabulary sections only
    Vocabulary,
}

impl CategoryFilter {
    /// Whether a section with the given category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Grammar => category == Category::Grammar,
            CategoryFilter::Vocabulary => category == Category::Vocabulary,
        }
    }
}

// ==================== Content Keys ====================

/// Key identifying one content table in the catalog.
///
/// Every key resolves to exactly one table, so content lookup is total and
/// has no error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKey {
    Greetings,
    PersonalInfo,
    Family,
    Colors,
    DaysOfWeek,
    BasicVerbs,
    CommonQuestions,
    UsefulPhrases,
    AuxiliaryVerbs,
    Articles,
    Pronouns,
    Adjectives,
    Numbers,
}

impl ContentKey {
    /// All keys, in catalog order
    pub const ALL: [ContentKey; 13] = [
        ContentKey::Greetings,
        ContentKey::PersonalInfo,
        ContentKey::Family,
        ContentKey::Colors,
        ContentKey::DaysOfWeek,
        ContentKey::BasicVerbs,
        ContentKey::CommonQuestions,
        ContentKey::UsefulPhrases,
        ContentKey::AuxiliaryVerbs,
        ContentKey::Articles,
        ContentKey::Pronouns,
        ContentKey::Adjectives,
        ContentKey::Numbers,
    ];
}

// ==================== Content Entries ====================

/// One vocabulary entry: German term, Arabic translation, Arabic-script
/// pronunciation hint, and a short usage note
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// German term
    pub german: String,
    /// Arabic translation
    pub arabic: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
    /// Usage note / English gloss
    pub context: String,
}

impl VocabularyEntry {
    pub fn new(
        german: impl Into<String>,
        arabic: impl Into<String>,
        pronunciation: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            german: german.into(),
            arabic: arabic.into(),
            pronunciation: pronunciation.into(),
            context: context.into(),
        }
    }
}

/// One row of a verb conjugation table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    /// Personal pronoun (ich, du, ...)
    pub pronoun: String,
    /// Conjugated verb form
    pub form: String,
    /// Arabic translation of the full phrase
    pub arabic: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
}

impl Conjugation {
    pub fn new(
        pronoun: impl Into<String>,
        form: impl Into<String>,
        arabic: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        Self {
            pronoun: pronoun.into(),
            form: form.into(),
            arabic: arabic.into(),
            pronunciation: pronunciation.into(),
        }
    }
}

/// One row of the definite article table (der/die/das)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefiniteArticle {
    /// Grammatical gender (maskulin, feminin, neutral)
    pub gender: String,
    /// Singular form
    pub singular: String,
    /// Plural form
    pub plural: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
}

/// One row of the indefinite article table (ein/eine)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndefiniteArticle {
    /// Grammatical gender (maskulin, feminin, neutral)
    pub gender: String,
    /// Article form
    pub form: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
}

/// One personal pronoun
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronoun {
    /// German pronoun
    pub german: String,
    /// Arabic translation
    pub arabic: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
}

impl Pronoun {
    pub fn new(
        german: impl Into<String>,
        arabic: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        Self {
            german: german.into(),
            arabic: arabic.into(),
            pronunciation: pronunciation.into(),
        }
    }
}

/// One basic adjective
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective {
    /// German adjective
    pub german: String,
    /// Arabic translation
    pub arabic: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
}

impl Adjective {
    pub fn new(
        german: impl Into<String>,
        arabic: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        Self {
            german: german.into(),
            arabic: arabic.into(),
            pronunciation: pronunciation.into(),
        }
    }
}

/// One number entry (digit plus German word)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberEntry {
    /// The numeric value
    pub number: u32,
    /// German number word
    pub german: String,
    /// Arabic translation
    pub arabic: String,
    /// Pronunciation hint in Arabic script
    pub pronunciation: String,
}

impl NumberEntry {
    pub fn new(
        number: u32,
        german: impl Into<String>,
        arabic: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        Self {
            number,
            german: german.into(),
            arabic: arabic.into(),
            pronunciation: pronunciation.into(),
        }
    }
}

// ==================== Exercises and Sections ====================

/// Kind of multiple-choice exercise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Fill in the conjugated verb form
    Conjugation,
    /// Choose the correct article
    Article,
    /// Translate a word or phrase
    Translation,
    /// Name a number
    Number,
}

/// One multiple-choice exercise.
///
/// Invariant: `correct` is a valid index into `options`, and `options` holds
/// at least two entries. The built-in catalog satisfies this by construction
/// (verified by tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise kind
    pub kind: ExerciseKind,
    /// The question text shown to the learner
    pub question: String,
    /// Answer options, in display order
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct: usize,
    /// Explanation shown with the results
    pub explanation: String,
}

impl Exercise {
    pub fn new(
        kind: ExerciseKind,
        question: impl Into<String>,
        options: &[&str],
        correct: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
            explanation: explanation.into(),
        }
    }
}

/// One study section: a titled unit of content with its practice exercises.
///
/// Invariant: every section has at least one exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display title (English with Arabic gloss)
    pub title: String,
    /// Key of the content table this section displays
    pub content: ContentKey,
    /// Section category
    pub category: Category,
    /// Practice exercises, in order
    pub exercises: Vec<Exercise>,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    // ============ CategoryFilter::matches() ============

    #[test]
    fn test_filter_all_matches_everything() {
        assert!(CategoryFilter::All.matches(Category::Grammar));
        assert!(CategoryFilter::All.matches(Category::Vocabulary));
    }

    #[test]
    fn test_filter_grammar_matches_only_grammar() {
        assert!(CategoryFilter::Grammar.matches(Category::Grammar));
        assert!(!CategoryFilter::Grammar.matches(Category::Vocabulary));
    }

    #[test]
    fn test_filter_vocabulary_matches_only_vocabulary() {
        assert!(CategoryFilter::Vocabulary.matches(Category::Vocabulary));
        assert!(!CategoryFilter::Vocabulary.matches(Category::Grammar));
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    // ============ Serialization ============

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Grammar).unwrap(),
            "\"grammar\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Vocabulary).unwrap(),
            "\"vocabulary\""
        );
    }

    #[test]
    fn test_content_key_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&ContentKey::DaysOfWeek).unwrap(),
            "\"daysOfWeek\""
        );
        assert_eq!(
            serde_json::to_string(&ContentKey::AuxiliaryVerbs).unwrap(),
            "\"auxiliaryVerbs\""
        );
    }

    #[test]
    fn test_exercise_round_trip() {
        let ex = Exercise::new(
            ExerciseKind::Number,
            "What is '3' in German?",
            &["zwei", "drei", "vier", "fünf"],
            1,
            "3 = drei",
        );
        let json = serde_json::to_string(&ex).unwrap();
        let back: Exercise = serde_json::from_str(&json).unwrap();
        assert_eq!(ex, back);
    }

    #[test]
    fn test_content_key_all_is_exhaustive_and_unique() {
        for (i, a) in ContentKey::ALL.iter().enumerate() {
            for b in ContentKey::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
