//! Content Catalog
//!
//! The static German A1 content set: vocabulary tables, grammar tables, and
//! the ordered section list with practice exercises. The catalog is built
//! once at startup and never mutated; content lookup is keyed by
//! [`ContentKey`] and cannot fail.

mod grammar;
mod sections;
mod vocabulary;

pub use grammar::{Articles, AuxiliaryVerbs};

use serde::Serialize;

use crate::types::{
    Adjective, ContentKey, NumberEntry, Pronoun, Section, VocabularyEntry,
};

/// Borrowed view of one content table, shaped per table kind
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "entries")]
pub enum SectionContent<'a> {
    /// A flat vocabulary list
    Vocabulary(&'a [VocabularyEntry]),
    /// sein/haben conjugation tables
    AuxiliaryVerbs(&'a AuxiliaryVerbs),
    /// Definite and indefinite article tables
    Articles(&'a Articles),
    /// Personal pronouns
    Pronouns(&'a [Pronoun]),
    /// Basic adjectives
    Adjectives(&'a [Adjective]),
    /// Numbers
    Numbers(&'a [NumberEntry]),
}

/// The complete content catalog.
///
/// Holds every content table plus the ordered section list. Immutable for
/// the process lifetime.
#[derive(Clone, Debug)]
pub struct Catalog {
    greetings: Vec<VocabularyEntry>,
    personal_info: Vec<VocabularyEntry>,
    family: Vec<VocabularyEntry>,
    colors: Vec<VocabularyEntry>,
    days_of_week: Vec<VocabularyEntry>,
    basic_verbs: Vec<VocabularyEntry>,
    common_questions: Vec<VocabularyEntry>,
    useful_phrases: Vec<VocabularyEntry>,
    auxiliary_verbs: AuxiliaryVerbs,
    articles: Articles,
    pronouns: Vec<Pronoun>,
    adjectives: Vec<Adjective>,
    numbers: Vec<NumberEntry>,
    sections: Vec<Section>,
}

impl Catalog {
    /// Build the German A1 catalog
    pub fn german_a1() -> Self {
        Self {
            greetings: vocabulary::greetings(),
            personal_info: vocabulary::personal_info(),
            family: vocabulary::family(),
            colors: vocabulary::colors(),
            days_of_week: vocabulary::days_of_week(),
            basic_verbs: vocabulary::basic_verbs(),
            common_questions: vocabulary::common_questions(),
            useful_phrases: vocabulary::useful_phrases(),
            auxiliary_verbs: grammar::auxiliary_verbs(),
            articles: grammar::articles(),
            pronouns: grammar::pronouns(),
            adjectives: grammar::adjectives(),
            numbers: grammar::numbers(),
            sections: sections::sections(),
        }
    }

    /// The ordered section list
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// One section by index
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// The content table behind a key.
    ///
    /// Total function: every key resolves to its table.
    pub fn content(&self, key: ContentKey) -> SectionContent<'_> {
        match key {
            ContentKey::Greetings => SectionContent::Vocabulary(&self.greetings),
            ContentKey::PersonalInfo => SectionContent::Vocabulary(&self.personal_info),
            ContentKey::Family => SectionContent::Vocabulary(&self.family),
            ContentKey::Colors => SectionContent::Vocabulary(&self.colors),
            ContentKey::DaysOfWeek => SectionContent::Vocabulary(&self.days_of_week),
            ContentKey::BasicVerbs => SectionContent::Vocabulary(&self.basic_verbs),
            ContentKey::CommonQuestions => SectionContent::Vocabulary(&self.common_questions),
            ContentKey::UsefulPhrases => SectionContent::Vocabulary(&self.useful_phrases),
            ContentKey::AuxiliaryVerbs => SectionContent::AuxiliaryVerbs(&self.auxiliary_verbs),
            ContentKey::Articles => SectionContent::Articles(&self.articles),
            ContentKey::Pronouns => SectionContent::Pronouns(&self.pronouns),
            ContentKey::Adjectives => SectionContent::Adjectives(&self.adjectives),
            ContentKey::Numbers => SectionContent::Numbers(&self.numbers),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::german_a1()
    }
}
