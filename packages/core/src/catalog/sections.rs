//! Section definitions
//!
//! The ordered list of study sections: grammar first, vocabulary second, each
//! section tied to one content table and carrying its practice exercises.

use crate::types::{Category, ContentKey, Exercise, ExerciseKind, Section};

pub(crate) fn sections() -> Vec<Section> {
    vec![
        // ==================== Grammar ====================
        Section {
            title: "Auxiliary Verbs (الأفعال المساعدة)".to_string(),
            content: ContentKey::AuxiliaryVerbs,
            category: Category::Grammar,
            exercises: vec![
                Exercise::new(
                    ExerciseKind::Conjugation,
                    "Complete: Ich ___ Student.",
                    &["bin", "bist", "ist", "sind"],
                    0,
                    "With \"ich\" we use \"bin\" - أنا طالب",
                ),
                Exercise::new(
                    ExerciseKind::Conjugation,
                    "Complete: Du ___ schön.",
                    &["bin", "bist", "ist", "sind"],
                    1,
                    "With \"du\" we use \"bist\" - أنت جميل",
                ),
                Exercise::new(
                    ExerciseKind::Conjugation,
                    "Complete: Ich ___ einen Hund.",
                    &["habe", "hast", "hat", "haben"],
                    0,
                    "With \"ich\" we use \"habe\" - أنا أملك كلباً",
                ),
            ],
        },
        Section {
            title: "Articles (الأدوات)".to_string(),
            content: ContentKey::Articles,
            category: Category::Grammar,
            exercises: vec![
                Exercise::new(
                    ExerciseKind::Article,
                    "Choose the correct article: ___ Mann",
                    &["der", "die", "das"],
                    0,
                    "Mann is masculine, so we use \"der\"",
                ),
                Exercise::new(
                    ExerciseKind::Article,
                    "Choose the correct article: ___ Frau",
                    &["der", "die", "das"],
                    1,
                    "Frau is feminine, so we use \"die\"",
                ),
            ],
        },
        Section {
            title: "Pronouns (الضمائر)".to_string(),
            content: ContentKey::Pronouns,
            category: Category::Grammar,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What is the German for \"أنا\"?",
                &["ich", "du", "er", "wir"],
                0,
                "أنا = ich",
            )],
        },
        Section {
            title: "Adjectives (الصفات)".to_string(),
            content: ContentKey::Adjectives,
            category: Category::Grammar,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What is \"big\" in German?",
                &["klein", "groß", "gut", "alt"],
                1,
                "big = groß (غروس)",
            )],
        },
        Section {
            title: "Numbers (الأرقام)".to_string(),
            content: ContentKey::Numbers,
            category: Category::Grammar,
            exercises: vec![Exercise::new(
                ExerciseKind::Number,
                "What is \"3\" in German?",
                &["zwei", "drei", "vier", "fünf"],
                1,
                "3 = drei (دراي)",
            )],
        },
        // ==================== Vocabulary ====================
        Section {
            title: "Greetings (التحيات)".to_string(),
            content: ContentKey::Greetings,
            category: Category::Vocabulary,
            exercises: vec![
                Exercise::new(
                    ExerciseKind::Translation,
                    "How do you say \"Good morning\" in German?",
                    &["Guten Tag", "Guten Morgen", "Guten Abend", "Gute Nacht"],
                    1,
                    "Good morning = Guten Morgen (غوتن مورغن)",
                ),
                Exercise::new(
                    ExerciseKind::Translation,
                    "What does \"Auf Wiedersehen\" mean?",
                    &["Hello", "Good night", "Formal goodbye", "Thank you"],
                    2,
                    "Auf Wiedersehen = Formal goodbye (أوف فيدرزهن)",
                ),
            ],
        },
        Section {
            title: "Personal Info (المعلومات الشخصية)".to_string(),
            content: ContentKey::PersonalInfo,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "How do you ask \"What's your name?\" formally?",
                &[
                    "Wie heißt du?",
                    "Wie heißen Sie?",
                    "Wie geht es?",
                    "Wo wohnen Sie?",
                ],
                1,
                "Formal: Wie heißen Sie? (في هايسن زي؟)",
            )],
        },
        Section {
            title: "Family (العائلة)".to_string(),
            content: ContentKey::Family,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What is \"mother\" in German?",
                &["der Vater", "die Mutter", "die Schwester", "die Tochter"],
                1,
                "Mother = die Mutter (دي موتر)",
            )],
        },
        Section {
            title: "Colors (الألوان)".to_string(),
            content: ContentKey::Colors,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What color is \"blau\"?",
                &["Red", "Blue", "Green", "Yellow"],
                1,
                "blau = blue (بلاو)",
            )],
        },
        Section {
            title: "Days of Week (أيام الأسبوع)".to_string(),
            content: ContentKey::DaysOfWeek,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What day is \"Montag\"?",
                &["Sunday", "Monday", "Tuesday", "Wednesday"],
                1,
                "Montag = Monday (مونتاغ)",
            )],
        },
        Section {
            title: "Basic Verbs (الأفعال الأساسية)".to_string(),
            content: ContentKey::BasicVerbs,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What does \"verstehen\" mean?",
                &["to speak", "to understand", "to learn", "to work"],
                1,
                "verstehen = to understand (فرشتيهن)",
            )],
        },
        Section {
            title: "Common Questions (الأسئلة الشائعة)".to_string(),
            content: ContentKey::CommonQuestions,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "What does \"Wo wohnen Sie?\" mean?",
                &[
                    "How are you?",
                    "What do you do?",
                    "Where do you live?",
                    "How old are you?",
                ],
                2,
                "Wo wohnen Sie? = Where do you live? (فو فوهنن زي؟)",
            )],
        },
        Section {
            title: "Useful Phrases (العبارات المفيدة)".to_string(),
            content: ContentKey::UsefulPhrases,
            category: Category::Vocabulary,
            exercises: vec![Exercise::new(
                ExerciseKind::Translation,
                "How do you say \"I don't understand\"?",
                &[
                    "Ich verstehe nicht",
                    "Sprechen Sie langsamer?",
                    "Wie bitte?",
                    "Es tut mir leid",
                ],
                0,
                "I don't understand = Ich verstehe nicht (إيخ فرشتيهه نيخت)",
            )],
        },
    ]
}
