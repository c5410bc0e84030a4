//! Grammar content tables
//!
//! Conjugation tables for the auxiliary verbs, article tables, personal
//! pronouns, basic adjectives, and numbers. Shapes follow the printed A1
//! grammar material the content was sourced from.

use crate::types::{
    Adjective, Conjugation, DefiniteArticle, IndefiniteArticle, NumberEntry, Pronoun,
};

/// Conjugation tables for the two auxiliary verbs, sein and haben
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuxiliaryVerbs {
    /// sein (to be)
    pub sein: Vec<Conjugation>,
    /// haben (to have)
    pub haben: Vec<Conjugation>,
}

/// Definite and indefinite article tables
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Articles {
    /// der/die/das with plural forms
    pub definite: Vec<DefiniteArticle>,
    /// ein/eine
    pub indefinite: Vec<IndefiniteArticle>,
}

pub(crate) fn auxiliary_verbs() -> AuxiliaryVerbs {
    AuxiliaryVerbs {
        sein: vec![
            Conjugation::new("ich", "bin", "أنا أكون", "إيخ بين"),
            Conjugation::new("du", "bist", "أنت تكون", "دو بِشت"),
            Conjugation::new("er/sie/es", "ist", "هو/هي يكون", "إير/زي/إس إشت"),
            Conjugation::new("wir", "sind", "نحن نكون", "فير زينت"),
            Conjugation::new("ihr", "seid", "أنتم تكونون", "إير زايت"),
            Conjugation::new("sie/Sie", "sind", "هم يكونون", "زي زينت"),
        ],
        haben: vec![
            Conjugation::new("ich", "habe", "أنا أملك", "إيخ هابه"),
            Conjugation::new("du", "hast", "أنت تملك", "دو هاشت"),
            Conjugation::new("er/sie/es", "hat", "هو/هي يملك", "إير/زي/إس هات"),
            Conjugation::new("wir", "haben", "نحن نملك", "فير هابن"),
            Conjugation::new("ihr", "habt", "أنتم تملكون", "إير هابت"),
            Conjugation::new("sie/Sie", "haben", "هم يملكون", "زي هابن"),
        ],
    }
}

pub(crate) fn articles() -> Articles {
    Articles {
        definite: vec![
            DefiniteArticle {
                gender: "maskulin".to_string(),
                singular: "der".to_string(),
                plural: "die".to_string(),
                pronunciation: "دير/دي".to_string(),
            },
            DefiniteArticle {
                gender: "feminin".to_string(),
                singular: "die".to_string(),
                plural: "die".to_string(),
                pronunciation: "دي/دي".to_string(),
            },
            DefiniteArticle {
                gender: "neutral".to_string(),
                singular: "das".to_string(),
                plural: "die".to_string(),
                pronunciation: "داس/دي".to_string(),
            },
        ],
        indefinite: vec![
            IndefiniteArticle {
                gender: "maskulin".to_string(),
                form: "ein".to_string(),
                pronunciation: "أين".to_string(),
            },
            IndefiniteArticle {
                gender: "feminin".to_string(),
                form: "eine".to_string(),
                pronunciation: "أينه".to_string(),
            },
            IndefiniteArticle {
                gender: "neutral".to_string(),
                form: "ein".to_string(),
                pronunciation: "أين".to_string(),
            },
        ],
    }
}

pub(crate) fn pronouns() -> Vec<Pronoun> {
    vec![
        Pronoun::new("ich", "أنا", "إيخ"),
        Pronoun::new("du", "أنت", "دو"),
        Pronoun::new("er", "هو", "إير"),
        Pronoun::new("sie", "هي", "زي"),
        Pronoun::new("es", "هو (غير عاقل)", "إس"),
        Pronoun::new("wir", "نحن", "فير"),
        Pronoun::new("ihr", "أنتم", "إير"),
        Pronoun::new("sie/Sie", "هم/أنتم (مهذب)", "زي"),
    ]
}

pub(crate) fn adjectives() -> Vec<Adjective> {
    vec![
        Adjective::new("groß", "كبير", "غروس"),
        Adjective::new("klein", "صغير", "كلاين"),
        Adjective::new("gut", "جيد", "غوت"),
        Adjective::new("schlecht", "سيء", "شلِخت"),
        Adjective::new("neu", "جديد", "نوي"),
        Adjective::new("alt", "قديم", "ألت"),
        Adjective::new("schön", "جميل", "شوين"),
        Adjective::new("schnell", "سريع", "شنِل"),
    ]
}

pub(crate) fn numbers() -> Vec<NumberEntry> {
    vec![
        NumberEntry::new(0, "null", "صفر", "نول"),
        NumberEntry::new(1, "eins", "واحد", "أينس"),
        NumberEntry::new(2, "zwei", "اثنان", "تسفاي"),
        NumberEntry::new(3, "drei", "ثلاثة", "دراي"),
        NumberEntry::new(4, "vier", "أربعة", "فير"),
        NumberEntry::new(5, "fünf", "خمسة", "فونف"),
        NumberEntry::new(6, "sechs", "ستة", "زِكس"),
        NumberEntry::new(7, "sieben", "سبعة", "زيبن"),
        NumberEntry::new(8, "acht", "ثمانية", "أخت"),
        NumberEntry::new(9, "neun", "تسعة", "نوين"),
        NumberEntry::new(10, "zehn", "عشرة", "تسين"),
        NumberEntry::new(11, "elf", "أحد عشر", "إلف"),
        NumberEntry::new(12, "zwölf", "اثنا عشر", "تسفولف"),
        NumberEntry::new(20, "zwanzig", "عشرون", "تسفانتسيخ"),
    ]
}
