//! Vocabulary content tables
//!
//! German/Arabic vocabulary for the A1 level, one builder per table. The
//! pronunciation column is an Arabic-script transliteration aimed at
//! Arabic-speaking learners.

use crate::types::VocabularyEntry;

/// Greetings and politeness phrases
pub(crate) fn greetings() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("Hallo", "مرحبا", "هالو", "Informal greeting"),
        VocabularyEntry::new(
            "Guten Morgen",
            "صباح الخير",
            "غوتن مورغن",
            "Good morning (until ~10 AM)",
        ),
        VocabularyEntry::new(
            "Guten Tag",
            "نهارك سعيد",
            "غوتن تاغ",
            "Good day (10 AM - 6 PM)",
        ),
        VocabularyEntry::new(
            "Guten Abend",
            "مساء الخير",
            "غوتن آبنت",
            "Good evening (after 6 PM)",
        ),
        VocabularyEntry::new("Gute Nacht", "ليلة سعيدة", "غوته ناخت", "Good night"),
        VocabularyEntry::new(
            "Auf Wiedersehen",
            "إلى اللقاء",
            "أوف فيدرزهن",
            "Formal goodbye",
        ),
        VocabularyEntry::new("Tschüss", "مع السلامة", "تشووس", "Informal goodbye"),
        VocabularyEntry::new("Bitte", "من فضلك", "بِته", "Please"),
        VocabularyEntry::new("Danke", "شكرا", "دانكه", "Thank you"),
        VocabularyEntry::new("Entschuldigung", "عذرا", "إنتشولديغونغ", "Excuse me/Sorry"),
    ]
}

/// Introducing yourself
pub(crate) fn personal_info() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("Ich heiße...", "اسمي...", "إيخ هايسه...", "My name is..."),
        VocabularyEntry::new(
            "Wie heißen Sie?",
            "ما اسمك؟",
            "في هايسن زي؟",
            "What's your name? (formal)",
        ),
        VocabularyEntry::new(
            "Wie heißt du?",
            "ما اسمك؟",
            "في هايست دو؟",
            "What's your name? (informal)",
        ),
        VocabularyEntry::new("Ich bin...", "أنا...", "إيخ بين...", "I am..."),
        VocabularyEntry::new(
            "Ich komme aus...",
            "أنا من...",
            "إيخ كوَمه أوس...",
            "I come from...",
        ),
        VocabularyEntry::new(
            "Ich wohne in...",
            "أسكن في...",
            "إيخ فوهنه إين...",
            "I live in...",
        ),
        VocabularyEntry::new(
            "Wie alt sind Sie?",
            "كم عمرك؟",
            "في ألت زينت زي؟",
            "How old are you?",
        ),
        VocabularyEntry::new(
            "Ich bin ... Jahre alt",
            "عمري ... سنة",
            "إيخ بين ... ياهره ألت",
            "I am ... years old",
        ),
    ]
}

/// Family members and marital status
pub(crate) fn family() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("die Familie", "العائلة", "دي فاميليه", "Family"),
        VocabularyEntry::new("der Vater", "الأب", "دير فاتر", "Father"),
        VocabularyEntry::new("die Mutter", "الأم", "دي موتر", "Mother"),
        VocabularyEntry::new("der Sohn", "الابن", "دير زون", "Son"),
        VocabularyEntry::new("die Tochter", "البنت", "دي توختر", "Daughter"),
        VocabularyEntry::new("der Bruder", "الأخ", "دير برودر", "Brother"),
        VocabularyEntry::new("die Schwester", "الأخت", "دي شفستر", "Sister"),
        VocabularyEntry::new("die Eltern", "الوالدان", "دي إلترن", "Parents"),
        VocabularyEntry::new("verheiratet", "متزوج", "فرهايراتت", "Married"),
        VocabularyEntry::new("ledig", "أعزب", "لديخ", "Single"),
    ]
}

/// Basic colors
pub(crate) fn colors() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("rot", "أحمر", "روت", "Red"),
        VocabularyEntry::new("blau", "أزرق", "بلاو", "Blue"),
        VocabularyEntry::new("grün", "أخضر", "غروين", "Green"),
        VocabularyEntry::new("gelb", "أصفر", "غِلب", "Yellow"),
        VocabularyEntry::new("schwarz", "أسود", "شفارتس", "Black"),
        VocabularyEntry::new("weiß", "أبيض", "فايس", "White"),
        VocabularyEntry::new("grau", "رمادي", "غراو", "Gray"),
        VocabularyEntry::new("braun", "بني", "براون", "Brown"),
    ]
}

/// Days of the week
pub(crate) fn days_of_week() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("Montag", "الاثنين", "مونتاغ", "Monday"),
        VocabularyEntry::new("Dienstag", "الثلاثاء", "دينستاغ", "Tuesday"),
        VocabularyEntry::new("Mittwoch", "الأربعاء", "ميتووخ", "Wednesday"),
        VocabularyEntry::new("Donnerstag", "الخميس", "دونرشتاغ", "Thursday"),
        VocabularyEntry::new("Freitag", "الجمعة", "فرايتاغ", "Friday"),
        VocabularyEntry::new("Samstag", "السبت", "زامستاغ", "Saturday"),
        VocabularyEntry::new("Sonntag", "الأحد", "زونتاغ", "Sunday"),
    ]
}

/// High-frequency verbs in the infinitive
pub(crate) fn basic_verbs() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("sein", "يكون", "زاين", "To be"),
        VocabularyEntry::new("haben", "يملك", "هابن", "To have"),
        VocabularyEntry::new("gehen", "يذهب", "غيهن", "To go"),
        VocabularyEntry::new("kommen", "يأتي", "كومن", "To come"),
        VocabularyEntry::new("sprechen", "يتكلم", "شبريخن", "To speak"),
        VocabularyEntry::new("verstehen", "يفهم", "فرشتيهن", "To understand"),
        VocabularyEntry::new("lernen", "يتعلم", "ليرنن", "To learn"),
        VocabularyEntry::new("arbeiten", "يعمل", "أربايتن", "To work"),
        VocabularyEntry::new("wohnen", "يسكن", "فوهنن", "To live/reside"),
        VocabularyEntry::new("heißen", "يسمى", "هايسن", "To be called"),
    ]
}

/// Everyday questions
pub(crate) fn common_questions() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new(
            "Wie geht es Ihnen?",
            "كيف حالك؟",
            "في غيت إس إيهنن؟",
            "How are you? (formal)",
        ),
        VocabularyEntry::new(
            "Wie geht's?",
            "كيف الحال؟",
            "في غيتس؟",
            "How are you? (informal)",
        ),
        VocabularyEntry::new(
            "Wo wohnen Sie?",
            "أين تسكن؟",
            "فو فوهنن زي؟",
            "Where do you live?",
        ),
        VocabularyEntry::new(
            "Was machen Sie?",
            "ماذا تعمل؟",
            "فاس ماخن زي؟",
            "What do you do?",
        ),
        VocabularyEntry::new(
            "Sprechen Sie Deutsch?",
            "هل تتكلم الألمانية؟",
            "شبريخن زي دويتش؟",
            "Do you speak German?",
        ),
        VocabularyEntry::new(
            "Verstehen Sie?",
            "هل تفهم؟",
            "فرشتيهن زي؟",
            "Do you understand?",
        ),
    ]
}

/// Survival phrases for the classroom and beyond
pub(crate) fn useful_phrases() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new(
            "Ich verstehe nicht",
            "لا أفهم",
            "إيخ فرشتيهه نيخت",
            "I don't understand",
        ),
        VocabularyEntry::new(
            "Können Sie das wiederholen?",
            "هل يمكنك التكرار؟",
            "كونن زي داس فيدرهولن؟",
            "Can you repeat that?",
        ),
        VocabularyEntry::new(
            "Sprechen Sie langsamer?",
            "هل تتكلم ببطء؟",
            "شبريخن زي لانغزامر؟",
            "Can you speak slower?",
        ),
        VocabularyEntry::new("Wie bitte?", "عفوا؟", "في بِته؟", "Pardon? What?"),
        VocabularyEntry::new(
            "Keine Ahnung",
            "لا أعرف",
            "كاينه آهنونغ",
            "No idea/I don't know",
        ),
        VocabularyEntry::new(
            "Es tut mir leid",
            "أنا آسف",
            "إس توت مير لايت",
            "I'm sorry",
        ),
    ]
}
