//! Content-type classifier.
//!
//! The server does not say what kind of content a request is about, so the
//! console infers it from the title.

use std::fmt;

use serde::Serialize;

/// Category inferred from a content title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentType {
    /// A tale.
    Conte,
    /// A proverb.
    Proverbe,
    /// A riddle.
    Devinette,
    /// A craft.
    Artisanat,
    /// Anything else.
    Autre,
}

impl ContentType {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Conte => "Conte",
            Self::Proverbe => "Proverbe",
            Self::Devinette => "Devinette",
            Self::Artisanat => "Artisanat",
            Self::Autre => "Autre",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keywords in priority order; the first contained keyword wins.
const KEYWORDS: [(&str, ContentType); 4] = [
    ("conte", ContentType::Conte),
    ("proverbe", ContentType::Proverbe),
    ("devinette", ContentType::Devinette),
    ("artisanat", ContentType::Artisanat),
];

/// Classifies a title by keyword containment, case-insensitively.
#[must_use]
pub fn classify(title: &str) -> ContentType {
    let lowered = title.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(ContentType::Autre, |&(_, content_type)| content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matches_each_keyword() {
        assert_eq!(classify("Conte des ancêtres"), ContentType::Conte);
        assert_eq!(classify("Proverbe du jour"), ContentType::Proverbe);
        assert_eq!(classify("La grande DEVINETTE"), ContentType::Devinette);
        assert_eq!(classify("Artisanat du fer"), ContentType::Artisanat);
    }

    #[test]
    fn test_classify_falls_back_to_autre() {
        assert_eq!(classify("Chant de récolte"), ContentType::Autre);
        assert_eq!(classify(""), ContentType::Autre);
    }

    #[test]
    fn test_classify_priority_order_when_several_keywords_appear() {
        assert_eq!(classify("Artisanat et proverbe"), ContentType::Proverbe);
        assert_eq!(classify("Devinette dans un conte"), ContentType::Conte);
        assert_eq!(classify("artisanat devinette"), ContentType::Devinette);
    }

    #[test]
    fn test_classify_matches_inside_words() {
        // "raconter" contains "conte".
        assert_eq!(classify("Raconter la nuit"), ContentType::Conte);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let title = "Proverbe peul";
        assert_eq!(classify(title), classify(title));
    }
}
