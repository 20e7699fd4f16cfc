//! Language agreement between two texts.
//!
//! Identification is pluggable through [`LanguageIdentifier`]. An
//! inconclusive identification is an ordinary outcome ([`LanguageTag::Unknown`])
//! and always counts as "not the same language".

use whatlang::Detector;

/// Outcome of identifying one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageTag {
    Known(String),
    Unknown,
}

impl LanguageTag {
    pub fn known(code: impl Into<String>) -> Self {
        Self::Known(code.into())
    }
}

pub trait LanguageIdentifier {
    fn identify(&self, text: &str) -> LanguageTag;
}

/// Trigram-based identification backed by `whatlang`.
pub struct WhatlangIdentifier {
    detector: Detector,
    min_confidence: f64,
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl WhatlangIdentifier {
    /// Detections scoring below `min_confidence` are reported as unknown.
    pub fn new(min_confidence: f64) -> Self {
        Self {
            detector: Detector::new(),
            min_confidence,
        }
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, text: &str) -> LanguageTag {
        match self.detector.detect(text) {
            Some(info) if info.confidence() >= self.min_confidence => {
                LanguageTag::Known(info.lang().code().to_string())
            }
            Some(info) => {
                log::trace!(
                    "Discarding low-confidence detection {} ({:.2})",
                    info.lang().code(),
                    info.confidence()
                );
                LanguageTag::Unknown
            }
            None => LanguageTag::Unknown,
        }
    }
}

/// Whether both texts are identified as the same language.
pub fn same_language(identifier: &dyn LanguageIdentifier, text1: &str, text2: &str) -> bool {
    match (identifier.identify(text1), identifier.identify(text2)) {
        (LanguageTag::Known(a), LanguageTag::Known(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags text by its first character class: ASCII is "en", Devanagari is "hi".
    struct ScriptIdentifier;

    impl LanguageIdentifier for ScriptIdentifier {
        fn identify(&self, text: &str) -> LanguageTag {
            match text.trim().chars().next() {
                Some(c) if c.is_ascii_alphabetic() => LanguageTag::known("en"),
                Some(c) if ('\u{0900}'..='\u{097F}').contains(&c) => LanguageTag::known("hi"),
                _ => LanguageTag::Unknown,
            }
        }
    }

    #[test]
    fn matching_tags_agree() {
        assert!(same_language(&ScriptIdentifier, "hello", "world"));
        assert!(!same_language(&ScriptIdentifier, "hello", "नमस्ते"));
    }

    #[test]
    fn unknown_never_agrees() {
        assert!(!same_language(&ScriptIdentifier, "", ""));
        assert!(!same_language(&ScriptIdentifier, "123", "hello"));
    }

    #[test]
    fn whatlang_identifies_long_sentences() {
        let id = WhatlangIdentifier::default();
        assert_eq!(
            id.identify("This is a fairly long English sentence about the weather today."),
            LanguageTag::known("eng")
        );
        assert!(same_language(
            &id,
            "The committee approved the budget after a long debate.",
            "Everyone in the village went to the market on Sunday morning."
        ));
    }

    #[test]
    fn whatlang_gives_up_on_empty_text() {
        let id = WhatlangIdentifier::default();
        assert_eq!(id.identify(""), LanguageTag::Unknown);
        assert!(!same_language(&id, "", ""));
    }

    #[test]
    fn confidence_floor_turns_detections_into_unknown() {
        let id = WhatlangIdentifier::new(1.1);
        assert_eq!(
            id.identify("This is a fairly long English sentence about the weather today."),
            LanguageTag::Unknown
        );
    }
}
