//! Prompt echo removal.
//!
//! Generation pipelines sometimes leak their prompt into the output, e.g.
//! `English: <source> Hindi: <translation>`. When the source occurs inside a
//! translation we drop its first word-anchored occurrence and every
//! `<Language>:` label of the file's language pair.

use crate::core::LanguagePair;
use crate::errors::Result;
use regex::Regex;

pub struct PromptStripper {
    labels: Vec<Regex>,
    word_start: Regex,
}

impl PromptStripper {
    pub fn new(pair: &LanguagePair) -> Result<Self> {
        let labels = [&pair.source_language, &pair.target_language]
            .into_iter()
            .map(|name| Regex::new(&format!(r"\b{}\s*:", regex::escape(name))))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            labels,
            word_start: Regex::new(r"\A\w")?,
        })
    }

    /// Trim `translation` and, if it contains `source`, strip the prompt echo.
    pub fn clean(&self, source: &str, translation: &str) -> String {
        let trimmed = translation.trim();
        if !trimmed.contains(source) {
            return trimmed.to_string();
        }

        let mut cleaned = self.remove_first_word_start(trimmed, source);
        for label in &self.labels {
            cleaned = label.replace_all(&cleaned, "").into_owned();
        }
        cleaned
    }

    /// Remove the first occurrence of `needle` where `\b{needle}` would match.
    fn remove_first_word_start(&self, text: &str, needle: &str) -> String {
        let Some(first) = needle.chars().next() else {
            return text.to_string();
        };
        let starts_with_word = self.word_start.is_match(needle);

        let mut from = 0;
        while let Some(offset) = text[from..].find(needle) {
            let idx = from + offset;
            let after_word = text[..idx]
                .char_indices()
                .next_back()
                .is_some_and(|(prev, _)| self.word_start.is_match(&text[prev..idx]));
            if after_word != starts_with_word {
                let mut out = String::with_capacity(text.len() - needle.len());
                out.push_str(&text[..idx]);
                out.push_str(&text[idx + needle.len()..]);
                return out;
            }
            from = idx + first.len_utf8();
        }
        text.to_string()
    }
}
