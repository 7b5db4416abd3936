use std::fmt;

use crate::error::InferenceError;
use crate::ollama::LanguageInferenceClient;
use crate::prompts::{CLASSIFICATION_CONTEXT, TRANSLATION_CONTEXT};

/// A language name reported by the classifier (e.g. "French").
///
/// The label is opaque: it is never checked against a list of known
/// languages. It is always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLabel(String);

impl LanguageLabel {
    /// Returns `None` when the raw label is empty or whitespace only
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against "english"
    pub fn is_english(&self) -> bool {
        self.0.to_lowercase() == "english"
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ask the engine for the primary language of `content`.
///
/// Returns the trimmed reply, or `None` when the engine gave no text.
/// Engine failures are returned to the caller untouched.
pub async fn detect_language(
    client: &dyn LanguageInferenceClient,
    model: &str,
    content: &str,
) -> Result<Option<String>, InferenceError> {
    let reply = client.chat(model, CLASSIFICATION_CONTEXT, content).await?;
    Ok(reply.map(|text| text.trim().to_string()))
}

/// Ask the engine for a literal English translation of `content`.
pub async fn translate_to_english(
    client: &dyn LanguageInferenceClient,
    model: &str,
    content: &str,
) -> Result<Option<String>, InferenceError> {
    let reply = client.chat(model, TRANSLATION_CONTEXT, content).await?;
    Ok(reply.map(|text| text.trim().to_string()))
}
