use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::metrics::NormalizerMetrics;
use crate::ollama::{LanguageInferenceClient, OllamaClient};
use crate::translation::{detect_language, translate_to_english, LanguageLabel};

/// Final result for one content: whether it was judged English, and the text to use downstream.
///
/// When `is_english` is true, `text` is always the original content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationOutcome {
    pub is_english: bool,
    pub text: String,
}

impl NormalizationOutcome {
    fn unchanged(is_english: bool, content: &str) -> Self {
        Self {
            is_english,
            text: content.to_string(),
        }
    }

    pub fn into_pair(self) -> (bool, String) {
        (self.is_english, self.text)
    }
}

impl From<NormalizationOutcome> for (bool, String) {
    fn from(outcome: NormalizationOutcome) -> Self {
        outcome.into_pair()
    }
}

/// Why the normal outcome was replaced by a safe default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Language detection call failed; content assumed English
    ClassificationFailed { error: String },
    /// Language detection returned no usable label; content assumed English
    UnusableLabel,
    /// Translation call failed; original content kept
    TranslationFailed { error: String },
    /// Translation returned no usable text; original content kept
    UnusableTranslation,
}

impl Fallback {
    /// Pipeline stage the fallback happened in
    pub fn stage(&self) -> &'static str {
        match self {
            Fallback::ClassificationFailed { .. } | Fallback::UnusableLabel => "language detection",
            Fallback::TranslationFailed { .. } | Fallback::UnusableTranslation => "translation",
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::ClassificationFailed { error } => {
                write!(f, "language detection failed: {}", error)
            }
            Fallback::UnusableLabel => f.write_str("language detection returned no label"),
            Fallback::TranslationFailed { error } => write!(f, "translation failed: {}", error),
            Fallback::UnusableTranslation => f.write_str("translation returned no text"),
        }
    }
}

/// Outcome plus diagnostics for one pass through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    pub outcome: NormalizationOutcome,
    /// Label reported by the classifier, when it produced a usable one
    pub label: Option<LanguageLabel>,
    /// Set when a safe default replaced the normal outcome
    pub fallback: Option<Fallback>,
}

/// Detects the language of content and translates non-English content to English.
///
/// The normalizer is the only error boundary: engine failures never escape
/// `translate_content` or `normalize`, they are logged and replaced by a
/// safe outcome. At most two engine calls are made per content, one after
/// the other, and none are retried.
pub struct ContentNormalizer {
    client: Arc<dyn LanguageInferenceClient>,
    model: String,
    metrics: NormalizerMetrics,
}

impl ContentNormalizer {
    pub fn new(client: Arc<dyn LanguageInferenceClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            metrics: NormalizerMetrics::new(),
        }
    }

    /// Normalizer backed by the Ollama server named in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(OllamaClient::new(config)), config.model_name.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn metrics(&self) -> &NormalizerMetrics {
        &self.metrics
    }

    /// Classify `content` and translate it to English if it is not English.
    pub async fn translate_content(&self, content: &str) -> NormalizationOutcome {
        self.normalize(content).await.outcome
    }

    /// Same as `translate_content`, also reporting the label and any fallback taken.
    pub async fn normalize(&self, content: &str) -> Normalization {
        self.metrics.record_processed();

        // Step 1: language detection
        self.metrics.record_engine_call();
        let raw_label = match detect_language(self.client.as_ref(), &self.model, content).await {
            Ok(raw_label) => raw_label,
            Err(e) => {
                return self.fall_back(
                    content,
                    true,
                    None,
                    Fallback::ClassificationFailed {
                        error: e.to_string(),
                    },
                );
            }
        };

        let Some(label) = raw_label.as_deref().and_then(LanguageLabel::parse) else {
            return self.fall_back(content, true, None, Fallback::UnusableLabel);
        };

        if label.is_english() {
            debug!("Content detected as English, no translation needed");
            self.metrics.record_detected_english();
            return Normalization {
                outcome: NormalizationOutcome::unchanged(true, content),
                label: Some(label),
                fallback: None,
            };
        }

        // Step 2: translation
        debug!("Content detected as {}, translating to English", label);
        self.metrics.record_engine_call();
        let translated =
            match translate_to_english(self.client.as_ref(), &self.model, content).await {
                Ok(translated) => translated,
                Err(e) => {
                    return self.fall_back(
                        content,
                        false,
                        Some(label),
                        Fallback::TranslationFailed {
                            error: e.to_string(),
                        },
                    );
                }
            };

        match translated.filter(|text| !text.trim().is_empty()) {
            Some(text) => {
                self.metrics.record_translated();
                Normalization {
                    outcome: NormalizationOutcome {
                        is_english: false,
                        text,
                    },
                    label: Some(label),
                    fallback: None,
                }
            }
            None => self.fall_back(content, false, Some(label), Fallback::UnusableTranslation),
        }
    }

    fn fall_back(
        &self,
        content: &str,
        is_english: bool,
        label: Option<LanguageLabel>,
        fallback: Fallback,
    ) -> Normalization {
        warn!(
            stage = fallback.stage(),
            "Falling back to original content ({})", fallback
        );
        self.metrics.record_fallback(&fallback);

        Normalization {
            outcome: NormalizationOutcome::unchanged(is_english, content),
            label,
            fallback: Some(fallback),
        }
    }
}
