//! Normalize free-text content to English.
//!
//! Content is first classified by a locally hosted language model (Ollama);
//! anything not judged English is then translated. Engine failures never
//! escape: the pipeline degrades to returning the original content.
//!
//! ```rust,ignore
//! use content_normalizer::{Config, ContentNormalizer};
//!
//! let normalizer = ContentNormalizer::from_config(&Config::from_env()?);
//! let (is_english, text) = normalizer.translate_content("Bonjour").await.into_pair();
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod normalizer;
pub mod ollama;
pub mod prompts;
pub mod stream;
pub mod translation;

pub use config::Config;
pub use error::InferenceError;
pub use metrics::{MetricsReport, NormalizerMetrics};
pub use normalizer::{ContentNormalizer, Fallback, Normalization, NormalizationOutcome};
pub use ollama::{LanguageInferenceClient, OllamaClient};
pub use translation::LanguageLabel;
