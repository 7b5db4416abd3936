//! Counters for normalization outcomes and engine calls.
//!
//! Each `ContentNormalizer` owns its own `NormalizerMetrics`; counters are
//! observational and never feed back into decisions.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::normalizer::Fallback;

/// Per-normalizer counters.
#[derive(Debug, Default)]
pub struct NormalizerMetrics {
    /// Contents passed through the pipeline
    processed: AtomicUsize,

    /// Contents classified as English
    detected_english: AtomicUsize,

    /// Contents returned with a usable translation
    translated: AtomicUsize,

    /// Requests sent to the inference engine
    engine_calls: AtomicUsize,

    classification_failures: AtomicUsize,
    unusable_labels: AtomicUsize,
    translation_failures: AtomicUsize,
    unusable_translations: AtomicUsize,
}

impl NormalizerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one content entering the pipeline.
    pub fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a classification of "English".
    pub fn record_detected_english(&self) {
        self.detected_english.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a usable translation.
    pub fn record_translated(&self) {
        self.translated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request sent to the engine.
    pub fn record_engine_call(&self) {
        self.engine_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record which fallback replaced the normal outcome.
    pub fn record_fallback(&self, fallback: &Fallback) {
        let counter = match fallback {
            Fallback::ClassificationFailed { .. } => &self.classification_failures,
            Fallback::UnusableLabel => &self.unusable_labels,
            Fallback::TranslationFailed { .. } => &self.translation_failures,
            Fallback::UnusableTranslation => &self.unusable_translations,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    pub fn engine_calls(&self) -> usize {
        self.engine_calls.load(Ordering::Relaxed)
    }

    /// Snapshot of all counters.
    pub fn report(&self) -> MetricsReport {
        let processed = self.processed();
        let classification_failures = self.classification_failures.load(Ordering::Relaxed);
        let unusable_labels = self.unusable_labels.load(Ordering::Relaxed);
        let translation_failures = self.translation_failures.load(Ordering::Relaxed);
        let unusable_translations = self.unusable_translations.load(Ordering::Relaxed);

        let fallbacks =
            classification_failures + unusable_labels + translation_failures + unusable_translations;
        let fallback_rate = if processed > 0 {
            (fallbacks as f64 / processed as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            processed,
            detected_english: self.detected_english.load(Ordering::Relaxed),
            translated: self.translated.load(Ordering::Relaxed),
            engine_calls: self.engine_calls(),
            engine_failures: classification_failures + translation_failures,
            classification_failures,
            unusable_labels,
            translation_failures,
            unusable_translations,
            fallbacks,
            fallback_rate,
        }
    }
}

/// Point-in-time copy of `NormalizerMetrics`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub processed: usize,
    pub detected_english: usize,
    pub translated: usize,
    pub engine_calls: usize,

    /// Failed engine requests, one per `ClassificationFailed` or `TranslationFailed`
    pub engine_failures: usize,
    pub classification_failures: usize,
    pub unusable_labels: usize,
    pub translation_failures: usize,
    pub unusable_translations: usize,

    /// Sum of all fallback counters
    pub fallbacks: usize,

    /// Share of processed contents that hit any fallback, as a percentage (0-100)
    pub fallback_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_new_metrics_are_zero() {
        let report = NormalizerMetrics::new().report();

        assert_eq!(report.processed, 0);
        assert_eq!(report.engine_calls, 0);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_record_processed_and_calls() {
        let metrics = NormalizerMetrics::new();

        metrics.record_processed();
        metrics.record_engine_call();
        metrics.record_engine_call();

        assert_eq!(metrics.processed(), 1);
        assert_eq!(metrics.engine_calls(), 2);
        assert_eq!(metrics.report().engine_failures, 0);
    }

    #[test]
    fn test_record_fallback_routes_to_counter() {
        let metrics = NormalizerMetrics::new();

        metrics.record_fallback(&Fallback::ClassificationFailed {
            error: "timeout".to_string(),
        });
        metrics.record_fallback(&Fallback::UnusableLabel);
        metrics.record_fallback(&Fallback::TranslationFailed {
            error: "500".to_string(),
        });
        metrics.record_fallback(&Fallback::UnusableTranslation);
        metrics.record_fallback(&Fallback::UnusableTranslation);

        let report = metrics.report();
        assert_eq!(report.classification_failures, 1);
        assert_eq!(report.unusable_labels, 1);
        assert_eq!(report.translation_failures, 1);
        assert_eq!(report.unusable_translations, 2);
    }

    #[test]
    fn test_engine_failures_count_only_failed_calls() {
        let metrics = NormalizerMetrics::new();

        metrics.record_fallback(&Fallback::ClassificationFailed {
            error: "timeout".to_string(),
        });
        metrics.record_fallback(&Fallback::TranslationFailed {
            error: "500".to_string(),
        });
        metrics.record_fallback(&Fallback::TranslationFailed {
            error: "500".to_string(),
        });
        // Unusable replies are successful calls
        metrics.record_fallback(&Fallback::UnusableLabel);
        metrics.record_fallback(&Fallback::UnusableTranslation);

        let report = metrics.report();
        assert_eq!(report.engine_failures, 3);
        assert_eq!(
            report.engine_failures,
            report.classification_failures + report.translation_failures
        );
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_fallback_rate() {
        let metrics = NormalizerMetrics::new();

        // 4 processed, 1 fallback = 25%
        for _ in 0..4 {
            metrics.record_processed();
        }
        metrics.record_fallback(&Fallback::UnusableLabel);

        let report = metrics.report();
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.fallback_rate, 25.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = NormalizerMetrics::new();
        let b = NormalizerMetrics::new();

        a.record_processed();

        assert_eq!(a.processed(), 1);
        assert_eq!(b.processed(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = NormalizerMetrics::new();
        metrics.record_detected_english();
        metrics.record_translated();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["detected_english"], 1);
        assert_eq!(json["translated"], 1);
    }
}
