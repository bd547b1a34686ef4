//! Disease Detector
//!
//! Simulated inference: waits, draws, and copies one catalog record into a
//! `DetectionResult`.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use super::bands::{confidence, select_index};
use super::delay::Delay;
use super::random::RandomSource;
use crate::logic::knowledge;
use crate::models::{DetectionResult, DiseaseRecord};

/// Default simulated inference latency
pub const DEFAULT_DETECTION_DELAY: Duration = Duration::from_millis(1500);

/// Stateless apart from its injected collaborators; safe to share across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct DiseaseDetector<R, D> {
    rng: R,
    delay: D,
    latency: Duration,
}

impl<R: RandomSource, D: Delay> DiseaseDetector<R, D> {
    pub fn with_parts(rng: R, delay: D, latency: Duration) -> Self {
        Self { rng, delay, latency }
    }

    /// Run one detection against an already-validated image reference
    pub async fn detect(&self, image_ref: &str) -> DetectionResult {
        self.delay.wait(self.latency).await;

        let index = select_index(self.rng.next_f64());
        // select_index only yields catalog positions
        let record = &knowledge::CATALOG[index];

        let confidence = confidence(record.severity, self.rng.next_f64());
        let affected_crop = pick(record.crops, self.rng.next_f64());

        let result = build_result(record, image_ref, confidence, affected_crop);

        tracing::debug!(
            "Detection {}: {} ({}) confidence {:.2}",
            result.id, result.disease, result.severity, result.confidence
        );

        result
    }
}

/// `items[floor(draw * len)]`, clamped to the last element
fn pick(items: &'static [&'static str], draw: f64) -> &'static str {
    let idx = ((draw * items.len() as f64).floor() as usize).min(items.len() - 1);
    items[idx]
}

fn build_result(
    record: &DiseaseRecord,
    image_ref: &str,
    confidence: f64,
    affected_crop: &str,
) -> DetectionResult {
    let now = Utc::now().timestamp_millis();

    DetectionResult {
        id: new_detection_id(now),
        timestamp: now,
        image_ref: image_ref.to_string(),
        disease: record.name.to_string(),
        confidence,
        severity: record.severity,
        affected_crop: affected_crop.to_string(),
        description: record.description.to_string(),
        symptoms: to_owned_vec(record.symptoms),
        treatments: record.treatments.to_vec(),
        preventive_measures: to_owned_vec(record.preventive_measures),
        yield_impact: record.yield_impact.to_string(),
    }
}

/// `detection_<millis>_<12 random hex chars>`
fn new_detection_id(now_millis: i64) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("detection_{}_{}", now_millis, &token[..12])
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::detection::{NoDelay, SequenceRandom, ThreadRandom, TokioDelay};
    use crate::models::Severity;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn stub(draws: impl IntoIterator<Item = f64>) -> DiseaseDetector<SequenceRandom, NoDelay> {
        DiseaseDetector::with_parts(SequenceRandom::new(draws), NoDelay, Duration::ZERO)
    }

    fn assert_copied_from(result: &DetectionResult, record: &DiseaseRecord) {
        assert_eq!(result.disease, record.name);
        assert_eq!(result.severity, record.severity);
        assert_eq!(result.description, record.description);
        assert_eq!(result.symptoms, record.symptoms);
        assert_eq!(result.treatments.as_slice(), record.treatments);
        assert_eq!(result.preventive_measures, record.preventive_measures);
        assert_eq!(result.yield_impact, record.yield_impact);
        assert!(record.crops.iter().any(|c| *c == result.affected_crop));
    }

    #[tokio::test]
    async fn test_constant_draw_band_scenarios() {
        let cases = [
            (0.10, "Late Blight"),
            (0.30, "Powdery Mildew"),
            (0.50, "Early Blight"),
            (0.70, "Bacterial Spot"),
            (0.85, "Septoria Leaf Spot"),
            (0.95, "Leaf Spot Disease"),
        ];

        for (draw, name) in cases {
            let detector = DiseaseDetector::with_parts(SequenceRandom::constant(draw), NoDelay, Duration::ZERO);
            let result = detector.detect("blob:leaf").await;
            assert_eq!(result.disease, name, "draw {}", draw);
        }
    }

    #[tokio::test]
    async fn test_every_index_copies_its_record() {
        // First draw picks the record, second the confidence, third the crop
        let draws = [0.0, 0.30, 0.50, 0.70, 0.95, 0.85];
        for (index, selector_draw) in draws.iter().enumerate() {
            let detector = stub([*selector_draw, 0.5, 0.99]);
            let result = detector.detect("blob:x").await;
            let record = knowledge::get(index).unwrap();

            assert_copied_from(&result, record);
            assert_eq!(result.affected_crop, *record.crops.last().unwrap());
            assert_eq!(result.image_ref, "blob:x");

            let matching = knowledge::catalog()
                .iter()
                .filter(|r| r.name == result.disease)
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[tokio::test]
    async fn test_confidence_for_critical_and_other() {
        let result = stub([0.10, 0.0, 0.0]).detect("a").await;
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.confidence, 0.85);

        let result = stub([0.10, 0.999, 0.0]).detect("a").await;
        assert_eq!(result.confidence, 0.95);

        let result = stub([0.30, 0.999, 0.0]).detect("a").await;
        assert_eq!(result.confidence, 0.99);
    }

    #[tokio::test]
    async fn test_random_results_hold_invariants() {
        let detector = DiseaseDetector::with_parts(ThreadRandom, NoDelay, Duration::ZERO);

        for _ in 0..500 {
            let result = detector.detect("blob:y").await;
            let record = knowledge::find_by_name(&result.disease).unwrap();
            assert_copied_from(&result, record);

            let (lo, hi) = if record.severity == Severity::Critical {
                (0.85, 0.99)
            } else {
                (0.90, 0.99)
            };
            assert!(result.confidence >= lo && result.confidence <= hi, "{}", result.confidence);

            let scaled = result.confidence * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let detector = DiseaseDetector::with_parts(ThreadRandom, NoDelay, Duration::ZERO);
        let mut ids = HashSet::new();
        for _ in 0..10_000 {
            let result = detector.detect("blob:z").await;
            assert!(result.id.starts_with("detection_"));
            assert!(ids.insert(result.id));
        }
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let detector = Arc::new(DiseaseDetector::with_parts(ThreadRandom, NoDelay, Duration::ZERO));

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let detector = detector.clone();
                tokio::spawn(async move { detector.detect(&format!("blob:{}", i)).await })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.unwrap();
            assert_eq!(result.image_ref, format!("blob:{}", i));
        }
    }

    #[tokio::test]
    async fn test_tokio_delay_is_awaited() {
        let detector = DiseaseDetector::with_parts(
            SequenceRandom::constant(0.5),
            TokioDelay,
            Duration::from_millis(20),
        );
        let started = tokio::time::Instant::now();
        detector.detect("blob:t").await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_pick_clamps_to_last() {
        assert_eq!(pick(&["a", "b"], 0.0), "a");
        assert_eq!(pick(&["a", "b"], 0.5), "b");
        assert_eq!(pick(&["a", "b"], 1.0), "b");
    }
}
