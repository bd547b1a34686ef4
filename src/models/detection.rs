//! Detection model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::disease::{Severity, SeverityColors, Treatment};

/// Output of one detection call. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub id: String,
    /// Milliseconds since epoch
    pub timestamp: i64,
    pub image_ref: String,
    pub disease: String,
    pub confidence: f64,
    pub severity: Severity,
    pub affected_crop: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<Treatment>,
    pub preventive_measures: Vec<String>,
    pub yield_impact: String,
}

impl DetectionResult {
    /// Case-insensitive free-text match used by the history search
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        let hit = |s: &str| s.to_lowercase().contains(&query);

        hit(&self.disease)
            || hit(self.severity.as_str())
            || self
                .treatments
                .iter()
                .any(|t| hit(&t.name) || hit(t.kind.as_str()))
            || hit(&self.affected_crop)
            || hit(&self.description)
            || self.symptoms.iter().any(|s| hit(s))
    }
}

/// Metadata of an uploaded image, posted by the UI before detection
#[derive(Debug, Deserialize, Validate)]
pub struct UploadRequest {
    #[validate(length(min = 1, max = 255, message = "file_name must be 1-255 characters"))]
    pub file_name: String,
    #[validate(length(min = 1, message = "content_type is required"))]
    pub content_type: String,
    pub size_bytes: u64,
    #[validate(length(min = 1, max = 2048, message = "image_ref must be 1-2048 characters"))]
    pub image_ref: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub result: DetectionResult,
    pub colors: SeverityColors,
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub stats: HistoryStats,
    pub items: Vec<DetectionResult>,
}

/// Summary cards shown above the history list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    pub critical: usize,
    /// `None` for an empty history
    pub most_common: Option<String>,
    /// Mean confidence as `"NN%"`, `None` for an empty history
    pub average_confidence: Option<String>,
}

impl HistoryStats {
    pub fn from_entries(entries: &[DetectionResult]) -> Self {
        let critical = entries
            .iter()
            .filter(|r| r.severity == Severity::Critical)
            .count();

        // Counts in order of first appearance; ties go to the later entry
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for r in entries {
            match counts.iter_mut().find(|(name, _)| *name == r.disease.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((r.disease.as_str(), 1)),
            }
        }
        let most_common = counts
            .iter()
            .copied()
            .reduce(|best, next| if best.1 > next.1 { best } else { next })
            .map(|(name, _)| name.to_string());

        let average_confidence = (!entries.is_empty()).then(|| {
            let mean = entries.iter().map(|r| r.confidence).sum::<f64>() / entries.len() as f64;
            percent(mean)
        });

        Self {
            total: entries.len(),
            critical,
            most_common,
            average_confidence,
        }
    }
}

fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Downloadable summary of a detection
#[derive(Debug, Serialize)]
pub struct DetectionReport {
    pub id: String,
    pub date: String,
    pub disease: String,
    pub crop: String,
    pub confidence: String,
    pub severity: Severity,
    pub symptoms: Vec<String>,
    pub treatments: Vec<Treatment>,
    pub preventive_measures: Vec<String>,
    pub yield_impact: String,
}

impl From<&DetectionResult> for DetectionReport {
    fn from(result: &DetectionResult) -> Self {
        let date = DateTime::<Utc>::from_timestamp_millis(result.timestamp)
            .unwrap_or_else(Utc::now)
            .to_rfc3339();

        Self {
            id: result.id.clone(),
            date,
            disease: result.disease.clone(),
            crop: result.affected_crop.clone(),
            confidence: percent(result.confidence),
            severity: result.severity,
            symptoms: result.symptoms.clone(),
            treatments: result.treatments.clone(),
            preventive_measures: result.preventive_measures.clone(),
            yield_impact: result.yield_impact.clone(),
        }
    }
}
