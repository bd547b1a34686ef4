//! Selection Bands & Confidence Rules
//!
//! Thresholds and constants only.

use crate::logic::knowledge::{
    BACTERIAL_SPOT, EARLY_BLIGHT, LATE_BLIGHT, LEAF_SPOT, POWDERY_MILDEW, SEPTORIA_LEAF_SPOT,
};
use crate::models::Severity;

// ============================================================================
// SELECTION BANDS
// ============================================================================

/// Cumulative `(upper bound, catalog index)` pairs, checked top to bottom.
///
/// Septoria (5) sits before Leaf Spot (4). Keep it that way.
pub const SELECTION_BANDS: [(f64, usize); 5] = [
    (0.25, LATE_BLIGHT),
    (0.45, POWDERY_MILDEW),
    (0.65, EARLY_BLIGHT),
    (0.80, BACTERIAL_SPOT),
    (0.90, SEPTORIA_LEAF_SPOT),
];

/// Index chosen when the draw clears every band
pub const FALLBACK_INDEX: usize = LEAF_SPOT;

/// Map a uniform draw to a catalog index
pub fn select_index(draw: f64) -> usize {
    SELECTION_BANDS
        .iter()
        .find(|(upper, _)| draw < *upper)
        .map(|(_, index)| *index)
        .unwrap_or(FALLBACK_INDEX)
}

// ============================================================================
// CONFIDENCE
// ============================================================================

pub const CRITICAL_BASE_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_BASE_CONFIDENCE: f64 = 0.90;
pub const CONFIDENCE_SPREAD: f64 = 0.10;
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Critical diseases report lower confidence
pub fn base_confidence(severity: Severity) -> f64 {
    if severity == Severity::Critical {
        CRITICAL_BASE_CONFIDENCE
    } else {
        DEFAULT_BASE_CONFIDENCE
    }
}

/// `min(0.99, base + draw * 0.10)` rounded to two decimals
pub fn confidence(severity: Severity, draw: f64) -> f64 {
    let raw = (base_confidence(severity) + draw * CONFIDENCE_SPREAD).min(MAX_CONFIDENCE);
    round2(raw)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
