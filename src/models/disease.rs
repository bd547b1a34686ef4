//! Disease knowledge model

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY
// ============================================================================

/// Economic/agronomic impact class of a disease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "moderate" => Ok(Severity::Moderate),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

/// Style identifiers used to render a severity badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityColors {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

// ============================================================================
// TREATMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentKind {
    Organic,
    Chemical,
    Cultural,
    Biological,
}

impl TreatmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentKind::Organic => "Organic",
            TreatmentKind::Chemical => "Chemical",
            TreatmentKind::Cultural => "Cultural",
            TreatmentKind::Biological => "Biological",
        }
    }
}

/// One treatment protocol.
///
/// Catalog entries borrow `'static` text; results loaded back from the
/// history file own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub kind: TreatmentKind,
    pub name: Cow<'static, str>,
    pub instructions: Cow<'static, str>,
    pub timeline: Cow<'static, str>,
}

impl Treatment {
    pub const fn new(
        kind: TreatmentKind,
        name: &'static str,
        instructions: &'static str,
        timeline: &'static str,
    ) -> Self {
        Self {
            kind,
            name: Cow::Borrowed(name),
            instructions: Cow::Borrowed(instructions),
            timeline: Cow::Borrowed(timeline),
        }
    }
}

// ============================================================================
// DISEASE RECORD
// ============================================================================

/// Knowledge base entry, defined at compile time and never mutated
#[derive(Debug, Serialize)]
pub struct DiseaseRecord {
    pub name: &'static str,
    pub crops: &'static [&'static str],
    /// Visual cue words; informational only, never copied into results
    pub keywords: &'static [&'static str],
    pub severity: Severity,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub treatments: &'static [Treatment],
    pub preventive_measures: &'static [&'static str],
    pub yield_impact: &'static str,
}

impl DiseaseRecord {
    /// Case-insensitive substring match used by the knowledge lookup
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let hit = |s: &str| s.to_lowercase().contains(&query);

        hit(self.name)
            || self.crops.iter().any(|c| hit(c))
            || self.keywords.iter().any(|k| hit(k))
            || self.symptoms.iter().any(|s| hit(s))
            || self.treatments.iter().any(|t| hit(&t.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_is_case_insensitive() {
        assert_eq!("critical".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!(" Moderate ".parse::<Severity>(), Ok(Severity::Moderate));
        assert!("Severe".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_serializes_as_label() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"High\"");
    }

    #[test]
    fn test_treatment_roundtrips_owned() {
        let t = Treatment::new(TreatmentKind::Organic, "Neem oil", "Spray", "Weekly");
        let json = serde_json::to_string(&t).unwrap();
        let back: Treatment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(matches!(back.name, Cow::Owned(_)));
    }
}
