//! Knowledge Module
//!
//! Read-only lookup over the disease catalog.
//!
//! ## Structure
//! - `catalog`: the static records and their index constants

pub mod catalog;

pub use catalog::{
    CATALOG,
    LATE_BLIGHT,
    POWDERY_MILDEW,
    EARLY_BLIGHT,
    BACTERIAL_SPOT,
    LEAF_SPOT,
    SEPTORIA_LEAF_SPOT,
};

use crate::models::DiseaseRecord;

/// All records in catalog order
pub fn catalog() -> &'static [DiseaseRecord] {
    &CATALOG
}

/// Lookup by catalog position
pub fn get(index: usize) -> Option<&'static DiseaseRecord> {
    CATALOG.get(index)
}

/// Lookup by disease name, ignoring case
pub fn find_by_name(name: &str) -> Option<&'static DiseaseRecord> {
    let name = name.trim();
    CATALOG.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Records matching a free-text query; blank query returns everything
pub fn search(query: &str) -> Vec<&'static DiseaseRecord> {
    let query = query.trim();
    if query.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG.iter().filter(|d| d.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_and_severity() {
        let expected = [
            ("Late Blight", Severity::Critical),
            ("Powdery Mildew", Severity::Moderate),
            ("Early Blight", Severity::Moderate),
            ("Bacterial Spot", Severity::High),
            ("Leaf Spot Disease", Severity::Low),
            ("Septoria Leaf Spot", Severity::Moderate),
        ];

        assert_eq!(catalog().len(), expected.len());
        for (i, (name, severity)) in expected.iter().enumerate() {
            let record = get(i).unwrap();
            assert_eq!(record.name, *name);
            assert_eq!(record.severity, *severity);
        }
        assert!(get(6).is_none());
    }

    #[test]
    fn test_records_are_well_formed() {
        let mut names = HashSet::new();
        for record in catalog() {
            assert!(names.insert(record.name), "duplicate name {}", record.name);
            assert!(!record.crops.is_empty());
            assert!(!record.symptoms.is_empty());
            assert!(!record.treatments.is_empty());
        }
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let record = find_by_name("septoria leaf spot").unwrap();
        assert_eq!(record.name, "Septoria Leaf Spot");
        assert!(find_by_name("Rust").is_none());
    }

    #[test]
    fn test_search() {
        assert_eq!(search("").len(), 6);

        let names: Vec<_> = search("pepper").iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Bacterial Spot"]);

        let names: Vec<_> = search("neem").iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Powdery Mildew"]);

        assert!(search("concentric").iter().any(|d| d.name == "Early Blight"));
        assert!(search("no such thing").is_empty());
    }
}
