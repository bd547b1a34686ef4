//! Severity badge colors

use crate::models::{Severity, SeverityColors};

pub const FALLBACK_COLORS: SeverityColors = SeverityColors {
    background: "bg-gray-100",
    text: "text-gray-800",
    border: "border-gray-300",
};

pub fn colors_for(severity: Severity) -> SeverityColors {
    match severity {
        Severity::Critical => SeverityColors {
            background: "bg-red-100",
            text: "text-red-800",
            border: "border-red-300",
        },
        Severity::High => SeverityColors {
            background: "bg-orange-100",
            text: "text-orange-800",
            border: "border-orange-300",
        },
        Severity::Moderate => SeverityColors {
            background: "bg-yellow-100",
            text: "text-yellow-800",
            border: "border-yellow-300",
        },
        Severity::Low => SeverityColors {
            background: "bg-green-100",
            text: "text-green-800",
            border: "border-green-300",
        },
    }
}

/// Colors for a raw label; unknown labels get the gray fallback
pub fn colors_for_label(label: &str) -> SeverityColors {
    label
        .parse::<Severity>()
        .map(colors_for)
        .unwrap_or(FALLBACK_COLORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_has_distinct_colors() {
        let colors: Vec<_> = Severity::ALL.iter().map(|s| colors_for(*s)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_ne!(*a, FALLBACK_COLORS);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(colors_for(Severity::Critical).background, "bg-red-100");
        assert_eq!(colors_for(Severity::Low).border, "border-green-300");
    }

    #[test]
    fn test_label_lookup_with_fallback() {
        assert_eq!(colors_for_label("high"), colors_for(Severity::High));
        assert_eq!(colors_for_label("Unknown"), FALLBACK_COLORS);
        assert_eq!(colors_for_label(""), FALLBACK_COLORS);
    }
}
