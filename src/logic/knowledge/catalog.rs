//! Disease Catalog
//!
//! Static data only. Position in `CATALOG` is what the detection bands
//! refer to, so entries must not be reordered.

use crate::models::{DiseaseRecord, Severity, Treatment, TreatmentKind};

pub const LATE_BLIGHT: usize = 0;
pub const POWDERY_MILDEW: usize = 1;
pub const EARLY_BLIGHT: usize = 2;
pub const BACTERIAL_SPOT: usize = 3;
pub const LEAF_SPOT: usize = 4;
pub const SEPTORIA_LEAF_SPOT: usize = 5;

pub static CATALOG: [DiseaseRecord; 6] = [
    // 0
    DiseaseRecord {
        name: "Late Blight",
        crops: &["Tomato", "Potato"],
        keywords: &["brown", "dark", "spots", "wilting"],
        severity: Severity::Critical,
        description: "Late blight is a devastating disease caused by Phytophthora infestans. It can destroy entire crops within days if left untreated.",
        symptoms: &[
            "Dark brown to black lesions on leaves",
            "Water-soaked appearance on stems",
            "White fuzzy growth on leaf undersides",
            "Rapid spread during humid conditions",
            "Fruit rot with brown, firm lesions",
        ],
        treatments: &[
            Treatment::new(
                TreatmentKind::Chemical,
                "Copper-based fungicide",
                "Apply every 7-10 days. Mix 2-3 tablespoons per gallon of water. Spray thoroughly covering all plant surfaces.",
                "Start immediately, continue for 3-4 weeks",
            ),
            Treatment::new(
                TreatmentKind::Cultural,
                "Remove infected plants",
                "Immediately remove and destroy all infected plant material. Do not compost. Burn or bag and dispose of.",
                "Immediate action required",
            ),
            Treatment::new(
                TreatmentKind::Biological,
                "Bacillus subtilis",
                "Apply biological fungicide as preventive measure on healthy plants nearby.",
                "Weekly application for 4 weeks",
            ),
        ],
        preventive_measures: &[
            "Plant resistant varieties",
            "Ensure proper spacing for air circulation",
            "Avoid overhead watering",
            "Apply mulch to prevent soil splash",
            "Monitor weather - disease spreads in cool, wet conditions",
        ],
        yield_impact: "30-80% crop loss if untreated",
    },
    // 1
    DiseaseRecord {
        name: "Powdery Mildew",
        crops: &["Tomato", "Cucumber", "Squash", "Pumpkin"],
        keywords: &["white", "powder", "coating", "dusty"],
        severity: Severity::Moderate,
        description: "Powdery mildew appears as white powdery spots on leaves and stems. While not immediately fatal, it weakens plants and reduces yields.",
        symptoms: &[
            "White powdery coating on leaves",
            "Yellowing and browning of affected leaves",
            "Stunted plant growth",
            "Reduced fruit production",
            "Leaf distortion and curling",
        ],
        treatments: &[
            Treatment::new(
                TreatmentKind::Organic,
                "Baking soda spray",
                "Mix 1 tablespoon baking soda + 1 tablespoon vegetable oil + 1 drop dish soap per gallon of water. Spray weekly.",
                "2-3 weeks of treatment",
            ),
            Treatment::new(
                TreatmentKind::Organic,
                "Neem oil",
                "Mix 2 tablespoons neem oil per gallon of water. Spray every 7-14 days in early morning or evening.",
                "Continue until symptoms disappear",
            ),
            Treatment::new(
                TreatmentKind::Chemical,
                "Sulfur-based fungicide",
                "Apply according to package directions. Do not apply when temperature exceeds 90°F.",
                "Every 10-14 days",
            ),
        ],
        preventive_measures: &[
            "Provide good air circulation",
            "Avoid overhead watering",
            "Water in the morning to allow foliage to dry",
            "Remove infected leaves promptly",
            "Plant in full sun locations",
        ],
        yield_impact: "10-30% yield reduction",
    },
    // 2
    DiseaseRecord {
        name: "Early Blight",
        crops: &["Tomato", "Potato"],
        keywords: &["concentric", "rings", "target", "spots"],
        severity: Severity::Moderate,
        description: "Early blight is caused by Alternaria solani fungus. It typically affects older leaves first and progresses upward.",
        symptoms: &[
            "Dark spots with concentric rings (target pattern)",
            "Lower leaves affected first",
            "Yellowing around lesions",
            "Premature leaf drop",
            "Stem lesions in severe cases",
        ],
        treatments: &[
            Treatment::new(
                TreatmentKind::Chemical,
                "Chlorothalonil fungicide",
                "Apply every 7-10 days. Rotate with copper-based fungicides to prevent resistance.",
                "3-4 weeks",
            ),
            Treatment::new(
                TreatmentKind::Cultural,
                "Improve plant health",
                "Apply balanced fertilizer, ensure consistent watering, and mulch to reduce soil splash.",
                "Ongoing maintenance",
            ),
            Treatment::new(
                TreatmentKind::Organic,
                "Copper fungicide",
                "Apply organic copper spray according to package directions.",
                "Weekly for 4 weeks",
            ),
        ],
        preventive_measures: &[
            "Rotate crops annually",
            "Space plants adequately",
            "Use drip irrigation instead of overhead watering",
            "Remove plant debris at season end",
            "Apply mulch around plants",
        ],
        yield_impact: "20-40% yield loss if severe",
    },
    // 3
    DiseaseRecord {
        name: "Bacterial Spot",
        crops: &["Tomato", "Pepper"],
        keywords: &["small", "dark", "spots", "yellow"],
        severity: Severity::High,
        description: "Bacterial spot is caused by Xanthomonas bacteria. It thrives in warm, humid conditions and spreads rapidly.",
        symptoms: &[
            "Small dark spots with yellow halos",
            "Spots on leaves, stems, and fruit",
            "Leaf drop in severe infections",
            "Fruit spots become raised and scabby",
            "Reduced fruit quality",
        ],
        treatments: &[
            Treatment::new(
                TreatmentKind::Chemical,
                "Copper bactericide",
                "Apply copper-based bactericide. More effective as preventive than curative treatment.",
                "Every 5-7 days during wet weather",
            ),
            Treatment::new(
                TreatmentKind::Cultural,
                "Sanitation practices",
                "Remove and destroy infected plants. Disinfect tools between plants. Avoid working with wet plants.",
                "Immediate and ongoing",
            ),
            Treatment::new(
                TreatmentKind::Biological,
                "Beneficial bacteria",
                "Apply products containing Bacillus species to suppress pathogen populations.",
                "Weekly applications",
            ),
        ],
        preventive_measures: &[
            "Use disease-free seeds and transplants",
            "Avoid overhead irrigation",
            "Practice 3-4 year crop rotation",
            "Maintain good air circulation",
            "Remove infected plant material immediately",
        ],
        yield_impact: "15-50% yield reduction",
    },
    // 4
    DiseaseRecord {
        name: "Leaf Spot Disease",
        crops: &["Various"],
        keywords: &["spots", "circular", "brown"],
        severity: Severity::Low,
        description: "General leaf spot diseases caused by various fungal pathogens. Usually manageable with good cultural practices.",
        symptoms: &[
            "Circular to irregular brown spots",
            "May have darker borders",
            "Spots may merge on severely infected leaves",
            "Premature leaf yellowing",
            "Reduced photosynthesis",
        ],
        treatments: &[
            Treatment::new(
                TreatmentKind::Organic,
                "Remove affected leaves",
                "Prune and dispose of infected leaves. Improve air circulation around plants.",
                "As needed",
            ),
            Treatment::new(
                TreatmentKind::Organic,
                "Compost tea",
                "Apply well-aged compost tea as foliar spray to boost plant immunity.",
                "Weekly for 3 weeks",
            ),
            Treatment::new(
                TreatmentKind::Chemical,
                "Broad-spectrum fungicide",
                "Apply if infection is severe. Follow label instructions.",
                "2-3 applications at 10-day intervals",
            ),
        ],
        preventive_measures: &[
            "Water at soil level, not on foliage",
            "Ensure adequate plant spacing",
            "Keep garden clean and remove debris",
            "Apply mulch to prevent soil splash",
            "Promote healthy, vigorous plant growth",
        ],
        yield_impact: "5-15% yield reduction",
    },
    // 5
    DiseaseRecord {
        name: "Septoria Leaf Spot",
        crops: &["Tomato"],
        keywords: &["small", "circular", "gray", "dark"],
        severity: Severity::Moderate,
        description: "Septoria leaf spot is a common tomato disease that starts on lower leaves and moves upward.",
        symptoms: &[
            "Numerous small circular spots",
            "Gray or tan centers with dark borders",
            "Tiny black dots (fruiting bodies) in spot centers",
            "Lower leaves turn yellow and drop",
            "Progressive upward spread",
        ],
        treatments: &[
            Treatment::new(
                TreatmentKind::Chemical,
                "Fungicide rotation",
                "Alternate between chlorothalonil and copper-based fungicides every 7-10 days.",
                "4-6 weeks",
            ),
            Treatment::new(
                TreatmentKind::Cultural,
                "Pruning and mulching",
                "Remove lower branches up to first fruit cluster. Apply thick organic mulch.",
                "Immediate action",
            ),
            Treatment::new(
                TreatmentKind::Organic,
                "Organic copper spray",
                "Apply organic approved copper fungicide early in disease development.",
                "Weekly for 4 weeks",
            ),
        ],
        preventive_measures: &[
            "Stake and cage plants for better air flow",
            "Mulch heavily to prevent soil splash",
            "Avoid overhead watering",
            "Remove and destroy infected leaves",
            "Rotate crops on 3-year cycle",
        ],
        yield_impact: "20-30% yield reduction",
    },
];
