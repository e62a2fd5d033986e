use crate::domain::line_type::LineType;

/// Simultaneous-line counts a webinar can be provisioned with.
pub const LINE_TIERS: [u32; 5] = [25, 50, 100, 200, 300];

const LISTEN_ONLY_TARGETS: [(u32, f64); 5] = [
    (25, 250.0),
    (50, 450.0),
    (100, 800.0),
    (200, 1500.0),
    (300, 2250.0),
];

const QNA_TARGETS: [(u32, f64); 5] = [
    (25, 500.0),
    (50, 800.0),
    (100, 1300.0),
    (200, 2000.0),
    (300, 2750.0),
];

const TARGET_REVENUES: [(LineType, &[(u32, f64)]); 2] = [
    (LineType::ListenOnly, &LISTEN_ONLY_TARGETS),
    (LineType::QnA, &QNA_TARGETS),
];

/// Published target revenue for a line type at a tier, if the pair is listed.
pub fn target_revenue(line_type: LineType, lines: u32) -> Option<f64> {
    TARGET_REVENUES
        .iter()
        .find(|(candidate, _)| *candidate == line_type)
        .and_then(|(_, targets)| targets.iter().find(|(tier, _)| *tier == lines))
        .map(|(_, revenue)| *revenue)
}
