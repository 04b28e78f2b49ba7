//! Severity taxonomy for defect findings.

use serde::{Deserialize, Serialize};

/// One of four fixed severity categories, derived from a defect's color by
/// nearest-neighbor classification in the report engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    ImmediateAttention,
    ItemsForRepair,
    MaintenanceItems,
    FurtherEvaluation,
}

impl Severity {
    /// Human-readable badge label rendered next to each defect heading.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::ImmediateAttention => "Immediate Attention",
            Severity::ItemsForRepair => "Items for Repair",
            Severity::MaintenanceItems => "Maintenance Items",
            Severity::FurtherEvaluation => "Further Evaluation",
        }
    }

    /// Reference color for this category, used both for classification
    /// distance and for the rendered badge.
    pub fn reference_color(&self) -> (u8, u8, u8) {
        match self {
            Severity::ImmediateAttention => (0xdc, 0x26, 0x26),
            Severity::ItemsForRepair => (0xea, 0x58, 0x0c),
            Severity::MaintenanceItems => (0x25, 0x63, 0xeb),
            Severity::FurtherEvaluation => (0x93, 0x33, 0xea),
        }
    }

    /// Reference color as a CSS hex string.
    pub fn reference_hex(&self) -> &'static str {
        match self {
            Severity::ImmediateAttention => "#dc2626",
            Severity::ItemsForRepair => "#ea580c",
            Severity::MaintenanceItems => "#2563eb",
            Severity::FurtherEvaluation => "#9333ea",
        }
    }

    /// Classification candidates in tie-break order. On an exact distance
    /// tie the first-enumerated category wins.
    pub const ALL: [Severity; 4] = [
        Severity::ImmediateAttention,
        Severity::ItemsForRepair,
        Severity::MaintenanceItems,
        Severity::FurtherEvaluation,
    ];
}
