//! A single inspection finding.

use serde::{Deserialize, Serialize};

/// Color merged in for defects that carry none. Deliberately not identical
/// to the red severity reference, but close enough to classify as
/// `Immediate Attention` (see `report_engine::severity`).
pub const DEFAULT_DEFECT_COLOR: &str = "#d63636";

/// One defect found during an inspection.
///
/// `section` and `subsection` together form the grouping and sort key for
/// report numbering. Every other field is optional upstream and degrades to
/// a documented default at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefectItem {
    pub section: String,
    pub subsection: String,
    /// Raw multi-line narrative. May be empty.
    pub description: String,
    /// URL or data URI for the defect photo.
    pub image: Option<String>,
    pub location: Option<String>,
    pub material_cost: f64,
    pub labor_type: Option<String>,
    pub labor_rate: f64,
    pub hours_required: f64,
    pub recommendation: Option<String>,
    /// Color expression (hex or rgb()/rgba()) driving severity classification.
    pub color: Option<String>,
}

impl DefectItem {
    /// `materialCost + laborRate * hoursRequired`. Always computable; never
    /// negative for well-formed input.
    pub fn total_cost(&self) -> f64 {
        self.material_cost + self.labor_rate * self.hours_required
    }

    pub fn location_or_default(&self) -> &str {
        match self.location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => loc,
            _ => "Not specified",
        }
    }

    pub fn labor_type_or_default(&self) -> &str {
        match self.labor_type.as_deref() {
            Some(labor) if !labor.trim().is_empty() => labor,
            _ => "N/A",
        }
    }

    pub fn recommendation_or_default(&self) -> &str {
        match self.recommendation.as_deref() {
            Some(rec) if !rec.trim().is_empty() => rec,
            _ => "N/A",
        }
    }

    /// Color expression with the global default merged in.
    pub fn color_or_default(&self) -> &str {
        match self.color.as_deref() {
            Some(color) if !color.trim().is_empty() => color,
            _ => DEFAULT_DEFECT_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_cost_combines_material_and_labor() {
        let defect = DefectItem {
            material_cost: 100.0,
            labor_rate: 50.0,
            hours_required: 2.0,
            ..Default::default()
        };
        assert_eq!(defect.total_cost(), 200.0);
    }

    #[test]
    fn total_cost_defaults_to_zero() {
        assert_eq!(DefectItem::default().total_cost(), 0.0);
    }

    #[test]
    fn camel_case_wire_names_round_trip() {
        let json = r#"{
            "section": "9 - Roof",
            "subsection": "Shingles",
            "description": "Curling shingles on south slope.",
            "materialCost": 250.5,
            "laborRate": 85,
            "hoursRequired": 3,
            "laborType": "Roofing contractor"
        }"#;
        let defect: DefectItem = serde_json::from_str(json).unwrap();
        assert_eq!(defect.material_cost, 250.5);
        assert_eq!(defect.labor_type_or_default(), "Roofing contractor");
        assert_eq!(defect.location_or_default(), "Not specified");
        assert_eq!(defect.recommendation_or_default(), "N/A");
        assert_eq!(defect.color_or_default(), DEFAULT_DEFECT_COLOR);
    }
}
