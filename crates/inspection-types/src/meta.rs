//! Report render configuration.

use serde::{Deserialize, Serialize};

use crate::info_block::InformationBlock;

/// Output mode for a compiled report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Legal boilerplate sections plus an unpriced defect summary table.
    #[default]
    Full,
    /// Compact sections table directly under the header, no boilerplate.
    Summary,
}

/// Configuration for one report compilation.
///
/// Every field is optional upstream; absences degrade to fixed textual
/// defaults at render time, never to errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportMeta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub company: Option<String>,
    pub logo_url: Option<String>,
    /// When present, the branded header layout is used instead of the
    /// traditional title header.
    pub header_image_url: Option<String>,
    pub header_text: Option<String>,
    /// Report date. Defaults to today as a long date ("August 29, 2026").
    pub date: Option<String>,
    /// Base for section numbering; mains count up from `start_number + 1`.
    pub start_number: u32,
    pub report_type: ReportType,
    pub information_blocks: Vec<InformationBlock>,
}

impl ReportMeta {
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Inspection Report")
    }

    pub fn company_or_default(&self) -> &str {
        self.company.as_deref().unwrap_or("Home Inspection Services")
    }

    pub fn date_or_today(&self) -> String {
        match self.date.as_deref() {
            Some(date) if !date.trim().is_empty() => date.to_string(),
            _ => chrono::Local::now().format("%B %-d, %Y").to_string(),
        }
    }
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            company: None,
            logo_url: None,
            header_image_url: None,
            header_text: None,
            date: None,
            start_number: 1,
            report_type: ReportType::Full,
            information_blocks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_cover_missing_fields() {
        let meta = ReportMeta::default();
        assert_eq!(meta.title_or_default(), "Inspection Report");
        assert_eq!(meta.company_or_default(), "Home Inspection Services");
        assert_eq!(meta.start_number, 1);
        assert_eq!(meta.report_type, ReportType::Full);
        assert!(meta.information_blocks.is_empty());
    }

    #[test]
    fn report_type_deserializes_snake_case() {
        let meta: ReportMeta = serde_json::from_str(r#"{"reportType": "summary"}"#).unwrap();
        assert_eq!(meta.report_type, ReportType::Summary);
    }

    #[test]
    fn explicit_date_passes_through() {
        let meta = ReportMeta {
            date: Some("January 2, 2026".to_string()),
            ..Default::default()
        };
        assert_eq!(meta.date_or_today(), "January 2, 2026");
    }
}
