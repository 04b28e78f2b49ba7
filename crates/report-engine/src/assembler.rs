//! Document assembly.
//!
//! Orchestrates one compilation: sort once, number once, then render the
//! header, the mode-specific summary material, the per-defect detail
//! sections, the cost table, and the footer into a single self-contained
//! HTML document. By contract this never fails for well-formed input;
//! every absent field degrades to a textual default.

use tracing::debug;

use inspection_types::{DefectItem, ReportMeta, ReportType};

use crate::assets::resolve_logo;
use crate::html::{escape, escape_attr, escape_multiline};
use crate::info_block::{match_block, render_block};
use crate::narrative::{segment, Narrative};
use crate::numbering::{assign_numbers, sort_defects};
use crate::severity::classify;
use crate::styles::REPORT_STYLESHEET;

const PAGE_BREAK: &str = "<div class=\"page-break\"></div>\n";

const INSPECTION_OVERVIEW: &str = "This report presents the results of a visual inspection of \
the readily accessible systems and components of the property conducted on the date noted above. \
The inspection was performed in accordance with generally accepted home inspection standards of \
practice. The observations recorded here reflect the condition of the property at the time of the \
inspection only; conditions can change rapidly, and this report is not a warranty, guarantee, or \
insurance policy of any kind.\n\nEach finding is assigned to a report section, given a severity \
category, and, where possible, an estimated cost of correction. Estimated costs are provided for \
budgeting purposes only and should be confirmed with licensed contractors before any work is \
undertaken.";

const SCOPE_LIMITATIONS: &str = "The inspection is limited to the visually accessible areas of \
the building and site. The inspector does not move furniture, stored items, floor coverings, or \
insulation, and does not dismantle equipment. Latent and concealed defects are excluded. Areas \
that were inaccessible, unsafe to enter, or obstructed at the time of inspection are excluded \
from this report.\n\nThis report does not address environmental hazards (including but not \
limited to asbestos, lead, radon, and mold), code compliance, zoning, geological stability, or \
the presence of wood-destroying organisms unless explicitly noted. The report is prepared for the \
exclusive use of the client named herein and is not transferable.";

/// Compile an inspection report to a self-contained HTML document.
///
/// Defects are sorted by `(section, subsection)` and numbered exactly once;
/// the detail pass, the cost table, and the full-mode summary table all
/// share that numbering. Invoking this twice with identical input
/// (including an explicit `date`) yields byte-identical output.
pub fn generate_report(defects: &[DefectItem], meta: &ReportMeta) -> String {
    debug!(
        defects = defects.len(),
        report_type = ?meta.report_type,
        "compiling inspection report"
    );

    let sorted = sort_defects(defects);
    let numbers = assign_numbers(&sorted, meta.start_number);

    let mut doc = String::with_capacity(16 * 1024);
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str(&format!("<title>{}</title>\n", escape(meta.title_or_default())));
    doc.push_str("<style>");
    doc.push_str(REPORT_STYLESHEET);
    doc.push_str("</style>\n</head>\n<body>\n");

    doc.push_str(&render_header(meta));

    match meta.report_type {
        ReportType::Full => {
            doc.push_str(&render_legal_section("Inspection Overview", INSPECTION_OVERVIEW));
            doc.push_str(PAGE_BREAK);
            doc.push_str(&render_legal_section("Scope & Limitations", SCOPE_LIMITATIONS));
            doc.push_str(&render_summary_table(&sorted, &numbers));
        }
        ReportType::Summary => {
            doc.push_str(&render_sections_table(&sorted, &numbers));
            doc.push_str(PAGE_BREAK);
        }
    }

    doc.push_str(&render_detail_sections(&sorted, &numbers, meta));
    doc.push_str(&render_cost_table(&sorted, &numbers));
    doc.push_str(&render_footer(meta));

    doc.push_str("</body>\n</html>\n");
    doc
}

fn render_header(meta: &ReportMeta) -> String {
    let logo = resolve_logo(meta.logo_url.as_deref());
    let mut out = String::new();

    match meta.header_image_url.as_deref() {
        Some(hero) => {
            // Branded header: logo and contact block above a full-width
            // hero image, with optional free-text underneath.
            out.push_str("<div class=\"report-header\">\n");
            out.push_str(&format!(
                "<img class=\"logo\" src=\"{}\" alt=\"logo\">\n",
                escape_attr(&logo)
            ));
            out.push_str(&format!(
                "<div class=\"contact\"><strong>{}</strong><br>{}</div>\n",
                escape(meta.company_or_default()),
                escape(&meta.date_or_today())
            ));
            out.push_str("</div>\n");
            out.push_str(&format!(
                "<img class=\"hero-image\" src=\"{}\" alt=\"\">\n",
                escape_attr(hero)
            ));
            if let Some(text) = meta.header_text.as_deref() {
                if !text.trim().is_empty() {
                    out.push_str(&format!(
                        "<div class=\"header-text\">{}</div>\n",
                        escape_multiline(text.trim())
                    ));
                }
            }
        }
        None => {
            // Traditional title header.
            out.push_str("<div class=\"report-header\">\n<div>\n");
            out.push_str(&format!("<h1>{}</h1>\n", escape(meta.title_or_default())));
            if let Some(subtitle) = meta.subtitle.as_deref() {
                if !subtitle.trim().is_empty() {
                    out.push_str(&format!("<p>{}</p>\n", escape(subtitle.trim())));
                }
            }
            out.push_str(&format!(
                "<p>{} &middot; {}</p>\n",
                escape(meta.company_or_default()),
                escape(&meta.date_or_today())
            ));
            out.push_str("</div>\n");
            out.push_str(&format!(
                "<img class=\"logo\" src=\"{}\" alt=\"logo\">\n",
                escape_attr(&logo)
            ));
            out.push_str("</div>\n");
        }
    }
    out
}

fn render_legal_section(heading: &str, text: &str) -> String {
    let mut out = String::from("<div class=\"legal-section\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", escape(heading)));
    for paragraph in text.split("\n\n") {
        out.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    out.push_str("</div>\n");
    out
}

/// Full-mode summary: every defect with its number and title, no pricing.
fn render_summary_table(sorted: &[DefectItem], numbers: &[String]) -> String {
    let mut out = String::from("<h2>Summary of Findings</h2>\n<table>\n");
    out.push_str("<tr><th>#</th><th>Section</th><th>Defect</th></tr>\n");
    for (defect, number) in sorted.iter().zip(numbers) {
        let narrative = segment(&defect.description);
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            number,
            escape(&defect.section),
            escape(display_title(&narrative, defect))
        ));
    }
    out.push_str("</table>\n");
    out
}

/// Summary-mode compact table: one row per section.
fn render_sections_table(sorted: &[DefectItem], numbers: &[String]) -> String {
    let mut out = String::from("<h2>Report Sections</h2>\n<table>\n");
    out.push_str("<tr><th>#</th><th>Section</th><th>Findings</th></tr>\n");

    let mut previous: Option<&str> = None;
    for (start, defect) in sorted.iter().enumerate() {
        if previous == Some(defect.section.as_str()) {
            continue;
        }
        previous = Some(defect.section.as_str());
        let count = sorted
            .iter()
            .filter(|d| d.section == defect.section)
            .count();
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            main_number(&numbers[start]),
            escape(&defect.section),
            count
        ));
    }
    out.push_str("</table>\n");
    out
}

fn render_detail_sections(sorted: &[DefectItem], numbers: &[String], meta: &ReportMeta) -> String {
    let mut out = String::new();
    let mut previous_section: Option<&str> = None;

    for (i, (defect, number)) in sorted.iter().zip(numbers).enumerate() {
        let new_section = previous_section != Some(defect.section.as_str());
        if new_section {
            out.push_str(&format!(
                "<h2>{}. {}</h2>\n",
                main_number(number),
                escape(&defect.section)
            ));
            if let Some(block) = match_block(&meta.information_blocks, &defect.section) {
                out.push_str(&render_block(block));
            }
        }
        previous_section = Some(defect.section.as_str());

        out.push_str(&render_defect(defect, number));

        // Pagination: break after every second defect, never after the last.
        if (i + 1) % 2 == 0 && i + 1 < sorted.len() {
            out.push_str(PAGE_BREAK);
        }
    }
    out
}

fn render_defect(defect: &DefectItem, number: &str) -> String {
    let narrative = segment(&defect.description);
    let severity = classify(Some(defect.color_or_default()));

    let mut out = String::from("<div class=\"defect-block\">\n");
    out.push_str(&format!(
        "<div class=\"defect-heading\" style=\"background-color: {}\">\
<span>{} {}</span><span class=\"severity-badge\">{}</span></div>\n",
        escape_attr(defect.color_or_default()),
        number,
        escape(&defect.subsection),
        severity.label()
    ));

    out.push_str("<div class=\"defect-columns\">\n");

    out.push_str("<div class=\"defect-media\">\n");
    if let Some(image) = defect.image.as_deref() {
        if !image.trim().is_empty() {
            out.push_str(&format!("<img src=\"{}\" alt=\"\">\n", escape_attr(image)));
        }
    }
    out.push_str(&format!(
        "<div class=\"defect-location\">Location: {}</div>\n",
        escape(defect.location_or_default())
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"defect-detail\">\n");
    out.push_str(&format!("<h3>{}</h3>\n", escape(display_title(&narrative, defect))));
    for paragraph in &narrative.paragraphs {
        out.push_str(&format!("<p>{}</p>\n", escape_multiline(paragraph)));
    }
    out.push_str(&format!(
        "<p><strong>Recommendation:</strong> {}</p>\n",
        escape(defect.recommendation_or_default())
    ));

    out.push_str(&format!(
        "<div class=\"cost-line\"><span>Material</span><span>{}</span></div>\n",
        money(defect.material_cost)
    ));
    out.push_str(&format!(
        "<div class=\"cost-line\"><span>Labor ({}, {}/hr &times; {} hrs)</span><span>{}</span></div>\n",
        escape(defect.labor_type_or_default()),
        money(defect.labor_rate),
        trim_number(defect.hours_required),
        money(defect.labor_rate * defect.hours_required)
    ));
    out.push_str(&format!(
        "<div class=\"cost-line cost-total\"><span>Estimated Total</span><span>{}</span></div>\n",
        money(defect.total_cost())
    ));
    out.push_str("</div>\n</div>\n</div>\n");
    out
}

fn render_cost_table(sorted: &[DefectItem], numbers: &[String]) -> String {
    let mut out = String::from("<h2>Estimated Cost Summary</h2>\n<table>\n");
    out.push_str(
        "<tr><th>#</th><th>Defect</th><th class=\"amount\">Material</th>\
<th class=\"amount\">Labor</th><th class=\"amount\">Total</th></tr>\n",
    );

    let mut grand_total = 0.0;
    for (defect, number) in sorted.iter().zip(numbers) {
        let labor = defect.labor_rate * defect.hours_required;
        grand_total += defect.total_cost();
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"amount\">{}</td>\
<td class=\"amount\">{}</td><td class=\"amount\">{}</td></tr>\n",
            number,
            escape(&defect.subsection),
            money(defect.material_cost),
            money(labor),
            money(defect.total_cost())
        ));
    }
    out.push_str(&format!(
        "<tr class=\"grand-total\"><td colspan=\"4\">Grand Total</td>\
<td class=\"amount\">{}</td></tr>\n",
        money(grand_total)
    ));
    out.push_str("</table>\n");
    out
}

fn render_footer(meta: &ReportMeta) -> String {
    format!(
        "<div class=\"report-footer\">Report prepared by {} on {}</div>\n",
        escape(meta.company_or_default()),
        escape(&meta.date_or_today())
    )
}

/// Defect display title: the segmented narrative title, or the subsection
/// label when the narrative is empty.
fn display_title<'a>(narrative: &'a Narrative, defect: &'a DefectItem) -> &'a str {
    if narrative.title.is_empty() {
        &defect.subsection
    } else {
        &narrative.title
    }
}

fn main_number(number: &str) -> &str {
    number.split('.').next().unwrap_or(number)
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Render an hours figure without a trailing ".0" for whole numbers.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defect(section: &str, subsection: &str, description: &str) -> DefectItem {
        DefectItem {
            section: section.to_string(),
            subsection: subsection.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn meta_with_date(report_type: ReportType) -> ReportMeta {
        ReportMeta {
            date: Some("March 3, 2026".to_string()),
            report_type,
            ..Default::default()
        }
    }

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(1234.5), "$1234.50");
    }

    #[test]
    fn trim_number_drops_whole_fraction() {
        assert_eq!(trim_number(2.0), "2");
        assert_eq!(trim_number(1.5), "1.5");
    }

    #[test]
    fn full_report_contains_boilerplate_once() {
        let defects = [defect("A", "x", "Issue.")];
        let html = generate_report(&defects, &meta_with_date(ReportType::Full));
        assert_eq!(html.matches("Inspection Overview").count(), 1);
        assert_eq!(html.matches("Scope &amp; Limitations").count(), 1);
        assert!(html.contains("Summary of Findings"));
    }

    #[test]
    fn summary_report_omits_boilerplate() {
        let defects = [defect("A", "x", "Issue.")];
        let html = generate_report(&defects, &meta_with_date(ReportType::Summary));
        assert!(!html.contains("Inspection Overview"));
        assert!(!html.contains("Scope &amp; Limitations"));
        assert!(html.contains("Report Sections"));
    }

    #[test]
    fn all_passes_share_one_numbering() {
        let defects = [
            defect("A", "x", "First."),
            defect("A", "y", "Second."),
            defect("B", "z", "Third."),
        ];
        let html = generate_report(&defects, &meta_with_date(ReportType::Full));
        // 2.2 appears once in the detail heading, once in the summary table,
        // once in the cost table.
        assert_eq!(html.matches("2.2").count(), 3);
        assert_eq!(html.matches("3.1").count(), 3);
    }

    #[test]
    fn page_break_inserted_after_every_second_defect() {
        let defects = [
            defect("A", "a", ""),
            defect("A", "b", ""),
            defect("A", "c", ""),
            defect("A", "d", ""),
        ];
        let html = generate_report(&defects, &meta_with_date(ReportType::Summary));
        let details_start = html.find("<h2>2. A</h2>").unwrap();
        let details = &html[details_start..html.find("Estimated Cost Summary").unwrap()];
        // Four defects: a break after the second, none after the fourth.
        assert_eq!(details.matches("page-break").count(), 1);
    }

    #[test]
    fn branded_header_used_when_hero_image_present() {
        let meta = ReportMeta {
            header_image_url: Some("https://example.com/hero.jpg".to_string()),
            header_text: Some("4 bed / 3 bath, built 1987".to_string()),
            ..meta_with_date(ReportType::Summary)
        };
        let html = generate_report(&[], &meta);
        assert!(html.contains("hero-image"));
        assert!(html.contains("4 bed / 3 bath, built 1987"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn traditional_header_used_otherwise() {
        let html = generate_report(&[], &meta_with_date(ReportType::Summary));
        assert!(html.contains("<h1>Inspection Report</h1>"));
        assert!(!html.contains("hero-image"));
    }

    #[test]
    fn grand_total_sums_all_defects() {
        let mut a = defect("A", "x", "");
        a.material_cost = 100.0;
        a.labor_rate = 50.0;
        a.hours_required = 2.0;
        let b = defect("B", "y", "");

        let html = generate_report(&[a, b], &meta_with_date(ReportType::Summary));
        assert!(html.contains("Grand Total"));
        assert!(html.contains("$200.00"));
    }
}
