//! Hierarchical section numbering.
//!
//! Numbering is computed exactly once per compilation and the resulting
//! strings are shared by every render pass that mentions a defect (detail
//! sections, itemized cost table, full-mode summary table), so the passes
//! cannot drift apart.

use inspection_types::DefectItem;

/// Stable sort by `(section, subsection)`, lexicographic and
/// case-sensitive. Defects with identical keys keep their input order.
pub fn sort_defects(defects: &[DefectItem]) -> Vec<DefectItem> {
    let mut sorted = defects.to_vec();
    sorted.sort_by(|a, b| {
        a.section
            .cmp(&b.section)
            .then_with(|| a.subsection.cmp(&b.subsection))
    });
    sorted
}

/// Assign `"main.sub"` numbers to an already-sorted defect sequence.
///
/// The main counter starts at `start_number` and increments on every
/// section change, including the first defect, so the first rendered
/// section is numbered `start_number + 1`.
pub fn assign_numbers(sorted: &[DefectItem], start_number: u32) -> Vec<String> {
    let mut numbers = Vec::with_capacity(sorted.len());
    let mut main_counter = start_number;
    let mut sub_counter = 0u32;
    let mut previous_section: Option<&str> = None;

    for defect in sorted {
        if previous_section != Some(defect.section.as_str()) {
            main_counter += 1;
            sub_counter = 1;
        } else {
            sub_counter += 1;
        }
        numbers.push(format!("{}.{}", main_counter, sub_counter));
        previous_section = Some(defect.section.as_str());
    }
    numbers
}
