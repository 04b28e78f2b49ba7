//! Information block matching and rendering.
//!
//! Blocks are authored against sections independently of defects, and the
//! two sides frequently disagree about the `"<number> - "` prefix ("9 -
//! Roof" vs "Roof"). Matching therefore compares section names with that
//! prefix stripped from both sides, case-sensitively.

use lazy_static::lazy_static;
use regex::Regex;

use inspection_types::{InformationBlock, InformationBlockImage, InformationBlockItem, ItemType};

use crate::html::{escape, escape_attr, escape_multiline};

lazy_static! {
    static ref SECTION_PREFIX: Regex = Regex::new(r"^\d+\s*-\s*").expect("section prefix pattern");
}

/// Strip a leading `"<digits> - "` ordering prefix from a section name.
pub fn strip_section_prefix(name: &str) -> &str {
    match SECTION_PREFIX.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Find the first block whose resolved section name matches `section`.
///
/// Bare `SectionRef::Reference` blocks carry no name and never match. At
/// most one block is ever rendered per section, so only the first match is
/// returned.
pub fn match_block<'a>(
    blocks: &'a [InformationBlock],
    section: &str,
) -> Option<&'a InformationBlock> {
    let wanted = strip_section_prefix(section);
    blocks.iter().find(|block| {
        block
            .section_ref
            .name()
            .map(strip_section_prefix)
            .is_some_and(|name| name == wanted)
    })
}

/// Render a block's grid. An empty block (no items, no custom text)
/// contributes nothing even when its section matched.
pub fn render_block(block: &InformationBlock) -> String {
    if block.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class=\"info-block\">\n");
    if !block.selected_checklist_items.is_empty() {
        out.push_str("<div class=\"info-grid\">\n");
        for item in &block.selected_checklist_items {
            out.push_str(&render_item(item, &block.images));
        }
        out.push_str("</div>\n");
    }

    if let Some(text) = block.custom_text.as_deref() {
        if !text.trim().is_empty() {
            out.push_str(&format!("<p>{}</p>\n", escape_multiline(text.trim())));
        }
    }

    let loose: Vec<&InformationBlockImage> = block
        .images
        .iter()
        .filter(|image| !image_belongs_to_item(image, &block.selected_checklist_items))
        .collect();
    if !loose.is_empty() {
        out.push_str(&render_images(&loose));
    }

    out.push_str("</div>\n");
    out
}

fn render_item(item: &InformationBlockItem, images: &[InformationBlockImage]) -> String {
    let mut out = String::from("<div class=\"info-item\">");
    match item.item_type {
        ItemType::Status => {
            // "Label: value" only; a status item's comment is never shown.
            match item.text.split_once(':') {
                Some((label, value)) => out.push_str(&format!(
                    "<strong>{}:</strong> {}",
                    escape(label.trim()),
                    escape(value.trim())
                )),
                None => out.push_str(&format!("<strong>{}</strong>", escape(item.text.trim()))),
            }
        }
        ItemType::Information => {
            out.push_str(&format!("<strong>{}</strong>", escape(item.text.trim())));
            if let Some(comment) = item.comment.as_deref() {
                if !comment.trim().is_empty() {
                    out.push_str(&format!(
                        "<div class=\"item-comment\">{}</div>",
                        escape_multiline(comment.trim())
                    ));
                }
            }
        }
    }

    if let Some(id) = item.id.as_deref() {
        let grouped: Vec<&InformationBlockImage> = images
            .iter()
            .filter(|image| image.checklist_id.as_deref() == Some(id))
            .collect();
        if !grouped.is_empty() {
            out.push_str(&render_images(&grouped));
        }
    }

    out.push_str("</div>\n");
    out
}

fn image_belongs_to_item(
    image: &InformationBlockImage,
    items: &[InformationBlockItem],
) -> bool {
    match image.checklist_id.as_deref() {
        Some(id) => items.iter().any(|item| item.id.as_deref() == Some(id)),
        None => false,
    }
}

fn render_images(images: &[&InformationBlockImage]) -> String {
    let mut out = String::from("<div class=\"info-images\">");
    for image in images {
        out.push_str("<figure>");
        out.push_str(&format!("<img src=\"{}\" alt=\"\">", escape_attr(&image.url)));
        if let Some(caption) = image.location.as_deref() {
            if !caption.trim().is_empty() {
                out.push_str(&format!("<figcaption>{}</figcaption>", escape(caption.trim())));
            }
        }
        out.push_str("</figure>");
    }
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspection_types::SectionRef;
    use pretty_assertions::assert_eq;

    fn embedded(name: &str) -> SectionRef {
        SectionRef::Embedded {
            id: Some("s-1".to_string()),
            name: name.to_string(),
            order_index: None,
        }
    }

    fn block(name: &str) -> InformationBlock {
        InformationBlock {
            section_ref: embedded(name),
            selected_checklist_items: vec![InformationBlockItem {
                text: "Covering: asphalt shingle".to_string(),
                item_type: ItemType::Status,
                ..Default::default()
            }],
            custom_text: None,
            images: vec![],
        }
    }

    #[test]
    fn prefix_is_stripped_from_both_sides() {
        let blocks = [block("9 - Roof")];
        assert!(match_block(&blocks, "9 - Roof").is_some());
        assert!(match_block(&blocks, "Roof").is_some());
    }

    #[test]
    fn bare_name_matches_prefixed_section() {
        let blocks = [block("Roof")];
        assert!(match_block(&blocks, "12 - Roof").is_some());
    }

    #[test]
    fn matching_is_exact_after_stripping() {
        let blocks = [block("Roofing")];
        assert!(match_block(&blocks, "Roof").is_none());
        let blocks = [block("roof")];
        assert!(match_block(&blocks, "Roof").is_none());
    }

    #[test]
    fn bare_reference_never_matches() {
        let blocks = [InformationBlock {
            section_ref: SectionRef::Reference("s-9".to_string()),
            selected_checklist_items: vec![],
            custom_text: Some("text".to_string()),
            images: vec![],
        }];
        assert!(match_block(&blocks, "Roof").is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut first = block("Roof");
        first.custom_text = Some("first".to_string());
        let mut second = block("Roof");
        second.custom_text = Some("second".to_string());

        let blocks = [first, second];
        let matched = match_block(&blocks, "Roof").unwrap();
        assert_eq!(matched.custom_text.as_deref(), Some("first"));
    }

    #[test]
    fn empty_block_renders_nothing() {
        let empty = InformationBlock {
            section_ref: embedded("Roof"),
            selected_checklist_items: vec![],
            custom_text: None,
            images: vec![],
        };
        assert_eq!(render_block(&empty), "");
    }

    #[test]
    fn status_item_renders_label_value_and_hides_comment() {
        let b = InformationBlock {
            section_ref: embedded("Roof"),
            selected_checklist_items: vec![InformationBlockItem {
                text: "Covering: asphalt shingle".to_string(),
                comment: Some("should never appear".to_string()),
                item_type: ItemType::Status,
                ..Default::default()
            }],
            custom_text: None,
            images: vec![],
        };
        let html = render_block(&b);
        assert!(html.contains("<strong>Covering:</strong> asphalt shingle"));
        assert!(!html.contains("should never appear"));
    }

    #[test]
    fn information_item_renders_comment_indented() {
        let b = InformationBlock {
            section_ref: embedded("Roof"),
            selected_checklist_items: vec![InformationBlockItem {
                text: "Ventilation".to_string(),
                comment: Some("Ridge vents present".to_string()),
                item_type: ItemType::Information,
                ..Default::default()
            }],
            custom_text: None,
            images: vec![],
        };
        let html = render_block(&b);
        assert!(html.contains("<strong>Ventilation</strong>"));
        assert!(html.contains("<div class=\"item-comment\">Ridge vents present</div>"));
    }

    #[test]
    fn images_group_under_their_item_by_checklist_id() {
        let b = InformationBlock {
            section_ref: embedded("Roof"),
            selected_checklist_items: vec![InformationBlockItem {
                id: Some("item-1".to_string()),
                text: "Flashing".to_string(),
                item_type: ItemType::Information,
                ..Default::default()
            }],
            custom_text: None,
            images: vec![
                InformationBlockImage {
                    url: "flashing.jpg".to_string(),
                    checklist_id: Some("item-1".to_string()),
                    location: Some("Chimney".to_string()),
                    ..Default::default()
                },
                InformationBlockImage {
                    url: "general.jpg".to_string(),
                    ..Default::default()
                },
            ],
        };
        let html = render_block(&b);
        let item_pos = html.find("<strong>Flashing</strong>").unwrap();
        let grouped_pos = html.find("flashing.jpg").unwrap();
        let loose_pos = html.find("general.jpg").unwrap();
        assert!(item_pos < grouped_pos);
        assert!(grouped_pos < loose_pos);
        assert!(html.contains("<figcaption>Chimney</figcaption>"));
    }
}
