//! Section-scoped supplemental content, authored independently of defects.

use serde::{Deserialize, Serialize};

/// Reference from an information block to a report section.
///
/// Upstream documents store this polymorphically: either the full embedded
/// section record or a bare identifier. Only the embedded form carries the
/// section name, so only it can ever match a defect section; a bare
/// `Reference` never matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionRef {
    Embedded {
        #[serde(default)]
        id: Option<String>,
        name: String,
        #[serde(default, rename = "orderIndex")]
        order_index: Option<i64>,
    },
    Reference(String),
}

impl SectionRef {
    /// Section name, when this reference is resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            SectionRef::Embedded { name, .. } => Some(name),
            SectionRef::Reference(_) => None,
        }
    }
}

/// Checklist item kind. `Status` items render as a single "Label: value"
/// line; `Information` items render a bold title plus optional comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ItemType {
    Status,
    #[default]
    Information,
}

impl From<String> for ItemType {
    // Unknown upstream kinds degrade to `Information` rather than erroring.
    fn from(value: String) -> Self {
        match value.as_str() {
            "status" => ItemType::Status,
            _ => ItemType::Information,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InformationBlockItem {
    pub id: Option<String>,
    pub text: String,
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub order_index: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InformationBlockImage {
    pub url: String,
    pub annotations: Option<String>,
    /// Correlates to an item's `id` for grouping images under that item.
    pub checklist_id: Option<String>,
    /// Optional caption.
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationBlock {
    pub section_ref: SectionRef,
    #[serde(default)]
    pub selected_checklist_items: Vec<InformationBlockItem>,
    #[serde(default)]
    pub custom_text: Option<String>,
    #[serde(default)]
    pub images: Vec<InformationBlockImage>,
}

impl InformationBlock {
    /// A block with neither items nor custom text contributes no output,
    /// even when its section matches.
    pub fn is_empty(&self) -> bool {
        self.selected_checklist_items.is_empty()
            && self
                .custom_text
                .as_deref()
                .map_or(true, |text| text.trim().is_empty())
    }
}
