//! Shared data model for inspection reports.
//!
//! These types mirror the documents produced by the inspection-authoring
//! workflow. The report compiler receives them as immutable snapshots and
//! never mutates or persists them; optional fields carry their textual
//! defaults through accessor methods rather than through validation.

pub mod defect;
pub mod info_block;
pub mod meta;
pub mod severity;

pub use defect::DefectItem;
pub use info_block::{
    InformationBlock, InformationBlockImage, InformationBlockItem, ItemType, SectionRef,
};
pub use meta::{ReportMeta, ReportType};
pub use severity::Severity;
