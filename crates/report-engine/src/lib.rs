//! Inspection report compiler.
//!
//! Takes a list of defect findings plus report configuration and produces
//! one self-contained HTML document with an embedded stylesheet, ready for
//! direct display or for a downstream headless-browser PDF render.
//!
//! The compiler is a synchronous pure function: no persistence, no network,
//! and no I/O beyond one best-effort local logo read that falls back
//! silently. It never fails for well-formed input; absent fields degrade to
//! textual defaults.
//!
//! ```
//! use inspection_types::{DefectItem, ReportMeta};
//! use report_engine::generate_report;
//!
//! let defects = vec![DefectItem {
//!     section: "9 - Roof".to_string(),
//!     subsection: "Shingles".to_string(),
//!     description: "Roof leak\n\nWater stains visible near chimney.".to_string(),
//!     ..Default::default()
//! }];
//! let meta = ReportMeta {
//!     date: Some("March 3, 2026".to_string()),
//!     ..Default::default()
//! };
//! let html = generate_report(&defects, &meta);
//! assert!(html.contains("Roof leak"));
//! ```

pub mod assembler;
pub mod assets;
pub mod html;
pub mod info_block;
pub mod narrative;
pub mod numbering;
pub mod severity;
pub mod styles;

pub use assembler::generate_report;
pub use assets::{resolve_logo, DEFAULT_LOGO_PATH};
pub use narrative::{segment, Narrative};
pub use numbering::{assign_numbers, sort_defects};
pub use severity::{classify, parse_color};
