//! Workbook output.
//!
//! Builders turn extraction and conformance results into a [`WorkbookModel`],
//! a plain grid of styled cells; the writer renders that model with
//! `rust_xlsxwriter`.
//!
//! # Example
//!
//! ```
//! use metadata_report::obligation::ObligationTable;
//! use metadata_report::report::build_export_workbook;
//!
//! let model = build_export_workbook(&[], &[], &ObligationTable::inspire(), &[]);
//! assert_eq!(
//!     model.sheet_names(),
//!     vec!["Compliance Summary", "Metadata Export", "Code Resolution"]
//! );
//! ```

mod builder;
mod model;
mod writer;

pub use builder::{build_conformance_workbook, build_export_workbook, unified_fields};
pub use model::{truncate_to_cell, Cell, CellStyle, CellValue, Sheet, WorkbookModel};
pub use writer::{render_workbook, save_workbook};
