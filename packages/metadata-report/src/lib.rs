//! Metadata report - export ISO 19139 / ArcGIS XML metadata to Excel.
//!
//! This crate reads a folder of metadata XML files, extracts a fixed set of
//! logical attributes from each, judges every file against an INSPIRE
//! obligation profile and writes the result as an `.xlsx` workbook. A
//! stricter variant checks only namespaced ISO 19139 documents and reports
//! each element as Present, Empty or Absent.
//!
//! # Example
//!
//! ```
//! use metadata_report::compliance::ComplianceEvaluator;
//! use metadata_report::extract::Extractor;
//! use metadata_report::obligation::ObligationTable;
//!
//! let xml = "<metadata><dataIdInfo><idAbs>Soil survey</idAbs></dataIdInfo></metadata>";
//! let record = Extractor::default().extract_str(xml).unwrap();
//!
//! let result = ComplianceEvaluator::new(ObligationTable::inspire()).evaluate("a.xml", &record);
//! assert!(!result.is_compliant());
//! assert!(!result.missing_mandatory.contains(&"Abstract".to_string()));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, namespaces and folder validation
//! - [`types`]: Core data types (records, presence, verdicts)
//! - [`error`]: Error types and Result alias
//! - [`obligation`]: Field obligation profiles
//! - [`text`]: Markup stripping and whitespace normalization
//! - [`codelist`]: ISO 19139 / ArcGIS codelist resolution
//! - [`xml`]: XML utilities and path selection
//! - [`extract`]: Declarative attribute extraction
//! - [`compliance`]: Mandatory field evaluation
//! - [`conformance`]: Strict ISO 19139 presence checks
//! - [`report`]: Workbook model, builders and xlsx writer
//! - [`batch`]: Folder discovery and per-file processing
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod cli;
pub mod codelist;
pub mod compliance;
pub mod config;
pub mod conformance;
pub mod error;
pub mod extract;
pub mod obligation;
pub mod report;
pub mod text;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use compliance::ComplianceEvaluator;
pub use conformance::ConformanceChecker;
pub use error::{ReportError, Result};
pub use extract::Extractor;
pub use obligation::ObligationTable;
pub use types::{ComplianceResult, ExtractedRecord, Obligation, Presence};
