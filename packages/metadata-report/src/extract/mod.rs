//! Attribute extraction from ISO 19139 and ArcGIS metadata documents.
//!
//! Each logical field is described by an [`ExtractionRule`]: an ordered list
//! of candidate element paths (namespace-aware ISO paths first, then
//! local-name ArcGIS paths), a cardinality, a value source and an optional
//! codelist. The [`Extractor`] applies the rules in order.
//!
//! # Example
//!
//! ```
//! use metadata_report::extract::Extractor;
//!
//! let xml = r#"<metadata><dataIdInfo>
//!     <idCitation><resTitle>Soils</resTitle></idCitation>
//! </dataIdInfo></metadata>"#;
//!
//! let record = Extractor::default().extract_str(xml).unwrap();
//! assert_eq!(record.get("Resource Title"), Some("Soils"));
//! assert_eq!(record.get("Abstract"), None);
//! ```

mod engine;
mod rules;
mod standard;

pub use engine::Extractor;
pub use rules::{Cardinality, ExtractionRule, Lookup, ValueSource};
pub use standard::create_standard_rules;
