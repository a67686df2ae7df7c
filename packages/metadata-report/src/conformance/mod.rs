//! Strict ISO 19139 conformance checking.
//!
//! Only documents whose root is `gmd:MD_Metadata` in the official ISO/TC 211
//! namespace are checked. Each check reports Present, Empty or Absent, so the
//! detail sheet can tell a blank element from a missing one.

mod checker;
mod checks;

pub use checker::{CheckedFile, ConformanceChecker, ConformanceSummary};
pub use checks::{create_standard_checks, ConformanceCheck, Probe};
