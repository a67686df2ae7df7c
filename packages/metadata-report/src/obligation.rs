//! Field obligation profiles.
//!
//! The built-in profile follows INSPIRE Regulation 1205/2008 as applied to
//! ISO 19139 metadata. Alternate profiles can be loaded from YAML:
//!
//! ```yaml
//! Resource Title: mandatory
//! Abstract: mandatory
//! Publication Date: conditional
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::types::Obligation;

/// INSPIRE obligations for the exported field names.
const INSPIRE_OBLIGATIONS: &[(&str, Obligation)] = &[
    ("Resource Title", Obligation::Mandatory),
    ("Abstract", Obligation::Mandatory),
    ("Topic Category", Obligation::Mandatory),
    ("Keywords", Obligation::Mandatory),
    ("Geographic West Bounding Longitude", Obligation::Mandatory),
    ("Geographic East Bounding Longitude", Obligation::Mandatory),
    ("Geographic North Bounding Latitude", Obligation::Mandatory),
    ("Geographic South Bounding Latitude", Obligation::Mandatory),
    ("Data Language", Obligation::Mandatory),
    ("Scale Denominator", Obligation::Mandatory),
    ("Contact Organisation Name", Obligation::Mandatory),
    ("Contact Email Address", Obligation::Mandatory),
    ("Contact Role", Obligation::Mandatory),
    ("Distribution Online Resource Linkage", Obligation::Mandatory),
    ("Lineage Statement", Obligation::Mandatory),
    ("Data Quality Scope Level", Obligation::Mandatory),
    ("Metadata Language Code", Obligation::Mandatory),
    ("Metadata Date Stamp", Obligation::Mandatory),
    ("Metadata Scope Code", Obligation::Mandatory),
    ("Access Constraints", Obligation::Mandatory),
    ("Conformance Specification Title", Obligation::Mandatory),
    ("Conformance Pass", Obligation::Mandatory),
    ("Other Constraints", Obligation::Mandatory),
    ("Use Limitation", Obligation::Mandatory),
    ("Publication Date", Obligation::Conditional),
    ("Reference System Code", Obligation::Conditional),
    ("Reference System Code Space", Obligation::Conditional),
];

/// Mapping from field name to obligation. Unlisted fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObligationTable {
    entries: HashMap<String, Obligation>,
}

impl ObligationTable {
    /// Build a table from explicit entries.
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Obligation)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The built-in INSPIRE / ISO 19139 profile.
    #[must_use]
    pub fn inspire() -> Self {
        Self::from_entries(INSPIRE_OBLIGATIONS.iter().copied())
    }

    /// Parse a profile from a YAML mapping of field name to obligation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let entries: HashMap<String, Obligation> = serde_yaml_ng::from_str(yaml)?;
        Ok(Self { entries })
    }

    /// Load a profile from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| ReportError::InvalidProfile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let table = Self::from_yaml_str(&yaml).map_err(|e| ReportError::InvalidProfile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), fields = table.entries.len(), "loaded obligation profile");
        Ok(table)
    }

    /// Obligation of a field; fields not in the table are optional.
    #[must_use]
    pub fn obligation(&self, field: &str) -> Obligation {
        self.entries
            .get(field)
            .copied()
            .unwrap_or(Obligation::Optional)
    }

    /// Mandatory field names in alphabetical order.
    #[must_use]
    pub fn mandatory_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, o)| **o == Obligation::Mandatory)
            .map(|(k, _)| k.as_str())
            .collect();
        fields.sort_unstable();
        fields
    }

    /// Number of explicitly listed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no field is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
