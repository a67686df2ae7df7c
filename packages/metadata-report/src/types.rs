//! Core data types for the metadata report.
//!
//! These types describe what was found in one metadata file and how it
//! measures up against an obligation profile.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO 19139 / INSPIRE obligation of a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obligation {
    /// Must be present and non-empty for a file to be compliant.
    Mandatory,

    /// Required only under conditions the report does not evaluate.
    Conditional,

    /// Never affects compliance.
    Optional,
}

impl Obligation {
    /// Get the label written to the obligation row.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Conditional => "conditional",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-valued presence of an element in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Element exists and has text content.
    Present,

    /// Element exists but has no text content.
    Empty,

    /// Element does not exist.
    Absent,
}

impl Presence {
    /// Get the label written to the detail sheet.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Empty => "Empty",
            Self::Absent => "Absent",
        }
    }

    /// Classify an optional value: `None` is absent, blank text is empty.
    #[must_use]
    pub fn of_value(value: Option<&str>) -> Self {
        match value {
            None => Self::Absent,
            Some(v) if v.trim().is_empty() => Self::Empty,
            Some(_) => Self::Present,
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can report the presence of a named field.
///
/// Both the lenient extractor output and the strict conformance row
/// implement this, so one evaluator serves both report variants.
pub trait FieldPresence {
    /// Presence of the field with the given display name.
    fn presence(&self, field: &str) -> Presence;
}

/// Field values extracted from one metadata file.
///
/// A field with no matching element is absent from the record; a field whose
/// element exists but holds no text is stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    fields: BTreeMap<String, String>,
}

impl ExtractedRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get the value of a field, if the field was found.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Check whether a field was found (even if blank).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in alphabetical order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field name and value pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether no field was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldPresence for ExtractedRecord {
    fn presence(&self, field: &str) -> Presence {
        Presence::of_value(self.get(field))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtractedRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Presence of each conformance check for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConformanceRow {
    checks: BTreeMap<String, Presence>,
}

impl ConformanceRow {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, check: impl Into<String>, presence: Presence) {
        self.checks.insert(check.into(), presence);
    }

    /// Get the recorded presence for a check, if it was evaluated.
    #[must_use]
    pub fn get(&self, check: &str) -> Option<Presence> {
        self.checks.get(check).copied()
    }
}

impl FieldPresence for ConformanceRow {
    fn presence(&self, field: &str) -> Presence {
        self.get(field).unwrap_or(Presence::Absent)
    }
}

/// Compliance verdict for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceResult {
    /// File name (without directory).
    pub filename: String,

    /// Mandatory fields that are absent or blank, in alphabetical order.
    pub missing_mandatory: Vec<String>,
}

impl ComplianceResult {
    /// Check whether every mandatory field is present and non-empty.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.missing_mandatory.is_empty()
    }

    /// Number of missing mandatory fields.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing_mandatory.len()
    }

    /// "Yes" or "No", as shown in the summary sheet.
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.is_compliant() {
            "Yes"
        } else {
            "No"
        }
    }

    /// Comma-joined missing field names, as shown in the summary sheet.
    #[must_use]
    pub fn missing_list(&self) -> String {
        self.missing_mandatory.join(", ")
    }
}

/// One successfully extracted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name (without directory).
    pub filename: String,

    /// Extracted field values.
    pub record: ExtractedRecord,
}

/// A file that was skipped, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub filename: String,
    pub reason: String,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing {}: {}", self.filename, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obligation_labels() {
        assert_eq!(Obligation::Mandatory.as_str(), "mandatory");
        assert_eq!(Obligation::Conditional.to_string(), "conditional");
        assert_eq!(Obligation::Optional.as_str(), "optional");
    }

    #[test]
    fn test_record_presence_distinguishes_blank_and_absent() {
        let record: ExtractedRecord = [("Abstract", ""), ("Resource Title", "Soils")]
            .into_iter()
            .collect();

        assert_eq!(record.presence("Resource Title"), Presence::Present);
        assert_eq!(record.presence("Abstract"), Presence::Empty);
        assert_eq!(record.presence("Keywords"), Presence::Absent);
        assert!(record.contains("Abstract"));
        assert!(!record.contains("Keywords"));
    }

    #[test]
    fn test_record_field_names_sorted() {
        let record: ExtractedRecord = [("b", "1"), ("a", "2"), ("C", "3")]
            .into_iter()
            .collect();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(names, vec!["C", "a", "b"]);
    }

    #[test]
    fn test_compliance_result_counts() {
        let result = ComplianceResult {
            filename: "a.xml".to_string(),
            missing_mandatory: vec!["Abstract".to_string(), "Keywords".to_string()],
        };
        assert!(!result.is_compliant());
        assert_eq!(result.missing_count(), 2);
        assert_eq!(result.verdict(), "No");
        assert_eq!(result.missing_list(), "Abstract, Keywords");
    }

    #[test]
    fn test_file_failure_display() {
        let failure = FileFailure {
            filename: "broken.xml".to_string(),
            reason: "XML parsing failed".to_string(),
        };
        assert_eq!(failure.to_string(), "Error processing broken.xml: XML parsing failed");
    }

    #[test]
    fn test_conformance_row_defaults_to_absent() {
        let mut row = ConformanceRow::new();
        row.insert("Abstract", Presence::Empty);
        assert_eq!(row.presence("Abstract"), Presence::Empty);
        assert_eq!(row.presence("Resource Title"), Presence::Absent);
    }
}
