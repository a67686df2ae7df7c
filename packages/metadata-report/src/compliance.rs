//! Compliance evaluation against an obligation profile.

use crate::obligation::ObligationTable;
use crate::types::{ComplianceResult, FieldPresence, Obligation, Presence};

/// Decides compliance for one file at a time.
///
/// The mandatory field list comes from the obligation table, so a file is
/// judged the same way whatever columns other files in the batch produced.
#[derive(Debug, Clone)]
pub struct ComplianceEvaluator {
    obligations: ObligationTable,
}

impl ComplianceEvaluator {
    /// Create an evaluator for an obligation profile.
    #[must_use]
    pub fn new(obligations: ObligationTable) -> Self {
        Self { obligations }
    }

    /// The profile this evaluator applies.
    #[must_use]
    pub fn obligations(&self) -> &ObligationTable {
        &self.obligations
    }

    /// Evaluate one file.
    ///
    /// A mandatory field is missing unless it is present with non-blank text;
    /// conditional and optional fields never affect the verdict.
    ///
    /// # Examples
    /// ```
    /// use metadata_report::compliance::ComplianceEvaluator;
    /// use metadata_report::obligation::ObligationTable;
    /// use metadata_report::types::{ExtractedRecord, Obligation};
    ///
    /// let table = ObligationTable::from_entries([
    ///     ("Resource Title", Obligation::Mandatory),
    ///     ("Abstract", Obligation::Mandatory),
    /// ]);
    /// let record: ExtractedRecord = [("Abstract", "Soils of Wales")].into_iter().collect();
    ///
    /// let result = ComplianceEvaluator::new(table).evaluate("a.xml", &record);
    /// assert!(!result.is_compliant());
    /// assert_eq!(result.missing_mandatory, vec!["Resource Title".to_string()]);
    /// ```
    pub fn evaluate(&self, filename: &str, record: &impl FieldPresence) -> ComplianceResult {
        // mandatory_fields() is already sorted
        let missing_mandatory = self
            .obligations
            .mandatory_fields()
            .into_iter()
            .filter(|field| record.presence(field) != Presence::Present)
            .map(str::to_string)
            .collect();

        ComplianceResult {
            filename: filename.to_string(),
            missing_mandatory,
        }
    }

    /// Count fields of the given obligation that are present in a record.
    pub fn count_present(
        &self,
        record: &impl FieldPresence,
        obligation: Obligation,
        fields: &[&str],
    ) -> usize {
        fields
            .iter()
            .filter(|f| self.obligations.obligation(f) == obligation)
            .filter(|f| record.presence(f) == Presence::Present)
            .count()
    }
}
