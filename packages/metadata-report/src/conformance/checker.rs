//! Strict, namespace-aware conformance checking.

use roxmltree::{Document, Node};
use tracing::debug;

use super::checks::{create_standard_checks, ConformanceCheck, Probe};
use crate::compliance::ComplianceEvaluator;
use crate::config::GMD_NS;
use crate::error::{ReportError, Result};
use crate::obligation::ObligationTable;
use crate::types::{ComplianceResult, ConformanceRow, Obligation, Presence};
use crate::xml::{
    collect_text, is_qualified, parse_document, select, select_first, NamespaceMode,
};

const MODE: NamespaceMode = NamespaceMode::Qualified;

/// Per-file verdict of the strict checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceSummary {
    /// Verdict and missing mandatory checks.
    pub result: ComplianceResult,

    pub present_mandatory: usize,

    pub present_conditional: usize,

    pub present_optional: usize,
}

/// A checked file: per-check presence plus its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFile {
    pub row: ConformanceRow,
    pub summary: ConformanceSummary,
}

impl CheckedFile {
    /// File name (without directory).
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.summary.result.filename
    }
}

/// Runs a fixed list of presence checks over ISO 19139 documents.
#[derive(Debug, Clone)]
pub struct ConformanceChecker {
    checks: Vec<ConformanceCheck>,
    evaluator: ComplianceEvaluator,
}

impl Default for ConformanceChecker {
    fn default() -> Self {
        Self::new(create_standard_checks())
    }
}

impl ConformanceChecker {
    /// Create a checker; the obligation table is derived from the checks.
    #[must_use]
    pub fn new(checks: Vec<ConformanceCheck>) -> Self {
        let obligations =
            ObligationTable::from_entries(checks.iter().map(|c| (c.name.clone(), c.obligation)));
        Self {
            checks,
            evaluator: ComplianceEvaluator::new(obligations),
        }
    }

    /// Checks in report column order.
    #[must_use]
    pub fn checks(&self) -> &[ConformanceCheck] {
        &self.checks
    }

    /// Parse XML text and check it.
    ///
    /// # Returns
    /// * `Err(ReportError::XmlParse)` if the text is not well-formed XML
    /// * `Err(ReportError::UnsupportedDialect)` if the root is not `gmd:MD_Metadata`
    pub fn check_str(&self, xml: &str) -> Result<ConformanceRow> {
        let doc = parse_document(xml)?;
        self.check(&doc)
    }

    /// Run every check against a parsed document.
    pub fn check(&self, doc: &Document<'_>) -> Result<ConformanceRow> {
        let root = doc.root_element();
        if !is_qualified(root, GMD_NS, "MD_Metadata") {
            return Err(ReportError::UnsupportedDialect {
                root: root.tag_name().name().to_string(),
            });
        }

        let mut row = ConformanceRow::new();
        for check in &self.checks {
            row.insert(check.name.as_str(), probe(root, &check.probe));
        }
        debug!(checks = self.checks.len(), "checked document");
        Ok(row)
    }

    /// Check a file's XML text and summarize it in one step.
    pub fn check_file(&self, filename: &str, xml: &str) -> Result<CheckedFile> {
        let row = self.check_str(xml)?;
        let summary = self.summarize(filename, &row);
        Ok(CheckedFile { row, summary })
    }

    /// Verdict and present counts for one checked file.
    #[must_use]
    pub fn summarize(&self, filename: &str, row: &ConformanceRow) -> ConformanceSummary {
        let names: Vec<&str> = self.checks.iter().map(|c| c.name.as_str()).collect();
        let count = |o| self.evaluator.count_present(row, o, &names);

        ConformanceSummary {
            result: self.evaluator.evaluate(filename, row),
            present_mandatory: count(Obligation::Mandatory),
            present_conditional: count(Obligation::Conditional),
            present_optional: count(Obligation::Optional),
        }
    }
}

fn presence_of(node: Node<'_, '_>) -> Presence {
    if collect_text(node).is_empty() {
        Presence::Empty
    } else {
        Presence::Present
    }
}

fn probe(root: Node<'_, '_>, probe: &Probe) -> Presence {
    match probe {
        Probe::Element(paths) => paths
            .iter()
            .find_map(|p| select_first(root, p, MODE))
            .map_or(Presence::Absent, presence_of),
        Probe::AllOf(paths) => {
            for path in paths {
                match select_first(root, path, MODE).map(presence_of) {
                    Some(Presence::Present) => {}
                    Some(other) => return other,
                    None => return Presence::Absent,
                }
            }
            Presence::Present
        }
        Probe::AnyWithin { scope, target } => {
            let Some(scope) = select_first(root, scope, MODE) else {
                return Presence::Absent;
            };
            let targets = select(scope, target, MODE);
            if targets.is_empty() {
                Presence::Absent
            } else if targets.iter().any(|t| presence_of(*t) == Presence::Present) {
                Presence::Present
            } else {
                Presence::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"
        xmlns:gco="http://www.isotc211.org/2005/gco">"#;

    fn doc(body: &str) -> String {
        format!("{HEADER}{body}</gmd:MD_Metadata>")
    }

    fn ident(body: &str) -> String {
        doc(&format!(
            "<gmd:identificationInfo><gmd:MD_DataIdentification>{body}</gmd:MD_DataIdentification></gmd:identificationInfo>"
        ))
    }

    #[test]
    fn test_arcgis_root_is_unsupported() {
        let err = ConformanceChecker::default()
            .check_str("<metadata><dataIdInfo/></metadata>")
            .unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedDialect { ref root } if root == "metadata"));
    }

    #[test]
    fn test_doctype_declaration_is_accepted() {
        let xml = format!(
            "<!DOCTYPE MD_Metadata SYSTEM \"gmd.dtd\">\n{}",
            ident("<gmd:purpose><gco:CharacterString>Research</gco:CharacterString></gmd:purpose>")
        );
        let row = ConformanceChecker::default().check_str(&xml).unwrap();
        assert_eq!(row.get("Purpose"), Some(Presence::Present));
    }

    #[test]
    fn test_wrong_namespace_root_is_unsupported() {
        let xml = r#"<gmd:MD_Metadata xmlns:gmd="urn:other"/>"#;
        assert!(ConformanceChecker::default().check_str(xml).is_err());
    }

    #[test]
    fn test_element_probe_distinguishes_empty_and_absent() {
        let xml = ident(
            r#"<gmd:abstract gco:nilReason="missing"/>
               <gmd:purpose><gco:CharacterString>Research</gco:CharacterString></gmd:purpose>"#,
        );
        let row = ConformanceChecker::default().check_str(&xml).unwrap();
        assert_eq!(row.get("Abstract"), Some(Presence::Empty));
        assert_eq!(row.get("Purpose"), Some(Presence::Present));
        assert_eq!(row.get("Credit"), Some(Presence::Absent));
        assert_eq!(row.get("Metadata Date Stamp"), Some(Presence::Absent));
    }

    #[test]
    fn test_bounding_box_requires_all_sides() {
        let sides = |south: &str| {
            ident(&format!(
                r#"<gmd:extent><gmd:EX_Extent><gmd:geographicElement><gmd:EX_GeographicBoundingBox>
                    <gmd:westBoundLongitude><gco:Decimal>-5.7</gco:Decimal></gmd:westBoundLongitude>
                    <gmd:eastBoundLongitude><gco:Decimal>1.8</gco:Decimal></gmd:eastBoundLongitude>
                    {south}
                    <gmd:northBoundLatitude><gco:Decimal>55.8</gco:Decimal></gmd:northBoundLatitude>
                </gmd:EX_GeographicBoundingBox></gmd:geographicElement></gmd:EX_Extent></gmd:extent>"#
            ))
        };
        let checker = ConformanceChecker::default();

        let full = sides("<gmd:southBoundLatitude><gco:Decimal>49.9</gco:Decimal></gmd:southBoundLatitude>");
        let row = checker.check_str(&full).unwrap();
        assert_eq!(row.get("Geographic bounding box"), Some(Presence::Present));

        let blank = sides("<gmd:southBoundLatitude/>");
        let row = checker.check_str(&blank).unwrap();
        assert_eq!(row.get("Geographic bounding box"), Some(Presence::Empty));

        let missing = sides("");
        let row = checker.check_str(&missing).unwrap();
        assert_eq!(row.get("Geographic bounding box"), Some(Presence::Absent));
    }

    #[test]
    fn test_keywords_any_within_identification() {
        let checker = ConformanceChecker::default();

        let xml = ident(
            r#"<gmd:descriptiveKeywords><gmd:MD_Keywords>
                 <gmd:keyword/>
                 <gmd:keyword><gco:CharacterString>soil</gco:CharacterString></gmd:keyword>
               </gmd:MD_Keywords></gmd:descriptiveKeywords>"#,
        );
        assert_eq!(checker.check_str(&xml).unwrap().get("Keywords"), Some(Presence::Present));

        let xml = ident("<gmd:descriptiveKeywords><gmd:MD_Keywords><gmd:keyword/></gmd:MD_Keywords></gmd:descriptiveKeywords>");
        assert_eq!(checker.check_str(&xml).unwrap().get("Keywords"), Some(Presence::Empty));

        let xml = doc("");
        assert_eq!(checker.check_str(&xml).unwrap().get("Keywords"), Some(Presence::Absent));
    }

    #[test]
    fn test_check_file_carries_filename() {
        let checked = ConformanceChecker::default()
            .check_file("b.xml", &doc(""))
            .unwrap();
        assert_eq!(checked.filename(), "b.xml");
        assert_eq!(checked.row.get("Abstract"), Some(Presence::Absent));
    }

    #[test]
    fn test_summary_counts() {
        let xml = doc(
            r#"<gmd:fileIdentifier><gco:CharacterString>id-1</gco:CharacterString></gmd:fileIdentifier>
               <gmd:language><gco:CharacterString>eng</gco:CharacterString></gmd:language>
               <gmd:dateStamp><gco:Date>2024-01-01</gco:Date></gmd:dateStamp>"#,
        );
        let checker = ConformanceChecker::default();
        let row = checker.check_str(&xml).unwrap();
        let summary = checker.summarize("a.xml", &row);

        assert_eq!(summary.present_mandatory, 2);
        assert_eq!(summary.present_conditional, 0);
        assert_eq!(summary.present_optional, 1);
        assert_eq!(summary.result.missing_count(), 19);
        assert!(!summary.result.is_compliant());
        assert!(summary
            .result
            .missing_mandatory
            .contains(&"Resource Title".to_string()));
    }
}
