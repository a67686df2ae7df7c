//! Conformance check definitions.

use crate::types::Obligation;

const IDENT: &str = "gmd:identificationInfo/gmd:MD_DataIdentification";
const CITATION: &str =
    "gmd:identificationInfo/gmd:MD_DataIdentification/gmd:citation/gmd:CI_Citation";
const BBOX: &str = "gmd:identificationInfo/gmd:MD_DataIdentification/gmd:extent/gmd:EX_Extent/gmd:geographicElement/gmd:EX_GeographicBoundingBox";
const CONTACT: &str = "gmd:contact/gmd:CI_ResponsibleParty";
const QUALITY: &str = "gmd:dataQualityInfo/gmd:DQ_DataQuality";
const CONFORMANCE: &str = "gmd:dataQualityInfo/gmd:DQ_DataQuality/gmd:report/gmd:DQ_DomainConsistency/gmd:result/gmd:DQ_ConformanceResult";
const REF_ID: &str =
    "gmd:referenceSystemInfo/gmd:MD_ReferenceSystem/gmd:referenceSystemIdentifier/gmd:RS_Identifier";

/// How a check decides between Present, Empty and Absent.
///
/// All paths are namespace-aware and relative to the `gmd:MD_Metadata` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// First path that matches decides: Present if the element has text,
    /// Empty otherwise. Absent if no path matches.
    Element(Vec<String>),

    /// Every path must match an element with text. The first failing part
    /// decides between Absent (no element) and Empty (no text).
    AllOf(Vec<String>),

    /// Absent without the scope element. Inside the scope, Present if any
    /// target has text, Empty if targets exist but are all blank.
    AnyWithin { scope: String, target: String },
}

/// A named presence check with its obligation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceCheck {
    pub name: String,
    pub obligation: Obligation,
    pub probe: Probe,
}

impl ConformanceCheck {
    /// Create a check.
    #[must_use]
    pub fn new(name: impl Into<String>, obligation: Obligation, probe: Probe) -> Self {
        Self {
            name: name.into(),
            obligation,
            probe,
        }
    }

    fn element(name: &str, obligation: Obligation, path: impl Into<String>) -> Self {
        Self::new(name, obligation, Probe::Element(vec![path.into()]))
    }

    fn within(name: &str, obligation: Obligation, scope: &str, target: &str) -> Self {
        Self::new(
            name,
            obligation,
            Probe::AnyWithin {
                scope: scope.to_string(),
                target: target.to_string(),
            },
        )
    }
}

/// Create the INSPIRE / ISO 19139 check list, in report column order.
#[must_use]
pub fn create_standard_checks() -> Vec<ConformanceCheck> {
    use Obligation::{Conditional, Mandatory, Optional};

    vec![
        // Identification
        ConformanceCheck::element("Resource Title", Mandatory, format!("{CITATION}/gmd:title")),
        ConformanceCheck::element("Abstract", Mandatory, format!("{IDENT}/gmd:abstract")),
        ConformanceCheck::element(
            "Topic Category",
            Mandatory,
            format!("{IDENT}/gmd:topicCategory/gmd:MD_TopicCategoryCode"),
        ),
        ConformanceCheck::within("Keywords", Mandatory, IDENT, ".//gmd:descriptiveKeywords//gmd:keyword"),
        ConformanceCheck::new(
            "Geographic bounding box",
            Mandatory,
            Probe::AllOf(
                [
                    "westBoundLongitude",
                    "eastBoundLongitude",
                    "southBoundLatitude",
                    "northBoundLatitude",
                ]
                .iter()
                .map(|side| format!("{BBOX}/gmd:{side}"))
                .collect(),
            ),
        ),
        ConformanceCheck::element("Data Language", Mandatory, format!("{IDENT}/gmd:language")),
        ConformanceCheck::element(
            "Scale Denominator",
            Mandatory,
            format!(
                "{IDENT}/gmd:spatialResolution/gmd:MD_Resolution/gmd:equivalentScale/gmd:MD_RepresentativeFraction/gmd:denominator"
            ),
        ),
        // Contact
        ConformanceCheck::element(
            "Contact Organisation Name",
            Mandatory,
            format!("{CONTACT}/gmd:organisationName"),
        ),
        ConformanceCheck::element(
            "Contact Email Address",
            Mandatory,
            format!(
                "{CONTACT}/gmd:contactInfo/gmd:CI_Contact/gmd:address/gmd:CI_Address/gmd:electronicMailAddress"
            ),
        ),
        ConformanceCheck::element("Contact Role", Mandatory, format!("{CONTACT}/gmd:role")),
        // Distribution
        ConformanceCheck::within(
            "Distribution Online Resource Linkage",
            Mandatory,
            "gmd:distributionInfo/gmd:MD_Distribution",
            ".//gmd:onLine/gmd:CI_OnlineResource/gmd:linkage",
        ),
        // Data quality
        ConformanceCheck::element(
            "Lineage Statement",
            Mandatory,
            format!("{QUALITY}/gmd:lineage/gmd:LI_Lineage/gmd:statement"),
        ),
        ConformanceCheck::element(
            "Data Quality Scope Level",
            Mandatory,
            format!("{QUALITY}/gmd:scope/gmd:DQ_Scope/gmd:level"),
        ),
        ConformanceCheck::element(
            "Conformance Specification Title",
            Mandatory,
            format!("{CONFORMANCE}/gmd:specification/gmd:CI_Citation/gmd:title"),
        ),
        ConformanceCheck::element("Conformance Pass", Mandatory, format!("{CONFORMANCE}/gmd:pass")),
        // Metadata section
        ConformanceCheck::element("Metadata Language Code", Mandatory, "gmd:language"),
        ConformanceCheck::element("Metadata Date Stamp", Mandatory, "gmd:dateStamp"),
        ConformanceCheck::element("Metadata Scope Code", Mandatory, "gmd:hierarchyLevel"),
        // Constraints
        ConformanceCheck::within("Access Constraints", Mandatory, IDENT, ".//gmd:accessConstraints"),
        ConformanceCheck::within("Other Constraints", Mandatory, IDENT, ".//gmd:otherConstraints"),
        ConformanceCheck::within("Use Limitation", Mandatory, IDENT, ".//gmd:useLimitation"),
        // Conditional
        ConformanceCheck::element(
            "Publication Date",
            Conditional,
            format!("{CITATION}/gmd:date/gmd:CI_Date/gmd:date"),
        ),
        ConformanceCheck::element("Reference System Code", Conditional, format!("{REF_ID}/gmd:code")),
        ConformanceCheck::element(
            "Reference System Code Space",
            Conditional,
            format!("{REF_ID}/gmd:codeSpace"),
        ),
        // Optional
        ConformanceCheck::element("File Identifier", Optional, "gmd:fileIdentifier"),
        ConformanceCheck::element("Metadata Standard Name", Optional, "gmd:metadataStandardName"),
        ConformanceCheck::element(
            "Metadata Standard Version",
            Optional,
            "gmd:metadataStandardVersion",
        ),
        ConformanceCheck::element("Purpose", Optional, format!("{IDENT}/gmd:purpose")),
        ConformanceCheck::element("Credit", Optional, format!("{IDENT}/gmd:credit")),
        ConformanceCheck::element("Status", Optional, format!("{IDENT}/gmd:status")),
        ConformanceCheck::element(
            "Maintenance Frequency",
            Optional,
            format!(
                "{IDENT}/gmd:resourceMaintenance/gmd:MD_MaintenanceInformation/gmd:maintenanceAndUpdateFrequency"
            ),
        ),
        ConformanceCheck::element(
            "Graphic Overview",
            Optional,
            format!("{IDENT}/gmd:graphicOverview/gmd:MD_BrowseGraphic/gmd:fileName"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_check_counts() {
        let checks = create_standard_checks();
        let count = |o: Obligation| checks.iter().filter(|c| c.obligation == o).count();
        assert_eq!(checks.len(), 32);
        assert_eq!(count(Obligation::Mandatory), 21);
        assert_eq!(count(Obligation::Conditional), 3);
        assert_eq!(count(Obligation::Optional), 8);
    }

    #[test]
    fn test_bounding_box_needs_all_four_sides() {
        let checks = create_standard_checks();
        let bbox = checks
            .iter()
            .find(|c| c.name == "Geographic bounding box")
            .unwrap();
        match &bbox.probe {
            Probe::AllOf(paths) => {
                assert_eq!(paths.len(), 4);
                assert!(paths[0].ends_with("gmd:westBoundLongitude"));
            }
            other => panic!("unexpected probe {other:?}"),
        }
    }
}
