//! Rule evaluation against a parsed document.

use roxmltree::{Document, Node};
use tracing::debug;

use super::rules::{Cardinality, ExtractionRule, ValueSource};
use super::standard::create_standard_rules;
use crate::codelist::Codelist;
use crate::config::VALUE_SEPARATOR;
use crate::error::Result;
use crate::text::sanitize;
use crate::types::ExtractedRecord;
use crate::xml::{
    collect_text, get_attribute, parse_document, select, select_first, NamespaceMode,
};

/// ArcGIS keyword groups that carry their own thesaurus title.
const THESAURUS_GROUP_PATH: &str = "//dataIdInfo//otherKeys";
const THESAURUS_TITLE_PATH: &str = ".//thesaName/resTitle";
const THESAURUS_KEYWORD_PATH: &str = "keyword";

/// Applies an ordered rule set to metadata documents.
#[derive(Debug, Clone)]
pub struct Extractor {
    rules: Vec<ExtractionRule>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(create_standard_rules())
    }
}

impl Extractor {
    /// Create an extractor over a custom rule set.
    #[must_use]
    pub fn new(rules: Vec<ExtractionRule>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ExtractionRule] {
        &self.rules
    }

    /// Fields whose values are resolved through a codelist, in rule order.
    #[must_use]
    pub fn codelist_fields(&self) -> Vec<(&str, Codelist)> {
        self.rules
            .iter()
            .filter_map(|r| r.codelist.map(|c| (r.field.as_str(), c)))
            .collect()
    }

    /// Parse XML text and extract a record from it.
    ///
    /// # Returns
    /// * `Err(ReportError::XmlParse)` if the text is not well-formed XML
    pub fn extract_str(&self, xml: &str) -> Result<ExtractedRecord> {
        let doc = parse_document(xml)?;
        Ok(self.extract(&doc))
    }

    /// Extract a record from a parsed document.
    ///
    /// A field whose lookups match nothing is left out of the record; a
    /// matched element with no text is recorded as an empty string.
    #[must_use]
    pub fn extract(&self, doc: &Document<'_>) -> ExtractedRecord {
        let root = doc.root_element();
        let mut record = ExtractedRecord::new();

        for rule in &self.rules {
            if let Some(value) = self.apply(rule, root) {
                record.insert(rule.field.as_str(), value);
            }
        }

        add_thesaurus_groups(root, &mut record);

        debug!(
            root = root.tag_name().name(),
            fields = record.len(),
            "extracted record"
        );
        record
    }

    fn apply(&self, rule: &ExtractionRule, root: Node<'_, '_>) -> Option<String> {
        for lookup in &rule.lookups {
            let nodes = select(root, &lookup.path, lookup.mode);
            let Some(first) = nodes.first() else {
                continue;
            };

            let value = match rule.cardinality {
                Cardinality::First => read_value(rule, *first),
                Cardinality::Repeatable => nodes
                    .iter()
                    .map(|n| read_value(rule, *n))
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(VALUE_SEPARATOR),
            };
            return Some(value);
        }
        None
    }
}

/// Read, sanitize and resolve the value of one matched element.
fn read_value(rule: &ExtractionRule, node: Node<'_, '_>) -> String {
    let raw = match &rule.value {
        ValueSource::Text => collect_text(node),
        ValueSource::Attribute(name) => get_attribute(node, name).unwrap_or_default().to_string(),
        ValueSource::AttributeOrText(name) => match non_blank_attribute(node, name) {
            Some(v) => v.to_string(),
            None => collect_text(node),
        },
        ValueSource::Code => non_blank_attribute(node, "value")
            .or_else(|| non_blank_attribute(node, "codeListValue"))
            .map(str::to_string)
            .unwrap_or_else(|| collect_text(node)),
    };

    let clean = sanitize(&raw);
    match rule.codelist {
        Some(codelist) => codelist.resolve(&clean),
        None => clean,
    }
}

fn non_blank_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    get_attribute(node, name).filter(|v| !v.trim().is_empty())
}

/// Add one `Other Keywords (<title>)` field per ArcGIS keyword group.
///
/// Groups without keywords are skipped; groups sharing a title are merged.
fn add_thesaurus_groups(root: Node<'_, '_>, record: &mut ExtractedRecord) {
    for group in select(root, THESAURUS_GROUP_PATH, NamespaceMode::Agnostic) {
        let title = select_first(group, THESAURUS_TITLE_PATH, NamespaceMode::Agnostic)
            .map(|n| sanitize(&collect_text(n)))
            .unwrap_or_default();

        let keywords: Vec<String> = select(group, THESAURUS_KEYWORD_PATH, NamespaceMode::Agnostic)
            .into_iter()
            .map(|n| sanitize(&collect_text(n)))
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            continue;
        }

        let field = if title.is_empty() {
            "Other Keywords".to_string()
        } else {
            format!("Other Keywords ({title})")
        };
        let joined = keywords.join(VALUE_SEPARATOR);
        let value = match record.get(&field) {
            Some(existing) if !existing.is_empty() => {
                format!("{existing}{VALUE_SEPARATOR}{joined}")
            }
            _ => joined,
        };
        record.insert(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARCGIS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xml:lang="en">
  <Esri><ArcGISFormat>1.0</ArcGISFormat></Esri>
  <dataIdInfo>
    <idCitation><resTitle>National Soil Map</resTitle></idCitation>
    <idAbs>&lt;DIV&gt;&lt;P&gt;Soil &amp;amp; land&lt;/P&gt;&lt;/DIV&gt;</idAbs>
    <idPurp></idPurp>
    <searchKeys><keyword>water</keyword><keyword> </keyword><keyword>land</keyword></searchKeys>
    <otherKeys>
      <keyword>loam</keyword><keyword>clay</keyword>
      <thesaName><resTitle>GEMET</resTitle></thesaName>
    </otherKeys>
    <otherKeys><keyword>misc</keyword></otherKeys>
    <accessConsts><RestrictCd value="005"/></accessConsts>
    <dataLang><languageCode value="eng"/></dataLang>
    <tpCat><TopicCatCd value="007"/></tpCat>
  </dataIdInfo>
  <refSysInfo><RefSystem><refSysID><identCode code="27700"/></refSysID></RefSystem></refSysInfo>
  <spdoinfo><ptvctinf><esriterm Name="soils"><efeageom code="6"/></esriterm></ptvctinf></spdoinfo>
</metadata>"#;

    const ISO: &str = r#"<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"
    xmlns:gco="http://www.isotc211.org/2005/gco">
  <gmd:fileIdentifier><gco:CharacterString>abc-123</gco:CharacterString></gmd:fileIdentifier>
  <gmd:language><gmd:LanguageCode codeListValue="eng">English</gmd:LanguageCode></gmd:language>
  <gmd:dateStamp><gco:Date>2024-05-01</gco:Date></gmd:dateStamp>
  <gmd:referenceSystemInfo><gmd:MD_ReferenceSystem><gmd:referenceSystemIdentifier><gmd:RS_Identifier>
    <gmd:code><gco:CharacterString>EPSG:27700</gco:CharacterString></gmd:code>
  </gmd:RS_Identifier></gmd:referenceSystemIdentifier></gmd:MD_ReferenceSystem></gmd:referenceSystemInfo>
  <gmd:identificationInfo>
    <gmd:MD_DataIdentification>
      <gmd:citation><gmd:CI_Citation>
        <gmd:title><gco:CharacterString>Soilscapes</gco:CharacterString></gmd:title>
      </gmd:CI_Citation></gmd:citation>
      <gmd:abstract gco:nilReason="missing"/>
      <gmd:descriptiveKeywords><gmd:MD_Keywords>
        <gmd:keyword><gco:CharacterString>soil</gco:CharacterString></gmd:keyword>
        <gmd:keyword><gco:CharacterString>texture</gco:CharacterString></gmd:keyword>
      </gmd:MD_Keywords></gmd:descriptiveKeywords>
      <gmd:topicCategory><gmd:MD_TopicCategoryCode>geoscientificInformation</gmd:MD_TopicCategoryCode></gmd:topicCategory>
      <gmd:resourceConstraints><gmd:MD_LegalConstraints>
        <gmd:accessConstraints>
          <gmd:MD_RestrictionCode codeListValue="otherRestrictions">otherRestrictions</gmd:MD_RestrictionCode>
        </gmd:accessConstraints>
      </gmd:MD_LegalConstraints></gmd:resourceConstraints>
    </gmd:MD_DataIdentification>
  </gmd:identificationInfo>
</gmd:MD_Metadata>"#;

    fn extract(xml: &str) -> ExtractedRecord {
        Extractor::default().extract_str(xml).unwrap()
    }

    #[test]
    fn test_arcgis_text_fields_are_sanitized() {
        let record = extract(ARCGIS);
        assert_eq!(record.get("Resource Title"), Some("National Soil Map"));
        assert_eq!(record.get("Abstract"), Some("Soil & land"));
        assert_eq!(record.get("ArcGIS Format"), Some("1.0"));
    }

    #[test]
    fn test_repeated_keywords_are_joined_skipping_blanks() {
        let record = extract(ARCGIS);
        assert_eq!(record.get("Keywords"), Some("water | land"));
    }

    #[test]
    fn test_empty_element_recorded_as_blank_and_missing_is_absent() {
        let record = extract(ARCGIS);
        assert_eq!(record.get("Purpose"), Some(""));
        assert!(!record.contains("Credit"));
        assert!(!record.contains("Lineage Statement"));
    }

    #[test]
    fn test_code_values_resolved() {
        let record = extract(ARCGIS);
        assert_eq!(record.get("Access Constraints"), Some("Licence"));
        assert_eq!(record.get("Topic Category"), Some("Environment"));
        assert_eq!(record.get("Data Language"), Some("eng"));
        assert_eq!(record.get("Feature Geometry Code"), Some("Surface"));
    }

    #[test]
    fn test_attribute_values() {
        let record = extract(ARCGIS);
        assert_eq!(record.get("Reference System Code"), Some("27700"));
        assert_eq!(record.get("Feature Name"), Some("soils"));
    }

    #[test]
    fn test_thesaurus_groups() {
        let record = extract(ARCGIS);
        assert_eq!(record.get("Other Keywords (GEMET)"), Some("loam | clay"));
        assert_eq!(record.get("Other Keywords"), Some("misc"));
    }

    #[test]
    fn test_iso_namespaced_document() {
        let record = extract(ISO);
        assert_eq!(record.get("Resource Title"), Some("Soilscapes"));
        assert_eq!(record.get("Abstract"), Some(""));
        assert_eq!(record.get("Keywords"), Some("soil | texture"));
        assert_eq!(record.get("Metadata File ID"), Some("abc-123"));
        assert_eq!(record.get("Metadata Date Stamp"), Some("2024-05-01"));
        assert_eq!(record.get("Metadata Language Code"), Some("eng"));
        assert_eq!(record.get("Reference System Code"), Some("EPSG:27700"));
        assert_eq!(record.get("Access Constraints"), Some("Other restrictions"));
        assert_eq!(
            record.get("Topic Category"),
            Some("Geoscientific information")
        );
    }

    #[test]
    fn test_first_matching_lookup_wins() {
        let rules = vec![ExtractionRule::text("Title")
            .iso("gmd:title")
            .arcgis("//resTitle")
            .arcgis("//title")];
        let extractor = Extractor::new(rules);

        let record = extractor
            .extract_str("<m><a><title>late</title></a><resTitle>early</resTitle></m>")
            .unwrap();
        assert_eq!(record.get("Title"), Some("early"));
    }

    #[test]
    fn test_repeatable_all_blank_records_empty_string() {
        let rules = vec![ExtractionRule::text("Keywords").arcgis("//keyword").repeatable()];
        let record = Extractor::new(rules)
            .extract_str("<m><keyword/><keyword>  </keyword></m>")
            .unwrap();
        assert_eq!(record.get("Keywords"), Some(""));
    }

    #[test]
    fn test_doctype_declaration_is_accepted() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE metadata SYSTEM "http://www.esri.com/metadata/esriprof80.dtd">
<metadata><dataIdInfo><idCitation><resTitle>Soils</resTitle></idCitation></dataIdInfo></metadata>"#;
        let record = Extractor::default().extract_str(xml).unwrap();
        assert_eq!(record.get("Resource Title"), Some("Soils"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(Extractor::default().extract_str("<metadata><dataIdInfo>").is_err());
    }

    #[test]
    fn test_codelist_fields_listed_in_rule_order() {
        let extractor = Extractor::default();
        let fields = extractor.codelist_fields();
        assert!(fields.contains(&("Access Constraints", Codelist::Restriction)));
        assert!(fields.contains(&("Content Type", Codelist::ContentType)));
        assert!(!fields.iter().any(|(f, _)| *f == "Data Language"));
    }
}
