//! Standard rule set for ISO 19139 and ArcGIS metadata.

use super::rules::ExtractionRule;
use crate::codelist::Codelist;

const IDENT: &str = "gmd:identificationInfo/*";
const CITATION: &str = "gmd:identificationInfo/*/gmd:citation/gmd:CI_Citation";
const BBOX: &str = "gmd:identificationInfo/*/gmd:extent/gmd:EX_Extent/gmd:geographicElement/gmd:EX_GeographicBoundingBox";
const CONTACT: &str = "gmd:contact/gmd:CI_ResponsibleParty";
const CONTACT_INFO: &str = "gmd:contact/gmd:CI_ResponsibleParty/gmd:contactInfo/gmd:CI_Contact";
const ADDRESS: &str =
    "gmd:contact/gmd:CI_ResponsibleParty/gmd:contactInfo/gmd:CI_Contact/gmd:address/gmd:CI_Address";
const LEGAL: &str = "gmd:identificationInfo/*/gmd:resourceConstraints/gmd:MD_LegalConstraints";
const GRAPHIC: &str = "gmd:identificationInfo/*/gmd:graphicOverview/gmd:MD_BrowseGraphic";
const VECTOR: &str = "gmd:spatialRepresentationInfo/gmd:MD_VectorSpatialRepresentation";
const REF_ID: &str =
    "gmd:referenceSystemInfo/gmd:MD_ReferenceSystem/gmd:referenceSystemIdentifier/gmd:RS_Identifier";
const QUALITY: &str = "gmd:dataQualityInfo/gmd:DQ_DataQuality";
const CONFORMANCE: &str =
    "gmd:dataQualityInfo/gmd:DQ_DataQuality/gmd:report/*/gmd:result/gmd:DQ_ConformanceResult";
const ONLINE: &str = "gmd:distributionInfo/gmd:MD_Distribution/gmd:transferOptions/gmd:MD_DigitalTransferOptions/gmd:onLine/gmd:CI_OnlineResource";

/// Create the rule set used by the metadata export.
///
/// Rules are grouped by metadata section: Esri item properties,
/// identification, contact, entity attributes, spatial representation,
/// reference system, data quality, distribution and metadata-level fields.
#[must_use]
pub fn create_standard_rules() -> Vec<ExtractionRule> {
    let mut rules = Vec::new();
    rules.extend(esri_rules());
    rules.extend(identification_rules());
    rules.extend(contact_rules());
    rules.extend(entity_rules());
    rules.extend(spatial_rules());
    rules.extend(quality_rules());
    rules.extend(distribution_rules());
    rules.extend(metadata_rules());
    rules
}

fn esri_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::text("ArcGIS Format").arcgis("//Esri/ArcGISFormat"),
        ExtractionRule::text("ArcGIS Profile").arcgis("//Esri/ArcGISProfile"),
        ExtractionRule::text("Creation Date").arcgis("//Esri/CreaDate"),
        ExtractionRule::text("Creation Time").arcgis("//Esri/CreaTime"),
        ExtractionRule::text("Modification Date").arcgis("//Esri/ModDate"),
        ExtractionRule::text("Modification Time").arcgis("//Esri/ModTime"),
        ExtractionRule::text("Item Name").arcgis("//Esri//DataProperties//itemProps/itemName"),
        ExtractionRule::text("Content Type")
            .arcgis("//Esri//DataProperties//itemProps/imsContentType")
            .with_codelist(Codelist::ContentType),
        ExtractionRule::text("West Bounding Longitude")
            .arcgis("//Esri//itemProps//nativeExtBox/westBL"),
        ExtractionRule::text("East Bounding Longitude")
            .arcgis("//Esri//itemProps//nativeExtBox/eastBL"),
        ExtractionRule::text("South Bounding Latitude")
            .arcgis("//Esri//itemProps//nativeExtBox/southBL"),
        ExtractionRule::text("North Bounding Latitude")
            .arcgis("//Esri//itemProps//nativeExtBox/northBL"),
        ExtractionRule::text("Thumbnail URL").arcgis("//Esri//itemProps//portalDetails/thumbnailURL"),
        ExtractionRule::text("Coordinate System Type").arcgis("//Esri//DataProperties//coordRef/type"),
        ExtractionRule::text("Geographic CS Name").arcgis("//Esri//DataProperties//coordRef/geogcsn"),
        ExtractionRule::text("Projected CS Name").arcgis("//Esri//DataProperties//coordRef/projcsn"),
        ExtractionRule::text("Coordinate System Units")
            .arcgis("//Esri//DataProperties//coordRef/csUnits"),
        ExtractionRule::text("Minimum Scale").arcgis("//Esri//scaleRange/minScale"),
        ExtractionRule::text("Maximum Scale").arcgis("//Esri//scaleRange/maxScale"),
    ]
}

fn identification_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::text("Abstract")
            .iso(format!("{IDENT}/gmd:abstract"))
            .arcgis("//dataIdInfo/idAbs"),
        ExtractionRule::text("Resource Title")
            .iso(format!("{CITATION}/gmd:title"))
            .arcgis("//dataIdInfo/idCitation/resTitle"),
        ExtractionRule::text("Resource Alternative Title")
            .iso(format!("{CITATION}/gmd:alternateTitle"))
            .arcgis("//dataIdInfo/idCitation/resAltTitle"),
        ExtractionRule::text("Collection Title").arcgis("//dataIdInfo/idCitation/collTitle"),
        ExtractionRule::text("Publication Date")
            .iso(format!("{CITATION}/gmd:date/gmd:CI_Date/gmd:date"))
            .arcgis("//dataIdInfo/idCitation//date/pubDate"),
        ExtractionRule::coded("Presentation Form", Codelist::PresentationForm)
            .iso(format!("{CITATION}/gmd:presentationForm/gmd:CI_PresentationFormCode"))
            .arcgis("//dataIdInfo/idCitation//presForm/PresFormCd"),
        ExtractionRule::text("Extent Description")
            .iso(format!("{IDENT}/gmd:extent/gmd:EX_Extent/gmd:description"))
            .arcgis("//dataIdInfo/dataExt/exDesc"),
        ExtractionRule::text("Geographic West Bounding Longitude")
            .iso(format!("{BBOX}/gmd:westBoundLongitude"))
            .arcgis("//dataIdInfo/dataExt//GeoBndBox/westBL"),
        ExtractionRule::text("Geographic East Bounding Longitude")
            .iso(format!("{BBOX}/gmd:eastBoundLongitude"))
            .arcgis("//dataIdInfo/dataExt//GeoBndBox/eastBL"),
        ExtractionRule::text("Geographic North Bounding Latitude")
            .iso(format!("{BBOX}/gmd:northBoundLatitude"))
            .arcgis("//dataIdInfo/dataExt//GeoBndBox/northBL"),
        ExtractionRule::text("Geographic South Bounding Latitude")
            .iso(format!("{BBOX}/gmd:southBoundLatitude"))
            .arcgis("//dataIdInfo/dataExt//GeoBndBox/southBL"),
        ExtractionRule::text("Keywords")
            .iso(format!("{IDENT}/gmd:descriptiveKeywords/gmd:MD_Keywords/gmd:keyword"))
            .arcgis("//dataIdInfo//searchKeys/keyword")
            .repeatable(),
        ExtractionRule::text("Purpose")
            .iso(format!("{IDENT}/gmd:purpose"))
            .arcgis("//dataIdInfo/idPurp"),
        ExtractionRule::text("Credit")
            .iso(format!("{IDENT}/gmd:credit"))
            .arcgis("//dataIdInfo/idCredit"),
        ExtractionRule::text("Use Limitation")
            .iso(format!("{IDENT}/gmd:resourceConstraints/*/gmd:useLimitation"))
            .arcgis("//dataIdInfo//useLimit"),
        ExtractionRule::coded("Access Constraints", Codelist::Restriction)
            .iso(format!("{LEGAL}/gmd:accessConstraints/gmd:MD_RestrictionCode"))
            .arcgis("//dataIdInfo//accessConsts/RestrictCd"),
        ExtractionRule::text("Other Constraints")
            .iso(format!("{LEGAL}/gmd:otherConstraints"))
            .arcgis("//dataIdInfo//othConsts"),
        ExtractionRule::code("Data Language")
            .iso(format!("{IDENT}/gmd:language/gmd:LanguageCode"))
            .iso(format!("{IDENT}/gmd:language/gco:CharacterString"))
            .arcgis("//dataIdInfo//dataLang/languageCode"),
        ExtractionRule::code("Data Country Code").arcgis("//dataIdInfo//dataLang/countryCode"),
        ExtractionRule::coded("Character Set", Codelist::CharacterSet)
            .iso(format!("{IDENT}/gmd:characterSet/gmd:MD_CharacterSetCode"))
            .arcgis("//dataIdInfo//dataChar/CharSetCd"),
        ExtractionRule::coded("Spatial Representation Type", Codelist::SpatialRepresentationType)
            .iso(format!(
                "{IDENT}/gmd:spatialRepresentationType/gmd:MD_SpatialRepresentationTypeCode"
            ))
            .arcgis("//dataIdInfo//spatRpType/SpatRepTypCd"),
        ExtractionRule::text("Scale Denominator")
            .iso(format!(
                "{IDENT}/gmd:spatialResolution/gmd:MD_Resolution/gmd:equivalentScale/gmd:MD_RepresentativeFraction/gmd:denominator"
            ))
            .arcgis("//dataIdInfo//dataScale/equScale/rfDenom"),
        ExtractionRule::text("Environment Description")
            .iso(format!("{IDENT}/gmd:environmentDescription"))
            .arcgis("//dataIdInfo/envirDesc"),
        ExtractionRule::coded("Status", Codelist::Progress)
            .iso(format!("{IDENT}/gmd:status/gmd:MD_ProgressCode"))
            .arcgis("//dataIdInfo//idStatus/ProgCd"),
        ExtractionRule::text("Graphic File Name")
            .iso(format!("{GRAPHIC}/gmd:fileName"))
            .arcgis("//dataIdInfo/graphOver/bgFileName"),
        ExtractionRule::text("Graphic File Description")
            .iso(format!("{GRAPHIC}/gmd:fileDescription"))
            .arcgis("//dataIdInfo/graphOver/bgFileDesc"),
        ExtractionRule::text("Graphic File Type")
            .iso(format!("{GRAPHIC}/gmd:fileType"))
            .arcgis("//dataIdInfo/graphOver/bgFileType"),
        ExtractionRule::coded("Maintenance Frequency", Codelist::MaintenanceFrequency)
            .iso(format!(
                "{IDENT}/gmd:resourceMaintenance/gmd:MD_MaintenanceInformation/gmd:maintenanceAndUpdateFrequency/gmd:MD_MaintenanceFrequencyCode"
            ))
            .arcgis("//dataIdInfo//resMaint/maintFreq/MaintFreqCd"),
        ExtractionRule::coded("Topic Category", Codelist::TopicCategory)
            .iso(format!("{IDENT}/gmd:topicCategory/gmd:MD_TopicCategoryCode"))
            .arcgis("//dataIdInfo//tpCat/TopicCatCd"),
    ]
}

fn contact_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::text("Contact Individual Name")
            .iso(format!("{CONTACT}/gmd:individualName"))
            .arcgis("//mdContact/rpIndName"),
        ExtractionRule::text("Contact Organisation Name")
            .iso(format!("{CONTACT}/gmd:organisationName"))
            .arcgis("//mdContact/rpOrgName"),
        ExtractionRule::text("Contact Position Name")
            .iso(format!("{CONTACT}/gmd:positionName"))
            .arcgis("//mdContact/rpPosName"),
        ExtractionRule::text("Contact Email Address")
            .iso(format!("{ADDRESS}/gmd:electronicMailAddress"))
            .arcgis("//mdContact//rpCntInfo//cntAddress/eMailAdd"),
        ExtractionRule::text("Contact Delivery Point")
            .iso(format!("{ADDRESS}/gmd:deliveryPoint"))
            .arcgis("//mdContact//rpCntInfo//cntAddress/delPoint"),
        ExtractionRule::text("Contact City")
            .iso(format!("{ADDRESS}/gmd:city"))
            .arcgis("//mdContact//rpCntInfo//cntAddress/city"),
        ExtractionRule::text("Contact Administrative Area")
            .iso(format!("{ADDRESS}/gmd:administrativeArea"))
            .arcgis("//mdContact//rpCntInfo//cntAddress/adminArea"),
        ExtractionRule::text("Contact Postal Code")
            .iso(format!("{ADDRESS}/gmd:postalCode"))
            .arcgis("//mdContact//rpCntInfo//cntAddress/postCode"),
        ExtractionRule::text("Contact Country")
            .iso(format!("{ADDRESS}/gmd:country"))
            .arcgis("//mdContact//rpCntInfo//cntAddress/country"),
        ExtractionRule::text("Contact Phone Number")
            .iso(format!("{CONTACT_INFO}/gmd:phone/gmd:CI_Telephone/gmd:voice"))
            .arcgis("//mdContact//rpCntInfo//cntPhone/voiceNum"),
        ExtractionRule::text("Contact Online Resource")
            .iso(format!(
                "{CONTACT_INFO}/gmd:onlineResource/gmd:CI_OnlineResource/gmd:linkage"
            ))
            .arcgis("//mdContact//rpCntInfo//cntOnlineRes/linkage"),
        ExtractionRule::text("Contact Hours")
            .iso(format!("{CONTACT_INFO}/gmd:hoursOfService"))
            .arcgis("//mdContact//rpCntInfo//cntHours"),
        ExtractionRule::text("Contact Instructions")
            .iso(format!("{CONTACT_INFO}/gmd:contactInstructions"))
            .arcgis("//mdContact//rpCntInfo//cntInstr"),
        ExtractionRule::coded("Contact Role", Codelist::Role)
            .iso(format!("{CONTACT}/gmd:role/gmd:CI_RoleCode"))
            .arcgis("//mdContact//role/RoleCd"),
    ]
}

fn entity_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::text("Entity Type Label").arcgis("//eainfo/detailed/enttyp/enttypl"),
        ExtractionRule::text("Entity Type Type").arcgis("//eainfo/detailed/enttyp/enttypt"),
        ExtractionRule::text("Entity Type Count").arcgis("//eainfo/detailed/enttyp/enttypc"),
        ExtractionRule::text("Attribute Names")
            .arcgis("//eainfo/detailed//attr/attrlabl")
            .repeatable(),
    ]
}

fn spatial_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::coded("Topology Level", Codelist::TopologyLevel)
            .iso(format!("{VECTOR}/gmd:topologyLevel/gmd:MD_TopologyLevelCode"))
            .arcgis("//spatRepInfo//topLvl/TopoLevCd"),
        ExtractionRule::coded("Geometry Object Type", Codelist::GeometricObjectType)
            .iso(format!(
                "{VECTOR}/gmd:geometricObjects/gmd:MD_GeometricObjects/gmd:geometricObjectType/gmd:MD_GeometricObjectTypeCode"
            ))
            .arcgis("//spatRepInfo//geometObjs//geoObjTyp/GeoObjTypCd"),
        ExtractionRule::text("Geometry Object Count")
            .iso(format!(
                "{VECTOR}/gmd:geometricObjects/gmd:MD_GeometricObjects/gmd:geometricObjectCount"
            ))
            .arcgis("//spatRepInfo//geometObjs//geoObjCnt"),
        // ArcGIS keeps the code in an attribute, ISO as element text.
        ExtractionRule::attribute_or_text("Reference System Code", "code")
            .iso(format!("{REF_ID}/gmd:code"))
            .arcgis("//refSysInfo/RefSystem/refSysID/identCode"),
        ExtractionRule::text("Reference System Code Space")
            .iso(format!("{REF_ID}/gmd:codeSpace"))
            .arcgis("//refSysInfo/RefSystem/refSysID/idCodeSpace"),
        ExtractionRule::text("Reference System Version")
            .iso(format!("{REF_ID}/gmd:version"))
            .arcgis("//refSysInfo/RefSystem/refSysID/idVersion"),
        ExtractionRule::attribute("Feature Name", "Name").arcgis("//spdoinfo//esriterm"),
        ExtractionRule::text("Feature Type").arcgis("//spdoinfo//esriterm/efeatyp"),
        ExtractionRule::attribute("Feature Geometry Code", "code")
            .arcgis("//spdoinfo//esriterm/efeageom")
            .with_codelist(Codelist::GeometricObjectType),
    ]
}

fn quality_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::coded("Data Quality Scope Level", Codelist::Scope)
            .iso(format!("{QUALITY}/gmd:scope/gmd:DQ_Scope/gmd:level/gmd:MD_ScopeCode"))
            .arcgis("//dqInfo//scpLvl/ScopeCd"),
        ExtractionRule::text("Lineage Statement")
            .iso(format!("{QUALITY}/gmd:lineage/gmd:LI_Lineage/gmd:statement"))
            .arcgis("//dqInfo//dataLineage/statement"),
        ExtractionRule::attribute("Quality Report Type", "type").arcgis("//dqInfo//report"),
        ExtractionRule::text("Conformance Specification Title")
            .iso(format!("{CONFORMANCE}/gmd:specification/gmd:CI_Citation/gmd:title"))
            .arcgis("//dqInfo//report//conSpec/resTitle"),
        ExtractionRule::text("Conformance Pass")
            .iso(format!("{CONFORMANCE}/gmd:pass"))
            .arcgis("//dqInfo//report//conPass"),
    ]
}

fn distribution_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::text("Distribution Online Resource Linkage")
            .iso(format!("{ONLINE}/gmd:linkage"))
            .arcgis("//distInfo//onLineSrc/linkage"),
        ExtractionRule::text("Distribution Protocol")
            .iso(format!("{ONLINE}/gmd:protocol"))
            .arcgis("//distInfo//onLineSrc/protocol"),
        ExtractionRule::text("Distribution Online Resource Name")
            .iso(format!("{ONLINE}/gmd:name"))
            .arcgis("//distInfo//onLineSrc/orName"),
        ExtractionRule::text("Distribution Online Resource Description")
            .iso(format!("{ONLINE}/gmd:description"))
            .arcgis("//distInfo//onLineSrc/orDesc"),
    ]
}

fn metadata_rules() -> Vec<ExtractionRule> {
    vec![
        ExtractionRule::coded("Metadata Maintenance Frequency", Codelist::MaintenanceFrequency)
            .iso("gmd:metadataMaintenance/gmd:MD_MaintenanceInformation/gmd:maintenanceAndUpdateFrequency/gmd:MD_MaintenanceFrequencyCode")
            .arcgis("//mdMaint//maintFreq/MaintFreqCd"),
        ExtractionRule::code("Metadata Language Code")
            .iso("gmd:language/gmd:LanguageCode")
            .iso("gmd:language/gco:CharacterString")
            .arcgis("//mdLang/languageCode"),
        ExtractionRule::code("Metadata Country Code").arcgis("//mdLang/countryCode"),
        ExtractionRule::coded("Metadata Scope Code", Codelist::Scope)
            .iso("gmd:hierarchyLevel/gmd:MD_ScopeCode")
            .arcgis("//mdHrLv/ScopeCd"),
        ExtractionRule::text("Metadata Hierarchy Level Name")
            .iso("gmd:hierarchyLevelName")
            .arcgis("//mdHrLvName"),
        ExtractionRule::text("Metadata Standard Name")
            .iso("gmd:metadataStandardName")
            .arcgis("//mdStanName"),
        ExtractionRule::text("Metadata Standard Version")
            .iso("gmd:metadataStandardVersion")
            .arcgis("//mdStanVer"),
        ExtractionRule::text("Metadata File ID")
            .iso("gmd:fileIdentifier")
            .arcgis("//mdFileID"),
        ExtractionRule::coded("Metadata Character Set", Codelist::CharacterSet)
            .iso("gmd:characterSet/gmd:MD_CharacterSetCode")
            .arcgis("//mdChar/CharSetCd"),
        ExtractionRule::text("Metadata Date Stamp")
            .iso("gmd:dateStamp")
            .arcgis("//mdDateSt"),
    ]
}
