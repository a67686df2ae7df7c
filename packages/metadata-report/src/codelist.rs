//! ISO 19139 codelist resolution.
//!
//! ArcGIS exports usually store codelist values as three-digit numbers
//! (`005` for a licence restriction) while namespaced ISO 19139 uses code
//! names (`license`). Both are resolved to the same display label. Numeric
//! codes follow the Esri ArcGIS Pro Metadata Toolkit "Coded Values" table.

use std::fmt;

/// Codelists the report knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Codelist {
    ContentType,
    PresentationForm,
    Role,
    CharacterSet,
    GeometricObjectType,
    MaintenanceFrequency,
    Progress,
    Restriction,
    Scope,
    SpatialRepresentationType,
    TopicCategory,
    TopologyLevel,
}

/// One codelist entry. Entries without a number only resolve by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub number: Option<u16>,
    pub name: &'static str,
    pub label: &'static str,
}

const fn code(number: u16, name: &'static str, label: &'static str) -> CodeEntry {
    CodeEntry {
        number: Some(number),
        name,
        label,
    }
}

const fn alias(name: &'static str, label: &'static str) -> CodeEntry {
    CodeEntry {
        number: None,
        name,
        label,
    }
}

impl Codelist {
    /// Every codelist, in the order used by the code resolution sheet.
    pub const ALL: [Codelist; 12] = [
        Codelist::ContentType,
        Codelist::PresentationForm,
        Codelist::Role,
        Codelist::CharacterSet,
        Codelist::GeometricObjectType,
        Codelist::MaintenanceFrequency,
        Codelist::Progress,
        Codelist::Restriction,
        Codelist::Scope,
        Codelist::SpatialRepresentationType,
        Codelist::TopicCategory,
        Codelist::TopologyLevel,
    ];

    /// Codelist name as used in ISO 19139.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentType => "ArcGIS_ContentTypeCode",
            Self::PresentationForm => "CI_PresentationFormCode",
            Self::Role => "CI_RoleCode",
            Self::CharacterSet => "MD_CharacterSetCode",
            Self::GeometricObjectType => "MD_GeometricObjectTypeCode",
            Self::MaintenanceFrequency => "MD_MaintenanceFrequencyCode",
            Self::Progress => "MD_ProgressCode",
            Self::Restriction => "MD_RestrictionCode",
            Self::Scope => "MD_ScopeCode",
            Self::SpatialRepresentationType => "MD_SpatialRepresentationTypeCode",
            Self::TopicCategory => "MD_TopicCategoryCode",
            Self::TopologyLevel => "MD_TopologyLevelCode",
        }
    }

    /// All entries of this codelist.
    #[must_use]
    pub fn entries(&self) -> &'static [CodeEntry] {
        match self {
            Self::ContentType => CONTENT_TYPE,
            Self::PresentationForm => PRESENTATION_FORM,
            Self::Role => ROLE,
            Self::CharacterSet => CHARACTER_SET,
            Self::GeometricObjectType => GEOMETRIC_OBJECT_TYPE,
            Self::MaintenanceFrequency => MAINTENANCE_FREQUENCY,
            Self::Progress => PROGRESS,
            Self::Restriction => RESTRICTION,
            Self::Scope => SCOPE,
            Self::SpatialRepresentationType => SPATIAL_REPRESENTATION_TYPE,
            Self::TopicCategory => TOPIC_CATEGORY,
            Self::TopologyLevel => TOPOLOGY_LEVEL,
        }
    }

    /// Resolve a raw code (number or name) to its display label.
    ///
    /// Unrecognised values are returned unchanged (trimmed).
    ///
    /// # Examples
    /// ```
    /// use metadata_report::codelist::Codelist;
    ///
    /// assert_eq!(Codelist::Restriction.resolve("005"), "Licence");
    /// assert_eq!(Codelist::Restriction.resolve("license"), "Licence");
    /// assert_eq!(Codelist::Role.resolve("pointOfContact"), "Point of contact");
    /// assert_eq!(Codelist::Role.resolve("chief"), "chief");
    /// ```
    #[must_use]
    pub fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }

        let key = normalize_code(raw);
        let entries = self.entries();
        if let Some(entry) = entries.iter().find(|e| e.name == key) {
            return entry.label.to_string();
        }

        if let Ok(n) = raw.parse::<u16>() {
            if let Some(entry) = entries.iter().find(|e| e.number == Some(n)) {
                return entry.label.to_string();
            }
        }

        raw.to_string()
    }

    /// Numbered entries as `(number, label)`, sorted by number.
    #[must_use]
    pub fn numbered(&self) -> Vec<(u16, &'static str)> {
        let mut rows: Vec<(u16, &'static str)> = self
            .entries()
            .iter()
            .filter_map(|e| e.number.map(|n| (n, e.label)))
            .collect();
        rows.sort_unstable_by_key(|(n, _)| *n);
        rows
    }
}

impl fmt::Display for Codelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a code name for lookup: lowercase, without whitespace or hyphens.
fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every `(codelist, number, label)` row, sorted by codelist name then number.
#[must_use]
pub fn resolution_table() -> Vec<(Codelist, u16, &'static str)> {
    let mut lists = Codelist::ALL;
    lists.sort_unstable_by_key(|c| c.as_str());
    lists
        .iter()
        .flat_map(|list| {
            list.numbered()
                .into_iter()
                .map(move |(n, label)| (*list, n, label))
        })
        .collect()
}

const CONTENT_TYPE: &[CodeEntry] = &[
    code(1, "livedataandmaps", "Live Data and Maps"),
    code(2, "downloadabledata", "Downloadable Data"),
    code(3, "offlinedata", "Offline Data"),
    code(4, "staticmapimages", "Static Map Images"),
    code(5, "otherdocuments", "Other Documents"),
    code(6, "applications", "Applications"),
    code(7, "geographicservices", "Geographic Services"),
    code(8, "clearinghouses", "Clearinghouses"),
    code(9, "mapfiles", "Map Files"),
    code(10, "geographicactivities", "Geographic Activities"),
];

const PRESENTATION_FORM: &[CodeEntry] = &[
    code(1, "documentdigital", "Document (digital)"),
    code(2, "documenthardcopy", "Document (hard copy)"),
    code(3, "imagedigital", "Image (digital)"),
    code(4, "imagehardcopy", "Image (hard copy)"),
    code(5, "mapdigital", "Map (digital)"),
    code(6, "maphardcopy", "Map (hard copy)"),
    code(7, "modeldigital", "Model (digital)"),
    code(8, "modelhardcopy", "Model (hard copy)"),
    code(9, "profiledigital", "Profile (digital)"),
    code(10, "profilehardcopy", "Profile (hard copy)"),
    code(11, "tabledigital", "Table (digital)"),
    code(12, "tablehardcopy", "Table (hard copy)"),
    code(13, "videodigital", "Video (digital)"),
    code(14, "videohardcopy", "Video (hard copy)"),
    code(15, "audiodigital", "Audio (digital)"),
    code(16, "audiohardcopy", "Audio (hard copy)"),
    code(17, "multimediadigital", "Multimedia (digital)"),
    code(18, "multimediahardcopy", "Multimedia (hard copy)"),
    code(19, "diagramdigital", "Diagram (digital)"),
    code(20, "diagramhardcopy", "Diagram (hard copy)"),
    code(21, "physicalobject", "Physical object"),
];

const ROLE: &[CodeEntry] = &[
    code(1, "resourceprovider", "Resource provider"),
    code(2, "custodian", "Custodian"),
    code(3, "owner", "Owner"),
    code(4, "user", "User"),
    code(5, "distributor", "Distributor"),
    code(6, "originator", "Originator"),
    code(7, "pointofcontact", "Point of contact"),
    code(8, "principalinvestigator", "Principal investigator"),
    code(9, "processor", "Processor"),
    code(10, "publisher", "Publisher"),
    code(11, "author", "Author"),
    code(12, "collaborator", "Collaborator"),
    code(13, "editor", "Editor"),
    code(14, "mediator", "Mediator"),
    code(15, "rightsholder", "Rights holder"),
    code(16, "sponsor", "Sponsor"),
    code(17, "coauthor", "Co-author"),
    code(18, "contributor", "Contributor"),
    code(19, "funder", "Funder"),
    code(20, "stakeholder", "Stakeholder"),
];

const CHARACTER_SET: &[CodeEntry] = &[
    code(1, "ucs2", "UCS-2"),
    code(2, "ucs4", "UCS-4"),
    code(3, "utf7", "UTF-7"),
    code(4, "utf8", "UTF-8"),
    code(5, "utf16", "UTF-16"),
    code(6, "8859part1", "ISO 8859-1"),
    code(7, "8859part2", "ISO 8859-2"),
    code(8, "8859part3", "ISO 8859-3"),
    code(9, "8859part4", "ISO 8859-4"),
    code(10, "8859part5", "ISO 8859-5"),
    code(11, "8859part6", "ISO 8859-6"),
    code(12, "8859part7", "ISO 8859-7"),
    code(13, "8859part8", "ISO 8859-8"),
    code(14, "8859part9", "ISO 8859-9"),
    code(15, "8859part10", "ISO 8859-10"),
    code(16, "8859part11", "ISO 8859-11"),
    code(17, "reserved", "Reserved"),
    code(18, "8859part13", "ISO 8859-13"),
    code(19, "8859part14", "ISO 8859-14"),
    code(20, "8859part15", "ISO 8859-15"),
    code(21, "8859part16", "ISO 8859-16"),
    code(22, "jis", "JIS"),
    code(23, "shiftjis", "Shift JIS"),
    code(24, "eucjp", "EUC-JP"),
    code(25, "usascii", "US ASCII"),
    code(26, "ebcdic", "EBCDIC"),
    code(27, "euckr", "EUC-KR"),
    code(28, "big5", "Big 5"),
    code(29, "gb2312", "GB 2312"),
];

const GEOMETRIC_OBJECT_TYPE: &[CodeEntry] = &[
    code(1, "complex", "Complex"),
    code(2, "composite", "Composite"),
    code(3, "curve", "Curve"),
    code(4, "point", "Point"),
    code(5, "solid", "Solid"),
    code(6, "surface", "Surface"),
];

const MAINTENANCE_FREQUENCY: &[CodeEntry] = &[
    code(1, "continual", "Continual"),
    code(2, "daily", "Daily"),
    code(3, "weekly", "Weekly"),
    code(4, "fortnightly", "Fortnightly"),
    code(5, "monthly", "Monthly"),
    code(6, "quarterly", "Quarterly"),
    code(7, "biannually", "Biannually"),
    code(8, "annually", "Annually"),
    code(9, "asneeded", "As needed"),
    code(10, "irregular", "Irregular"),
    code(11, "notplanned", "Not planned"),
    code(12, "unknown", "Unknown"),
    code(13, "semimonthly", "Semi-monthly"),
    code(14, "periodic", "Periodic"),
    code(15, "biennially", "Biennially"),
];

const PROGRESS: &[CodeEntry] = &[
    code(1, "completed", "Completed"),
    code(2, "historicalarchive", "Historical archive"),
    code(3, "obsolete", "Obsolete"),
    code(4, "ongoing", "On-going"),
    code(5, "planned", "Planned"),
    code(6, "required", "Required"),
    code(7, "underdevelopment", "Under development"),
    code(8, "proposed", "Proposed"),
    code(9, "final", "Final"),
    code(10, "pending", "Pending"),
    code(11, "retired", "Retired"),
    code(12, "superseded", "Superseded"),
    code(13, "tentative", "Tentative"),
    code(14, "valid", "Valid"),
    code(15, "accepted", "Accepted"),
    code(16, "notaccepted", "Not accepted"),
    code(17, "withdrawn", "Withdrawn"),
    code(18, "deprecated", "Deprecated"),
];

const RESTRICTION: &[CodeEntry] = &[
    code(1, "copyright", "Copyright"),
    code(2, "patent", "Patent"),
    code(3, "patentpending", "Patent pending"),
    code(4, "trademark", "Trademark"),
    code(5, "license", "Licence"),
    code(6, "intellectualpropertyrights", "Intellectual property rights"),
    code(7, "restricted", "Restricted"),
    code(8, "otherrestrictions", "Other restrictions"),
    code(9, "licenseunrestricted", "License Unrestricted"),
    code(10, "licenseenduser", "License End User"),
    code(11, "licensedistributor", "License Distributor"),
    code(12, "privacy", "Private"),
    code(13, "statutory", "Statutory"),
    code(14, "confidential", "Confidential"),
    code(15, "sensitivity/sensitivebutunclassified", "Sensitive But Unclassified"),
    code(16, "unrestricted", "Unrestricted"),
    code(17, "inconfidence", "In-confidence"),
    alias("licence", "Licence"),
    alias("licenceunrestricted", "Licence unrestricted"),
    alias("licenceenduser", "Licence end user"),
    alias("licencedistributor", "Licence distributor"),
    alias("private", "Private"),
    alias("sbu", "Sensitive but unclassified"),
    alias("sensitivebutunclassified", "Sensitive but unclassified"),
];

const SCOPE: &[CodeEntry] = &[
    code(1, "attribute", "Attribute"),
    code(2, "attributetype", "Attribute type"),
    code(3, "collectionhardware", "Collection hardware"),
    code(4, "collectionsession", "Collection session"),
    code(5, "dataset", "Dataset"),
    code(6, "series", "Series"),
    code(7, "nongeographicdataset", "Non-geographic dataset"),
    code(8, "dimensiongroup", "Dimension group"),
    code(9, "feature", "Feature"),
    code(10, "featuretype", "Feature type"),
    code(11, "propertytype", "Property type"),
    code(12, "fieldsession", "Field session"),
    code(13, "software", "Software"),
    code(14, "service", "Service"),
    code(15, "model", "Model"),
    code(16, "tile", "Tile"),
    code(17, "initiative", "Initiative"),
    code(18, "stereomate", "Stereomate"),
    code(19, "sensor", "Sensor"),
    code(20, "platformseries", "Platform series"),
    code(21, "sensorseries", "Sensor series"),
    code(22, "productionseries", "Production series"),
    code(23, "transferaggregate", "Transfer aggregate"),
    code(24, "otheraggregate", "Other aggregate"),
    code(25, "metadata", "Metadata"),
    code(26, "sample", "Sample"),
    code(27, "document", "Document"),
    code(28, "repository", "Repository"),
    code(29, "aggregate", "Aggregate"),
    code(30, "product", "Product"),
    code(31, "collection", "Collection"),
    code(32, "coverage", "Coverage"),
    code(33, "application", "Application"),
];

const SPATIAL_REPRESENTATION_TYPE: &[CodeEntry] = &[
    code(1, "vector", "Vector"),
    code(2, "grid", "Grid"),
    code(3, "texttable", "Text, table"),
    code(4, "tin", "TIN"),
    code(5, "stereomodel", "Stereo model"),
    code(6, "video", "Video"),
];

const TOPIC_CATEGORY: &[CodeEntry] = &[
    code(1, "farming", "Farming"),
    code(2, "biota", "Biota"),
    code(3, "boundaries", "Boundaries"),
    code(4, "climatologymeteorologyatmosphere", "Climatology, meteorology, atmosphere"),
    code(5, "economy", "Economy"),
    code(6, "elevation", "Elevation"),
    code(7, "environment", "Environment"),
    code(8, "geoscientificinformation", "Geoscientific information"),
    code(9, "health", "Health"),
    code(10, "imagerybasemapsearthcover", "Imagery, base maps, earth cover"),
    code(11, "intelligencemilitary", "Intelligence, military"),
    code(12, "inlandwaters", "Inland waters"),
    code(13, "location", "Location"),
    code(14, "oceans", "Oceans"),
    code(15, "planningcadastre", "Planning, cadastre"),
    code(16, "society", "Society"),
    code(17, "structure", "Structure"),
    code(18, "transportation", "Transportation"),
    code(19, "utilitiescommunication", "Utilities, communication"),
    code(20, "extraterrestrial", "Extra-terrestrial"),
    code(21, "disaster", "Disaster"),
];

const TOPOLOGY_LEVEL: &[CodeEntry] = &[
    code(1, "geometryonly", "Geometry only"),
    code(2, "topology1d", "Topology 1D"),
    code(3, "planargraph", "Planar graph"),
    code(4, "fullplanargraph", "Full planar graph"),
    code(5, "surfacegraph", "Surface graph"),
    code(6, "fullsurfacegraph", "Full surface graph"),
    code(7, "topology3d", "Topology 3D"),
    code(8, "fulltopology3d", "Full topology 3D"),
    code(9, "abstract", "Abstract"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_numeric_with_leading_zeros() {
        assert_eq!(Codelist::Restriction.resolve("005"), "Licence");
        assert_eq!(Codelist::TopicCategory.resolve("007"), "Environment");
        assert_eq!(Codelist::Scope.resolve("5"), "Dataset");
    }

    #[test]
    fn test_resolve_by_name_is_case_and_separator_insensitive() {
        assert_eq!(Codelist::Progress.resolve("onGoing"), "On-going");
        assert_eq!(Codelist::Restriction.resolve("in-confidence"), "In-confidence");
        assert_eq!(Codelist::Restriction.resolve("sbu"), "Sensitive but unclassified");
        assert_eq!(Codelist::CharacterSet.resolve("utf8"), "UTF-8");
        assert_eq!(Codelist::Restriction.resolve("Licence"), "Licence");
    }

    #[test]
    fn test_resolve_unknown_passes_through() {
        assert_eq!(Codelist::Role.resolve(" 099 "), "099");
        assert_eq!(Codelist::Scope.resolve("galaxy"), "galaxy");
        assert_eq!(Codelist::Scope.resolve("   "), "");
    }

    #[test]
    fn test_arcgis_numeric_labels() {
        assert_eq!(Codelist::Restriction.resolve("009"), "License Unrestricted");
        assert_eq!(Codelist::Restriction.resolve("015"), "Sensitive But Unclassified");
        assert_eq!(Codelist::CharacterSet.resolve("017"), "Reserved");
        assert_eq!(Codelist::ContentType.resolve("2"), "Downloadable Data");
    }

    #[test]
    fn test_numbered_entries_skip_aliases() {
        let numbered = Codelist::Restriction.numbered();
        assert_eq!(numbered.len(), 17);
        assert_eq!(numbered[4], (5, "Licence"));
    }

    #[test]
    fn test_numbers_unique_within_each_codelist() {
        for list in Codelist::ALL {
            let mut numbers: Vec<u16> = list.entries().iter().filter_map(|e| e.number).collect();
            let total = numbers.len();
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), total, "duplicate number in {list}");
        }
    }

    #[test]
    fn test_resolution_table_sorted_by_codelist_name() {
        let table = resolution_table();
        assert_eq!(table.first().map(|r| r.0), Some(Codelist::ContentType));
        let names: Vec<&str> = table.iter().map(|r| r.0.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
