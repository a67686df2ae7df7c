//! Configuration constants and validation functions for the metadata report.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Input folder used when no folder argument is given.
pub const DEFAULT_INPUT_FOLDER: &str = "xml";

/// Separator placed between repeated values of the same field.
pub const VALUE_SEPARATOR: &str = " | ";

/// File name prefix of the lenient export workbook.
pub const EXPORT_FILE_PREFIX: &str = "metadata_export";

/// File name prefix of the strict conformance workbook.
pub const CONFORMANCE_FILE_PREFIX: &str = "conformance_report";

/// Worksheet names.
pub const SUMMARY_SHEET: &str = "Compliance Summary";
pub const EXPORT_SHEET: &str = "Metadata Export";
pub const CODES_SHEET: &str = "Code Resolution";
pub const DETAIL_SHEET: &str = "Conformance Detail";
pub const ERRORS_SHEET: &str = "Errors";

/// Environment variable naming a YAML obligation profile to use instead of
/// the built-in INSPIRE profile.
pub const OBLIGATION_PROFILE_ENV: &str = "METADATA_OBLIGATION_PROFILE";

/// ISO 19139 namespace URIs (ISO/TC 211) keyed by their customary prefix.
pub const GMD_NS: &str = "http://www.isotc211.org/2005/gmd";
pub const GCO_NS: &str = "http://www.isotc211.org/2005/gco";
pub const GMX_NS: &str = "http://www.isotc211.org/2005/gmx";
pub const SRV_NS: &str = "http://www.isotc211.org/2005/srv";
pub const GML_NS: &str = "http://www.opengis.net/gml";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Prefixes understood by namespace-aware lookups.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("gmd", GMD_NS),
    ("gco", GCO_NS),
    ("gmx", GMX_NS),
    ("srv", SRV_NS),
    ("gml", GML_NS),
    ("xlink", XLINK_NS),
];

/// Resolve a namespace prefix to its URI.
///
/// # Examples
/// ```
/// use metadata_report::config::{namespace_uri, GMD_NS};
///
/// assert_eq!(namespace_uri("gmd"), Some(GMD_NS));
/// assert_eq!(namespace_uri("esri"), None);
/// ```
pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Check that the input folder exists and is a directory.
///
/// # Returns
/// * `Ok(())` if the folder can be scanned
/// * `Err(ReportError::FolderNotFound)` or `Err(ReportError::NotADirectory)` otherwise
pub fn validate_input_folder(folder: &Path) -> Result<()> {
    if !folder.exists() {
        return Err(ReportError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(ReportError::NotADirectory(folder.to_path_buf()));
    }
    Ok(())
}

/// Last path component of the input folder, used to name the workbook.
///
/// Paths without a final component (such as `.`) are canonicalised first.
pub fn folder_label(folder: &Path) -> String {
    if let Some(name) = folder.file_name() {
        return name.to_string_lossy().into_owned();
    }

    folder
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| DEFAULT_INPUT_FOLDER.to_string())
}

/// Build the output workbook path for a folder, relative to the working directory.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use metadata_report::config::{output_path, EXPORT_FILE_PREFIX};
///
/// assert_eq!(
///     output_path(EXPORT_FILE_PREFIX, Path::new("data/soils")),
///     Path::new("metadata_export_soils.xlsx")
/// );
/// ```
pub fn output_path(prefix: &str, folder: &Path) -> PathBuf {
    PathBuf::from(format!("{prefix}_{}.xlsx", folder_label(folder)))
}

/// Header and obligation row colours used in every sheet.
pub mod colours {
    pub const HEADER_FILL: u32 = 0x0036_6092;
    pub const HEADER_FONT: u32 = 0x00FF_FFFF;
    pub const OBLIGATION_FILL: u32 = 0x00E0_E0E0;
    pub const EMPTY_FILL: u32 = 0x00E8_E8E8;
}

/// Widest an export column is allowed to grow.
pub const MAX_COLUMN_WIDTH: usize = 100;

/// Most characters Excel stores in one cell.
pub const MAX_CELL_CHARS: usize = 32_767;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_input_folder(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            validate_input_folder(&missing),
            Err(ReportError::FolderNotFound(_))
        ));

        let file = dir.path().join("file.xml");
        std::fs::write(&file, "<a/>").unwrap();
        assert!(matches!(
            validate_input_folder(&file),
            Err(ReportError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_output_path_uses_last_component() {
        assert_eq!(
            output_path(CONFORMANCE_FILE_PREFIX, Path::new("/tmp/run/xml")),
            PathBuf::from("conformance_report_xml.xlsx")
        );
        assert_eq!(
            output_path(EXPORT_FILE_PREFIX, Path::new("batch-2024/")),
            PathBuf::from("metadata_export_batch-2024.xlsx")
        );
    }

    #[test]
    fn test_folder_label_of_current_dir() {
        let label = folder_label(Path::new("."));
        assert!(!label.is_empty());
        assert_ne!(label, ".");
    }

    #[test]
    fn test_namespace_uri() {
        assert_eq!(namespace_uri("gco"), Some(GCO_NS));
        assert_eq!(namespace_uri(""), None);
    }
}
