//! Error types for the metadata report.
//!
//! `ReportError` covers the whole run: configuration problems that abort
//! before any file is read, per-file failures that the batch driver records
//! and skips, and output failures when the workbook is written.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the metadata report library.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input folder does not exist.
    #[error("XML folder not found at {}", .0.display())]
    FolderNotFound(PathBuf),

    /// Input path exists but is not a directory.
    #[error("Input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Input folder contains no `.xml` files.
    #[error("No XML files found in {}", .0.display())]
    NoXmlFiles(PathBuf),

    /// Document root is not the namespaced ISO 19139 root element.
    #[error("Not ISO 19139 namespaced (root is <{root}>, expected gmd:MD_Metadata)")]
    UnsupportedDialect { root: String },

    /// Obligation profile could not be loaded.
    #[error("Invalid obligation profile {}: {reason}", .path.display())]
    InvalidProfile { path: PathBuf, reason: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Folder traversal error.
    #[error("Folder traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Workbook could not be built or saved.
    #[error("Workbook output failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// YAML deserialization error.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for metadata report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::FolderNotFound(PathBuf::from("missing"));
        assert_eq!(err.to_string(), "XML folder not found at missing");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse_err = roxmltree::Document::parse("<open>").unwrap_err();
        let err = ReportError::from(parse_err);
        assert!(err.to_string().starts_with("XML parsing failed"));
    }

    #[test]
    fn test_unsupported_dialect_names_root() {
        let err = ReportError::UnsupportedDialect {
            root: "metadata".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Not ISO 19139 namespaced (root is <metadata>, expected gmd:MD_Metadata)"
        );
    }
}
