//! Folder discovery and per-file processing.
//!
//! Files are processed one at a time in sorted order. A failing file is
//! recorded and skipped; it never stops the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::compliance::ComplianceEvaluator;
use crate::conformance::{CheckedFile, ConformanceChecker};
use crate::error::{ReportError, Result};
use crate::extract::Extractor;
use crate::report::unified_fields;
use crate::types::{ComplianceResult, FileFailure, FileRecord};

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// A file is about to be read.
    Processing(&'a str),

    /// A file was skipped.
    Failed(&'a FileFailure),
}

/// List `.xml` files directly inside a folder, sorted by file name.
///
/// The extension match ignores ASCII case. Subfolders are not searched;
/// symlinks to files are followed.
///
/// # Returns
/// * `Err(ReportError::NoXmlFiles)` if the folder holds no `.xml` files
pub fn discover_xml_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        let is_xml = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_xml && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(ReportError::NoXmlFiles(folder.to_path_buf()));
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = files.len(), folder = %folder.display(), "discovered XML files");
    Ok(files)
}

/// File name without directory, for display and report rows.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
fn read_xml(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(file = %path.display(), "file is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

fn record_failure(
    failures: &mut Vec<FileFailure>,
    filename: String,
    err: &ReportError,
    progress: &mut impl FnMut(Progress<'_>),
) {
    debug!(file = %filename, error = %err, "skipping file");
    failures.push(FileFailure {
        filename,
        reason: err.to_string(),
    });
    if let Some(failure) = failures.last() {
        progress(Progress::Failed(failure));
    }
}

/// Results of a lenient export run.
#[derive(Debug, Clone, Default)]
pub struct ExportRun {
    /// Extracted files in processing order.
    pub records: Vec<FileRecord>,

    /// Compliance verdicts, one per record.
    pub results: Vec<ComplianceResult>,

    pub failures: Vec<FileFailure>,
}

impl ExportRun {
    /// Number of distinct field names across all records.
    #[must_use]
    pub fn unique_fields(&self) -> usize {
        unified_fields(&self.records).len()
    }

    #[must_use]
    pub fn compliant_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_compliant()).count()
    }

    #[must_use]
    pub fn non_compliant_count(&self) -> usize {
        self.results.len() - self.compliant_count()
    }
}

/// Extract and evaluate every file.
///
/// # Arguments
/// * `files` - Paths in processing order
/// * `extractor` - Rule set applied to each file
/// * `evaluator` - Obligation profile applied to each record
/// * `progress` - Called before each file and for each skipped file
pub fn export_files(
    files: &[PathBuf],
    extractor: &Extractor,
    evaluator: &ComplianceEvaluator,
    mut progress: impl FnMut(Progress<'_>),
) -> ExportRun {
    let mut run = ExportRun::default();

    for path in files {
        let filename = display_name(path);
        progress(Progress::Processing(&filename));

        match read_xml(path).and_then(|xml| extractor.extract_str(&xml)) {
            Ok(record) => {
                run.results.push(evaluator.evaluate(&filename, &record));
                run.records.push(FileRecord { filename, record });
            }
            Err(err) => record_failure(&mut run.failures, filename, &err, &mut progress),
        }
    }

    run
}

/// Results of a strict conformance run.
#[derive(Debug, Clone, Default)]
pub struct ConformanceRun {
    /// Checked files in processing order.
    pub checked: Vec<CheckedFile>,

    /// Unreadable, malformed or non-ISO files.
    pub failures: Vec<FileFailure>,
}

impl ConformanceRun {
    #[must_use]
    pub fn conformant_count(&self) -> usize {
        self.checked
            .iter()
            .filter(|c| c.summary.result.is_compliant())
            .count()
    }

    #[must_use]
    pub fn non_conformant_count(&self) -> usize {
        self.checked.len() - self.conformant_count()
    }
}

/// Check every file against the strict ISO 19139 check list.
pub fn check_files(
    files: &[PathBuf],
    checker: &ConformanceChecker,
    mut progress: impl FnMut(Progress<'_>),
) -> ConformanceRun {
    let mut run = ConformanceRun::default();

    for path in files {
        let filename = display_name(path);
        progress(Progress::Processing(&filename));

        match read_xml(path).and_then(|xml| checker.check_file(&filename, &xml)) {
            Ok(checked) => run.checked.push(checked),
            Err(err) => record_failure(&mut run.failures, filename, &err, &mut progress),
        }
    }

    run
}
