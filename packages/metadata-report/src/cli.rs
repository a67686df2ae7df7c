//! Command-line interface for both report binaries.

use std::path::{Path, PathBuf};

use clap::{Args, Parser};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::batch::{check_files, discover_xml_files, export_files, Progress};
use crate::compliance::ComplianceEvaluator;
use crate::config::{
    output_path, validate_input_folder, CONFORMANCE_FILE_PREFIX, DEFAULT_INPUT_FOLDER,
    EXPORT_FILE_PREFIX, OBLIGATION_PROFILE_ENV,
};
use crate::conformance::ConformanceChecker;
use crate::error::{ReportError, Result};
use crate::extract::Extractor;
use crate::obligation::ObligationTable;
use crate::report::{build_conformance_workbook, build_export_workbook, save_workbook};

/// Input folder argument shared by both binaries.
#[derive(Args, Debug)]
pub struct FolderArg {
    /// Folder containing the XML metadata files
    #[arg(default_value = DEFAULT_INPUT_FOLDER)]
    pub folder: PathBuf,
}

/// Export ISO 19139 / ArcGIS metadata to an Excel workbook with a compliance summary.
#[derive(Parser, Debug)]
#[command(name = "metadata-export")]
#[command(version, about, long_about = None)]
pub struct ExportCli {
    #[command(flatten)]
    pub input: FolderArg,
}

/// Check namespaced ISO 19139 metadata for presence of INSPIRE elements.
#[derive(Parser, Debug)]
#[command(name = "conformance-check")]
#[command(version, about, long_about = None)]
pub struct ConformanceCli {
    #[command(flatten)]
    pub input: FolderArg,
}

/// Run the lenient export.
pub fn run_export() -> Result<()> {
    let cli = ExportCli::parse();
    export_command(&cli.input.folder)
}

/// Run the strict conformance check.
pub fn run_conformance() -> Result<()> {
    let cli = ConformanceCli::parse();
    conformance_command(&cli.input.folder)
}

/// Load the obligation profile named by the environment, or the built-in one.
fn load_obligations() -> Result<ObligationTable> {
    match std::env::var_os(OBLIGATION_PROFILE_ENV) {
        Some(path) if !path.is_empty() => {
            let table = ObligationTable::from_yaml_file(Path::new(&path))?;
            info!(profile = %Path::new(&path).display(), fields = table.len(), "loaded obligation profile");
            Ok(table)
        }
        _ => Ok(ObligationTable::inspire()),
    }
}

/// Discover input files, or `None` when the folder holds no XML.
fn discover(folder: &Path) -> Result<Option<Vec<PathBuf>>> {
    validate_input_folder(folder)?;

    match discover_xml_files(folder) {
        Ok(files) => {
            println!("Found {} XML files", style(files.len()).cyan());
            println!();
            Ok(Some(files))
        }
        Err(e @ ReportError::NoXmlFiles(_)) => {
            println!("{}", style(e).yellow());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb
}

/// Print progress events above the bar. Lines go through `suspend` so they
/// still print when the bar is hidden.
fn report_progress(pb: &ProgressBar, event: Progress<'_>) {
    match event {
        Progress::Processing(name) => {
            pb.inc(1);
            pb.set_message(name.to_string());
            pb.suspend(|| println!("Processing: {name}"));
        }
        Progress::Failed(failure) => {
            pb.suspend(|| println!("  {}", style(failure).red()));
        }
    }
}

/// Execute the lenient export.
fn export_command(folder: &Path) -> Result<()> {
    let obligations = load_obligations()?;

    println!(
        "{} {}",
        style("Exporting metadata from").bold(),
        style(folder.display()).cyan()
    );

    let Some(files) = discover(folder)? else {
        return Ok(());
    };

    let extractor = Extractor::default();
    let evaluator = ComplianceEvaluator::new(obligations);

    let pb = progress_bar(files.len());
    let run = export_files(&files, &extractor, &evaluator, |e| report_progress(&pb, e));
    pb.finish_and_clear();

    let model = build_export_workbook(
        &run.records,
        &run.results,
        evaluator.obligations(),
        &extractor.codelist_fields(),
    );
    let output = output_path(EXPORT_FILE_PREFIX, folder);
    save_workbook(&model, &output)?;

    println!();
    println!("  Total files processed: {}", run.records.len());
    println!("  Total unique attributes: {}", run.unique_fields());
    if !run.failures.is_empty() {
        println!("  Skipped: {}", style(run.failures.len()).yellow().bold());
    }
    println!(
        "  ISO 19139 compliance: {} compliant, {} with missing mandatory fields",
        style(run.compliant_count()).green(),
        style(run.non_compliant_count()).red()
    );
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the strict conformance check.
fn conformance_command(folder: &Path) -> Result<()> {
    println!(
        "{} {}",
        style("Checking ISO 19139 conformance in").bold(),
        style(folder.display()).cyan()
    );

    let Some(files) = discover(folder)? else {
        return Ok(());
    };

    let checker = ConformanceChecker::default();

    let pb = progress_bar(files.len());
    let run = check_files(&files, &checker, |e| report_progress(&pb, e));
    pb.finish_and_clear();

    let model = build_conformance_workbook(checker.checks(), &run.checked, &run.failures);
    let output = output_path(CONFORMANCE_FILE_PREFIX, folder);
    save_workbook(&model, &output)?;

    println!();
    println!("  Checked: {}", run.checked.len());
    println!("  Skipped: {}", run.failures.len());
    println!(
        "  ISO 19139 conformant: {} | Non-conformant (missing mandatory): {}",
        style(run.conformant_count()).green(),
        style(run.non_conformant_count()).red()
    );
    if !run.failures.is_empty() {
        println!(
            "  Skipped (unreadable or not namespaced ISO 19139): {} - see the Errors sheet",
            style(run.failures.len()).yellow().bold()
        );
    }
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}
