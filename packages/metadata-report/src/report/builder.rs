//! Sheet builders for the export and conformance workbooks.

use std::collections::BTreeSet;

use tracing::warn;

use super::model::{truncate_to_cell, Cell, Sheet, WorkbookModel};
use crate::codelist::{resolution_table, Codelist};
use crate::config::{
    CODES_SHEET, DETAIL_SHEET, ERRORS_SHEET, EXPORT_SHEET, MAX_COLUMN_WIDTH, SUMMARY_SHEET,
};
use crate::conformance::{CheckedFile, ConformanceCheck};
use crate::obligation::ObligationTable;
use crate::types::{ComplianceResult, FileFailure, FileRecord};

const CODES_TITLE: &str = "Fields using code resolution - where code numbers are replaced in the report with full text for ease of reading";
const CODES_HOW_TITLE: &str = "How codes are resolved to text";
const CODES_NOTE: &str = "Numeric codes (e.g. 005 in XML) and code names (e.g. license) are mapped to the labels below. ArcGIS often uses 3-digit numeric values.";

/// Union of every field name seen across records, sorted.
///
/// # Examples
/// ```
/// use metadata_report::report::unified_fields;
/// use metadata_report::types::FileRecord;
///
/// let records = vec![
///     FileRecord { filename: "a.xml".into(), record: [("Title", "A")].into_iter().collect() },
///     FileRecord { filename: "b.xml".into(), record: [("Abstract", "")].into_iter().collect() },
/// ];
/// assert_eq!(unified_fields(&records), vec!["Abstract", "Title"]);
/// ```
#[must_use]
pub fn unified_fields(records: &[FileRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.record.field_names())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Build the lenient workbook: summary, export and code resolution sheets.
///
/// # Arguments
/// * `records` - Extracted files in processing order
/// * `results` - Compliance verdicts in the same order
/// * `obligations` - Profile used for the obligation row
/// * `codelist_fields` - Export fields whose values went through a codelist
#[must_use]
pub fn build_export_workbook(
    records: &[FileRecord],
    results: &[ComplianceResult],
    obligations: &ObligationTable,
    codelist_fields: &[(&str, Codelist)],
) -> WorkbookModel {
    WorkbookModel {
        sheets: vec![
            compliance_summary_sheet(results),
            export_sheet(records, obligations),
            code_resolution_sheet(codelist_fields),
        ],
    }
}

/// Build the strict workbook: summary, detail and (if any file was skipped)
/// errors sheets.
#[must_use]
pub fn build_conformance_workbook(
    checks: &[ConformanceCheck],
    checked: &[CheckedFile],
    failures: &[FileFailure],
) -> WorkbookModel {
    let mut sheets = vec![
        conformance_summary_sheet(checked),
        conformance_detail_sheet(checks, checked),
    ];
    if !failures.is_empty() {
        sheets.push(errors_sheet(failures));
    }
    WorkbookModel { sheets }
}

fn header_row<S: AsRef<str>>(labels: impl IntoIterator<Item = S>) -> Vec<Cell> {
    labels
        .into_iter()
        .map(|l| Cell::header(l.as_ref()))
        .collect()
}

fn compliance_summary_sheet(results: &[ComplianceResult]) -> Sheet {
    let mut sheet = Sheet::new(SUMMARY_SHEET);
    sheet.push_row(header_row([
        "Filename",
        "ISO 19139 compliant",
        "Missing mandatory fields",
        "Missing count",
    ]));

    for result in results {
        sheet.push_row(vec![
            Cell::plain(&result.filename),
            Cell::plain(result.verdict()),
            Cell::wrapped(result.missing_list()),
            Cell::number(result.missing_count()),
        ]);
    }

    sheet.set_uniform_widths(4, 24.0);
    sheet
}

fn export_sheet(records: &[FileRecord], obligations: &ObligationTable) -> Sheet {
    let fields = unified_fields(records);
    let mut sheet = Sheet::new(EXPORT_SHEET);

    sheet.push_row(header_row(
        std::iter::once("Filename").chain(fields.iter().map(String::as_str)),
    ));

    let mut obligation_row = vec![Cell::plain("")];
    obligation_row.extend(
        fields
            .iter()
            .map(|f| Cell::obligation(obligations.obligation(f).as_str())),
    );
    sheet.push_row(obligation_row);

    for file in records {
        let mut row = vec![Cell::data(&file.filename)];
        row.extend(fields.iter().map(|f| {
            export_cell(&file.filename, f, file.record.get(f).unwrap_or_default())
        }));
        sheet.push_row(row);
    }

    sheet.freeze = Some((2, 1));
    sheet.column_widths = fitted_widths(&sheet);
    sheet
}

/// Data cell for one exported value, cut to what a cell can hold.
fn export_cell(filename: &str, field: &str, value: &str) -> Cell {
    match truncate_to_cell(value) {
        Some(kept) => {
            warn!(
                file = filename,
                field,
                chars = value.chars().count(),
                "value exceeds the Excel cell limit, truncated"
            );
            Cell::data(kept)
        }
        None => Cell::data(value),
    }
}

/// Column widths fitted to the longest cell, capped at the maximum width.
fn fitted_widths(sheet: &Sheet) -> Vec<(u16, f64)> {
    let columns = sheet.rows.iter().map(Vec::len).max().unwrap_or(0);

    (0..columns)
        .filter_map(|col| {
            let longest = sheet
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width().min(MAX_COLUMN_WIDTH))
                .max()
                .unwrap_or(0);
            let width = (longest + 2).min(MAX_COLUMN_WIDTH);
            // Widths never exceed MAX_COLUMN_WIDTH, well within f64 precision.
            #[allow(clippy::cast_precision_loss)]
            let width = width as f64;
            u16::try_from(col).ok().map(|c| (c, width))
        })
        .collect()
}

fn code_resolution_sheet(codelist_fields: &[(&str, Codelist)]) -> Sheet {
    let mut sheet = Sheet::new(CODES_SHEET);

    sheet.push_row(vec![Cell::title(CODES_TITLE)]);
    sheet.push_row(header_row(["Export field name", "Codelist"]));
    for (field, list) in codelist_fields {
        sheet.push_row(vec![Cell::plain(*field), Cell::plain(list.as_str())]);
    }
    sheet.push_blank_row();

    sheet.push_row(vec![Cell::title(CODES_HOW_TITLE)]);
    sheet.push_row(vec![Cell::wrapped(CODES_NOTE)]);
    sheet.push_blank_row();

    sheet.push_row(header_row(["Codelist", "Code (numeric or name)", "Resolved label"]));
    for (list, number, label) in resolution_table() {
        sheet.push_row(vec![
            Cell::plain(list.as_str()),
            Cell::plain(format!("{number:03}")),
            Cell::plain(label),
        ]);
    }

    sheet.column_widths = vec![(0, 32.0), (1, 28.0), (2, 36.0)];
    sheet
}

fn conformance_summary_sheet(checked: &[CheckedFile]) -> Sheet {
    let mut sheet = Sheet::new(SUMMARY_SHEET);
    let headers = [
        "Filename",
        "ISO 19139 conformant",
        "Missing mandatory fields",
        "Missing count",
        "Present mandatory",
        "Present conditional",
        "Present optional",
    ];
    sheet.push_row(header_row(headers));

    for file in checked {
        let summary = &file.summary;
        sheet.push_row(vec![
            Cell::plain(file.filename()),
            Cell::plain(summary.result.verdict()),
            Cell::wrapped(summary.result.missing_list()),
            Cell::number(summary.result.missing_count()),
            Cell::number(summary.present_mandatory),
            Cell::number(summary.present_conditional),
            Cell::number(summary.present_optional),
        ]);
    }

    sheet.set_uniform_widths(headers.len(), 18.0);
    sheet
}

fn conformance_detail_sheet(checks: &[ConformanceCheck], checked: &[CheckedFile]) -> Sheet {
    let mut sheet = Sheet::new(DETAIL_SHEET);

    sheet.push_row(header_row(
        std::iter::once("Filename").chain(checks.iter().map(|c| c.name.as_str())),
    ));

    let mut obligation_row = vec![Cell::obligation("(obligation)")];
    obligation_row.extend(checks.iter().map(|c| Cell::obligation(c.obligation.as_str())));
    sheet.push_row(obligation_row);

    for file in checked {
        let mut row = vec![Cell::plain(file.filename())];
        row.extend(checks.iter().map(|c| {
            Cell::plain(
                file.row
                    .get(&c.name)
                    .map_or("", |presence| presence.as_str()),
            )
        }));
        sheet.push_row(row);
    }

    sheet.freeze = Some((2, 1));
    sheet.set_uniform_widths(checks.len() + 1, 12.0);
    sheet
}

fn errors_sheet(failures: &[FileFailure]) -> Sheet {
    let mut sheet = Sheet::new(ERRORS_SHEET);
    sheet.push_row(header_row(["Filename", "Error"]));
    for failure in failures {
        sheet.push_row(vec![
            Cell::plain(&failure.filename),
            Cell::wrapped(&failure.reason),
        ]);
    }
    sheet.column_widths = vec![(0, 30.0), (1, 50.0)];
    sheet
}
