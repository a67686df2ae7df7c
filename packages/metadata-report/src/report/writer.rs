//! Render a workbook model to `.xlsx`.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use tracing::{info, warn};

use super::model::{truncate_to_cell, Cell, CellStyle, CellValue, Sheet, WorkbookModel};
use crate::config::colours;
use crate::error::Result;

/// One `Format` per cell style, built once per workbook.
struct Formats {
    header: Format,
    obligation: Format,
    data: Format,
    data_blank: Format,
    wrapped: Format,
    title: Format,
}

impl Formats {
    fn new() -> Self {
        let data = Format::new()
            .set_text_wrap()
            .set_align(FormatAlign::Top);

        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(colours::HEADER_FONT))
                .set_background_color(Color::RGB(colours::HEADER_FILL))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap(),
            obligation: Format::new()
                .set_italic()
                .set_background_color(Color::RGB(colours::OBLIGATION_FILL))
                .set_align(FormatAlign::Center),
            data_blank: data
                .clone()
                .set_background_color(Color::RGB(colours::EMPTY_FILL)),
            wrapped: data.clone(),
            data,
            title: Format::new().set_bold(),
        }
    }

    fn for_cell(&self, cell: &Cell) -> Option<&Format> {
        match cell.style {
            CellStyle::Header => Some(&self.header),
            CellStyle::Obligation => Some(&self.obligation),
            CellStyle::Data if cell.is_blank() => Some(&self.data_blank),
            CellStyle::Data => Some(&self.data),
            CellStyle::Wrapped => Some(&self.wrapped),
            CellStyle::Title => Some(&self.title),
            CellStyle::Plain => None,
        }
    }
}

/// Convert a workbook model into an `rust_xlsxwriter` workbook.
pub fn render_workbook(model: &WorkbookModel) -> Result<Workbook> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();

    for sheet in &model.sheets {
        let worksheet = workbook.add_worksheet();
        render_sheet(worksheet, sheet, &formats)?;
    }

    Ok(workbook)
}

/// Render a workbook model and save it, overwriting any existing file.
///
/// # Returns
/// * `Ok(())` once the file is written
/// * `Err(ReportError::Workbook)` if rendering or saving fails
pub fn save_workbook(model: &WorkbookModel, path: &Path) -> Result<()> {
    let mut workbook = render_workbook(model)?;
    workbook.save(path)?;
    info!(path = %path.display(), sheets = model.sheets.len(), "saved workbook");
    Ok(())
}

fn render_sheet(worksheet: &mut Worksheet, sheet: &Sheet, formats: &Formats) -> Result<()> {
    worksheet.set_name(&sheet.name)?;

    for (r, row) in sheet.rows.iter().enumerate() {
        let Ok(r) = u32::try_from(r) else { break };
        for (c, cell) in row.iter().enumerate() {
            let Ok(c) = u16::try_from(c) else { break };
            write_cell(worksheet, r, c, cell, formats.for_cell(cell))?;
        }
    }

    for &(col, width) in &sheet.column_widths {
        worksheet.set_column_width(col, width)?;
    }
    if let Some((row, col)) = sheet.freeze {
        worksheet.set_freeze_panes(row, col)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: Option<&Format>,
) -> Result<()> {
    let text = match &cell.value {
        CellValue::Number(n) => {
            match format {
                Some(format) => worksheet.write_number_with_format(row, col, *n, format)?,
                None => worksheet.write_number(row, col, *n)?,
            };
            return Ok(());
        }
        CellValue::Text(text) => match truncate_to_cell(text) {
            Some(kept) => {
                warn!(row, col, "text exceeds the Excel cell limit, truncated");
                kept
            }
            None => text.as_str(),
        },
    };

    match format {
        Some(format) if text.is_empty() => {
            worksheet.write_blank(row, col, format)?;
        }
        None if text.is_empty() => {}
        Some(format) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        None => {
            worksheet.write_string(row, col, text)?;
        }
    }
    Ok(())
}
