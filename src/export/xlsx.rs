// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::{notify_export_success, validate_month_range};
use crate::models::{WorkMonth, WorkYear};
use crate::ui::messages::info;
use crate::utils::date::{format_cz, month_name};
use crate::utils::formatting::hours_one_decimal;
use crate::utils::fs::write_atomic;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};
use std::ops::RangeInclusive;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const HEADERS: [&str; 4] = ["Datum", "Začátek práce", "Hodiny", "Popis práce"];
pub const TOTAL_LABEL: &str = "Celkový počet hodin:";

const FIRST_DATA_ROW: u32 = 2;
const DATE_COLUMN_WIDTH: usize = 30;
const DESCRIPTION_MIN_WIDTH: usize = 40;
const DESCRIPTION_MAX_WIDTH: usize = 90;

struct Styles {
    title: Format,
    header: Format,
    data: Format,
    hours: Format,
    description: Format,
    total_label: Format,
    total: Format,
}

impl Styles {
    fn new() -> Self {
        let bordered = Format::new()
            .set_font_size(10)
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::Black)
            .set_align(FormatAlign::VerticalCenter);

        let data = bordered
            .clone()
            .set_align(FormatAlign::Center)
            .set_text_wrap();

        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(18)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(Color::Black),
            header: Format::new()
                .set_font_size(11)
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x808080))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_border_color(Color::Black)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap(),
            hours: data.clone().set_num_format("0.0"),
            total_label: data.clone().set_bold(),
            total: data.clone().set_num_format("0.0#").set_italic(),
            description: bordered.set_align(FormatAlign::Left),
            data,
        }
    }
}

/// Export `months` of `year` into an XLSX workbook, one sheet per month.
pub fn export_year(year: &WorkYear, months: RangeInclusive<u32>, path: &Path) -> AppResult<()> {
    validate_month_range(&months)?;
    info(format!("Exporting to XLSX: {}", path.display()));

    let bytes = build_workbook(year, months).map_err(|e| AppError::write(path, e))?;
    write_atomic(path, &bytes)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Render the workbook in memory.
pub fn build_workbook(year: &WorkYear, months: RangeInclusive<u32>) -> AppResult<Vec<u8>> {
    validate_month_range(&months)?;

    let styles = Styles::new();
    let mut workbook = Workbook::new();

    for number in months {
        let month = year.month(number)?;
        let name = month_name(number)?;
        let worksheet = workbook.add_worksheet();
        write_month_sheet(worksheet, month, name, &styles).map_err(to_app_error)?;
    }

    let bytes = workbook.save_to_buffer().map_err(to_app_error)?;
    tracing::debug!(bytes = bytes.len(), "workbook rendered");
    Ok(bytes)
}

fn write_month_sheet(
    worksheet: &mut Worksheet,
    month: &WorkMonth,
    name: &str,
    styles: &Styles,
) -> Result<(), XlsxError> {
    worksheet.set_name(name)?;
    worksheet
        .set_landscape()
        .set_print_fit_to_pages(1, 0)
        .set_print_center_horizontally(true);

    // ---------------------------
    // Title and header
    // ---------------------------
    worksheet.set_row_height(0, 45)?;
    worksheet.merge_range(0, 0, 0, 3, name, &styles.title)?;

    worksheet.set_row_height(1, 40)?;
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(1, col as u16, *header, &styles.header)?;
    }

    let mut col_widths = [
        DATE_COLUMN_WIDTH,
        HEADERS[1].width(),
        HEADERS[2].width(),
        DESCRIPTION_MIN_WIDTH,
    ];

    // ---------------------------
    // Sessions
    // ---------------------------
    let sessions = month.sorted();
    for (i, session) in sessions.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        let date = format_cz(session.date);
        let start = session.start_time.format("%H:%M").to_string();
        let hours = hours_one_decimal(session.duration)
            .to_f64()
            .unwrap_or_default();

        worksheet.write_string_with_format(row, 0, &date, &styles.data)?;
        worksheet.write_string_with_format(row, 1, &start, &styles.data)?;
        worksheet.write_number_with_format(row, 2, hours, &styles.hours)?;
        worksheet.write_string_with_format(row, 3, &session.description, &styles.description)?;

        col_widths[0] = col_widths[0].max(date.width());
        col_widths[1] = col_widths[1].max(start.width());
        col_widths[3] = col_widths[3]
            .max(session.description.width())
            .min(DESCRIPTION_MAX_WIDTH);
    }

    // ---------------------------
    // Total
    // ---------------------------
    let total_row = sessions.len() as u32 + 4;
    let last_data_row = (FIRST_DATA_ROW + sessions.len() as u32).max(FIRST_DATA_ROW + 1);
    worksheet.write_string_with_format(total_row, 0, TOTAL_LABEL, &styles.total_label)?;
    worksheet.write_formula_with_format(
        total_row,
        1,
        format!("SUM(C3:C{last_data_row})").as_str(),
        &styles.total,
    )?;

    for (col, width) in col_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64 + 2.0)?;
    }

    Ok(())
}

fn to_app_error(e: XlsxError) -> AppError {
    AppError::Other(format!("XLSX: {e}"))
}
