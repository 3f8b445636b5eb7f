use crate::domain::model::NormalizedRecord;
use crate::utils::error::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};

/// Column layout of the report sheet. Order is fixed; every data row follows
/// the same order via `record_row`.
pub const HEADERS: [&str; 14] = [
    "ID",
    "Artist",
    "Title",
    "Year",
    "Format",
    "Format Info",
    "Genres",
    "Styles",
    "Lowest Price",
    "Date Added",
    "Time Added",
    "Artist ID",
    "Master ID",
    "Notes",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

/// Flattens one record into its 14 sheet cells, in `HEADERS` order.
pub fn record_row(record: &NormalizedRecord) -> [Cell; 14] {
    [
        Cell::Number(record.id as f64),
        Cell::Text(record.artist.clone()),
        Cell::Text(record.title.clone()),
        Cell::Number(record.year as f64),
        Cell::Text(record.format.clone()),
        Cell::Text(record.format_info.clone()),
        Cell::Text(record.genres.clone()),
        Cell::Text(record.styles.clone()),
        Cell::Number(record.lowest_price),
        Cell::Text(record.date_added.clone()),
        Cell::Text(record.time_added.clone()),
        Cell::Number(record.artist_id as f64),
        Cell::Number(record.master_id as f64),
        Cell::Text(record.notes.clone()),
    ]
}

/// Report file name for a given run date, e.g.
/// `discogs_collection2024_05_05.xlsx`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("discogs_collection{}.xlsx", date.format("%Y_%m_%d"))
}

/// Builds the single-sheet workbook in memory: a bold size-14 header row
/// followed by one row per record, in input order.
pub fn build_workbook(records: &[NormalizedRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold().set_font_size(14);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, cell) in record_row(record).iter().enumerate() {
            match cell {
                Cell::Text(value) => worksheet.write_string(row, col as u16, value.as_str())?,
                Cell::Number(value) => worksheet.write_number(row, col as u16, *value)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}
