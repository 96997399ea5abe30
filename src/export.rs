use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};
use thiserror::Error;

use crate::data::model::SalesRecord;

pub const SHEET_NAME: &str = "Sales Data";
pub const DEFAULT_FILE_NAME: &str = "sales_data.xlsx";

const HEADERS: [&str; 4] = ["Product", "Category", "Region", "Sales"];
const HEADER_FILL: u32 = 0x4F81BD;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data available to export.")]
    EmptyDataset,
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Bold white-on-blue, centered both ways.
fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Build a single-sheet workbook: styled header row, one row per record in
/// the given order, and an autofilter over the whole used range.
pub fn build_workbook(records: &[SalesRecord]) -> Result<Workbook, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyDataset);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    let header = header_format();
    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, rec.product.as_str())?;
        worksheet.write_string(row, 1, rec.category.as_str())?;
        worksheet.write_string(row, 2, rec.region.as_str())?;
        worksheet.write_number(row, 3, rec.sales)?;
    }

    let last_row = records.len() as u32;
    worksheet.autofilter(0, 0, last_row, (HEADERS.len() - 1) as u16)?;

    Ok(workbook)
}

/// Write the workbook for `records` to `path`. Nothing is written when
/// `records` is empty.
pub fn export_to_file(records: &[SalesRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path)?;
    log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

/// Serialize the workbook for `records` to an in-memory `.xlsx` file.
pub fn export_to_buffer(records: &[SalesRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(records)?;
    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;

    fn records() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new("A", "X", "E", 10.0),
            SalesRecord::new("B", "Y", "E", 5.5),
        ]
    }

    #[test]
    fn empty_records_are_rejected() {
        assert!(matches!(build_workbook(&[]), Err(ExportError::EmptyDataset)));
        assert_eq!(
            ExportError::EmptyDataset.to_string(),
            "No data available to export."
        );
    }

    #[test]
    fn buffer_is_a_zip_container() {
        let bytes = export_to_buffer(&records()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    fn part(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut xml = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn position(xml: &str, needle: &str) -> usize {
        xml.find(needle)
            .unwrap_or_else(|| panic!("{needle} not found"))
    }

    #[test]
    fn workbook_contents_match_layout() {
        let bytes = export_to_buffer(&records()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let workbook = part(&mut archive, "xl/workbook.xml");
        assert!(workbook.contains(r#"name="Sales Data""#));

        let sheet = part(&mut archive, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<autoFilter ref="A1:D3"/>"#));
        assert!(position(&sheet, "<v>10</v>") < position(&sheet, "<v>5.5</v>"));

        let strings = part(&mut archive, "xl/sharedStrings.xml");
        let headers: Vec<usize> = HEADERS
            .iter()
            .map(|h| position(&strings, &format!("<t>{h}</t>")))
            .collect();
        assert!(headers.windows(2).all(|w| w[0] < w[1]));
        assert!(position(&strings, "<t>A</t>") < position(&strings, "<t>B</t>"));

        let styles = part(&mut archive, "xl/styles.xml");
        assert!(styles.contains("<b/>"));
        assert!(styles.contains(r#"rgb="FFFFFFFF""#));
        assert!(styles.contains(r#"rgb="FF4F81BD""#));
        assert!(styles.contains(r#"horizontal="center""#));
        assert!(styles.contains(r#"vertical="center""#));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        export_to_file(&records(), &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn empty_export_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        assert!(export_to_file(&[], &path).is_err());
        assert!(!path.exists());
    }
}
