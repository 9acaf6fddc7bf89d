use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::{debug, instrument};

use crate::authority::report::error::Result;
use crate::authority::report::model::{CellValue, SheetRow};

/// Writes one row per record to a single-sheet workbook at `path`.
///
/// No header row is emitted and columns are positional: each row holds the
/// record's cells in their own order. An existing file is overwritten.
///
/// Excel caps a cell at 32767 characters; a longer text value fails the whole
/// export with [`ReportError::ExcelWrite`](crate::ReportError::ExcelWrite).
#[instrument(level = "debug", skip_all, fields(path = %path.display(), rows = records.len()))]
pub fn generate_excel_file<R: SheetRow>(records: &[R], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_idx, record) in records.iter().enumerate() {
        let row = row_idx as u32;
        for (col_idx, cell) in record.cells().into_iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                CellValue::Text(text) => {
                    worksheet.write_string(row, col, &text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row, col, number)?;
                }
                CellValue::Boolean(flag) => {
                    worksheet.write_boolean(row, col, flag)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    workbook.save(path)?;
    debug!("workbook saved");
    Ok(())
}
