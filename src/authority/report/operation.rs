use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::authority::report::error::Result;
use crate::authority::report::io::excel_write::generate_excel_file;
use crate::authority::report::model::LicenseRecord;
use crate::authority::report::transform;

/// Extension appended to every report file name.
pub const REPORT_EXTENSION: &str = "xlsx";

/// The reports that can be produced from the fetched license set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Licenses whose `suspended` flag is set.
    Suspended,
    /// Licenses expiring today or later.
    Valid,
    /// Number of licenses per category.
    CategoryCount,
}

impl Operation {
    /// Menu identifier of the operation.
    pub fn id(self) -> u8 {
        match self {
            Operation::Suspended => 1,
            Operation::Valid => 2,
            Operation::CategoryCount => 3,
        }
    }

    /// Resolves a menu identifier.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Operation::Suspended),
            2 => Some(Operation::Valid),
            3 => Some(Operation::CategoryCount),
            _ => None,
        }
    }

    /// Human readable description of the exported data.
    pub fn subject(self) -> &'static str {
        match self {
            Operation::Suspended => "Suspended licenses",
            Operation::Valid => "Valid licenses",
            Operation::CategoryCount => "License count by category",
        }
    }
}

/// Outcome of a single export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub operation: Operation,
    pub rows: usize,
    pub path: PathBuf,
}

/// Builds `<dir>/<name>.xlsx` for a user supplied file name.
pub fn report_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{REPORT_EXTENSION}"))
}

/// Runs one report over `records` and writes it to `output`.
#[instrument(
    level = "info",
    skip(records, output),
    fields(output = %output.display(), input_count = records.len())
)]
pub fn run_operation(
    records: &[LicenseRecord],
    operation: Operation,
    output: &Path,
) -> Result<ExportSummary> {
    let rows = match operation {
        Operation::Suspended => {
            let suspended = transform::list_suspended_licenses(records);
            generate_excel_file(&suspended, output)?;
            suspended.len()
        }
        Operation::Valid => {
            let valid = transform::extract_valid_licenses(records);
            generate_excel_file(&valid, output)?;
            valid.len()
        }
        Operation::CategoryCount => {
            let counts = transform::find_license_count_by_category(records);
            let rows = transform::category_count_rows(&counts);
            generate_excel_file(&rows, output)?;
            rows.len()
        }
    };

    info!(rows, "report exported");
    Ok(ExportSummary {
        operation,
        rows,
        path: output.to_path_buf(),
    })
}
