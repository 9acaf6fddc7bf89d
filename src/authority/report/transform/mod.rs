use chrono::{Local, NaiveDate};
use indexmap::IndexMap;

use crate::authority::report::model::{CategoryCount, LicenseRecord};

/// Date layout of the `data_de_expirare` field.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns every record whose own `suspended` flag is set.
pub fn list_suspended_licenses(records: &[LicenseRecord]) -> Vec<LicenseRecord> {
    records
        .iter()
        .filter(|record| record.is_suspended())
        .cloned()
        .collect()
}

/// Returns the records that have not expired yet, using today's local date.
pub fn extract_valid_licenses(records: &[LicenseRecord]) -> Vec<LicenseRecord> {
    extract_valid_licenses_on(records, Local::now().date_naive())
}

/// Returns the records expiring on or after `today`.
///
/// The comparison is a plain string comparison against `today` rendered as
/// `YYYY-MM-DD`, so it only orders correctly for zero-padded ISO dates.
/// Records without a string expiry date are dropped.
pub fn extract_valid_licenses_on(
    records: &[LicenseRecord],
    today: NaiveDate,
) -> Vec<LicenseRecord> {
    let today = today.format(EXPIRY_DATE_FORMAT).to_string();
    records
        .iter()
        .filter(|record| {
            record
                .expiry_date()
                .is_some_and(|expiry| expiry >= today.as_str())
        })
        .cloned()
        .collect()
}

/// Counts records per category, keeping categories in first-seen order.
pub fn find_license_count_by_category(records: &[LicenseRecord]) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for record in records {
        *counts.entry(record.category_key()).or_insert(0) += 1;
    }
    counts
}

/// Turns the category map into exportable `Category`/`Count` records.
pub fn category_count_rows(counts: &IndexMap<String, u64>) -> Vec<CategoryCount> {
    counts
        .iter()
        .map(|(category, count)| CategoryCount {
            category: category.clone(),
            count: *count,
        })
        .collect()
}
