use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the license category code.
pub const CATEGORY_FIELD: &str = "categorie";
/// Field holding the ISO `YYYY-MM-DD` expiry date.
pub const EXPIRY_FIELD: &str = "data_de_expirare";
/// Field flagging a suspended license.
pub const SUSPENDED_FIELD: &str = "suspended";

/// A single driver's-license entry as returned by the license service.
///
/// The record is schema-less: every field of the source object is kept in the
/// order it appeared in the response and is exported as is. The accessors
/// below only read the handful of fields the reports depend on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LicenseRecord(Map<String, Value>);

impl LicenseRecord {
    /// Wraps an already decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the record's own `suspended` flag is set. Anything other than
    /// a JSON `true` counts as not suspended.
    pub fn is_suspended(&self) -> bool {
        matches!(self.0.get(SUSPENDED_FIELD), Some(Value::Bool(true)))
    }

    /// The expiry date string, when present.
    pub fn expiry_date(&self) -> Option<&str> {
        self.0.get(EXPIRY_FIELD).and_then(Value::as_str)
    }

    /// The category key used when grouping records.
    ///
    /// Categories are normalised to text: strings are returned verbatim,
    /// numbers and other values as their JSON text (so `1` and `"1"` share a
    /// key), and a missing or `null` category as the empty string.
    pub fn category_key(&self) -> String {
        match self.0.get(CATEGORY_FIELD) {
            Some(Value::String(category)) => category.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Iterates over the fields in their original order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Number of licenses sharing one category.
///
/// Exported as a `Category`, `Count` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Value of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Plain text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
    /// Boolean cell.
    Boolean(bool),
    /// Cell left blank, used for JSON `null`.
    Empty,
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => CellValue::Text(text.clone()),
            Value::Number(number) => number
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(number.to_string())),
            Value::Bool(flag) => CellValue::Boolean(*flag),
            Value::Null => CellValue::Empty,
            nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
        }
    }
}

/// Anything that can be exported as one positional spreadsheet row.
pub trait SheetRow {
    /// Cell values in column order.
    fn cells(&self) -> Vec<CellValue>;
}

impl SheetRow for LicenseRecord {
    fn cells(&self) -> Vec<CellValue> {
        self.0.values().map(CellValue::from).collect()
    }
}

impl SheetRow for CategoryCount {
    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.category.clone()),
            CellValue::Number(self.count as f64),
        ]
    }
}
