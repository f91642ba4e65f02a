use anyhow::Result;
use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::{json, Map, Value};

use crate::model::ReviewError;
use crate::utils::normalize_string;

/// One student's monthly report, one spreadsheet line.
///
/// `row_number` is the 1-based spreadsheet coordinate: the header is row 1,
/// so the first report is row 2.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub row_number: usize,
    pub fields: Map<String, Value>,
}

impl ReportRow {
    /// Render a field the way it should appear in the review prompt.
    /// Blank cells read back as empty strings so the reviewer sees exactly
    /// what the mentor left unfilled.
    pub fn display_field(&self, column: &str) -> Result<String, ReviewError> {
        let value = self
            .fields
            .get(column)
            .ok_or_else(|| ReviewError::MissingColumn {
                column: column.to_string(),
            })?;
        Ok(value_to_display(value))
    }
}

/// An in-memory report sheet: header row plus one `ReportRow` per student.
#[derive(Debug)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Read a report sheet from an Excel workbook.
    ///
    /// The first row supplies the headers (normalized, since Excel headers
    /// frequently wrap across lines), fully-empty rows are skipped, and rows
    /// shorter than the header row pad with nulls.
    pub fn read(excel_path: &str, sheet_name: Option<&str>) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(excel_path)?;

        let sheet_name = sheet_name.unwrap_or("Sheet1");
        let range = match workbook.worksheet_range(sheet_name) {
            Ok(range) => range,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Error reading sheet '{}': {}",
                    sheet_name,
                    e
                ));
            }
        };

        let mut headers: Vec<String> = Vec::new();
        let mut rows: Vec<ReportRow> = Vec::new();

        for (row_idx, row) in range.rows().enumerate() {
            if row_idx == 0 {
                headers = row
                    .iter()
                    .map(|cell| normalize_string(&cell.to_string()))
                    .collect();
                continue;
            }

            // Skip empty rows
            let is_empty_row = row.iter().all(|cell| match cell {
                Data::Empty => true,
                Data::String(s) => s.trim().is_empty(),
                Data::Error(_) => true,
                _ => false,
            });
            if is_empty_row {
                continue;
            }

            // Cells beyond the header row have no name and are dropped
            let mut fields = Map::new();
            for (col_idx, header) in headers.iter().enumerate() {
                let value = row
                    .get(col_idx)
                    .map(convert_cell_to_json)
                    .unwrap_or(Value::Null);
                fields.insert(header.clone(), value);
            }

            rows.push(ReportRow {
                row_number: row_idx + 1,
                fields,
            });
        }

        if rows.is_empty() {
            return Err(ReviewError::EmptyTable.into());
        }

        Ok(ReportTable { headers, rows })
    }

    /// Append a derived column: one value per row, in row order.
    pub fn append_column(&mut self, header: &str, values: Vec<String>) {
        self.headers.push(header.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.fields.insert(header.to_string(), Value::String(value));
        }
    }

    /// Write the table as CSV, headers first.
    pub fn write_csv(&self, csv_path: &str) -> Result<()> {
        let mut wtr = csv::Writer::from_path(csv_path)?;

        wtr.write_record(&self.headers)?;

        for row in &self.rows {
            let mut record: Vec<String> = Vec::with_capacity(self.headers.len());
            for header in &self.headers {
                let value = row
                    .fields
                    .get(header)
                    .map(value_to_display)
                    .unwrap_or_default();
                record.push(value);
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;

        Ok(())
    }
}

/// Convert an Excel cell to a JSON value.
///
/// There is no schema to coerce against here; the only shaping is making the
/// values read naturally once rendered into prompt text.
pub fn convert_cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => convert_float(*f),
        Data::Int(i) => json!(*i),
        Data::Bool(b) => Value::Bool(*b),
        Data::Error(_) => Value::Null,
        Data::DateTime(dt) => Value::String(excel_datetime_to_chrono(dt).to_string()),
        Data::DateTimeIso(dt_str) => Value::String(dt_str.clone()),
        Data::DurationIso(dur_str) => Value::String(dur_str.clone()),
    }
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_display)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(_) => value.to_string(),
    }
}

fn convert_float(f: f64) -> Value {
    // Handle special float values
    if f.is_nan() || f.is_infinite() {
        return Value::Null;
    }

    // Excel stores whole numbers as floats; render them back as integers
    if (f.fract().abs() < f64::EPSILON) && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        json!(f as i64)
    } else {
        json!(f)
    }
}

pub fn excel_datetime_to_chrono(dt: &calamine::ExcelDateTime) -> chrono::NaiveDateTime {
    use chrono::{Duration, NaiveDate};
    let excel_base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let value = dt.as_f64();
    let days = value as i64;
    let seconds = ((value - days as f64) * 86400.0).round() as i64;
    excel_base.and_hms_opt(0, 0, 0).unwrap() + Duration::days(days) + Duration::seconds(seconds)
}
