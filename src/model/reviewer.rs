use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    build_review_prompt, CompletionModel, ReportRow, ReportTable, REVIEWER_SYSTEM_PROMPT,
};
use crate::utils::get_utc_iso_datetime;

/// Output column names, kept exactly as the review sheets expect them.
pub const STATUS_COLUMN: &str = "Approved / Disapproved / Need Clarification";
pub const REMARK_COLUMN: &str = "HQ Remark";

/// Written when an expected line is absent from the model's reply, and as
/// the status of rows whose review call failed outright.
pub const REVIEW_ERROR_VALUE: &str = "Error";

static STATUS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i).*Status\s*:\s*(.*)").expect("Valid regex pattern"));
static REMARK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i).*Remark\s*:\s*(.*)").expect("Valid regex pattern"));

/// The two derived fields of one reviewed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub status: String,
    pub remark: String,
}

impl ReviewOutcome {
    /// Parse the model's free-text reply.
    ///
    /// Status is whatever follows the first `Status:` line; the remark is
    /// kept only when the status is not an approval. Either field falls back
    /// to [`REVIEW_ERROR_VALUE`] when its line never appears.
    pub fn from_reply(reply: &str) -> Self {
        let lines: Vec<&str> = reply.trim().lines().collect();

        let status = extract_field(&lines, &STATUS_LINE);
        let remark = if status.eq_ignore_ascii_case("approved") {
            String::new()
        } else {
            extract_field(&lines, &REMARK_LINE)
        };

        ReviewOutcome { status, remark }
    }

    /// A failed review call: the error text travels verbatim in the remark.
    pub fn from_failure(error: &anyhow::Error) -> Self {
        ReviewOutcome {
            status: REVIEW_ERROR_VALUE.to_string(),
            remark: error.to_string(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status.eq_ignore_ascii_case("approved")
    }

    pub fn is_failure(&self) -> bool {
        self.status == REVIEW_ERROR_VALUE
    }
}

/// Scan reply lines for `<label>: value` and return the first capture,
/// trimmed. Falls back to [`REVIEW_ERROR_VALUE`] when no line matches.
fn extract_field(lines: &[&str], pattern: &Regex) -> String {
    for line in lines {
        if let Some(captures) = pattern.captures(line.trim()) {
            if let Some(matched) = captures.get(1) {
                return matched.as_str().trim().to_string();
            }
        }
    }
    REVIEW_ERROR_VALUE.to_string()
}

/// One entry of the end-of-run review log.
#[derive(Debug, Clone)]
pub struct ReviewReport {
    pub row_number: usize,
    pub outcome: ReviewOutcome,
}

/// Drives one sequential review pass over a report table.
///
/// Rows are reviewed independently and in order; a failure on one row is
/// recorded as that row's outcome and never aborts the pass.
pub struct ReportReviewer<M: CompletionModel> {
    model: M,
    review_log_path: String,
    pub review_reports: Vec<ReviewReport>,
}

impl<M: CompletionModel> ReportReviewer<M> {
    pub fn new(model: M, review_log_path: &str) -> Self {
        ReportReviewer {
            model,
            review_log_path: review_log_path.to_string(),
            review_reports: Vec::new(),
        }
    }

    /// Review a single row: prompt, call, parse. Every failure mode
    /// collapses into an outcome carrying the error text.
    pub fn review_row(&self, row: &ReportRow) -> ReviewOutcome {
        match self.try_review_row(row) {
            Ok(outcome) => outcome,
            Err(e) => ReviewOutcome::from_failure(&e),
        }
    }

    fn try_review_row(&self, row: &ReportRow) -> Result<ReviewOutcome> {
        let prompt = build_review_prompt(row)?;
        let reply = self.model.complete(REVIEWER_SYSTEM_PROMPT, &prompt)?;
        Ok(ReviewOutcome::from_reply(&reply))
    }

    /// Review every row and append the status and remark columns.
    ///
    /// Non-approved rows are collected into `review_reports` and written to
    /// the review log afterwards.
    pub fn review_table(&mut self, table: &mut ReportTable) -> Result<()> {
        let mut statuses: Vec<String> = Vec::with_capacity(table.rows.len());
        let mut remarks: Vec<String> = Vec::with_capacity(table.rows.len());

        for row in &table.rows {
            let outcome = self.review_row(row);
            println!("Row {}: {}", row.row_number, outcome.status);

            if !outcome.is_approved() {
                self.review_reports.push(ReviewReport {
                    row_number: row.row_number,
                    outcome: outcome.clone(),
                });
            }

            statuses.push(outcome.status);
            remarks.push(outcome.remark);
        }

        table.append_column(STATUS_COLUMN, statuses);
        table.append_column(REMARK_COLUMN, remarks);

        self.write_review_log()?;

        Ok(())
    }

    pub fn failed_row_count(&self) -> usize {
        self.review_reports
            .iter()
            .filter(|report| report.outcome.is_failure())
            .count()
    }

    fn write_review_log(&self) -> Result<()> {
        // Only create the log file when something needs attention
        if self.review_reports.is_empty() {
            return Ok(());
        }

        let log_file = File::create(&self.review_log_path)?;
        let mut log = BufWriter::new(log_file);

        writeln!(log, "Monthly Report Review Log")?;
        writeln!(log, "=========================")?;
        writeln!(log, "Generated at: {}", get_utc_iso_datetime())?;
        writeln!(log)?;

        writeln!(log, "Rows needing attention: {}", self.review_reports.len())?;
        writeln!(log)?;

        for report in &self.review_reports {
            writeln!(log, "Row {}: {}", report.row_number, report.outcome.status)?;
            if !report.outcome.remark.is_empty() {
                writeln!(log, "  Remark: {}", report.outcome.remark)?;
            }
            writeln!(log)?;
        }

        log.flush()?;

        Ok(())
    }
}
