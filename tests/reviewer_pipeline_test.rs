//! Tests for the sequential review pass over a report table

use report_reviewer::model::{
    ReportReviewer, REMARK_COLUMN, REVIEW_ERROR_VALUE, STATUS_COLUMN,
};
use report_reviewer::test_utils::{
    sample_report_table, CannedModel, FailingModel, APPROVED_REPLY, CLARIFICATION_REPLY,
};
use serde_json::Value;

mod common;

fn column_values(table: &report_reviewer::ReportTable, header: &str) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| match row.fields.get(header) {
            Some(Value::String(s)) => s.clone(),
            other => panic!("missing value in column '{header}': {other:?}"),
        })
        .collect()
}

#[test]
fn test_approved_rows_get_both_columns_appended() {
    let mut table = sample_report_table(3);
    let log_path = common::temp_path("approved.log");
    let mut reviewer = ReportReviewer::new(
        CannedModel::new(APPROVED_REPLY),
        log_path.to_str().unwrap(),
    );

    reviewer.review_table(&mut table).unwrap();

    assert_eq!(
        column_values(&table, STATUS_COLUMN),
        vec!["Approved", "Approved", "Approved"]
    );
    assert_eq!(column_values(&table, REMARK_COLUMN), vec!["", "", ""]);
    assert!(reviewer.review_reports.is_empty());
    // Nothing needed attention, so no log file is written
    assert!(!log_path.exists());
}

#[test]
fn test_flagged_rows_keep_their_remark_and_reach_the_log() {
    let mut table = sample_report_table(2);
    let log_path = common::temp_path("flagged.log");
    let mut reviewer = ReportReviewer::new(
        common::SequenceModel::new(&[APPROVED_REPLY, CLARIFICATION_REPLY]),
        log_path.to_str().unwrap(),
    );

    reviewer.review_table(&mut table).unwrap();

    assert_eq!(
        column_values(&table, STATUS_COLUMN),
        vec!["Approved", "Need Clarification"]
    );
    assert_eq!(
        column_values(&table, REMARK_COLUMN),
        vec![
            "",
            "Rule 4 violated: actions taken but no concerns listed"
        ]
    );

    assert_eq!(reviewer.review_reports.len(), 1);
    assert_eq!(reviewer.review_reports[0].row_number, 3);
    assert_eq!(reviewer.failed_row_count(), 0);

    let log = std::fs::read_to_string(&log_path).unwrap();
    std::fs::remove_file(&log_path).ok();
    assert!(log.contains("Rows needing attention: 1"));
    assert!(log.contains("Row 3: Need Clarification"));
    assert!(log.contains("Rule 4 violated"));
}

#[test]
fn test_failed_calls_become_error_rows_without_aborting_the_pass() {
    let mut table = sample_report_table(2);
    let log_path = common::temp_path("failing.log");
    let mut reviewer = ReportReviewer::new(
        FailingModel {
            message: "429 Too Many Requests".to_string(),
        },
        log_path.to_str().unwrap(),
    );

    reviewer.review_table(&mut table).unwrap();

    assert_eq!(
        column_values(&table, STATUS_COLUMN),
        vec![REVIEW_ERROR_VALUE, REVIEW_ERROR_VALUE]
    );
    assert_eq!(
        column_values(&table, REMARK_COLUMN),
        vec!["429 Too Many Requests", "429 Too Many Requests"]
    );
    assert_eq!(reviewer.failed_row_count(), 2);

    std::fs::remove_file(&log_path).ok();
}

#[test]
fn test_missing_column_surfaces_as_that_rows_outcome() {
    let mut table = sample_report_table(2);
    table.rows[1].fields.remove("Academic Concerns");
    let log_path = common::temp_path("missing_column.log");
    let mut reviewer = ReportReviewer::new(
        CannedModel::new(APPROVED_REPLY),
        log_path.to_str().unwrap(),
    );

    reviewer.review_table(&mut table).unwrap();

    let statuses = column_values(&table, STATUS_COLUMN);
    assert_eq!(statuses[0], "Approved");
    assert_eq!(statuses[1], REVIEW_ERROR_VALUE);

    let remarks = column_values(&table, REMARK_COLUMN);
    assert_eq!(remarks[1], "Required column missing: 'Academic Concerns'");

    std::fs::remove_file(&log_path).ok();
}

#[test]
fn test_rows_are_reviewed_in_sheet_order() {
    let mut table = sample_report_table(3);
    let log_path = common::temp_path("ordered.log");
    let mut reviewer = ReportReviewer::new(
        common::SequenceModel::new(&[
            "Status: Need Clarification\nRemark: Rule 1 violated: first",
            "Status: Need Clarification\nRemark: Rule 6 violated: second",
            "Status: Need Clarification\nRemark: Rule 9 violated: third",
        ]),
        log_path.to_str().unwrap(),
    );

    reviewer.review_table(&mut table).unwrap();

    assert_eq!(
        column_values(&table, REMARK_COLUMN),
        vec![
            "Rule 1 violated: first",
            "Rule 6 violated: second",
            "Rule 9 violated: third"
        ]
    );

    std::fs::remove_file(&log_path).ok();
}
