//! Tests for rendering a report row into the review prompt

use report_reviewer::model::{build_review_prompt, ReviewError, REPORT_COLUMNS};
use report_reviewer::test_utils::sample_report_row;

mod common;

#[test]
fn test_prompt_contains_every_field_value() {
    let row = common::row_with("Student notes", "Unusually strong month for this student");
    let prompt = build_review_prompt(&row).unwrap();

    assert!(prompt.contains("- Khotwa Program Status: Active"));
    assert!(prompt.contains("- Academic Concerns: No concerns"));
    assert!(prompt.contains("- Type of Transfer: Not Applicable"));
    assert!(prompt.contains("Unusually strong month for this student"));
}

#[test]
fn test_prompt_contains_all_nine_rules() {
    let prompt = build_review_prompt(&sample_report_row()).unwrap();

    for rule_number in 1..=9 {
        assert!(
            prompt.contains(&format!("Rule {}:", rule_number)),
            "prompt is missing rule {}",
            rule_number
        );
    }
}

#[test]
fn test_prompt_contains_the_reply_format_directive() {
    let prompt = build_review_prompt(&sample_report_row()).unwrap();

    assert!(prompt.contains("Status: [Approved / Need Clarification]"));
    assert!(prompt.contains("Remark: [Rule X violated: explanation"));
}

#[test]
fn test_blank_cells_render_as_empty_values() {
    let row = common::row_with("Details of extracurricular activities", "");
    let prompt = build_review_prompt(&row).unwrap();

    assert!(prompt.contains("- Details of extracurricular activities: \n"));
}

#[test]
fn test_missing_column_fails_with_its_name() {
    let row = common::row_without("Stage of Transfer");
    let error = build_review_prompt(&row).unwrap_err();

    match &error {
        ReviewError::MissingColumn { column } => assert_eq!(column, "Stage of Transfer"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        "Required column missing: 'Stage of Transfer'"
    );
}

#[test]
fn test_every_expected_column_is_consumed() {
    // Dropping any one of the expected columns must fail prompt construction
    for column in REPORT_COLUMNS {
        let row = common::row_without(column);
        assert!(
            build_review_prompt(&row).is_err(),
            "column '{}' is listed but never rendered",
            column
        );
    }
}
