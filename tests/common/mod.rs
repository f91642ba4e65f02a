//! Common test utilities for the report-reviewer library tests

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::Result;
use report_reviewer::model::CompletionModel;
use report_reviewer::test_utils::sample_report_row;
use report_reviewer::ReportRow;
use serde_json::Value;

/// A sample row with one field overridden
#[allow(dead_code)]
pub fn row_with(column: &str, value: &str) -> ReportRow {
    let mut row = sample_report_row();
    row.fields
        .insert(column.to_string(), Value::String(value.to_string()));
    row
}

/// A sample row with one column removed entirely
#[allow(dead_code)]
pub fn row_without(column: &str) -> ReportRow {
    let mut row = sample_report_row();
    row.fields.remove(column);
    row
}

/// Completion model replaying a fixed sequence of replies, one per call
#[allow(dead_code)]
pub struct SequenceModel {
    replies: RefCell<VecDeque<String>>,
}

#[allow(dead_code)]
impl SequenceModel {
    pub fn new(replies: &[&str]) -> Self {
        SequenceModel {
            replies: RefCell::new(replies.iter().map(|r| r.to_string()).collect()),
        }
    }
}

impl CompletionModel for SequenceModel {
    fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no replies left in sequence"))
    }
}

/// A unique path under the system temp directory
#[allow(dead_code)]
pub fn temp_path(file_name: &str) -> std::path::PathBuf {
    let unique = format!("report-reviewer-test-{}-{}", std::process::id(), file_name);
    std::env::temp_dir().join(unique)
}
