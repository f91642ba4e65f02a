// Test utilities available to both unit and integration tests
// Only compiled when testing

use anyhow::Result;
use serde_json::{Map, Value};

use crate::model::{CompletionModel, ReportRow, ReportTable, REPORT_COLUMNS};

/// A reply in the format the reviewer asks the model for, approving the row.
pub const APPROVED_REPLY: &str = "Status: Approved\nRemark: Looks consistent";

/// A reply flagging a well-being inconsistency.
pub const CLARIFICATION_REPLY: &str =
    "Status: Need Clarification\nRemark: Rule 4 violated: actions taken but no concerns listed";

/// One internally-consistent report row, every expected column filled.
#[allow(dead_code)]
pub fn sample_report_row() -> ReportRow {
    let values = [
        ("Khotwa Program Status", "Active"),
        ("Current Academic Status", "Bachelor Degree Courses Only"),
        ("Next Month Academic Status", "Bachelor Degree Courses Only"),
        ("Academic Concerns", "No concerns"),
        ("Actions Taken on Academic Concerns", "No action needed"),
        ("Proactive Actions Taken", "Weekly check-in with student"),
        ("Is student on an Improvement Plan?", "No"),
        ("Improvememt Plan Progress", "Not applicable to student"),
        ("Reason for contact with ADEK Advisor", "Monthly progress update"),
        ("Date of meeting with ADEK Advisor", "2025-03-12"),
        ("Mentor's Contact Point with Institutions", "Student affairs office"),
        ("Date of meeting with institution", "2025-03-15"),
        ("Type of Transfer", "Not Applicable"),
        ("Stage of Transfer", "Not Applicable"),
        ("Institution student transferred to", "N/A"),
        ("Mentor support provided in transfer", "N/A"),
        ("Student well-being concerns", "None"),
        ("Actions taken on student well-being concerns", "None"),
        (
            "Student participation in any extracurricular activity?",
            "No",
        ),
        ("Details of extracurricular activities", ""),
        ("Activities' impact on academics", ""),
        ("Student notes", "Student is progressing well this month."),
    ];

    let mut fields = Map::new();
    for (column, value) in values {
        fields.insert(column.to_string(), Value::String(value.to_string()));
    }

    ReportRow {
        row_number: 2,
        fields,
    }
}

/// A table of `count` sample rows with spreadsheet row numbers starting at 2.
#[allow(dead_code)]
pub fn sample_report_table(count: usize) -> ReportTable {
    let rows = (0..count)
        .map(|offset| {
            let mut row = sample_report_row();
            row.row_number = offset + 2;
            row
        })
        .collect();

    ReportTable {
        headers: REPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

/// Completion model returning the same canned reply for every row.
pub struct CannedModel {
    pub reply: String,
}

impl CannedModel {
    #[allow(dead_code)]
    pub fn new(reply: &str) -> Self {
        CannedModel {
            reply: reply.to_string(),
        }
    }
}

impl CompletionModel for CannedModel {
    fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

/// Completion model that always fails, for exercising the error path.
pub struct FailingModel {
    pub message: String,
}

impl CompletionModel for FailingModel {
    fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
        Err(anyhow::anyhow!("{}", self.message))
    }
}
