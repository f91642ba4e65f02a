mod chat_model;
mod report_table;
mod review_prompt;
mod reviewer;

pub use chat_model::{
    ChatModelConfig, CompletionModel, OpenAiChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use report_table::{convert_cell_to_json, ReportRow, ReportTable};
pub use review_prompt::{build_review_prompt, REPORT_COLUMNS, REVIEWER_SYSTEM_PROMPT};
pub use reviewer::{
    ReportReviewer, ReviewOutcome, ReviewReport, REMARK_COLUMN, REVIEW_ERROR_VALUE, STATUS_COLUMN,
};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ReviewError {
    #[error("Required column missing: '{column}'")]
    MissingColumn { column: String },

    #[error("The Excel file has no report rows")]
    EmptyTable,

    #[error("Chat completion request failed with status {status}: {body}")]
    ChatApi { status: u16, body: String },

    #[error("Chat completion reply contained no choices")]
    EmptyReply,
}
