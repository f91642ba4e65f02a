// cargo run -- --excel-file ./data/Monthly_Tier_Reports_March2025.xlsx --sheet-name Sheet1

use clap::Parser;
use report_reviewer::{
    model::{ChatModelConfig, OpenAiChatClient, ReportReviewer, ReportTable},
    utils::generate_output_filename,
    ERRORS_LOG_FILE,
};
use rpassword::prompt_password;

#[derive(Parser)]
#[command(name = "report-reviewer")]
#[command(about = "Reviews monthly student mentoring reports against their cross-field rules")]
#[command(version)]
struct Args {
    /// Absolute path to the Excel file holding the monthly reports
    #[arg(short, long)]
    excel_file: String,

    /// Optional sheet name to review (if not specified, reviews Sheet1)
    #[arg(long)]
    sheet_name: Option<String>,

    /// Path of the annotated CSV file to write. If not specified, a unique filename is generated.
    #[arg(short, long)]
    output_file: Option<String>,

    /// The chat model asked to review each row
    #[arg(long, default_value = report_reviewer::model::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the chat completion API
    #[arg(long, default_value = report_reviewer::model::DEFAULT_BASE_URL)]
    base_url: String,

    /// The API key for the chat completion API. If not specified, the OPENAI_API_KEY
    /// environment variable is used, and failing that the key will be required during runtime.
    #[arg(long)]
    api_key: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arguments = {
        let mut _args = Args::parse();
        if _args.api_key.is_none() {
            _args.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if _args.api_key.is_none() {
            let _api_key = prompt_password("API key: ").expect("Failed to read API key");
            _args.api_key = Some(_api_key);
        }
        _args
    };

    // Validate the url. It must be https because the key travels as a bearer header.
    if !arguments.base_url.starts_with("https://") {
        panic!(
            "The base URL must be https. The provided URL is: {}",
            arguments.base_url
        );
    }

    let mut config = ChatModelConfig::new(arguments.api_key.unwrap());
    config.base_url = arguments.base_url;
    config.model = arguments.model;
    let client = OpenAiChatClient::new(config)?;

    let sheet_name = arguments.sheet_name.as_deref().unwrap_or("Sheet1");
    let mut table = ReportTable::read(&arguments.excel_file, Some(sheet_name))?;
    println!(
        "Reviewing {} report row(s) from sheet '{}'",
        table.rows.len(),
        sheet_name
    );

    let mut reviewer = ReportReviewer::new(client, ERRORS_LOG_FILE);
    reviewer.review_table(&mut table)?;

    let output_file = arguments
        .output_file
        .unwrap_or_else(|| generate_output_filename(sheet_name));
    table.write_csv(&output_file)?;
    println!("✅ Reviewed table written: {output_file}");

    if reviewer.review_reports.is_empty() {
        println!("✅ Review completed, all rows approved!");
    } else {
        let failed_rows = reviewer.failed_row_count();
        let flagged_rows = reviewer.review_reports.len() - failed_rows;
        println!(
            "❌ {} row(s) need clarification, {} row(s) failed to review",
            flagged_rows, failed_rows
        );
        eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
        if failed_rows > 0 {
            std::process::exit(1);
        }
    }

    Ok(())
}
