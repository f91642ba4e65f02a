use crate::utils::{get_local_datetime_with_format, normalize_string};

/// Default name of the annotated output file: `<sheet>_<timestamp>_reviewed.csv`.
pub fn generate_output_filename(sheet_name: &str) -> String {
    let timestamp = get_local_datetime_with_format("%Y-%m-%d_%H-%M-%S");
    let sheet_name = normalize_string(sheet_name).replace(' ', "_");
    let filename = format!("{sheet_name}_{timestamp}_reviewed.csv");
    return filename.to_lowercase();
}
