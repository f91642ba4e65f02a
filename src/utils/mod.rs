mod datetime;
mod filesystem;
mod string;

pub use datetime::{get_local_datetime_with_format, get_utc_iso_datetime};
pub use filesystem::generate_output_filename;
pub use string::normalize_string;
