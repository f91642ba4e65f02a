/// Normalize a header cell by replacing control characters with spaces and
/// collapsing whitespace runs. Excel headers frequently wrap across lines,
/// and the prompt columns are matched by their exact text.
pub fn normalize_string(value: &str) -> String {
    return value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .trim()
        .to_string();
}
