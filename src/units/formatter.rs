/// Render a committed value the way the edit field displays it.
///
/// Uses the shortest representation that round-trips (`50.0` -> `"50"`,
/// `12.3` -> `"12.3"`). Negative zero is shown as `"0"`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
