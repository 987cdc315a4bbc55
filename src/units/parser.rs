use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading numeric prefix of an edit: optional minus, digits, at most one dot, digits.
    /// Anything after the prefix is dropped ("123a" -> "123").
    static ref NUMERIC_PREFIX: Regex = Regex::new(r"^-?[0-9]*\.?[0-9]*").unwrap();
}

/// Replace every comma decimal separator with a dot
pub fn normalize_decimal_separator(input: &str) -> String {
    input.replace(',', ".")
}

/// Parse raw edit text into a candidate number.
///
/// Returns `None` when the text cannot be read as a number: blank input,
/// more than one dot anywhere, an empty or incomplete numeric prefix
/// (`"-"`, `"."`, `"12."`), or a result that is not a finite float.
/// Range checks are not applied here.
pub fn parse_input_value(input: &str) -> Option<f64> {
    if input.trim().is_empty() {
        return None;
    }

    let cleaned = normalize_decimal_separator(input);

    // "12.4.5" is rejected outright rather than read as 12.4
    if cleaned.matches('.').count() > 1 {
        return None;
    }

    let matched = NUMERIC_PREFIX
        .find(&cleaned)
        .map(|m| m.as_str())
        .unwrap_or("");

    if matched.is_empty() || matched == "-" || matched == "." || matched.ends_with('.') {
        return None;
    }

    // "-0" parses to negative zero; adding zero folds it to plain zero
    let value = matched.parse::<f64>().ok()? + 0.0;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}
