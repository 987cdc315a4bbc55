// Units, bounds and the numeric text rules shared by the edit buffer and the controller

pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use error::UnitError;
pub use formatter::format_value;
pub use parser::{normalize_decimal_separator, parse_input_value};
pub use types::{Bounds, Unit, DEFAULT_MIN, DEFAULT_STEP, PERCENT_MAX};
