pub mod executor;
pub mod formatter;
pub mod parser;


pub use executor::*;
pub use formatter::*;
pub use parser::*;
