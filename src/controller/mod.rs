pub mod events;
pub mod unit_value;

#[cfg(test)]
mod tests;

pub use events::*;
pub use unit_value::*;
