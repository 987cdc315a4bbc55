pub mod config;
pub mod controller;
pub mod edit;
pub mod session;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::ControllerConfig;
pub use controller::{ChangeEvent, ControlState, ControllerView, UnitValueController};
pub use edit::{CommitOutcome, CommitResult, RevertReason, ValueEditBuffer};
pub use units::{Bounds, Unit};
