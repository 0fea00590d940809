//! Incremental sweep-chart renderer: a persistent canvas kept in step with a moving
//! scan cursor while per-channel samples stream in from another thread.
pub mod drivers;
pub mod engine;
pub mod types;
pub use drivers::*;
pub use engine::{ScanClock, SimulatedSweep};
pub use types::Sample;
