//! System orchestration, startup, and shutdown logic.

pub mod telemetry;
pub mod user_system;

pub use telemetry::*;
pub use user_system::*;
