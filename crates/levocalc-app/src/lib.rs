//! levocalc-app
//!
//! In-process application layer for a LevoCalc front end: configuration,
//! logging setup, and the calculate/save/history commands that tie the
//! engine to the local record store.

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use session::{Calculation, LevoCalc, SaveOutcome};
