//! levocalc-core
//!
//! Pure domain types for the levofloxacin dosing calculator: patient input,
//! clinical results, saved records, and the indication/dose table.
//! No I/O. This is the shared vocabulary of the LevoCalc system.

pub mod clock;
pub mod dose_options;
pub mod error;
pub mod form;
pub mod locale;
pub mod models;
pub mod record_keys;
