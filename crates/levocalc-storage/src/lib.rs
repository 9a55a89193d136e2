//! levocalc-storage
//!
//! Local per-device record store. One pretty-printed JSON document per
//! record under a root directory; see `levocalc_core::record_keys` for the
//! layout.

pub mod error;
pub mod objects;
pub mod records;

pub use records::LocalStore;
