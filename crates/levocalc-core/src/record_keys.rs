//! On-disk key conventions for the local record store.
//!
//! Pure string functions with no filesystem access. Keys are relative to the
//! store root.

use uuid::Uuid;

pub const CALCULATIONS_PREFIX: &str = "calculations/";

pub const OBSERVATIONS_PREFIX: &str = "observations/";

pub fn calculation(id: Uuid) -> String {
    record(CALCULATIONS_PREFIX, id)
}

pub fn observation(id: Uuid) -> String {
    record(OBSERVATIONS_PREFIX, id)
}

/// Key for a record `id` under an arbitrary collection prefix.
pub fn record(prefix: &str, id: Uuid) -> String {
    format!("{prefix}{id}.json")
}
