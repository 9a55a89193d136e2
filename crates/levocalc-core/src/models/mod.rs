pub mod patient;
pub mod record;
pub mod result;
