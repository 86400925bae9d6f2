//! Data module - CSV loading and registration table queries

mod loader;
mod table;

pub use loader::{load_registrations, LoaderError};
pub use table::{RegistrationTable, COL_BREED, COL_MONTH, COL_TOTAL, COL_YEAR, REQUIRED_COLUMNS};
