//! CSV Data Loader Module
//! Reads the registration spreadsheet into a sorted table using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

use super::table::{RegistrationTable, COL_BREED, COL_MONTH, COL_TOTAL, COL_YEAR, REQUIRED_COLUMNS};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{name}'")]
    MissingColumn { name: &'static str },
    #[error("Column '{name}' contains invalid values")]
    InvalidColumn { name: &'static str },
    #[error("No registration rows in data source")]
    Empty,
}

/// Load the registration spreadsheet and build the sorted lookup table.
///
/// Any failure here is a startup failure: a missing or unreadable file, a
/// column that is absent or will not cast to its expected type, a null or
/// negative count, or a source with no rows at all.
pub fn load_registrations(path: impl AsRef<Path>) -> Result<RegistrationTable, LoaderError> {
    let path = path.as_ref();

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    for name in REQUIRED_COLUMNS {
        if df.column(name).is_err() {
            return Err(LoaderError::MissingColumn { name });
        }
    }

    // Canonical dtypes, then the composite-key sort the queries rely on.
    let df = df
        .lazy()
        .select([
            col(COL_BREED).cast(DataType::String),
            col(COL_YEAR).cast(DataType::Int32),
            col(COL_MONTH).cast(DataType::String),
            col(COL_TOTAL).cast(DataType::Int64),
        ])
        .sort([COL_BREED, COL_YEAR, COL_MONTH], SortMultipleOptions::default())
        .collect()?;

    for name in REQUIRED_COLUMNS {
        if df.column(name)?.null_count() > 0 {
            return Err(LoaderError::InvalidColumn { name });
        }
    }
    if df
        .column(COL_TOTAL)?
        .i64()?
        .min()
        .is_some_and(|min| min < 0)
    {
        return Err(LoaderError::InvalidColumn { name: COL_TOTAL });
    }

    if df.height() == 0 {
        return Err(LoaderError::Empty);
    }

    let table = RegistrationTable::new(df);
    log::debug!(
        "loaded {} registration rows covering {} breeds from {}",
        table.row_count(),
        table.breeds().len(),
        path.display()
    );
    Ok(table)
}
