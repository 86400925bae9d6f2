//! Registration Table Module
//! Composite-key (breed, year, month) queries over the loaded DataFrame.

use polars::prelude::*;

/// Column labels of the registration spreadsheet.
pub const COL_BREED: &str = "Breed";
pub const COL_YEAR: &str = "Year";
pub const COL_MONTH: &str = "Month";
pub const COL_TOTAL: &str = "Total";

/// Columns every data source must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_BREED, COL_YEAR, COL_MONTH, COL_TOTAL];

/// Read-only registration data, sorted by (breed, year, month).
///
/// Built once by the loader and shared by reference afterwards; rows are
/// unique per (breed, year, month) triple, never per breed alone.
#[derive(Debug)]
pub struct RegistrationTable {
    df: DataFrame,
}

impl RegistrationTable {
    pub(crate) fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Distinct breed names, sorted.
    pub fn breeds(&self) -> Vec<String> {
        self.df
            .column(COL_BREED)
            .ok()
            .and_then(|col| col.unique().ok())
            .map(|unique| {
                let series = unique.as_materialized_series();
                let mut breeds: Vec<String> = (0..series.len())
                    .filter_map(|i| {
                        let val = series.get(i).ok()?;
                        if val.is_null() {
                            None
                        } else {
                            Some(val.to_string().trim_matches('"').to_string())
                        }
                    })
                    .collect();
                breeds.sort();
                breeds
            })
            .unwrap_or_default()
    }

    /// Exact, case-sensitive breed membership test.
    pub fn contains_breed(&self, breed: &str) -> bool {
        self.df
            .column(COL_BREED)
            .ok()
            .and_then(|col| col.str().ok())
            .map(|ca| ca.into_iter().flatten().any(|b| b == breed))
            .unwrap_or(false)
    }

    /// All rows for one breed, over every year and month.
    pub fn rows_for_breed(&self, breed: &str) -> PolarsResult<DataFrame> {
        self.df
            .clone()
            .lazy()
            .filter(col(COL_BREED).eq(lit(breed)))
            .collect()
    }

    /// All rows for one year, across every breed.
    pub fn rows_for_year(&self, year: i32) -> PolarsResult<DataFrame> {
        self.df
            .clone()
            .lazy()
            .filter(col(COL_YEAR).eq(lit(year)))
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn sample_table() -> RegistrationTable {
        let df = df!(
            COL_BREED => ["AKITA", "AKITA", "BORDER COLLIE", "BORDER COLLIE"],
            COL_YEAR => [2021i32, 2022, 2021, 2021],
            COL_MONTH => ["JAN", "FEB", "JAN", "MAR"],
            COL_TOTAL => [10i64, 20, 30, 40],
        )
        .unwrap();
        RegistrationTable::new(df)
    }

    #[test]
    fn breeds_are_distinct_and_sorted() {
        let table = sample_table();
        assert_eq!(table.breeds(), vec!["AKITA", "BORDER COLLIE"]);
    }

    #[test]
    fn contains_breed_is_case_sensitive() {
        let table = sample_table();
        assert!(table.contains_breed("AKITA"));
        assert!(!table.contains_breed("akita"));
        assert!(!table.contains_breed("POODLE"));
        assert!(!table.contains_breed(""));
    }

    #[test]
    fn rows_for_breed_returns_every_row_of_that_breed() {
        let table = sample_table();
        let rows = table.rows_for_breed("BORDER COLLIE").unwrap();
        assert_eq!(rows.height(), 2);
        let rows = table.rows_for_breed("AKITA").unwrap();
        assert_eq!(rows.height(), 2);
    }

    #[test]
    fn rows_for_year_spans_all_breeds() {
        let table = sample_table();
        let rows = table.rows_for_year(2021).unwrap();
        assert_eq!(rows.height(), 3);
        let rows = table.rows_for_year(2023).unwrap();
        assert_eq!(rows.height(), 0);
    }
}
