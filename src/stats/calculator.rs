//! Statistics Calculator Module
//! Descriptive registration statistics for a single validated breed.

use polars::prelude::*;
use statrs::statistics::Statistics;
use thiserror::Error;

use crate::data::{RegistrationTable, COL_MONTH, COL_TOTAL, COL_YEAR};

/// Registry years every report covers, in print order.
pub const REPORT_YEARS: [i32; 3] = [2021, 2022, 2023];

/// Three-letter month codes in calendar order.
const CALENDAR_MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One breed's share of all registrations in a single year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearShare {
    pub year: i32,
    pub percentage: f64,
}

/// Computed statistics for a single breed.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedReport {
    pub breed: String,
    /// Distinct years the breed appears in, ascending.
    pub years: Vec<i32>,
    /// Registrations summed over every year and month.
    pub total_registrations: i64,
    /// One entry per year in [`REPORT_YEARS`], in that order.
    pub yearly_shares: Vec<YearShare>,
    /// Share of all registrations across the report years.
    pub overall_share: f64,
    /// Months whose summed registrations reach the per-month mean,
    /// in calendar order.
    pub popular_months: Vec<String>,
}

/// Handles the descriptive statistics for a validated breed.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute the full report for `breed`, which must already be validated
    /// against `table`. Pure with respect to its inputs.
    pub fn breed_report(
        table: &RegistrationTable,
        breed: &str,
    ) -> Result<BreedReport, StatsError> {
        let breed_df = table.rows_for_breed(breed)?;

        let years = Self::years_present(&breed_df)?;
        let total_registrations = Self::sum_totals(&breed_df)?;

        let mut yearly_shares = Vec::with_capacity(REPORT_YEARS.len());
        let mut all_breeds_total = 0i64;
        let mut breed_report_years_total = 0i64;
        for year in REPORT_YEARS {
            let year_total = Self::sum_totals(&table.rows_for_year(year)?)?;
            let breed_year_total = Self::sum_totals_for_year(&breed_df, year)?;
            all_breeds_total += year_total;
            breed_report_years_total += breed_year_total;
            yearly_shares.push(YearShare {
                year,
                percentage: Self::share_percentage(breed_year_total, year_total),
            });
        }

        // Numerator restricted to the report years; equal to the all-time
        // total whenever the dataset holds no other years.
        let overall_share = Self::share_percentage(breed_report_years_total, all_breeds_total);

        let popular_months = Self::popular_months(&breed_df)?;

        Ok(BreedReport {
            breed: breed.to_string(),
            years,
            total_registrations,
            yearly_shares,
            overall_share,
            popular_months,
        })
    }

    /// Distinct years with at least one row, ascending.
    fn years_present(breed_df: &DataFrame) -> Result<Vec<i32>, StatsError> {
        let mut years: Vec<i32> = breed_df
            .column(COL_YEAR)?
            .i32()?
            .into_iter()
            .flatten()
            .collect();
        years.sort_unstable();
        years.dedup();
        Ok(years)
    }

    fn sum_totals(df: &DataFrame) -> Result<i64, StatsError> {
        Ok(df.column(COL_TOTAL)?.i64()?.sum().unwrap_or(0))
    }

    fn sum_totals_for_year(df: &DataFrame, year: i32) -> Result<i64, StatsError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col(COL_YEAR).eq(lit(year)))
            .collect()?;
        Self::sum_totals(&filtered)
    }

    /// Percentage share rounded to six decimals. A zero denominator (a year
    /// with no registrations at all) reports 0.0 instead of faulting.
    fn share_percentage(part: i64, whole: i64) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        Self::round6(part as f64 / whole as f64 * 100.0)
    }

    fn round6(value: f64) -> f64 {
        (value * 1_000_000.0).round() / 1_000_000.0
    }

    /// Months whose summed registrations reach the per-month mean.
    ///
    /// The threshold is inclusive: every month at or above the mean is
    /// selected, so an all-equal breed selects every month it appears in.
    fn popular_months(breed_df: &DataFrame) -> Result<Vec<String>, StatsError> {
        let grouped = breed_df
            .clone()
            .lazy()
            .group_by([col(COL_MONTH)])
            .agg([col(COL_TOTAL).sum()])
            .collect()?;

        let month_ca = grouped.column(COL_MONTH)?.str()?;
        let total_ca = grouped.column(COL_TOTAL)?.i64()?;

        let month_totals: Vec<(String, i64)> = month_ca
            .into_iter()
            .zip(total_ca)
            .filter_map(|(month, total)| Some((month?.to_string(), total.unwrap_or(0))))
            .collect();
        if month_totals.is_empty() {
            return Ok(Vec::new());
        }

        let mean = month_totals.iter().map(|(_, total)| *total as f64).mean();

        let mut selected: Vec<String> = month_totals
            .into_iter()
            .filter(|(_, total)| *total as f64 >= mean)
            .map(|(month, _)| month)
            .collect();
        selected.sort_by_key(|month| Self::month_rank(month));
        Ok(selected)
    }

    /// Calendar rank for three-letter month codes; anything else orders
    /// after the known months, alphabetically.
    fn month_rank(month: &str) -> (usize, String) {
        match CALENDAR_MONTHS
            .iter()
            .position(|m| month.eq_ignore_ascii_case(m))
        {
            Some(pos) => (pos, String::new()),
            None => (CALENDAR_MONTHS.len(), month.to_ascii_uppercase()),
        }
    }
}
