//! Stats module - breed statistics computation

mod calculator;

pub use calculator::{BreedReport, StatsCalculator, StatsError, YearShare, REPORT_YEARS};
