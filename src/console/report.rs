//! Report Renderer Module
//! Formats a computed breed report into its console lines.

use crate::stats::BreedReport;

/// Render the report as its console lines, in print order: years present,
/// all-time total, one share line per report year, the overall share, and
/// the most popular months.
pub fn render_report(report: &BreedReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.yearly_shares.len() + 4);

    let years = report
        .years
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "The {} was found in the top breeds for years: {}.",
        report.breed, years
    ));

    lines.push(format!(
        "There have been {} {} dogs registered total.",
        report.total_registrations, report.breed
    ));

    for share in &report.yearly_shares {
        lines.push(format!(
            "The {} was {}% of top breeds in {}.",
            report.breed,
            format_percentage(share.percentage),
            share.year
        ));
    }

    lines.push(format!(
        "The {} was {}% of top breeds across all years.",
        report.breed,
        format_percentage(report.overall_share)
    ));

    lines.push(format!(
        "Most popular month(s) for {} dogs: {}",
        report.breed,
        report.popular_months.join(", ")
    ));

    lines
}

/// Print the report to stdout.
pub fn print_report(report: &BreedReport) {
    for line in render_report(report) {
        println!("{line}");
    }
}

/// Six decimals at most, trailing zeros trimmed, at least one digit kept
/// after the point (`0.0`, `12.5`, `81.818182`).
fn format_percentage(value: f64) -> String {
    let mut text = format!("{value:.6}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::YearShare;

    fn labrador_report() -> BreedReport {
        BreedReport {
            breed: "LABRADOR RETRIEVER".to_string(),
            years: vec![2022, 2023],
            total_registrations: 150,
            yearly_shares: vec![
                YearShare { year: 2021, percentage: 0.0 },
                YearShare { year: 2022, percentage: 81.818182 },
                YearShare { year: 2023, percentage: 66.666667 },
            ],
            overall_share: 60.0,
            popular_months: vec!["FEB".to_string(), "MAR".to_string()],
        }
    }

    #[test]
    fn lines_follow_the_report_order() {
        let lines = render_report(&labrador_report());
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            "The LABRADOR RETRIEVER was found in the top breeds for years: 2022, 2023."
        );
        assert_eq!(
            lines[1],
            "There have been 150 LABRADOR RETRIEVER dogs registered total."
        );
        assert_eq!(
            lines[2],
            "The LABRADOR RETRIEVER was 0.0% of top breeds in 2021."
        );
        assert_eq!(
            lines[3],
            "The LABRADOR RETRIEVER was 81.818182% of top breeds in 2022."
        );
        assert_eq!(
            lines[5],
            "The LABRADOR RETRIEVER was 60.0% of top breeds across all years."
        );
        assert_eq!(
            lines[6],
            "Most popular month(s) for LABRADOR RETRIEVER dogs: FEB, MAR"
        );
    }

    #[test]
    fn zero_share_renders_as_zero_point_zero() {
        assert_eq!(format_percentage(0.0), "0.0");
    }

    #[test]
    fn whole_percentages_keep_one_decimal() {
        assert_eq!(format_percentage(60.0), "60.0");
        assert_eq!(format_percentage(100.0), "100.0");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_percentage(12.5), "12.5");
        assert_eq!(format_percentage(0.05), "0.05");
        assert_eq!(format_percentage(13.69592), "13.69592");
    }

    #[test]
    fn six_decimals_are_preserved() {
        assert_eq!(format_percentage(81.818182), "81.818182");
    }
}
