use crate::errors::{AppErrors, AppResult};
use crate::models::csv_models::report_rows::{ReportRow, SummaryRow};
use crate::models::report::SimulationOutcome;
use csv::WriterBuilder;
use std::io::Write;

/// Writes the monthly report as `month, revenue, active` lines, then the summary line.
///
/// # Arguments
/// * `outcome` - The finished simulation.
/// * `out` - Destination for the report, usually stdout.
///
/// # Returns
/// * `AppResult<()>` - Returns `Ok(())` if successful, or `AppErrors::Io` if writing fails.
pub fn write_text<W: Write>(outcome: &SimulationOutcome, out: &mut W) -> AppResult<()> {
    for report in &outcome.reports {
        writeln!(out, "{report}").map_err(|e| AppErrors::Io(format!("write report: {e}")))?;
    }
    writeln!(out, "{}", outcome.summary())
        .map_err(|e| AppErrors::Io(format!("write summary: {e}")))?;
    out.flush()
        .map_err(|e| AppErrors::Io(format!("flush report: {e}")))
}

/// Writes the monthly report as a CSV table, a blank line, then a one-row summary table.
pub fn write_csv<W: Write>(outcome: &SimulationOutcome, out: &mut W) -> AppResult<()> {
    {
        let mut wtr = WriterBuilder::new().has_headers(true).from_writer(&mut *out);
        for report in &outcome.reports {
            wtr.serialize(ReportRow::from(report))
                .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
        }
        wtr.flush()
            .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    }

    writeln!(out).map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;

    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(&mut *out);
    wtr.serialize(SummaryRow::from(outcome))
        .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
    wtr.flush()
        .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::MonthlyReport;

    fn outcome() -> SimulationOutcome {
        SimulationOutcome {
            balance: 27415.5,
            last_year_revenue: 6317.25,
            active_trucks: 1,
            residual: 22000.0,
            fleet_size: 1,
            reports: vec![
                MonthlyReport {
                    month: 1,
                    revenue: 902.5,
                    active_truck_count: 1,
                },
                MonthlyReport {
                    month: 2,
                    revenue: 806.6666666666666,
                    active_truck_count: 2,
                },
            ],
        }
    }

    #[test]
    fn text_report_lists_months_then_summary() {
        // arrange
        let mut buf = Vec::new();

        // act
        write_text(&outcome(), &mut buf).unwrap();

        // assert
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "1, 902.5, 1\n2, 806.6666666666666, 2\n27415.5, 6317.25, 1\n"
        );
    }

    #[test]
    fn text_report_for_empty_run_prints_only_summary() {
        let mut buf = Vec::new();
        let empty = SimulationOutcome {
            reports: vec![],
            ..outcome()
        };

        write_text(&empty, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "27415.5, 6317.25, 1\n");
    }

    #[test]
    fn csv_report_has_monthly_and_summary_tables() {
        // arrange
        let mut buf = Vec::new();

        // act
        write_csv(&outcome(), &mut buf).unwrap();

        // assert
        let text = String::from_utf8(buf).unwrap();
        let mut sections = text.split("\n\n");
        let monthly: Vec<&str> = sections.next().unwrap().lines().collect();
        assert_eq!(
            monthly,
            vec![
                "month,revenue,active_trucks",
                "1,902.5,1",
                "2,806.6666666666666,2"
            ]
        );
        let summary: Vec<&str> = sections.next().unwrap().lines().collect();
        assert_eq!(
            summary,
            vec!["balance,last_year_revenue,active_trucks", "27415.5,6317.25,1"]
        );
        assert!(sections.next().is_none());
    }
}
