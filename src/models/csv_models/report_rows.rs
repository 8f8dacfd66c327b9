use crate::models::identifiers::Month;
use crate::models::report::{MonthlyReport, SimulationOutcome};
use serde::Serialize;

/// Monthly row as written to CSV output
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub month: Month,
    pub revenue: f64,
    pub active_trucks: usize,
}

impl From<&MonthlyReport> for ReportRow {
    fn from(report: &MonthlyReport) -> Self {
        Self {
            month: report.month,
            revenue: report.revenue,
            active_trucks: report.active_truck_count,
        }
    }
}

/// Final figures as written to CSV output
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub balance: f64,
    pub last_year_revenue: f64,
    pub active_trucks: usize,
}

impl From<&SimulationOutcome> for SummaryRow {
    fn from(outcome: &SimulationOutcome) -> Self {
        Self {
            balance: outcome.balance,
            last_year_revenue: outcome.last_year_revenue,
            active_trucks: outcome.active_trucks,
        }
    }
}
