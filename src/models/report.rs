use crate::models::identifiers::Month;
use std::fmt::{Display, Formatter};

/// One line of the monthly report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReport {
    pub month: Month,
    pub revenue: f64,
    pub active_truck_count: usize,
}

impl Display for MonthlyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.month, self.revenue, self.active_truck_count
        )
    }
}

/// Result of a full run: final figures plus the per-month report.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Cash at the end of the horizon, including the fleet's residual value.
    pub balance: f64,
    pub last_year_revenue: f64,
    pub active_trucks: usize,
    /// Liquidation value of the fleet at the last month, already part of `balance`.
    pub residual: f64,
    pub fleet_size: usize,
    pub reports: Vec<MonthlyReport>,
}

impl SimulationOutcome {
    /// Summary line: `balance, last_year_revenue, active_trucks`.
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {}",
            self.balance, self.last_year_revenue, self.active_trucks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_report_line_is_comma_space_separated() {
        let line = MonthlyReport {
            month: 13,
            revenue: 806.6666666666666,
            active_truck_count: 1,
        }
        .to_string();

        assert_eq!(line, "13, 806.6666666666666, 1");
    }

    #[test]
    fn whole_revenue_prints_without_fraction() {
        let line = MonthlyReport {
            month: 1,
            revenue: 1000.0,
            active_truck_count: 2,
        }
        .to_string();

        assert_eq!(line, "1, 1000, 2");
    }

    #[test]
    fn summary_joins_final_figures() {
        let outcome = SimulationOutcome {
            balance: 27415.0,
            last_year_revenue: 6317.5,
            active_trucks: 1,
            residual: 22000.0,
            fleet_size: 1,
            reports: vec![],
        };

        assert_eq!(outcome.summary(), "27415, 6317.5, 1");
    }
}
