use crate::consts::{ACTIVE_SERVICE_MONTHS, TRAILING_REVENUE_MONTHS};
use crate::models::depreciation::{income, maintenance, residual};
use crate::models::identifiers::Month;
use crate::models::report::MonthlyReport;
use crate::models::truck::Truck;

/// The trucks owned during one simulation run.
/// Append-only: trucks are never removed, retired trucks simply stop earning.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates a fleet of `count` new trucks present from month 0.
    pub fn with_initial_trucks(count: usize, cost_to_buy: f64) -> Self {
        Self {
            trucks: vec![Truck::new(0, cost_to_buy); count],
        }
    }

    pub fn push(&mut self, truck: Truck) {
        self.trucks.push(truck);
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter()
    }

    /// Acquisition cost of every truck in the fleet, starting trucks included.
    pub fn total_cost(&self) -> f64 {
        self.trucks
            .iter()
            .fold(0.0, |total, truck| total + truck.cost_to_buy)
    }

    /// Liquidation value of the whole fleet at `month`.
    pub fn total_residual(&self, month: Month) -> f64 {
        self.trucks
            .iter()
            .fold(0.0, |total, truck| total + residual(truck.age(month)))
    }

    /// Net operating cash flow of the whole fleet for `month`: income less maintenance.
    pub fn monthly_revenue(&self, month: Month, weekly_net_revenue: f64) -> f64 {
        self.trucks.iter().fold(0.0, |total, truck| {
            let age = truck.age(month);
            total + (income(age, weekly_net_revenue) - maintenance(age))
        })
    }

    /// Number of trucks still in service (age up to 84 months) at `month`.
    pub fn active_trucks(&self, month: Month) -> usize {
        self.trucks
            .iter()
            .filter(|truck| truck.age(month) <= ACTIVE_SERVICE_MONTHS)
            .count()
    }

    /// Revenue of the 12 months ending at `month`, summed from `month` backwards.
    pub fn last_year_revenue(&self, month: Month, weekly_net_revenue: f64) -> f64 {
        ((month - TRAILING_REVENUE_MONTHS + 1)..=month)
            .rev()
            .fold(0.0, |total, m| {
                total + self.monthly_revenue(m, weekly_net_revenue)
            })
    }
}

/// Running state threaded through the monthly fold.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub fleet: Fleet,
    /// Cash accumulated and not yet spent on trucks.
    pub balance: f64,
    pub reports: Vec<MonthlyReport>,
}

impl SimulationState {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            balance: 0.0,
            reports: Vec::new(),
        }
    }
}
