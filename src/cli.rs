use crate::consts::{DEFAULT_HORIZON_MONTHS, DEFAULT_WEEKLY_NET_REVENUE, TRUCK_COST};
use crate::errors::{AppErrors, AppResult};
use crate::models::parameters::{Parameters, Scenario};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of trucks owned at the start of the plan
    #[arg(allow_negative_numbers = true)]
    pub initial_trucks: Option<String>,

    /// Planning horizon in months
    #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS, allow_negative_numbers = true)]
    pub months: i64,

    /// Net revenue per truck per week
    #[arg(long, default_value_t = DEFAULT_WEEKLY_NET_REVENUE, allow_negative_numbers = true)]
    pub weekly_net_revenue: f64,

    /// Price of one new truck
    #[arg(long, default_value_t = TRUCK_COST, allow_negative_numbers = true)]
    pub cost_to_buy: f64,

    /// How many trucks to buy in a month the balance allows it
    #[arg(long, value_enum, default_value_t = PolicyKind::Single)]
    pub policy: PolicyKind,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// At most one truck per month
    Single,
    /// Every truck the balance covers
    MaxAffordable,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
}

impl Cli {
    /// Validates the arguments into a scenario.
    ///
    /// # Returns
    /// * `AppResult<Scenario>` - `AppErrors::Usage` when the truck count is missing,
    ///   `AppErrors::InvalidInput` when it is not an integer, and
    ///   `AppErrors::InvalidParameter` for out-of-range values.
    pub fn scenario(&self) -> AppResult<Scenario> {
        let raw = self.initial_trucks.as_deref().ok_or(AppErrors::Usage)?;
        let initial_trucks: i64 = raw.trim().parse().map_err(|_| {
            AppErrors::InvalidInput(format!("initial trucks must be an integer, got {raw:?}"))
        })?;
        let params = Parameters::new(self.weekly_net_revenue, self.cost_to_buy, initial_trucks)?;
        Ok(Scenario::new(self.months, params)?)
    }
}
