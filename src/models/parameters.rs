use crate::consts::{DEFAULT_HORIZON_MONTHS, DEFAULT_WEEKLY_NET_REVENUE, MAX_FLEET_SIZE, TRUCK_COST};
use crate::errors::ParameterError;
use crate::models::identifiers::Month;

/// Inputs of one simulation run. Not changed once the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub weekly_net_revenue: f64,
    pub cost_to_buy: f64,
    pub initial_trucks: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            weekly_net_revenue: DEFAULT_WEEKLY_NET_REVENUE,
            cost_to_buy: TRUCK_COST,
            initial_trucks: 1,
        }
    }
}

impl Parameters {
    /// Builds parameters from a signed truck count, rejecting negative counts.
    pub fn new(
        weekly_net_revenue: f64,
        cost_to_buy: f64,
        initial_trucks: i64,
    ) -> Result<Self, ParameterError> {
        let initial_trucks = usize::try_from(initial_trucks)
            .map_err(|_| ParameterError::NegativeInitialTrucks(initial_trucks))?;
        let params = Self {
            weekly_net_revenue,
            cost_to_buy,
            initial_trucks,
        };
        params.validate()?;
        Ok(params)
    }

    /// Zero trucks is allowed; money amounts must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.initial_trucks > MAX_FLEET_SIZE {
            return Err(ParameterError::FleetLimitExceeded {
                month: 0,
                requested: self.initial_trucks as u64,
                limit: MAX_FLEET_SIZE,
            });
        }
        if !self.weekly_net_revenue.is_finite() || self.weekly_net_revenue <= 0.0 {
            return Err(ParameterError::NonPositiveWeeklyRevenue(
                self.weekly_net_revenue,
            ));
        }
        if !self.cost_to_buy.is_finite() || self.cost_to_buy <= 0.0 {
            return Err(ParameterError::NonPositiveCostToBuy(self.cost_to_buy));
        }
        Ok(())
    }
}

/// A validated horizon and parameter set, ready to be simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    months: Month,
    parameters: Parameters,
}

impl Scenario {
    pub fn new(months: Month, parameters: Parameters) -> Result<Self, ParameterError> {
        if months <= 0 {
            return Err(ParameterError::NonPositiveMonths(months));
        }
        parameters.validate()?;
        Ok(Self { months, parameters })
    }

    #[inline]
    pub fn months(&self) -> Month {
        self.months
    }

    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            months: DEFAULT_HORIZON_MONTHS,
            parameters: Parameters::default(),
        }
    }
}
