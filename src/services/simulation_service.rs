use crate::consts::MAX_FLEET_SIZE;
use crate::errors::ParameterError;
use crate::models::identifiers::Month;
use crate::models::parameters::{Parameters, Scenario};
use crate::models::report::{MonthlyReport, SimulationOutcome};
use crate::models::truck::Truck;
use crate::services::policies::traits::purchase_policy_trait::PurchasePolicy;
use crate::state::{Fleet, SimulationState};
use log::{debug, info};

/// Runs a scenario month by month and returns its final figures and monthly report.
///
/// The starting fleet holds `initial_trucks` new trucks bought at month 0 and
/// the balance starts at zero. Each month's revenue is reported, added to the
/// balance, and then `policy` decides how many trucks to buy. After the last
/// month the fleet's residual value is added to the balance.
///
/// # Arguments
/// * `scenario` - Validated horizon and parameters.
/// * `policy` - Purchase policy applied at the end of every month.
///
/// # Returns
/// * `Result<SimulationOutcome, ParameterError>` - Final balance, trailing-year revenue, active
///   trucks and the monthly report, or `ParameterError::FleetLimitExceeded` when the policy
///   would grow the fleet past `MAX_FLEET_SIZE`.
pub fn calculate(
    scenario: &Scenario,
    policy: &dyn PurchasePolicy,
) -> Result<SimulationOutcome, ParameterError> {
    let params = scenario.parameters();
    let months = scenario.months();
    info!(
        "simulating {months} months: {} initial trucks, weekly net revenue {}, truck cost {}",
        params.initial_trucks, params.weekly_net_revenue, params.cost_to_buy
    );

    let start = SimulationState::new(Fleet::with_initial_trucks(
        params.initial_trucks,
        params.cost_to_buy,
    ));
    let state = (1..=months).try_fold(start, |state, month| {
        simulate_month(state, month, params, policy)
    })?;

    let residual = state.fleet.total_residual(months);
    let fleet_cost = state.fleet.total_cost();
    let outcome = SimulationOutcome {
        balance: state.balance + residual,
        last_year_revenue: state
            .fleet
            .last_year_revenue(months, params.weekly_net_revenue),
        active_trucks: state.fleet.active_trucks(months),
        residual,
        fleet_size: state.fleet.len(),
        reports: state.reports,
    };
    info!(
        "finished: balance {} (residual {}), last year revenue {}, {} of {} trucks active, {} spent on trucks",
        outcome.balance,
        outcome.residual,
        outcome.last_year_revenue,
        outcome.active_trucks,
        outcome.fleet_size,
        fleet_cost
    );
    Ok(outcome)
}

/// Advances the state by one month: report, collect revenue, then buy trucks.
fn simulate_month(
    mut state: SimulationState,
    month: Month,
    params: &Parameters,
    policy: &dyn PurchasePolicy,
) -> Result<SimulationState, ParameterError> {
    let revenue = state.fleet.monthly_revenue(month, params.weekly_net_revenue);
    state.reports.push(MonthlyReport {
        month,
        revenue,
        active_truck_count: state.fleet.active_trucks(month),
    });
    state.balance += revenue;

    let bought = policy.trucks_to_buy(state.balance, params.cost_to_buy);
    let requested = (state.fleet.len() as u64).saturating_add(bought);
    if requested > MAX_FLEET_SIZE as u64 {
        return Err(ParameterError::FleetLimitExceeded {
            month,
            requested,
            limit: MAX_FLEET_SIZE,
        });
    }
    for _ in 0..bought {
        state.fleet.push(Truck::new(month, params.cost_to_buy));
        state.balance -= params.cost_to_buy;
    }
    if bought > 0 {
        debug!(
            "month {month}: bought {bought} truck(s), fleet size {}, balance {}",
            state.fleet.len(),
            state.balance
        );
    }
    Ok(state)
}
