//! Per-truck lookups keyed by year of life.
//!
//! Every schedule is indexed by `age / 12` (floor). Years outside a schedule,
//! including negative years for ages before a purchase, yield 0.

use crate::consts::{BASE_ANNUAL_MAINTENANCE, MONTHS_PER_YEAR, WEEKS_PER_MONTH};
use crate::models::identifiers::Month;

/// One-off repair cost charged across each year of life, years 0..=7.
const REPAIR_SCHEDULE: [f64; 8] = [0.0, 150.0, 1200.0, 2400.0, 1000.0, 1500.0, 2500.0, 3500.0];

/// Annual driver turnover cost, years 0..=7.
const TURNOVER_SCHEDULE: [f64; 8] = [0.0, 1000.0, 500.0, 1000.0, 1250.0, 1500.0, 2000.0, 3000.0];

/// Resale value if sold during the given year, years 0..=6.
const RESIDUAL_SCHEDULE: [f64; 7] = [22000.0, 20000.0, 13000.0, 9000.0, 3000.0, 1500.0, 500.0];

const MONTHS_PER_YEAR_F: f64 = MONTHS_PER_YEAR as f64;

#[inline]
pub fn year_of_life(age_in_months: Month) -> Month {
    age_in_months.div_euclid(MONTHS_PER_YEAR)
}

fn schedule_value(schedule: &[f64], age_in_months: Month) -> Option<f64> {
    usize::try_from(year_of_life(age_in_months))
        .ok()
        .and_then(|year| schedule.get(year).copied())
}

/// Monthly maintenance: base annual maintenance plus that year's repairs, spread over 12 months.
pub fn maintenance(age_in_months: Month) -> f64 {
    schedule_value(&REPAIR_SCHEDULE, age_in_months)
        .map_or(0.0, |repairs| (repairs + BASE_ANNUAL_MAINTENANCE) / MONTHS_PER_YEAR_F)
}

/// Monthly income: four weeks of net revenue less the monthly share of turnover cost.
pub fn income(age_in_months: Month, weekly_net_revenue: f64) -> f64 {
    schedule_value(&TURNOVER_SCHEDULE, age_in_months).map_or(0.0, |turnover| {
        weekly_net_revenue * WEEKS_PER_MONTH - turnover / MONTHS_PER_YEAR_F
    })
}

/// Resale value if the truck were sold at this age.
pub fn residual(age_in_months: Month) -> f64 {
    schedule_value(&RESIDUAL_SCHEDULE, age_in_months).unwrap_or(0.0)
}
