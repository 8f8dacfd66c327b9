/// Planning horizon used when none is given: 10 years.
pub const DEFAULT_HORIZON_MONTHS: i64 = 120;

/// Net revenue a single truck earns per week before turnover costs.
pub const DEFAULT_WEEKLY_NET_REVENUE: f64 = 250.0;

/// Price of one new truck.
pub const TRUCK_COST: f64 = 32_000.0;

pub const MONTHS_PER_YEAR: i64 = 12;

/// Months are approximated as four weeks of revenue.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Base maintenance paid every year regardless of age.
pub const BASE_ANNUAL_MAINTENANCE: f64 = 1170.0;

/// A truck is in active service up to and including this age (7 years).
pub const ACTIVE_SERVICE_MONTHS: i64 = 7 * MONTHS_PER_YEAR;

/// Largest fleet a run may reach; purchases beyond it abort the run.
pub const MAX_FLEET_SIZE: usize = 1_000_000;

/// Number of months summed for the trailing revenue snapshot.
pub const TRAILING_REVENUE_MONTHS: i64 = 12;
