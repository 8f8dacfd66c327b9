#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("Error in usage")]
    Usage,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    #[error("io: {0}")]
    Io(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("initial trucks must not be negative (got {0})")]
    NegativeInitialTrucks(i64),
    #[error("months must be positive (got {0})")]
    NonPositiveMonths(i64),
    #[error("weekly net revenue must be positive and finite (got {0})")]
    NonPositiveWeeklyRevenue(f64),
    #[error("cost to buy must be positive and finite (got {0})")]
    NonPositiveCostToBuy(f64),
    #[error("month {month}: fleet of {requested} trucks exceeds the limit of {limit}")]
    FleetLimitExceeded {
        month: i64,
        requested: u64,
        limit: usize,
    },
}

pub type AppResult<T> = Result<T, AppErrors>;
