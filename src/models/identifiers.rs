/// Represents a simulated month.
/// Month 0 is the start of the run; simulated months are 1-based.
/// Signed so that ages before a purchase can be expressed.
pub type Month = i64;
