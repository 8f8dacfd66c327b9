/// Decides how many trucks the fleet buys in a month.
/// Implementors only look at the cash available; the simulation loop
/// appends the trucks and pays for them.
pub trait PurchasePolicy {
    /// Returns the number of trucks to buy with `balance`.
    ///
    /// # Arguments
    /// * `balance` - Cash available after this month's revenue was added.
    /// * `cost_to_buy` - Price of one truck, always positive.
    fn trucks_to_buy(&self, balance: f64, cost_to_buy: f64) -> u64;
}
