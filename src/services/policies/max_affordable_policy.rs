use crate::services::policies::traits::purchase_policy_trait::PurchasePolicy;

/// Buys as many trucks as the balance covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxAffordablePolicy;

impl PurchasePolicy for MaxAffordablePolicy {
    fn trucks_to_buy(&self, balance: f64, cost_to_buy: f64) -> u64 {
        if balance < cost_to_buy {
            return 0;
        }
        // saturates at u64::MAX; the simulation rejects counts past its fleet limit
        (balance / cost_to_buy).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buys_nothing_below_cost() {
        assert_eq!(MaxAffordablePolicy.trucks_to_buy(0.0, 32_000.0), 0);
        assert_eq!(MaxAffordablePolicy.trucks_to_buy(31_999.0, 32_000.0), 0);
    }

    #[test]
    fn buys_every_affordable_truck() {
        assert_eq!(MaxAffordablePolicy.trucks_to_buy(32_000.0, 32_000.0), 1);
        assert_eq!(MaxAffordablePolicy.trucks_to_buy(95_999.0, 32_000.0), 2);
        assert_eq!(MaxAffordablePolicy.trucks_to_buy(96_000.0, 32_000.0), 3);
    }
}
