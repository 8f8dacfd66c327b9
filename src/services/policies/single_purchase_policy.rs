use crate::services::policies::traits::purchase_policy_trait::PurchasePolicy;

/// Buys at most one truck per month, even when the balance covers more.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePurchasePolicy;

impl PurchasePolicy for SinglePurchasePolicy {
    fn trucks_to_buy(&self, balance: f64, cost_to_buy: f64) -> u64 {
        u64::from(balance >= cost_to_buy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buys_nothing_below_cost() {
        assert_eq!(SinglePurchasePolicy.trucks_to_buy(31_999.99, 32_000.0), 0);
        assert_eq!(SinglePurchasePolicy.trucks_to_buy(-10.0, 32_000.0), 0);
    }

    #[test]
    fn buys_one_at_exact_cost() {
        assert_eq!(SinglePurchasePolicy.trucks_to_buy(32_000.0, 32_000.0), 1);
    }

    #[test]
    fn caps_at_one_when_several_are_affordable() {
        assert_eq!(SinglePurchasePolicy.trucks_to_buy(100_000.0, 32_000.0), 1);
    }
}
