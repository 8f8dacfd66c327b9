use crate::models::identifiers::Month;

/// A truck in the fleet. Never changed after it has been bought.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Truck {
    /// Month the truck joined the fleet; 0 for the starting fleet.
    pub purchase_month: Month,
    /// Age in months the truck already had when it was bought.
    pub age_at_purchase: Month,
    pub cost_to_buy: f64,
}

impl Truck {
    /// A new truck bought in `purchase_month`.
    pub fn new(purchase_month: Month, cost_to_buy: f64) -> Self {
        Self::used(purchase_month, 0, cost_to_buy)
    }

    pub fn used(purchase_month: Month, age_at_purchase: Month, cost_to_buy: f64) -> Self {
        Self {
            purchase_month,
            age_at_purchase,
            cost_to_buy,
        }
    }

    /// Age in months at `month`. Negative for months before the purchase.
    #[inline]
    pub fn age(&self, month: Month) -> Month {
        (month - self.purchase_month) + self.age_at_purchase
    }
}
