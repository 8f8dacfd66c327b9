use crate::cli::PolicyKind;
use crate::services::policies::max_affordable_policy::MaxAffordablePolicy;
use crate::services::policies::single_purchase_policy::SinglePurchasePolicy;
use crate::services::policies::traits::purchase_policy_trait::PurchasePolicy;

pub mod max_affordable_policy;
pub mod single_purchase_policy;
pub mod traits;

/// Maps the command-line policy choice to its implementation.
pub fn policy_for(kind: PolicyKind) -> Box<dyn PurchasePolicy> {
    match kind {
        PolicyKind::Single => Box::new(SinglePurchasePolicy),
        PolicyKind::MaxAffordable => Box::new(MaxAffordablePolicy),
    }
}
