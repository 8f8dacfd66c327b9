pub mod purchase_policy_trait;
