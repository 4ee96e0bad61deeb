//! Valuation algorithms over the dependency graph.
pub mod costs;
pub mod ledger;
pub mod reachability;

pub use costs::{CostModel, CostValuation};
pub use ledger::Ledger;
