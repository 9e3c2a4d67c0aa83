//! Redefine a tier threshold and re-classify every customer.

use super::Command;
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{CustomerFilter, Model, Points, Tier};

/// Gives `tier` a new minimum cumulative threshold.
///
/// The candidate table is validated and every customer's new tier computed
/// before anything is written. Either the threshold and all affected
/// customers change together, or nothing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTierCommand {
    tier: Tier,
    points: Points,
}

impl SetTierCommand {
    pub fn new(tier: Tier, points: Points) -> Self {
        Self { tier, points }
    }
}

impl Command for SetTierCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.tiers().is_valid_threshold_for(self.tier, &self.points) {
            return Err(CommandError::InvalidTierThreshold);
        }
        let tiers = model.tiers().with_threshold(self.tier, self.points)?;
        let plan = model.reclassification_for(&tiers);
        let reclassified = plan.len();

        model.set_customers(plan)?;
        model.set_tiers(tiers);
        model.update_filtered_customer_list(CustomerFilter::All);

        tracing::info!(
            tier = self.tier.as_str(),
            threshold = self.points.cumulative(),
            reclassified,
            "Tier threshold updated"
        );
        Ok(CommandResult::with_action(
            format!("Set point threshold for Tier: {}", self.tier),
            ListViewAction::ListCustomers,
        ))
    }
}
