//! Set or adjust a customer's points.

use super::{displayed_customer, replace_and_show, Command};
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{Index, Model, Points};

/// Replaces the points of the customer at `index` wholesale.
///
/// The tier is re-derived from the new cumulative total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPointsCommand {
    index: Index,
    points: Points,
}

impl SetPointsCommand {
    pub fn new(index: Index, points: Points) -> Self {
        Self { index, points }
    }
}

impl Command for SetPointsCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (position, target) = displayed_customer(model, self.index)?;
        if self.points.cumulative() < target.points().cumulative() {
            tracing::warn!(
                name = target.name().as_str(),
                from = target.points().cumulative(),
                to = self.points.cumulative(),
                "Cumulative points lowered"
            );
        }

        let tier = model.tiers().tier_for(&self.points);
        let edited = target.with_points(self.points, tier);
        let feedback = format!("Set points for Customer: {}", edited);
        replace_and_show(model, position, edited)?;
        Ok(CommandResult::with_action(feedback, ListViewAction::ListAndShowCustomer))
    }
}

/// Adds `delta` points to the customer at `index`; a negative delta redeems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddPointsCommand {
    index: Index,
    delta: i64,
}

impl AddPointsCommand {
    pub fn new(index: Index, delta: i64) -> Self {
        Self { index, delta }
    }
}

impl Command for AddPointsCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (position, target) = displayed_customer(model, self.index)?;
        let points = target.points().add(self.delta)?;
        let tier = model.tiers().tier_for(&points);
        let edited = target.with_points(points, tier);

        let verb = if self.delta < 0 { "Deducted" } else { "Added" };
        let feedback = format!("{} {} points for Customer: {}", verb, self.delta.unsigned_abs(), edited);
        replace_and_show(model, position, edited)?;
        Ok(CommandResult::with_action(feedback, ListViewAction::ListAndShowCustomer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListKind;
    use crate::testutil::*;
    use loyaltylift_domain::{DomainError, Tier};

    fn points(balance: i64, cumulative: i64) -> Points {
        Points::new(balance, cumulative).unwrap()
    }

    #[test]
    fn test_set_points_rederives_tier() {
        let mut model = typical_model();
        let new_points = points(100, 5000);
        let edited = alice().with_points(new_points, Tier::Silver);
        let mut expected = typical_model();
        expected.set_customer(0, edited.clone()).unwrap();

        assert_command_success(
            &SetPointsCommand::new(first(), new_points),
            &mut model,
            &format!("Set points for Customer: {}", edited),
            &expected,
        );
    }

    #[test]
    fn test_set_points_replaces_instead_of_incrementing() {
        let mut model = typical_model();
        SetPointsCommand::new(second(), points(10, 20)).execute(&mut model).unwrap();

        let benson = &model.address_book().customers()[1];
        assert_eq!(benson.points(), points(10, 20));
        assert_eq!(benson.tier(), Tier::None);
    }

    #[test]
    fn test_set_points_uses_current_thresholds() {
        let mut model = typical_model();
        let tiers = model
            .tiers()
            .with_threshold(Tier::Bronze, Points::uniform(10).unwrap())
            .unwrap();
        model.set_tiers(tiers);

        SetPointsCommand::new(first(), points(0, 10)).execute(&mut model).unwrap();

        assert_eq!(model.address_book().customers()[0].tier(), Tier::Bronze);
    }

    #[test]
    fn test_set_points_filtered_list() {
        let mut model = typical_model();
        show_customer_at_index(&mut model, second());

        SetPointsCommand::new(first(), points(0, 12000)).execute(&mut model).unwrap();

        assert_eq!(model.address_book().customers()[1].tier(), Tier::Gold);
        assert_eq!(model.filtered_customer_count(), typical_customers().len());
    }

    #[test]
    fn test_set_points_out_of_range() {
        let mut model = typical_model();
        show_customer_at_index(&mut model, first());
        assert_command_failure(
            &SetPointsCommand::new(second(), points(1, 1)),
            &mut model,
            CommandError::IndexOutOfRange(ListKind::Customer),
        );
    }

    #[test]
    fn test_add_points_crosses_tier() {
        let mut model = typical_model();
        // George sits one point below bronze
        let george_index = Index::from_one_based(7).unwrap();

        AddPointsCommand::new(george_index, 1).execute(&mut model).unwrap();

        let george = &model.address_book().customers()[6];
        assert_eq!(george.points(), points(1, 1000));
        assert_eq!(george.tier(), Tier::Bronze);
    }

    #[test]
    fn test_redeem_keeps_tier() {
        let mut model = typical_model();
        let result = AddPointsCommand::new(second(), -50).execute(&mut model).unwrap();

        let benson = &model.address_book().customers()[1];
        assert_eq!(benson.points(), points(0, 1200));
        assert_eq!(benson.tier(), Tier::Bronze);
        assert!(result.feedback.starts_with("Deducted 50 points"));
    }

    #[test]
    fn test_redeem_below_zero_fails() {
        let mut model = typical_model();
        assert_command_failure(
            &AddPointsCommand::new(second(), -51),
            &mut model,
            CommandError::InvalidValue(DomainError::invalid("Points", Points::MESSAGE_INSUFFICIENT)),
        );
    }
}
