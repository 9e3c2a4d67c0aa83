//! Points and tier threshold commands.

use crate::cli::{AddPointsArgs, SetPointsArgs, SetTierArgs};
use crate::error::Result;
use loyaltylift_domain::Points;
use loyaltylift_logic::commands::{AddPointsCommand, SetPointsCommand, SetTierCommand};

/// Build a set-points command. A missing cumulative total equals the balance.
pub fn build_set_points(args: SetPointsArgs) -> Result<SetPointsCommand> {
    let cumulative = args.cumulative.unwrap_or(args.points);
    let points = Points::new(args.points, cumulative)?;
    Ok(SetPointsCommand::new(args.index, points))
}

/// Build an add-points command.
pub fn build_add_points(args: AddPointsArgs) -> AddPointsCommand {
    AddPointsCommand::new(args.index, args.points)
}

/// Build a set-tier command; the threshold applies to cumulative points.
pub fn build_set_tier(args: SetTierArgs) -> Result<SetTierCommand> {
    let threshold = Points::uniform(args.points)?;
    Ok(SetTierCommand::new(args.tier.into(), threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TierArg;
    use crate::error::CliError;
    use loyaltylift_domain::{Index, Tier};

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_set_points_defaults_cumulative() {
        let args = SetPointsArgs {
            index: first(),
            points: 40,
            cumulative: None,
        };
        assert_eq!(
            build_set_points(args).unwrap(),
            SetPointsCommand::new(first(), Points::new(40, 40).unwrap())
        );
    }

    #[test]
    fn test_set_points_rejects_cumulative_below_balance() {
        let args = SetPointsArgs {
            index: first(),
            points: 40,
            cumulative: Some(10),
        };
        assert!(matches!(build_set_points(args), Err(CliError::Domain(_))));
    }

    #[test]
    fn test_set_points_rejects_negative() {
        let args = SetPointsArgs {
            index: first(),
            points: -1,
            cumulative: Some(10),
        };
        assert!(build_set_points(args).is_err());
    }

    #[test]
    fn test_set_tier() {
        let args = SetTierArgs {
            tier: TierArg::Silver,
            points: 1100,
        };
        assert_eq!(
            build_set_tier(args).unwrap(),
            SetTierCommand::new(Tier::Silver, Points::uniform(1100).unwrap())
        );
    }
}
