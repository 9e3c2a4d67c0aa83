//! Tier module - loyalty levels and their point thresholds

use crate::{DomainError, Points};
use std::fmt;

/// Loyalty tier of a customer
///
/// Customers are classified by their cumulative points:
/// - None: Below the bronze threshold
/// - Bronze: Entry reward level
/// - Silver: Mid reward level
/// - Gold: Top reward level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    /// No tier reached yet
    #[default]
    None,

    /// Bronze tier
    Bronze,

    /// Silver tier
    Silver,

    /// Gold tier
    Gold,
}

impl Tier {
    /// All tiers from lowest to highest
    pub const ALL: [Tier; 4] = [Tier::None, Tier::Bronze, Tier::Silver, Tier::Gold];

    /// Get the tier name as stored in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::None => "NONE",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
        }
    }

    /// Parse the stored form (`NONE`, `BRONZE`, `SILVER` or `GOLD`) exactly
    pub fn from_stored(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| DomainError::InvalidTierName(s.to_string()))
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The point threshold of every tier
///
/// There is exactly one threshold per tier, and after every successful edit
/// `NONE < BRONZE < SILVER < GOLD` holds strictly by cumulative value.
/// Editing a threshold retroactively changes which customers belong to a tier;
/// re-classifying them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    thresholds: [Points; 4],
}

impl TierTable {
    /// Starting threshold for no tier
    pub const NONE_THRESHOLD: i64 = 0;
    /// Starting threshold for bronze
    pub const BRONZE_THRESHOLD: i64 = 1000;
    /// Starting threshold for silver
    pub const SILVER_THRESHOLD: i64 = 5000;
    /// Starting threshold for gold
    pub const GOLD_THRESHOLD: i64 = 10000;

    /// Create a table from explicit bronze, silver and gold thresholds
    ///
    /// The no-tier threshold is always zero. Fails with
    /// [`DomainError::InvalidTierThreshold`] unless the thresholds are strictly
    /// increasing.
    pub fn new(bronze: Points, silver: Points, gold: Points) -> Result<Self, DomainError> {
        let none = Points::uniform(Self::NONE_THRESHOLD)?;
        let thresholds = [none, bronze, silver, gold];
        let ordered = thresholds
            .windows(2)
            .all(|pair| pair[0].cmp_cumulative(&pair[1]).is_lt());
        if !ordered {
            return Err(DomainError::InvalidTierThreshold);
        }
        Ok(Self { thresholds })
    }

    /// Current threshold of `tier`
    pub fn threshold(&self, tier: Tier) -> Points {
        self.thresholds[tier.slot()]
    }

    /// Resolve the highest tier whose threshold `points` reaches
    ///
    /// Checks run from gold downwards and the first match wins; anything below
    /// bronze is [`Tier::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use loyaltylift_domain::{Points, Tier, TierTable};
    ///
    /// let table = TierTable::default();
    /// let points = Points::new(50, 1200).unwrap();
    /// assert_eq!(table.tier_for(&points), Tier::Bronze);
    /// ```
    pub fn tier_for(&self, points: &Points) -> Tier {
        for tier in [Tier::Gold, Tier::Silver, Tier::Bronze] {
            if points.is_cumulative_at_least(&self.threshold(tier)) {
                return tier;
            }
        }
        Tier::None
    }

    /// Returns true if giving `tier` the threshold `points` keeps the ordering
    ///
    /// Every other tier's threshold is treated as fixed. The no-tier
    /// threshold only accepts zero.
    pub fn is_valid_threshold_for(&self, tier: Tier, points: &Points) -> bool {
        if tier == Tier::None {
            return points.cumulative() == Self::NONE_THRESHOLD;
        }
        Tier::ALL
            .iter()
            .filter(|other| **other != tier)
            .all(|other| {
                let ordering = points.cmp_cumulative(&self.threshold(*other));
                if *other < tier {
                    ordering.is_gt()
                } else {
                    ordering.is_lt()
                }
            })
    }

    /// Replace the threshold of `tier`
    ///
    /// Nothing changes if the new threshold would break the ordering.
    pub fn set_threshold(&mut self, tier: Tier, points: Points) -> Result<(), DomainError> {
        if !self.is_valid_threshold_for(tier, &points) {
            return Err(DomainError::InvalidTierThreshold);
        }
        self.thresholds[tier.slot()] = points;
        Ok(())
    }

    /// A copy of this table with `tier` given a new threshold
    pub fn with_threshold(&self, tier: Tier, points: Points) -> Result<Self, DomainError> {
        let mut table = self.clone();
        table.set_threshold(tier, points)?;
        Ok(table)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        let uniform = |value: i64| Points::new(value, value).unwrap_or_default();
        Self {
            thresholds: [
                uniform(Self::NONE_THRESHOLD),
                uniform(Self::BRONZE_THRESHOLD),
                uniform(Self::SILVER_THRESHOLD),
                uniform(Self::GOLD_THRESHOLD),
            ],
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the resolved tier is the highest one whose threshold is reached
        #[test]
        fn test_tier_for_picks_highest_reached(
            bronze in 1i64..1_000,
            silver_gap in 1i64..1_000,
            gold_gap in 1i64..1_000,
            cumulative in 0i64..4_000,
        ) {
            let silver = bronze + silver_gap;
            let gold = silver + gold_gap;
            let table = TierTable::new(
                Points::uniform(bronze).unwrap(),
                Points::uniform(silver).unwrap(),
                Points::uniform(gold).unwrap(),
            ).unwrap();

            let points = Points::new(0, cumulative).unwrap();
            let expected = Tier::ALL
                .iter()
                .rev()
                .copied()
                .find(|tier| table.threshold(*tier).cumulative() <= cumulative)
                .unwrap_or(Tier::None);

            prop_assert_eq!(table.tier_for(&points), expected);
        }

        /// Property: an accepted threshold edit keeps the table strictly ordered
        #[test]
        fn test_accepted_edit_keeps_ordering(slot in 0usize..4, cumulative in 0i64..12_000) {
            let mut table = TierTable::default();
            let tier = Tier::ALL[slot];
            let points = Points::uniform(cumulative).unwrap();

            if table.set_threshold(tier, points).is_ok() {
                for pair in Tier::ALL.windows(2) {
                    prop_assert!(table.threshold(pair[0]).cumulative() < table.threshold(pair[1]).cumulative());
                }
            }
        }
    }
}
