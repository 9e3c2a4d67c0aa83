//! Points module - spendable balance and lifetime cumulative total

use crate::DomainError;
use std::cmp::Ordering;
use std::fmt;

/// Reward points held by a customer
///
/// `balance` is what the customer can currently spend; `cumulative` is the
/// lifetime total ever earned. Tier classification only ever looks at
/// `cumulative`. Values are immutable: every change builds a new `Points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Points {
    balance: i64,
    cumulative: i64,
}

impl Points {
    /// Constraints shown when a points value is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Points should be non-negative integers, and cumulative points cannot be lower than the current balance";

    /// Constraints shown when a deduction would overdraw the balance
    pub const MESSAGE_INSUFFICIENT: &'static str = "Points cannot be deducted below zero";

    /// Create a new points value
    ///
    /// # Examples
    ///
    /// ```
    /// use loyaltylift_domain::Points;
    ///
    /// let points = Points::new(50, 1200).unwrap();
    /// assert_eq!(points.balance(), 50);
    /// assert_eq!(points.cumulative(), 1200);
    /// assert!(Points::new(-1, 0).is_err());
    /// ```
    pub fn new(balance: i64, cumulative: i64) -> Result<Self, DomainError> {
        if !Self::is_valid(balance) || !Self::is_valid(cumulative) || cumulative < balance {
            return Err(DomainError::invalid("Points", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self {
            balance,
            cumulative,
        })
    }

    /// A points value whose balance and cumulative total are both `value`
    ///
    /// Tier thresholds are built this way.
    pub fn uniform(value: i64) -> Result<Self, DomainError> {
        Self::new(value, value)
    }

    /// Returns true if `value` can be used as a balance or cumulative total
    pub fn is_valid(value: i64) -> bool {
        value >= 0
    }

    /// Current spendable balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Lifetime cumulative total
    pub fn cumulative(&self) -> i64 {
        self.cumulative
    }

    /// Compare two values by cumulative total only
    pub fn cmp_cumulative(&self, other: &Points) -> Ordering {
        self.cumulative.cmp(&other.cumulative)
    }

    /// Returns true if the cumulative total reaches `threshold`'s cumulative total
    pub fn is_cumulative_at_least(&self, threshold: &Points) -> bool {
        self.cumulative >= threshold.cumulative
    }

    /// Apply an earn (positive) or redeem (negative) delta
    ///
    /// Earning raises both balance and cumulative total. Redeeming only
    /// lowers the balance, and fails if the balance would drop below zero.
    pub fn add(&self, delta: i64) -> Result<Self, DomainError> {
        if delta >= 0 {
            let balance = self.balance.checked_add(delta);
            let cumulative = self.cumulative.checked_add(delta);
            match (balance, cumulative) {
                (Some(balance), Some(cumulative)) => Self::new(balance, cumulative),
                _ => Err(DomainError::invalid("Points", Self::MESSAGE_CONSTRAINTS)),
            }
        } else {
            let balance = self.balance + delta;
            if balance < 0 {
                return Err(DomainError::invalid("Points", Self::MESSAGE_INSUFFICIENT));
            }
            Self::new(balance, self.cumulative)
        }
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cumulative {})", self.balance, self.cumulative)
    }
}
