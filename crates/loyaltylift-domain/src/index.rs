//! Positions into displayed lists

use crate::DomainError;
use std::fmt;

/// A position in a displayed list.
///
/// Users see 1-based positions; the model works with 0-based ones. An `Index`
/// can be built from either and converted to either, so the off-by-one lives
/// in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Create an index from a 1-based position
    ///
    /// # Examples
    ///
    /// ```
    /// use loyaltylift_domain::Index;
    ///
    /// let index = Index::from_one_based(3).unwrap();
    /// assert_eq!(index.zero_based(), 2);
    /// assert!(Index::from_one_based(0).is_err());
    /// ```
    pub fn from_one_based(position: usize) -> Result<Self, DomainError> {
        if position == 0 {
            return Err(DomainError::InvalidIndex);
        }
        Ok(Self(position - 1))
    }

    /// Create an index from a 0-based position
    pub fn from_zero_based(position: usize) -> Self {
        Self(position)
    }

    /// The 0-based position
    pub fn zero_based(&self) -> usize {
        self.0
    }

    /// The 1-based position
    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl std::str::FromStr for Index {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position: usize = s.trim().parse().map_err(|_| DomainError::InvalidIndex)?;
        Self::from_one_based(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_and_zero_based_agree() {
        let index = Index::from_one_based(1).unwrap();
        assert_eq!(index, Index::from_zero_based(0));
        assert_eq!(index.one_based(), 1);
        assert_eq!(index.to_string(), "1");
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage() {
        assert_eq!("0".parse::<Index>(), Err(DomainError::InvalidIndex));
        assert_eq!("-1".parse::<Index>(), Err(DomainError::InvalidIndex));
        assert_eq!("abc".parse::<Index>(), Err(DomainError::InvalidIndex));
        assert_eq!(" 4 ".parse::<Index>().unwrap().zero_based(), 3);
    }
}
