//! JQL operator vocabulary and the negation table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{JqlError, Result};

/// A JQL comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanEqualTo,
    LessThan,
    LessThanEqualTo,
    In,
    NotIn,
    Contains,
    DoesNotContain,
    Is,
    IsNot,
    Was,
    WasIn,
    WasNot,
    WasNotIn,
    Changed,
}

impl Operator {
    /// The literal JQL token for this operator.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::EqualTo => "=",
            Self::NotEqualTo => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqualTo => ">=",
            Self::LessThan => "<",
            Self::LessThanEqualTo => "<=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Contains => "~",
            Self::DoesNotContain => "!~",
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::Was => "was",
            Self::WasIn => "was in",
            Self::WasNot => "was not",
            Self::WasNotIn => "was not in",
            Self::Changed => "changed",
        }
    }

    /// The operator this one flips to under negation, if the pair is defined.
    ///
    /// The table is symmetric, so applying it twice is the identity.
    #[must_use]
    pub fn opposite(self) -> Option<Self> {
        match self {
            Self::EqualTo => Some(Self::NotEqualTo),
            Self::NotEqualTo => Some(Self::EqualTo),
            Self::Contains => Some(Self::DoesNotContain),
            Self::DoesNotContain => Some(Self::Contains),
            Self::In => Some(Self::NotIn),
            Self::NotIn => Some(Self::In),
            Self::GreaterThan => Some(Self::LessThan),
            Self::LessThan => Some(Self::GreaterThan),
            Self::GreaterThanEqualTo => Some(Self::LessThanEqualTo),
            Self::LessThanEqualTo => Some(Self::GreaterThanEqualTo),
            Self::Is
            | Self::IsNot
            | Self::Was
            | Self::WasIn
            | Self::WasNot
            | Self::WasNotIn
            | Self::Changed => None,
        }
    }

    /// Flip to the opposite operator.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidOperation`] for operators without an opposite.
    pub fn negate(self) -> Result<Self> {
        self.opposite().ok_or_else(|| {
            JqlError::invalid_operation(format!(
                "operator '{}' has no logical opposite and cannot be negated",
                self.token()
            ))
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Direction of one `order by` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Let Jira apply the field's natural order.
    #[default]
    Unspecified,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Suffix appended after the field token in an `order by` list.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Ascending => " asc",
            Self::Descending => " desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Operator; 17] = [
        Operator::EqualTo,
        Operator::NotEqualTo,
        Operator::GreaterThan,
        Operator::GreaterThanEqualTo,
        Operator::LessThan,
        Operator::LessThanEqualTo,
        Operator::In,
        Operator::NotIn,
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::Is,
        Operator::IsNot,
        Operator::Was,
        Operator::WasIn,
        Operator::WasNot,
        Operator::WasNotIn,
        Operator::Changed,
    ];

    #[test]
    fn tokens_are_literal_jql() {
        assert_eq!(Operator::In.token(), "in");
        assert_eq!(Operator::NotIn.token(), "not in");
        assert_eq!(Operator::Contains.token(), "~");
        assert_eq!(Operator::DoesNotContain.to_string(), "!~");
    }

    #[test]
    fn negation_table_pairs() {
        assert_eq!(Operator::EqualTo.negate().unwrap(), Operator::NotEqualTo);
        assert_eq!(Operator::In.negate().unwrap(), Operator::NotIn);
        assert_eq!(Operator::Contains.negate().unwrap(), Operator::DoesNotContain);
        assert_eq!(Operator::GreaterThan.negate().unwrap(), Operator::LessThan);
        assert_eq!(
            Operator::LessThanEqualTo.negate().unwrap(),
            Operator::GreaterThanEqualTo
        );
    }

    #[test]
    fn was_cannot_be_negated() {
        let err = Operator::Was.negate().unwrap_err();
        assert!(matches!(err, JqlError::InvalidOperation(_)));
        assert!(err.to_string().contains("was"));
    }

    #[test]
    fn sort_direction_suffixes() {
        assert_eq!(SortDirection::default(), SortDirection::Unspecified);
        assert_eq!(SortDirection::Unspecified.suffix(), "");
        assert_eq!(SortDirection::Ascending.suffix(), " asc");
        assert_eq!(SortDirection::Descending.suffix(), " desc");
    }

    proptest! {
        #[test]
        fn negation_is_an_involution(idx in 0usize..ALL.len()) {
            let op = ALL[idx];
            if let Some(opposite) = op.opposite() {
                prop_assert_ne!(opposite, op);
                prop_assert_eq!(opposite.negate().unwrap(), op);
            } else {
                prop_assert!(op.negate().is_err());
            }
        }
    }
}
