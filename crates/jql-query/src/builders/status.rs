//! Predicates over the `status` field, including history via `was`.

use jql_core::{Field, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::{list, quote};

/// Builder for workflow status. States are double-quoted.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct StatusClause {
    field: Field,
    negate: bool,
}

impl StatusClause {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            negate: false,
        }
    }

    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// `status = "Open"`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, state: &str) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, quote(state))
    }

    /// `status in ("Open", "Reopened")`
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for an empty list.
    pub fn is_in<I, S>(self, states: I) -> Result<FinalClause>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let value = list(states.into_iter().map(|s| quote(s.as_ref())))?;
        self.finish(Operator::In, value)
    }

    /// `status was "In Progress"`
    ///
    /// # Errors
    ///
    /// `was` has no opposite, so a negated builder returns
    /// [`JqlError::InvalidOperation`](jql_core::JqlError).
    pub fn was(self, state: &str) -> Result<FinalClause> {
        self.finish(Operator::Was, quote(state))
    }

    fn finish(self, operator: Operator, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, operator, value).finalize(self.negate)
    }
}
