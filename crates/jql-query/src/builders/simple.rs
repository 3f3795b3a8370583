//! Equality and membership over any single-valued field.

use jql_core::{Field, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::{list, quote};

/// Builder for plain value fields (`priority`, `resolution`, `component`,
/// ...). Values are double-quoted.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct SimpleValueClause {
    field: Field,
    negate: bool,
}

impl SimpleValueClause {
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

    /// `priority = "High"`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, value: &str) -> Result<FinalClause> {
        Clause::predicate(self.field, Operator::EqualTo, quote(value)).finalize(self.negate)
    }

    /// `priority in ("High", "Highest")`
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for an empty list.
    pub fn is_in<I, S>(self, values: I) -> Result<FinalClause>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let value = list(values.into_iter().map(|v| quote(v.as_ref())))?;
        Clause::predicate(self.field, Operator::In, value).finalize(self.negate)
    }
}
