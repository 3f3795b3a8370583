//! Predicates over the `type` field.

use jql_core::{Field, IssueTypeRef, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::list;

/// Builder for issue types, referenced by name or id and written unquoted.
/// An [`IssueType`](jql_core::IssueType) resolves to its id.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct IssueTypeClause {
    field: Field,
    negate: bool,
}

impl IssueTypeClause {
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

    /// `type = Bug`, or `type = 10001` by id.
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, issue_type: impl IssueTypeRef) -> Result<FinalClause> {
        let value = issue_type.issue_type_ref().into_owned();
        self.finish(Operator::EqualTo, value)
    }

    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for an empty list.
    pub fn is_in<I>(self, issue_types: I) -> Result<FinalClause>
    where
        I: IntoIterator,
        I::Item: IssueTypeRef,
    {
        let value = list(
            issue_types
                .into_iter()
                .map(|t| t.issue_type_ref().into_owned()),
        )?;
        self.finish(Operator::In, value)
    }

    fn finish(self, operator: Operator, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, operator, value).finalize(self.negate)
    }
}
