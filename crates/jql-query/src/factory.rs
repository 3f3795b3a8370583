//! Entry points: one constructor per known field.
//!
//! Every call returns a fresh builder, so clauses never share state.
//!
//! ```
//! use jql_core::Field;
//! use jql_query::Where;
//!
//! let query = Where::and([
//!     Where::project().is("BUG")?,
//!     Where::assignee().is_current_user()?,
//!     Where::status().not().is_in(["Done", "Closed"])?,
//! ])?;
//! assert_eq!(
//!     query.render(),
//!     "(project = BUG and assignee = currentUser() and status not in (\"Done\", \"Closed\"))"
//! );
//!
//! let recent = Where::issue_key()
//!     .in_issue_history()?
//!     .order_by_descending(Field::LastViewed)?;
//! assert_eq!(recent.render(), "issueKey in issueHistory() order by lastViewed desc");
//! # Ok::<(), jql_core::JqlError>(())
//! ```

use jql_core::{Field, Result};

use crate::builders::{
    DatetimeClause, IssueClause, IssueTypeClause, ProjectClause, SimpleValueClause,
    StatusClause, TextClause, UserClause, VersionClause,
};
use crate::clause::FinalClause;
use crate::compose::{compose, Connective};

/// Stateless factory for typed clause builders.
#[derive(Debug, Clone, Copy)]
pub struct Where;

impl Where {
    // Issues

    pub fn issue_key() -> IssueClause {
        IssueClause::new(Field::IssueKey)
    }

    pub fn parent() -> IssueClause {
        IssueClause::new(Field::Parent)
    }

    // Projects

    pub fn project() -> ProjectClause {
        ProjectClause::new(Field::Project)
    }

    // Users

    pub fn approvals() -> UserClause {
        UserClause::bound(Field::Approvals)
    }

    pub fn assignee() -> UserClause {
        UserClause::bound(Field::Assignee)
    }

    pub fn creator() -> UserClause {
        UserClause::bound(Field::Creator)
    }

    pub fn reporter() -> UserClause {
        UserClause::bound(Field::Reporter)
    }

    pub fn voter() -> UserClause {
        UserClause::bound(Field::Voter)
    }

    pub fn watcher() -> UserClause {
        UserClause::bound(Field::Watcher)
    }

    pub fn work_log_author() -> UserClause {
        UserClause::bound(Field::WorkLogAuthor)
    }

    // Text

    pub fn summary() -> TextClause {
        TextClause::new(Field::Summary)
    }

    pub fn description() -> TextClause {
        TextClause::new(Field::Description)
    }

    pub fn comment() -> TextClause {
        TextClause::new(Field::Comment)
    }

    pub fn environment() -> TextClause {
        TextClause::new(Field::Environment)
    }

    /// Jira's catch-all text field (summary, description, comments, ...).
    pub fn text() -> TextClause {
        TextClause::new(Field::Text)
    }

    pub fn work_log_comment() -> TextClause {
        TextClause::new(Field::WorkLogComment)
    }

    // Dates

    pub fn created() -> DatetimeClause {
        DatetimeClause::new(Field::Created)
    }

    pub fn updated() -> DatetimeClause {
        DatetimeClause::new(Field::Updated)
    }

    pub fn due() -> DatetimeClause {
        DatetimeClause::new(Field::Due)
    }

    pub fn resolved() -> DatetimeClause {
        DatetimeClause::new(Field::Resolved)
    }

    pub fn last_viewed() -> DatetimeClause {
        DatetimeClause::new(Field::LastViewed)
    }

    pub fn work_log_date() -> DatetimeClause {
        DatetimeClause::new(Field::WorkLogDate)
    }

    // Versions

    pub fn affected_version() -> VersionClause {
        VersionClause::new(Field::AffectedVersion)
    }

    pub fn fix_version() -> VersionClause {
        VersionClause::new(Field::FixVersion)
    }

    // Type and status

    pub fn issue_type() -> IssueTypeClause {
        IssueTypeClause::new(Field::Type)
    }

    pub fn status() -> StatusClause {
        StatusClause::new(Field::Status)
    }

    // Simple values

    pub fn priority() -> SimpleValueClause {
        SimpleValueClause::new(Field::Priority)
    }

    pub fn resolution() -> SimpleValueClause {
        SimpleValueClause::new(Field::Resolution)
    }

    pub fn component() -> SimpleValueClause {
        SimpleValueClause::new(Field::Component)
    }

    pub fn labels() -> SimpleValueClause {
        SimpleValueClause::new(Field::Labels)
    }

    pub fn category() -> SimpleValueClause {
        SimpleValueClause::new(Field::Category)
    }

    pub fn sprint() -> SimpleValueClause {
        SimpleValueClause::new(Field::Sprint)
    }

    /// Equality/membership builder for any field without a dedicated one.
    pub fn field(field: Field) -> SimpleValueClause {
        SimpleValueClause::new(field)
    }

    // Composition

    /// `(a and b and ...)`
    ///
    /// Operands render as they are, so an operand's `order by` ends up
    /// inside the parentheses. See [`compose`].
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for fewer
    /// than two clauses.
    pub fn and<I>(clauses: I) -> Result<FinalClause>
    where
        I: IntoIterator<Item = FinalClause>,
    {
        compose(Connective::And, clauses)
    }

    /// `(a or b or ...)`
    ///
    /// Operands render as they are, so an operand's `order by` ends up
    /// inside the parentheses. See [`compose`].
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for fewer
    /// than two clauses.
    pub fn or<I>(clauses: I) -> Result<FinalClause>
    where
        I: IntoIterator<Item = FinalClause>,
    {
        compose(Connective::Or, clauses)
    }
}
