//! Date and time predicates (`created`, `updated`, `due`, ...).
//!
//! Building a date predicate is a two-step chain: pick the comparison
//! (`on`, `before`, `after`, ...), then the value, either a literal date
//! or one of Jira's relative `startOf*` / `endOf*` functions:
//!
//! ```
//! use chrono::Duration;
//! use jql_query::Where;
//!
//! let clause = Where::created()
//!     .after_or_on()
//!     .start_of_week(Some(Duration::days(-7)))
//!     .unwrap();
//! assert_eq!(clause.render(), "created >= startOfWeek(\"-7d\")");
//! ```

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use jql_core::increment::time_increment;
use jql_core::{Field, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::{call, quote};

/// First step of a date predicate: choose the comparison.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct DatetimeClause {
    field: Field,
    negate: bool,
}

impl DatetimeClause {
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

    /// `=`
    pub fn on(self) -> DatetimeValue {
        self.with(Operator::EqualTo)
    }

    /// `<`
    pub fn before(self) -> DatetimeValue {
        self.with(Operator::LessThan)
    }

    /// `<=`
    pub fn before_or_on(self) -> DatetimeValue {
        self.with(Operator::LessThanEqualTo)
    }

    /// `>`
    pub fn after(self) -> DatetimeValue {
        self.with(Operator::GreaterThan)
    }

    /// `>=`
    pub fn after_or_on(self) -> DatetimeValue {
        self.with(Operator::GreaterThanEqualTo)
    }

    fn with(self, operator: Operator) -> DatetimeValue {
        DatetimeValue {
            field: self.field,
            operator,
            negate: self.negate,
        }
    }
}

/// Second step of a date predicate: the comparison is fixed, the value is
/// still missing.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct DatetimeValue {
    field: Field,
    operator: Operator,
    negate: bool,
}

impl DatetimeValue {
    /// `"yyyy-MM-dd"` at midnight, `"yyyy-MM-dd HH:mm"` otherwise.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn date_time(self, at: NaiveDateTime) -> Result<FinalClause> {
        let time = at.time();
        let literal = if time.num_seconds_from_midnight() == 0 && time.nanosecond() == 0 {
            at.format("%Y-%m-%d").to_string()
        } else {
            at.format("%Y-%m-%d %H:%M").to_string()
        };
        self.finish(quote(&literal))
    }

    /// `"yyyy-MM-dd"`
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn date(self, day: NaiveDate) -> Result<FinalClause> {
        self.finish(quote(&day.format("%Y-%m-%d").to_string()))
    }

    /// `startOfDay()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn start_of_day(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("startOfDay", increment)
    }

    /// `startOfWeek()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn start_of_week(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("startOfWeek", increment)
    }

    /// `startOfMonth()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn start_of_month(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("startOfMonth", increment)
    }

    /// `startOfYear()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn start_of_year(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("startOfYear", increment)
    }

    /// `endOfDay()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn end_of_day(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("endOfDay", increment)
    }

    /// `endOfWeek()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn end_of_week(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("endOfWeek", increment)
    }

    /// `endOfMonth()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn end_of_month(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("endOfMonth", increment)
    }

    /// `endOfYear()`, shifted by `increment` when given.
    ///
    /// # Errors
    ///
    /// Never fails: every comparison operator has an opposite.
    pub fn end_of_year(self, increment: Option<Duration>) -> Result<FinalClause> {
        self.relative("endOfYear", increment)
    }

    fn relative(self, function: &str, increment: Option<Duration>) -> Result<FinalClause> {
        self.finish(call(function, &time_increment(increment)))
    }

    fn finish(self, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, self.operator, value).finalize(self.negate)
    }
}
