//! Relative-date increments for `startOf*` / `endOf*` date functions.
//!
//! Jira accepts an optional increment argument such as `startOfWeek("2d")`.
//! The increment is written in the coarsest unit that represents the
//! duration exactly: days, then hours, then (truncated) minutes.

use chrono::Duration;

/// Render a duration as a quoted JQL increment, or `""` when absent.
///
/// ```
/// use chrono::Duration;
/// use jql_core::increment::time_increment;
///
/// assert_eq!(time_increment(None), "");
/// assert_eq!(time_increment(Some(Duration::hours(48))), "\"2d\"");
/// assert_eq!(time_increment(Some(Duration::minutes(90))), "\"90m\"");
/// ```
#[must_use]
pub fn time_increment(span: Option<Duration>) -> String {
    let Some(span) = span else {
        return String::new();
    };

    let days = span.num_days();
    if span == Duration::days(days) {
        return format!("\"{days}d\"");
    }

    let hours = span.num_hours();
    if span == Duration::hours(hours) {
        return format!("\"{hours}h\"");
    }

    format!("\"{}m\"", span.num_minutes())
}
