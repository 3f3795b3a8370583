//! Turn `jql build` arguments into a typed clause.
//!
//! The field decides which builder is used, and each builder only accepts
//! the operations it defines, exactly as in the library API.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use jql_core::{Field, SortDirection};
use jql_query::builders::{
    DatetimeClause, DatetimeValue, IssueClause, IssueTypeClause, ProjectClause, SimpleValueClause,
    StatusClause, TextClause, UserClause, VersionClause, USER_FIELDS,
};
use jql_query::FinalClause;

/// Predicate requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildOp {
    Is,
    In,
    Contains,
    Was,
    On,
    Before,
    BeforeOrOn,
    After,
    AfterOrOn,
    CurrentUser,
    CurrentUserAnd,
    IssueHistory,
    LinkedIssues,
    VotedIssues,
    WatchedIssues,
    LeadByUser,
    UserHasPermission,
    UserHasRole,
    ReleasedVersions,
    LatestReleasedVersion,
    UnreleasedVersions,
    EarliestUnreleasedVersion,
}

/// Builder family a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Issue,
    Project,
    User,
    Text,
    Datetime,
    Version,
    IssueType,
    Status,
    Simple,
}

fn category(field: Field) -> Category {
    match field {
        Field::IssueKey | Field::Parent => Category::Issue,
        Field::Project => Category::Project,
        Field::Summary
        | Field::Description
        | Field::Comment
        | Field::Environment
        | Field::Text
        | Field::WorkLogComment => Category::Text,
        Field::Created
        | Field::Updated
        | Field::Due
        | Field::Resolved
        | Field::LastViewed
        | Field::WorkLogDate => Category::Datetime,
        Field::AffectedVersion | Field::FixVersion => Category::Version,
        Field::Type => Category::IssueType,
        Field::Status => Category::Status,
        f if USER_FIELDS.contains(&f) => Category::User,
        _ => Category::Simple,
    }
}

/// Parse `field`, `field:asc` or `field:desc`.
pub fn parse_order(spec: &str) -> Result<(Field, SortDirection)> {
    let (name, direction) = match spec.split_once(':') {
        Some((name, dir)) => {
            let direction = match dir.to_ascii_lowercase().as_str() {
                "asc" => SortDirection::Ascending,
                "desc" => SortDirection::Descending,
                other => bail!("unknown sort direction '{other}' (use asc or desc)"),
            };
            (name, direction)
        }
        None => (spec, SortDirection::Unspecified),
    };
    Ok((name.parse()?, direction))
}

/// Parse a relative-date increment such as `2d`, `-3h` or `90m`.
pub fn parse_increment(spec: &str) -> Result<Duration> {
    let spec = spec.trim();
    let unit = spec
        .chars()
        .last()
        .ok_or_else(|| anyhow!("empty increment"))?;
    let amount: i64 = spec[..spec.len() - unit.len_utf8()]
        .parse()
        .with_context(|| format!("invalid increment '{spec}'"))?;
    let span = match unit {
        'd' => Duration::try_days(amount),
        'h' => Duration::try_hours(amount),
        'm' => Duration::try_minutes(amount),
        _ => bail!("invalid increment '{spec}': expected a d, h or m suffix"),
    };
    span.ok_or_else(|| anyhow!("increment '{spec}' is out of range"))
}

/// Build one clause from the parsed command-line pieces.
pub fn build_clause(
    field: Field,
    negate: bool,
    op: BuildOp,
    values: &[String],
) -> Result<FinalClause> {
    let clause = match category(field) {
        Category::Issue => {
            let b = IssueClause::new(field);
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                BuildOp::IssueHistory => b.in_issue_history(),
                BuildOp::LinkedIssues => match values {
                    [key] => b.in_linked_issues(key, None),
                    [key, link] => b.in_linked_issues(key, Some(link.as_str())),
                    _ => bail!("linked-issues takes an issue key and an optional link type"),
                },
                BuildOp::VotedIssues => b.in_voted_issues(),
                BuildOp::WatchedIssues => b.in_watched_issues(),
                _ => return unsupported(op, field),
            }
        }
        Category::Project => {
            let b = ProjectClause::new(field);
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                BuildOp::LeadByUser => b.in_projects_lead_by_user(),
                BuildOp::UserHasPermission => b.in_projects_where_user_has_permission(),
                BuildOp::UserHasRole => b.in_projects_where_user_has_role(),
                _ => return unsupported(op, field),
            }
        }
        Category::User => {
            let b = UserClause::new(field)?;
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::CurrentUser => b.is_current_user(),
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                BuildOp::CurrentUserAnd => b.in_current_user_and(values),
                _ => return unsupported(op, field),
            }
        }
        Category::Text => {
            let b = TextClause::new(field);
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::Contains => b.contains(single(op, values)?),
                _ => return unsupported(op, field),
            }
        }
        Category::Datetime => {
            let b = DatetimeClause::new(field);
            let b = if negate { b.not() } else { b };
            let pending = match op {
                BuildOp::On => b.on(),
                BuildOp::Before => b.before(),
                BuildOp::BeforeOrOn => b.before_or_on(),
                BuildOp::After => b.after(),
                BuildOp::AfterOrOn => b.after_or_on(),
                _ => return unsupported(op, field),
            };
            date_value(pending, single(op, values)?)?
        }
        Category::Version => {
            let b = VersionClause::new(field);
            let b = if negate { b.not() } else { b };
            let project = values.first().map(String::as_str);
            match op {
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                BuildOp::ReleasedVersions => b.in_released_versions(project),
                BuildOp::UnreleasedVersions => b.in_unreleased_versions(project),
                BuildOp::LatestReleasedVersion => {
                    b.in_latest_released_version(single(op, values)?)
                }
                BuildOp::EarliestUnreleasedVersion => {
                    b.in_earliest_unreleased_version(single(op, values)?)
                }
                _ => return unsupported(op, field),
            }
        }
        Category::IssueType => {
            let b = IssueTypeClause::new(field);
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                _ => return unsupported(op, field),
            }
        }
        Category::Status => {
            let b = StatusClause::new(field);
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                BuildOp::Was => b.was(single(op, values)?),
                _ => return unsupported(op, field),
            }
        }
        Category::Simple => {
            let b = SimpleValueClause::new(field);
            let b = if negate { b.not() } else { b };
            match op {
                BuildOp::Is => b.is(single(op, values)?),
                BuildOp::In => b.is_in(values),
                _ => return unsupported(op, field),
            }
        }
    };
    Ok(clause?)
}

/// Finish a date predicate from `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, or a
/// relative function such as `startOfWeek` / `endOfDay:-1d`.
fn date_value(pending: DatetimeValue, spec: &str) -> Result<jql_core::Result<FinalClause>> {
    if let Ok(day) = NaiveDate::parse_from_str(spec, "%Y-%m-%d") {
        return Ok(pending.date(day));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(spec, "%Y-%m-%d %H:%M") {
        return Ok(pending.date_time(at));
    }

    let (function, increment) = match spec.split_once(':') {
        Some((function, increment)) => (function, Some(parse_increment(increment)?)),
        None => (spec, None),
    };
    let clause = match function {
        "startOfDay" => pending.start_of_day(increment),
        "startOfWeek" => pending.start_of_week(increment),
        "startOfMonth" => pending.start_of_month(increment),
        "startOfYear" => pending.start_of_year(increment),
        "endOfDay" => pending.end_of_day(increment),
        "endOfWeek" => pending.end_of_week(increment),
        "endOfMonth" => pending.end_of_month(increment),
        "endOfYear" => pending.end_of_year(increment),
        _ => bail!(
            "invalid date '{spec}': expected YYYY-MM-DD, 'YYYY-MM-DD HH:MM' \
             or a function like startOfWeek[:2d]"
        ),
    };
    Ok(clause)
}

fn single(op: BuildOp, values: &[String]) -> Result<&str> {
    match values {
        [value] => Ok(value.as_str()),
        _ => bail!(
            "'{}' takes exactly one value, got {}",
            op_name(op),
            values.len()
        ),
    }
}

fn unsupported<T>(op: BuildOp, field: Field) -> Result<T> {
    bail!("'{}' is not available for field '{field}'", op_name(op))
}

fn op_name(op: BuildOp) -> String {
    op.to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| format!("{op:?}"))
}
