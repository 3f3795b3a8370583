//! Typed clause builders, one per field category.
//!
//! Each builder restricts which predicates are legal for its fields and
//! owns the formatting of their values. All of them share the same shape:
//! `not()` toggles negation, and every terminal method consumes the
//! builder and returns a [`FinalClause`](crate::FinalClause). The negation
//! flag is applied when the terminal method runs, never earlier.

mod datetime;
mod issue;
mod issue_type;
mod project;
mod simple;
mod status;
mod text;
mod user;
mod version;

pub use datetime::{DatetimeClause, DatetimeValue};
pub use issue::IssueClause;
pub use issue_type::IssueTypeClause;
pub use project::ProjectClause;
pub use simple::SimpleValueClause;
pub use status::StatusClause;
pub use text::TextClause;
pub use user::{UserClause, USER_FIELDS};
pub use version::VersionClause;
