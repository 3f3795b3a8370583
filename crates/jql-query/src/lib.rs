//! # jql-query
//!
//! Fluent, typed construction of Jira Query Language (JQL) clauses.
//!
//! Pick a field through [`Where`], which hands back a builder that only
//! offers the predicates legal for that field's category, then finish the
//! clause with a terminal method. Finished clauses can be ordered and
//! combined with [`Where::and`] / [`Where::or`]:
//!
//! ```
//! use jql_core::Field;
//! use jql_query::Where;
//!
//! let query = Where::or([
//!     Where::assignee().is("jdoe")?,
//!     Where::reporter().is_current_user()?,
//! ])?;
//! assert_eq!(query.render(), "(assignee = \"jdoe\" or reporter = currentUser())");
//!
//! let ordered = Where::fix_version()
//!     .in_unreleased_versions(Some("OPS"))?
//!     .order_by_descending(Field::Priority)?;
//! assert_eq!(
//!     ordered.to_string(),
//!     "fixVersion in unreleasedVersions(OPS) order by priority desc"
//! );
//! # Ok::<(), jql_core::JqlError>(())
//! ```
//!
//! Includes:
//! - Typed builders ([`builders`])
//! - The final-clause facade ([`FinalClause`])
//! - Boolean composition ([`compose`])
//! - Saved-filter listing formats ([`formatter`])

pub mod builders;
mod clause;
pub mod compose;
pub mod factory;
pub mod formatter;
mod value;

pub use clause::{FinalClause, OrderDirective};
pub use compose::Connective;
pub use factory::Where;
