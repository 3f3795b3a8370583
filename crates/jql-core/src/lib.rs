//! # jql-core
//!
//! Shared vocabulary for building Jira Query Language (JQL) clauses.
//!
//! This crate defines the types used by the clause engine and the CLI:
//! - [`Field`] and [`Operator`] — closed vocabularies mapped to JQL tokens
//! - [`SortDirection`] — `order by` key directions
//! - Entity identifiers ([`Issue`], [`Project`], [`User`], [`IssueType`])
//! - [`increment::time_increment`] — relative-date increments
//! - Saved filters ([`SavedFilter`], [`FilterStore`])
//! - Search URLs ([`search`])
//! - Error hierarchy ([`JqlError`])

pub mod entity;
pub mod error;
pub mod field;
pub mod filter;
pub mod increment;
pub mod operator;
pub mod search;

pub use entity::{Issue, IssueKey, IssueType, IssueTypeRef, Project, ProjectKey, User, UserName};
pub use error::{JqlError, Result};
pub use field::Field;
pub use filter::{FilterStore, SavedFilter};
pub use operator::{Operator, SortDirection};
