//! Predicates over issue-key fields (`issueKey`, `parent`).

use jql_core::{Field, IssueKey, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::{call, list, quote};

/// Builder for fields that hold an issue key. Keys are written unquoted.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct IssueClause {
    field: Field,
    negate: bool,
}

impl IssueClause {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            negate: false,
        }
    }

    /// Toggle negation of the final operator.
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// `issueKey = BUG-1`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, key: impl IssueKey) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, key.issue_key().to_string())
    }

    /// `issueKey in (BUG-1, BUG-2)`
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for an empty list.
    pub fn is_in<I>(self, keys: I) -> Result<FinalClause>
    where
        I: IntoIterator,
        I::Item: IssueKey,
    {
        let value = list(keys.into_iter().map(|k| k.issue_key().to_string()))?;
        self.finish(Operator::In, value)
    }

    /// `issueKey in issueHistory()`, the issues the current user viewed.
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_issue_history(self) -> Result<FinalClause> {
        self.finish(Operator::In, call("issueHistory", ""))
    }

    /// `issueKey in linkedIssues(BUG-1)` or, with a link type,
    /// `issueKey in linkedIssues(BUG-1, "is blocked by")`.
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_linked_issues(
        self,
        key: impl IssueKey,
        link_type: Option<&str>,
    ) -> Result<FinalClause> {
        let args = match link_type {
            Some(link) => format!("{}, {}", key.issue_key(), quote(link)),
            None => key.issue_key().to_string(),
        };
        self.finish(Operator::In, call("linkedIssues", &args))
    }

    /// `issueKey in votedIssues()`
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_voted_issues(self) -> Result<FinalClause> {
        self.finish(Operator::In, call("votedIssues", ""))
    }

    /// `issueKey in watchedIssues()`
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_watched_issues(self) -> Result<FinalClause> {
        self.finish(Operator::In, call("watchedIssues", ""))
    }

    fn finish(self, operator: Operator, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, operator, value).finalize(self.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jql_core::{Issue, JqlError};

    fn key() -> IssueClause {
        IssueClause::new(Field::IssueKey)
    }

    #[test]
    fn is_renders_raw_key() {
        assert_eq!(key().is("BUG-1").unwrap().render(), "issueKey = BUG-1");
    }

    #[test]
    fn is_accepts_issue_entity() {
        let issue = Issue {
            key: "BUG-7".to_string(),
            summary: Some("Crash".to_string()),
        };
        assert_eq!(key().is(&issue).unwrap().render(), "issueKey = BUG-7");
    }

    #[test]
    fn is_in_renders_unquoted_list() {
        let clause = key().is_in(["BUG-1", "BUG-2"]).unwrap();
        assert_eq!(clause.render(), "issueKey in (BUG-1, BUG-2)");
    }

    #[test]
    fn is_in_accepts_entities() {
        let issues = vec![
            Issue {
                key: "A-1".to_string(),
                summary: None,
            },
            Issue {
                key: "A-2".to_string(),
                summary: None,
            },
        ];
        let clause = key().not().is_in(&issues).unwrap();
        assert_eq!(clause.render(), "issueKey not in (A-1, A-2)");
    }

    #[test]
    fn is_in_empty_is_rejected() {
        let err = key().is_in(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, JqlError::InvalidArgument(_)));
    }

    #[test]
    fn function_forms() {
        assert_eq!(
            key().in_issue_history().unwrap().render(),
            "issueKey in issueHistory()"
        );
        assert_eq!(
            key().in_voted_issues().unwrap().render(),
            "issueKey in votedIssues()"
        );
        assert_eq!(
            key().not().in_watched_issues().unwrap().render(),
            "issueKey not in watchedIssues()"
        );
    }

    #[test]
    fn linked_issues_with_and_without_link_type() {
        assert_eq!(
            key().in_linked_issues("BUG-1", None).unwrap().render(),
            "issueKey in linkedIssues(BUG-1)"
        );
        assert_eq!(
            key()
                .in_linked_issues("BUG-1", Some("is blocked by"))
                .unwrap()
                .render(),
            "issueKey in linkedIssues(BUG-1, \"is blocked by\")"
        );
    }

    #[test]
    fn double_not_cancels() {
        assert_eq!(
            key().not().not().is("BUG-1").unwrap().render(),
            "issueKey = BUG-1"
        );
    }
}
