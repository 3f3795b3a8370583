//! Predicates over the `project` field.

use jql_core::{Field, Operator, ProjectKey, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::{call, list};

/// Builder for project fields. Keys are written unquoted.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct ProjectClause {
    field: Field,
    negate: bool,
}

impl ProjectClause {
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

    /// `project = BUG`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, key: impl ProjectKey) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, key.project_key().to_string())
    }

    /// `project in (BUG, OPS)`
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for an empty list.
    pub fn is_in<I>(self, keys: I) -> Result<FinalClause>
    where
        I: IntoIterator,
        I::Item: ProjectKey,
    {
        let value = list(keys.into_iter().map(|k| k.project_key().to_string()))?;
        self.finish(Operator::In, value)
    }

    /// `project in projectsLeadByUser()`
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_projects_lead_by_user(self) -> Result<FinalClause> {
        self.finish(Operator::In, call("projectsLeadByUser", ""))
    }

    /// `project in projectsWhereUserHasPermission()`
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_projects_where_user_has_permission(self) -> Result<FinalClause> {
        self.finish(Operator::In, call("projectsWhereUserHasPermission", ""))
    }

    /// `project in projectsWhereUserHasRole()`
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_projects_where_user_has_role(self) -> Result<FinalClause> {
        self.finish(Operator::In, call("projectsWhereUserHasRole", ""))
    }

    fn finish(self, operator: Operator, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, operator, value).finalize(self.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jql_core::Project;

    fn project() -> ProjectClause {
        ProjectClause::new(Field::Project)
    }

    #[test]
    fn is_and_is_in_are_unquoted() {
        assert_eq!(project().is("BUG").unwrap().render(), "project = BUG");
        assert_eq!(
            project().is_in(vec!["BUG".to_string(), "OPS".to_string()]).unwrap().render(),
            "project in (BUG, OPS)"
        );
    }

    #[test]
    fn accepts_project_entity() {
        let ops = Project {
            key: "OPS".to_string(),
            name: Some("Operations".to_string()),
        };
        assert_eq!(project().not().is(&ops).unwrap().render(), "project != OPS");
    }

    #[test]
    fn zero_argument_functions() {
        assert_eq!(
            project().in_projects_lead_by_user().unwrap().render(),
            "project in projectsLeadByUser()"
        );
        assert_eq!(
            project()
                .in_projects_where_user_has_permission()
                .unwrap()
                .render(),
            "project in projectsWhereUserHasPermission()"
        );
        assert_eq!(
            project().not().in_projects_where_user_has_role().unwrap().render(),
            "project not in projectsWhereUserHasRole()"
        );
    }
}
