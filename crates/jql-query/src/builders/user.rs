//! Predicates over user fields (`assignee`, `reporter`, ...).

use jql_core::{Field, JqlError, Operator, Result, UserName};

use crate::clause::{Clause, FinalClause};
use crate::value::{call, list, quote};

/// Fields a [`UserClause`] may be bound to.
pub const USER_FIELDS: [Field; 7] = [
    Field::Approvals,
    Field::Assignee,
    Field::Creator,
    Field::Reporter,
    Field::Voter,
    Field::Watcher,
    Field::WorkLogAuthor,
];

/// Builder for user fields. User names are double-quoted.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct UserClause {
    field: Field,
    negate: bool,
}

impl UserClause {
    /// Bind a user clause to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] if `field` does not hold users.
    pub fn new(field: Field) -> Result<Self> {
        if !USER_FIELDS.contains(&field) {
            return Err(JqlError::InvalidArgument(format!(
                "'{field}' is not a user field"
            )));
        }
        Ok(Self::bound(field))
    }

    /// Constructor for fields already known to be user fields.
    pub(crate) fn bound(field: Field) -> Self {
        debug_assert!(USER_FIELDS.contains(&field));
        Self {
            field,
            negate: false,
        }
    }

    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// `assignee = currentUser()`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is_current_user(self) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, call("currentUser", ""))
    }

    /// `assignee = "jdoe"`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, user: impl UserName) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, quote(user.user_name()))
    }

    /// `assignee in ("jdoe", "asmith")`
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] for an empty list.
    pub fn is_in<I>(self, users: I) -> Result<FinalClause>
    where
        I: IntoIterator,
        I::Item: UserName,
    {
        let value = list(users.into_iter().map(|u| quote(u.user_name())))?;
        self.finish(Operator::In, value)
    }

    /// `assignee in (currentUser(), "jdoe")`. An empty list leaves only
    /// `currentUser()`.
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_current_user_and<I>(self, users: I) -> Result<FinalClause>
    where
        I: IntoIterator,
        I::Item: UserName,
    {
        let names = std::iter::once(call("currentUser", ""))
            .chain(users.into_iter().map(|u| quote(u.user_name())));
        self.finish(Operator::In, list(names)?)
    }

    fn finish(self, operator: Operator, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, operator, value).finalize(self.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jql_core::User;

    fn assignee() -> UserClause {
        UserClause::new(Field::Assignee).unwrap()
    }

    #[test]
    fn rejects_non_user_field_at_construction() {
        let err = UserClause::new(Field::Summary).unwrap_err();
        assert!(matches!(err, JqlError::InvalidArgument(_)));
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn accepts_every_user_field() {
        for field in USER_FIELDS {
            assert!(UserClause::new(field).is_ok(), "{field}");
        }
    }

    #[test]
    fn current_user() {
        assert_eq!(
            assignee().is_current_user().unwrap().render(),
            "assignee = currentUser()"
        );
        assert_eq!(
            assignee().not().is_current_user().unwrap().render(),
            "assignee != currentUser()"
        );
    }

    #[test]
    fn names_are_quoted() {
        assert_eq!(assignee().is("jdoe").unwrap().render(), "assignee = \"jdoe\"");
        assert_eq!(
            assignee().is_in(["jdoe", "asmith"]).unwrap().render(),
            "assignee in (\"jdoe\", \"asmith\")"
        );
    }

    #[test]
    fn accepts_user_entities() {
        let users = [
            User {
                name: "jdoe".to_string(),
                display_name: None,
            },
            User {
                name: "asmith".to_string(),
                display_name: Some("A. Smith".to_string()),
            },
        ];
        let clause = UserClause::new(Field::Watcher)
            .unwrap()
            .not()
            .is_in(&users)
            .unwrap();
        assert_eq!(clause.render(), "watcher not in (\"jdoe\", \"asmith\")");
    }

    #[test]
    fn in_current_user_and_prepends_function() {
        assert_eq!(
            assignee().in_current_user_and(["jdoe", "asmith"]).unwrap().render(),
            "assignee in (currentUser(), \"jdoe\", \"asmith\")"
        );
        assert_eq!(
            assignee()
                .in_current_user_and(Vec::<String>::new())
                .unwrap()
                .render(),
            "assignee in (currentUser())"
        );
    }
}
