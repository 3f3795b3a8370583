//! Predicates over version fields (`affectedVersion`, `fixVersion`).

use jql_core::{Field, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::{call, list, quote};

/// Builder for version fields. Version names are double-quoted; project
/// arguments to the version functions are not.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct VersionClause {
    field: Field,
    negate: bool,
}

impl VersionClause {
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

    /// `fixVersion = "1.2.3"`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn is(self, version: &str) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, quote(version))
    }

    /// `fixVersion in ("1.2.3", "1.2.4")`
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`](jql_core::JqlError) for an empty list.
    pub fn is_in<I, S>(self, versions: I) -> Result<FinalClause>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let value = list(versions.into_iter().map(|v| quote(v.as_ref())))?;
        self.finish(Operator::In, value)
    }

    /// `fixVersion in releasedVersions(BUG)`; without a project, every
    /// project's released versions.
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_released_versions(self, project: Option<&str>) -> Result<FinalClause> {
        self.finish(
            Operator::In,
            call("releasedVersions", project.unwrap_or_default()),
        )
    }

    /// `fixVersion = latestReleasedVersion(BUG)`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn in_latest_released_version(self, project: &str) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, call("latestReleasedVersion", project))
    }

    /// `fixVersion in unreleasedVersions(BUG)`
    ///
    /// # Errors
    ///
    /// Never fails: `in` always negates to `not in`.
    pub fn in_unreleased_versions(self, project: Option<&str>) -> Result<FinalClause> {
        self.finish(
            Operator::In,
            call("unreleasedVersions", project.unwrap_or_default()),
        )
    }

    /// `fixVersion = earliestUnreleasedVersion(BUG)`
    ///
    /// # Errors
    ///
    /// Never fails: `=` always negates to `!=`.
    pub fn in_earliest_unreleased_version(self, project: &str) -> Result<FinalClause> {
        self.finish(Operator::EqualTo, call("earliestUnreleasedVersion", project))
    }

    fn finish(self, operator: Operator, value: String) -> Result<FinalClause> {
        Clause::predicate(self.field, operator, value).finalize(self.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affected() -> VersionClause {
        VersionClause::new(Field::AffectedVersion)
    }

    #[test]
    fn versions_are_quoted() {
        assert_eq!(
            affected().is("1.2.3").unwrap().render(),
            "affectedVersion = \"1.2.3\""
        );
        assert_eq!(
            affected().is_in(["1.2.3", "1.2.4"]).unwrap().render(),
            "affectedVersion in (\"1.2.3\", \"1.2.4\")"
        );
    }

    #[test]
    fn negated_released_versions() {
        assert_eq!(
            affected().not().in_released_versions(Some("BUG")).unwrap().render(),
            "affectedVersion not in releasedVersions(BUG)"
        );
    }

    #[test]
    fn plural_functions_allow_missing_project() {
        let fix = VersionClause::new(Field::FixVersion);
        assert_eq!(
            fix.in_released_versions(None).unwrap().render(),
            "fixVersion in releasedVersions()"
        );
        assert_eq!(
            fix.in_unreleased_versions(None).unwrap().render(),
            "fixVersion in unreleasedVersions()"
        );
    }

    #[test]
    fn singular_functions_use_equality() {
        let fix = VersionClause::new(Field::FixVersion);
        assert_eq!(
            fix.in_latest_released_version("OPS").unwrap().render(),
            "fixVersion = latestReleasedVersion(OPS)"
        );
        assert_eq!(
            fix.not()
                .in_earliest_unreleased_version("OPS")
                .unwrap()
                .render(),
            "fixVersion != earliestUnreleasedVersion(OPS)"
        );
    }
}
