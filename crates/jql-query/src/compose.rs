//! Boolean composition of finished clauses.

use jql_core::{JqlError, Result};
use tracing::{debug, trace};

use crate::clause::FinalClause;

/// Logical connective joining two or more clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Join rendered clauses with `connective` and wrap the result in
/// parentheses. The result is a literal clause and nests freely.
///
/// Each operand is embedded exactly as it renders, `order by` included.
/// Jira only accepts `order by` at the end of a whole query, so order the
/// composed clause's operands before composing, not after: ordering the
/// composite itself has no effect.
///
/// # Errors
///
/// Returns [`JqlError::InvalidArgument`] for fewer than two clauses.
pub fn compose<I>(connective: Connective, clauses: I) -> Result<FinalClause>
where
    I: IntoIterator<Item = FinalClause>,
{
    let parts: Vec<String> = clauses
        .into_iter()
        .map(|clause| {
            if !clause.is_composite() && !clause.order_directives().is_empty() {
                debug!(
                    jql = %clause,
                    "operand carries 'order by'; it stays inside the parentheses"
                );
            }
            clause.into_string()
        })
        .collect();
    if parts.len() < 2 {
        return Err(JqlError::InvalidArgument(format!(
            "'{}' needs at least two clauses, got {}",
            connective.keyword(),
            parts.len()
        )));
    }

    let separator = format!(" {} ", connective.keyword());
    let text = format!("({})", parts.join(&separator));
    trace!(
        connective = connective.keyword(),
        operands = parts.len(),
        jql = %text,
        "composed clauses"
    );
    Ok(FinalClause::literal(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> FinalClause {
        FinalClause::literal(text)
    }

    #[test]
    fn and_wraps_in_parentheses() {
        let clause =
            compose(Connective::And, [lit("type = Bug"), lit("status = \"Open\"")]).unwrap();
        assert_eq!(clause.render(), "(type = Bug and status = \"Open\")");
        assert!(clause.is_composite());
    }

    #[test]
    fn or_joins_many_operands() {
        let clause =
            compose(Connective::Or, [lit("a = 1"), lit("b = 2"), lit("c = 3")]).unwrap();
        assert_eq!(clause.render(), "(a = 1 or b = 2 or c = 3)");
    }

    #[test]
    fn fewer_than_two_clauses_is_rejected() {
        let err = compose(Connective::And, [lit("a = 1")]).unwrap_err();
        assert!(matches!(err, JqlError::InvalidArgument(_)));
        let err = compose(Connective::Or, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("or"));
    }

    #[test]
    fn ordered_operand_is_embedded_verbatim() {
        use crate::builders::IssueTypeClause;
        use jql_core::Field;

        let bugs = IssueTypeClause::new(Field::Type)
            .is("Bug")
            .unwrap()
            .order_by(Field::Created)
            .unwrap();
        let clause = compose(Connective::And, [bugs, lit("status = \"Open\"")]).unwrap();
        assert_eq!(
            clause.render(),
            "(type = Bug order by created and status = \"Open\")"
        );
    }

    #[test]
    fn composites_nest() {
        let inner = compose(Connective::And, [lit("b = 2"), lit("c = 3")]).unwrap();
        let outer = compose(Connective::Or, [lit("a = 1"), inner]).unwrap();
        assert_eq!(outer.render(), "(a = 1 or (b = 2 and c = 3))");
    }
}
