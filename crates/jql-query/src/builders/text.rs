//! Free-text predicates (`summary ~ "..."`).

use jql_core::{Field, Operator, Result};

use crate::clause::{Clause, FinalClause};
use crate::value::quote;

/// Builder for text fields. Only `~` (contains) is legal; negation turns it
/// into `!~`.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct TextClause {
    field: Field,
    negate: bool,
}

impl TextClause {
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

    /// `summary ~ "crash"`
    ///
    /// # Errors
    ///
    /// Never fails: `~` always negates to `!~`.
    pub fn contains(self, value: &str) -> Result<FinalClause> {
        Clause::predicate(self.field, Operator::Contains, quote(value)).finalize(self.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_quotes_value() {
        let clause = TextClause::new(Field::Summary).contains("login crash").unwrap();
        assert_eq!(clause.render(), "summary ~ \"login crash\"");
    }

    #[test]
    fn negated_contains() {
        let clause = TextClause::new(Field::Description)
            .not()
            .contains("flaky")
            .unwrap();
        assert_eq!(clause.render(), "description !~ \"flaky\"");
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let clause = TextClause::new(Field::Text)
            .contains("say \"hello\"")
            .unwrap();
        assert_eq!(clause.render(), "text ~ \"say \\\"hello\\\"\"");
    }
}
