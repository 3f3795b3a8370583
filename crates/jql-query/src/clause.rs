//! The clause accumulator and its render-only facade.
//!
//! A [`Clause`] is either a `field operator value` predicate or a
//! pre-rendered literal (the result of `and`/`or` composition). Builders
//! fill one in, optionally negate it, and hand it back wrapped in a
//! [`FinalClause`], which only allows rendering and `order by` chaining.

use std::cell::OnceCell;
use std::fmt;

use jql_core::{Field, JqlError, Operator, Result, SortDirection};
use tracing::debug;

/// One key of an `order by` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDirective {
    pub field: Field,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Predicate {
        field: Field,
        operator: Operator,
        /// Already quoted, escaped, or function-wrapped by the builder.
        value: String,
    },
    Literal(String),
}

/// Mutable clause state. Rendering is cached until the next mutation.
#[derive(Debug, Clone)]
pub(crate) struct Clause {
    body: Body,
    order_by: Vec<OrderDirective>,
    rendered: OnceCell<String>,
}

impl Clause {
    pub(crate) fn predicate(field: Field, operator: Operator, value: String) -> Self {
        Self {
            body: Body::Predicate {
                field,
                operator,
                value,
            },
            order_by: Vec::new(),
            rendered: OnceCell::new(),
        }
    }

    pub(crate) fn literal(text: String) -> Self {
        Self {
            body: Body::Literal(text),
            order_by: Vec::new(),
            rendered: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn operator(&self) -> Option<Operator> {
        match self.body {
            Body::Predicate { operator, .. } => Some(operator),
            Body::Literal(_) => None,
        }
    }

    /// Flip the operator to its logical opposite.
    pub(crate) fn negate(&mut self) -> Result<()> {
        match &mut self.body {
            Body::Predicate { operator, .. } => {
                *operator = operator.negate()?;
                self.rendered.take();
                Ok(())
            }
            Body::Literal(_) => Err(JqlError::InvalidOperation(
                "a composed or literal clause has no operator to negate".to_string(),
            )),
        }
    }

    /// Append an ordering key; later keys sort with lower priority.
    pub(crate) fn push_order(&mut self, field: Field, direction: SortDirection) -> Result<()> {
        if field.is_multi_value() {
            return Err(JqlError::InvalidArgument(format!(
                "cannot order by '{field}': it can hold several values at once"
            )));
        }
        self.order_by.push(OrderDirective { field, direction });
        self.rendered.take();
        Ok(())
    }

    /// Apply pending negation and freeze into the render-only view.
    pub(crate) fn finalize(mut self, negate: bool) -> Result<FinalClause> {
        if negate {
            self.negate()?;
        }
        Ok(FinalClause(self))
    }

    pub(crate) fn render(&self) -> &str {
        match &self.body {
            Body::Literal(text) => text,
            Body::Predicate {
                field,
                operator,
                value,
            } => self.rendered.get_or_init(|| {
                let mut out = format!("{field} {operator} {value}");
                if !self.order_by.is_empty() {
                    let keys: Vec<String> = self
                        .order_by
                        .iter()
                        .map(|o| format!("{}{}", o.field, o.direction.suffix()))
                        .collect();
                    out.push_str(" order by ");
                    out.push_str(&keys.join(", "));
                }
                out
            }),
        }
    }
}

/// A complete clause: it can be rendered, ordered, or composed, but its
/// predicate can no longer change.
///
/// The render cache makes this type `Send` but not `Sync`.
#[derive(Debug, Clone)]
#[must_use]
pub struct FinalClause(Clause);

impl FinalClause {
    /// Wrap a pre-rendered JQL fragment.
    ///
    /// The text is rendered verbatim; `order by` calls on it are validated
    /// but have no effect.
    pub fn literal(text: impl Into<String>) -> Self {
        Self(Clause::literal(text.into()))
    }

    /// The JQL text of this clause.
    #[must_use]
    pub fn render(&self) -> &str {
        self.0.render()
    }

    /// Whether this clause came from composition or a literal fragment.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self.0.body, Body::Literal(_))
    }

    /// Sort by `field` in Jira's default direction.
    ///
    /// On a composite the key is validated but not rendered, since `order
    /// by` cannot sit inside parentheses.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] for multi-value fields such as
    /// labels.
    pub fn order_by(self, field: Field) -> Result<Self> {
        self.ordered(field, SortDirection::Unspecified)
    }

    /// Sort by `field`, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] for multi-value fields.
    pub fn order_by_ascending(self, field: Field) -> Result<Self> {
        self.ordered(field, SortDirection::Ascending)
    }

    /// Sort by `field`, descending.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] for multi-value fields.
    pub fn order_by_descending(self, field: Field) -> Result<Self> {
        self.ordered(field, SortDirection::Descending)
    }

    /// Sort by `field` in an explicit direction.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] for multi-value fields.
    pub fn ordered(mut self, field: Field, direction: SortDirection) -> Result<Self> {
        self.0.push_order(field, direction)?;
        if self.is_composite() {
            debug!(%field, jql = %self, "'order by' on a composite clause is not rendered");
        }
        Ok(self)
    }

    /// The ordering keys, highest priority first.
    #[must_use]
    pub fn order_directives(&self) -> &[OrderDirective] {
        &self.0.order_by
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.render().to_string()
    }
}

impl fmt::Display for FinalClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl From<FinalClause> for String {
    fn from(clause: FinalClause) -> Self {
        clause.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_is_bug() -> Clause {
        Clause::predicate(Field::Type, Operator::EqualTo, "Bug".to_string())
    }

    #[test]
    fn render_joins_field_operator_value() {
        assert_eq!(type_is_bug().render(), "type = Bug");
    }

    #[test]
    fn render_is_idempotent() {
        let clause = type_is_bug().finalize(false).unwrap();
        let first = clause.render().to_string();
        assert_eq!(clause.render(), first);
        assert_eq!(clause.to_string(), first);
    }

    #[test]
    fn negate_twice_restores_operator() {
        let mut clause = type_is_bug();
        clause.negate().unwrap();
        assert_eq!(clause.operator(), Some(Operator::NotEqualTo));
        assert_eq!(clause.render(), "type != Bug");
        clause.negate().unwrap();
        assert_eq!(clause.operator(), Some(Operator::EqualTo));
        assert_eq!(clause.render(), "type = Bug");
    }

    #[test]
    fn negate_without_opposite_fails() {
        let mut clause = Clause::predicate(Field::Status, Operator::Was, "\"Open\"".to_string());
        let err = clause.negate().unwrap_err();
        assert!(matches!(err, JqlError::InvalidOperation(_)));
        assert_eq!(clause.operator(), Some(Operator::Was));
    }

    #[test]
    fn negate_literal_fails() {
        let mut clause = Clause::literal("(a and b)".to_string());
        assert!(matches!(
            clause.negate().unwrap_err(),
            JqlError::InvalidOperation(_)
        ));
    }

    #[test]
    fn order_by_appends_in_priority_order() {
        let clause = type_is_bug()
            .finalize(false)
            .unwrap()
            .order_by_descending(Field::Priority)
            .unwrap()
            .order_by(Field::Created)
            .unwrap()
            .order_by_ascending(Field::IssueKey)
            .unwrap();
        assert_eq!(
            clause.render(),
            "type = Bug order by priority desc, created, issueKey asc"
        );
        assert_eq!(clause.order_directives().len(), 3);
    }

    #[test]
    fn order_by_after_render_invalidates_cache() {
        let clause = type_is_bug().finalize(false).unwrap();
        assert_eq!(clause.render(), "type = Bug");
        let clause = clause.order_by(Field::Updated).unwrap();
        assert_eq!(clause.render(), "type = Bug order by updated");
    }

    #[test]
    fn order_by_multi_value_field_is_rejected() {
        let err = type_is_bug()
            .finalize(false)
            .unwrap()
            .order_by(Field::Labels)
            .unwrap_err();
        assert!(matches!(err, JqlError::InvalidArgument(_)));
        assert!(err.to_string().contains("labels"));
    }

    #[test]
    fn literal_renders_verbatim_and_ignores_ordering() {
        let clause = FinalClause::literal("(type = Bug or type = Task)")
            .order_by(Field::Created)
            .unwrap();
        assert!(clause.is_composite());
        assert_eq!(clause.render(), "(type = Bug or type = Task)");

        let err = clause.order_by(Field::Labels).unwrap_err();
        assert!(matches!(err, JqlError::InvalidArgument(_)));
    }

    #[test]
    fn finalize_applies_pending_negation() {
        let clause = type_is_bug().finalize(true).unwrap();
        assert_eq!(clause.render(), "type != Bug");
        assert!(!clause.is_composite());
    }
}
