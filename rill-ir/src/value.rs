//! Literal and formula values.

use serde::Serialize;

/// A formula evaluated by the engine, as opposed to a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Expression {
    value: String,
}

impl Expression {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Mark `value` as a formula.
///
/// ```
/// use rill_ir::{FieldValue, expr};
///
/// let value: FieldValue = expr("config.maxOrderAmount").into();
/// assert!(value.is_expression());
/// ```
pub fn expr(value: impl Into<String>) -> Expression {
    Expression::new(value)
}

/// Value of an injected field: either a literal string or an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    Literal(String),
    Expression(Expression),
}

impl FieldValue {
    pub fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }

    /// The raw text, whichever form it takes.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Expression(e) => e.value(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Expression> for FieldValue {
    fn from(value: Expression) -> Self {
        Self::Expression(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_not_expression() {
        let value = FieldValue::from("50");
        assert!(!value.is_expression());
        assert_eq!(value.as_str(), "50");
    }

    #[test]
    fn test_expression_marker() {
        let value = FieldValue::from(expr("config.val"));
        assert!(value.is_expression());
        assert_eq!(value.as_str(), "config.val");
    }

    #[test]
    fn test_expression_text_is_not_inspected() {
        // A string that looks like a formula stays a literal unless marked.
        let value = FieldValue::from("${config.val}");
        assert!(!value.is_expression());
    }
}
