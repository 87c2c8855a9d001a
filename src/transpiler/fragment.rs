//! Compiler output: SQL text plus ordered bindings.

use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// A piece of parameterized SQL.
///
/// Every `?` in `expression` corresponds, left to right, to one entry of
/// `bindings`. Concatenation keeps that correspondence. Bindings are stored
/// in driver form (see [`Value::into_binding`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fragment {
    pub expression: String,
    pub bindings: Vec<Value>,
}

impl Fragment {
    pub fn new(expression: impl Into<String>, bindings: Vec<Value>) -> Self {
        Self {
            expression: expression.into(),
            bindings: bindings.into_iter().map(Value::into_binding).collect(),
        }
    }

    /// Text with no bindings.
    pub fn text(expression: impl Into<String>) -> Self {
        Self::new(expression, vec![])
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// Append plain SQL text.
    pub fn push_str(&mut self, sql: &str) {
        self.expression.push_str(sql);
    }

    /// Append a placeholder bound to `value`.
    pub fn push_bind(&mut self, placeholder: &str, value: Value) {
        self.expression.push_str(placeholder);
        self.bindings.push(value.into_binding());
    }

    /// Append another fragment, text and bindings.
    pub fn append(&mut self, other: Fragment) {
        self.expression.push_str(&other.expression);
        self.bindings.extend(other.bindings);
    }

    /// Join non-empty fragments with `separator`.
    pub fn join(parts: impl IntoIterator<Item = Fragment>, separator: &str) -> Fragment {
        let mut out = Fragment::empty();
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !out.is_empty() {
                out.push_str(separator);
            }
            out.append(part);
        }
        out
    }

    /// Number of `?` markers in the expression.
    pub fn placeholder_count(&self) -> usize {
        self.expression.matches('?').count()
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skips_empty_parts() {
        let parts = vec![
            Fragment::new("`a` = ?", vec![Value::Int(1)]),
            Fragment::empty(),
            Fragment::new("`b` = ?", vec![Value::Int(2)]),
        ];
        let joined = Fragment::join(parts, " AND ");
        assert_eq!(joined.expression, "`a` = ? AND `b` = ?");
        assert_eq!(joined.bindings, vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(joined.placeholder_count(), 2);
    }

    #[test]
    fn test_list_binds_as_joined_string() {
        let mut fragment = Fragment::new("`a` IN (?)", vec![Value::from(vec!["x", "y"])]);
        fragment.push_str(" AND `b` = ");
        fragment.push_bind("?", Value::from(vec![1, 2]));
        assert_eq!(fragment.bindings, vec![Value::from("x,y"), Value::from("1,2")]);
    }
}
