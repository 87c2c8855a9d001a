//! Fluent WHERE methods shared by SELECT, UPDATE, DELETE and nested groups.

use crate::ast::builders::conditions;
use crate::ast::{ColumnRef, LogicalOp, Operator, Raw, SelectQuery, Statement, Value, WhereGroup};
use crate::error::SqlResult;

/// Accumulates predicates into a [`WhereGroup`].
///
/// `or_*` methods switch the group's combining operator to OR, so
/// `where_eq(a).or_where_eq(b)` renders `a = ? OR b = ?`.
pub trait WhereBuilder: Sized {
    /// The predicate group this builder appends to.
    fn where_group_mut(&mut self) -> &mut WhereGroup;

    /// Append a predicate node, optionally switching the group to OR.
    fn push_where(mut self, statement: Statement, op: LogicalOp) -> Self {
        let group = self.where_group_mut();
        if op == LogicalOp::Or {
            group.op = LogicalOp::Or;
        }
        group.statements.push(statement);
        self
    }

    /// Add a comparison with a typed operator.
    fn filter(self, column: impl Into<ColumnRef>, op: Operator, value: impl Into<Value>) -> Self {
        self.push_where(conditions::compare(column, op, value), LogicalOp::And)
    }

    /// Add an OR comparison with a typed operator.
    fn or_filter(self, column: impl Into<ColumnRef>, op: Operator, value: impl Into<Value>) -> Self {
        self.push_where(conditions::compare(column, op, value), LogicalOp::Or)
    }

    /// Add a comparison from an operator token (`>=`, `like`, ...).
    ///
    /// # Example
    /// ```
    /// use orm_sql::prelude::*;
    /// let query = SelectQuery::from("users").where_op("id", ">=", 1).unwrap();
    /// assert!(SelectQuery::from("users").where_op("id", ">==", 1).is_err());
    /// ```
    fn where_op(self, column: impl Into<ColumnRef>, op: &str, value: impl Into<Value>) -> SqlResult<Self> {
        let op = Operator::parse(op)?;
        Ok(self.filter(column, op, value))
    }

    /// OR variant of [`WhereBuilder::where_op`].
    fn or_where_op(self, column: impl Into<ColumnRef>, op: &str, value: impl Into<Value>) -> SqlResult<Self> {
        let op = Operator::parse(op)?;
        Ok(self.or_filter(column, op, value))
    }

    /// Add a WHERE equals condition; `Value::Null` becomes IS NULL.
    fn where_eq(self, column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        self.filter(column, Operator::Eq, value)
    }

    fn or_where_eq(self, column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        self.or_filter(column, Operator::Eq, value)
    }

    /// One equality per `(column, value)` pair, ANDed.
    fn where_all<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<ColumnRef>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .fold(self, |builder, (column, value)| builder.where_eq(column, value))
    }

    fn where_null(self, column: impl Into<ColumnRef>) -> Self {
        self.push_where(conditions::is_null(column), LogicalOp::And)
    }

    fn where_not_null(self, column: impl Into<ColumnRef>) -> Self {
        self.push_where(conditions::is_not_null(column), LogicalOp::And)
    }

    fn where_in<V: Into<Value>>(self, column: impl Into<ColumnRef>, values: impl IntoIterator<Item = V>) -> Self {
        self.push_where(conditions::is_in(column, values), LogicalOp::And)
    }

    fn or_where_in<V: Into<Value>>(self, column: impl Into<ColumnRef>, values: impl IntoIterator<Item = V>) -> Self {
        self.push_where(conditions::is_in(column, values), LogicalOp::Or)
    }

    fn where_not_in<V: Into<Value>>(self, column: impl Into<ColumnRef>, values: impl IntoIterator<Item = V>) -> Self {
        self.push_where(conditions::not_in(column, values), LogicalOp::And)
    }

    fn where_between(self, column: impl Into<ColumnRef>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        self.push_where(conditions::between(column, low, high), LogicalOp::And)
    }

    fn where_not_between(self, column: impl Into<ColumnRef>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        self.push_where(conditions::not_between(column, low, high), LogicalOp::And)
    }

    fn where_raw(self, raw: Raw) -> Self {
        self.push_where(conditions::raw(raw), LogicalOp::And)
    }

    /// `WHERE TRUE` / `WHERE FALSE`
    fn where_bool(self, value: bool) -> Self {
        let text = if value { "TRUE" } else { "FALSE" };
        self.where_raw(Raw::new(text))
    }

    /// Add a parenthesized group built by `f`.
    ///
    /// # Example
    /// ```
    /// use orm_sql::prelude::*;
    /// let query = SelectQuery::from("users")
    ///     .where_group(|g| g.where_eq("a", 1).where_eq("b", 2))
    ///     .or_where_eq("f", 3);
    /// ```
    fn where_group<F>(self, f: F) -> Self
    where
        F: FnOnce(WhereGroup) -> WhereGroup,
    {
        self.push_where(conditions::group(f(WhereGroup::new())), LogicalOp::And)
    }

    fn or_where_group<F>(self, f: F) -> Self
    where
        F: FnOnce(WhereGroup) -> WhereGroup,
    {
        self.push_where(conditions::group(f(WhereGroup::new())), LogicalOp::Or)
    }

    fn where_exists(self, query: SelectQuery) -> Self {
        self.push_where(conditions::exists(query), LogicalOp::And)
    }

    fn where_not_exists(self, query: SelectQuery) -> Self {
        self.push_where(conditions::not_exists(query), LogicalOp::And)
    }

    /// Drop every predicate and reset the operator to AND.
    fn clear_where(mut self) -> Self {
        *self.where_group_mut() = WhereGroup::new();
        self
    }
}

impl WhereBuilder for WhereGroup {
    fn where_group_mut(&mut self) -> &mut WhereGroup {
        self
    }
}
