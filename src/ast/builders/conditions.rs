//! Predicate builders for WHERE clauses.

use crate::ast::{ColumnRef, Operator, Raw, SelectQuery, Statement, Value, WhereGroup};

/// Build a comparison, turning `= NULL` / `!= NULL` into IS [NOT] NULL.
pub fn compare(column: impl Into<ColumnRef>, op: Operator, value: impl Into<Value>) -> Statement {
    let value = value.into();
    let op = match (op, value.is_null()) {
        (Operator::Eq | Operator::Is, true) => Operator::IsNull,
        (Operator::Ne | Operator::LtGt | Operator::IsNot, true) => Operator::IsNotNull,
        (op, _) => op,
    };

    Statement::Comparison {
        column: column.into(),
        op,
        value: if op.is_nullability() { Value::Null } else { value },
    }
}

/// Create an equality condition (column = value)
pub fn eq(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Statement {
    compare(column, Operator::Eq, value)
}

/// Create a not-equal condition (column != value)
pub fn ne(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Statement {
    compare(column, Operator::Ne, value)
}

/// Create a greater-than condition (column > value)
pub fn gt(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Statement {
    compare(column, Operator::Gt, value)
}

/// Create a greater-than-or-equal condition (column >= value)
pub fn gte(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Statement {
    compare(column, Operator::Gte, value)
}

/// Create a less-than condition (column < value)
pub fn lt(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Statement {
    compare(column, Operator::Lt, value)
}

/// Create a less-than-or-equal condition (column <= value)
pub fn lte(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Statement {
    compare(column, Operator::Lte, value)
}

/// Create a LIKE condition
pub fn like(column: impl Into<ColumnRef>, pattern: impl Into<Value>) -> Statement {
    compare(column, Operator::Like, pattern)
}

/// Create an IS NULL condition
pub fn is_null(column: impl Into<ColumnRef>) -> Statement {
    compare(column, Operator::IsNull, Value::Null)
}

/// Create an IS NOT NULL condition
pub fn is_not_null(column: impl Into<ColumnRef>) -> Statement {
    compare(column, Operator::IsNotNull, Value::Null)
}

/// Create an IN condition (column IN (values))
pub fn is_in<V: Into<Value>>(column: impl Into<ColumnRef>, values: impl IntoIterator<Item = V>) -> Statement {
    Statement::In {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        negated: false,
    }
}

/// Create a NOT IN condition (column NOT IN (values))
pub fn not_in<V: Into<Value>>(column: impl Into<ColumnRef>, values: impl IntoIterator<Item = V>) -> Statement {
    Statement::In {
        column: column.into(),
        values: values.into_iter().map(Into::into).collect(),
        negated: true,
    }
}

/// Create a BETWEEN condition (column BETWEEN low AND high)
pub fn between(column: impl Into<ColumnRef>, low: impl Into<Value>, high: impl Into<Value>) -> Statement {
    Statement::Between {
        column: column.into(),
        low: low.into(),
        high: high.into(),
        negated: false,
    }
}

/// Create a NOT BETWEEN condition
pub fn not_between(column: impl Into<ColumnRef>, low: impl Into<Value>, high: impl Into<Value>) -> Statement {
    Statement::Between {
        column: column.into(),
        low: low.into(),
        high: high.into(),
        negated: true,
    }
}

/// Verbatim predicate.
pub fn raw(raw: Raw) -> Statement {
    Statement::Raw(raw)
}

/// Parenthesized predicate group.
pub fn group(group: WhereGroup) -> Statement {
    Statement::NestedWhere(group)
}

/// EXISTS ( subquery )
pub fn exists(query: SelectQuery) -> Statement {
    Statement::Exists {
        query: Box::new(query),
        negated: false,
    }
}

/// NOT EXISTS ( subquery )
pub fn not_exists(query: SelectQuery) -> Statement {
    Statement::Exists {
        query: Box::new(query),
        negated: true,
    }
}
