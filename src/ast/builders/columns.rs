//! Column builders for select lists.

use crate::ast::{ColumnMethod, ColumnRef, DateWrap, Raw, Statement};

/// Plain column reference.
pub fn col(column: impl Into<ColumnRef>) -> Statement {
    Statement::Column {
        column: column.into(),
        alias: None,
    }
}

/// Aliased column reference (`col` as `alias`).
pub fn col_as(column: impl Into<ColumnRef>, alias: impl Into<String>) -> Statement {
    Statement::Column {
        column: column.into(),
        alias: Some(alias.into()),
    }
}

/// Wildcard (`*`).
pub fn star() -> Statement {
    col("*")
}

/// Aggregate call over a column, `*` for all rows.
pub fn aggregate(method: ColumnMethod, column: impl Into<ColumnRef>, alias: Option<String>) -> Statement {
    Statement::ColumnMethod {
        method,
        column: column.into(),
        alias,
    }
}

pub fn count(column: impl Into<ColumnRef>) -> Statement {
    aggregate(ColumnMethod::Count, column, None)
}

pub fn sum(column: impl Into<ColumnRef>) -> Statement {
    aggregate(ColumnMethod::Sum, column, None)
}

pub fn avg(column: impl Into<ColumnRef>) -> Statement {
    aggregate(ColumnMethod::Avg, column, None)
}

pub fn min(column: impl Into<ColumnRef>) -> Statement {
    aggregate(ColumnMethod::Min, column, None)
}

pub fn max(column: impl Into<ColumnRef>) -> Statement {
    aggregate(ColumnMethod::Max, column, None)
}

/// DATE(`col`)
pub fn date(column: impl Into<ColumnRef>) -> Statement {
    Statement::DateWrap {
        wrap: DateWrap::Date,
        column: column.into(),
        alias: None,
    }
}

/// DATETIME(`col`)
pub fn datetime(column: impl Into<ColumnRef>) -> Statement {
    Statement::DateWrap {
        wrap: DateWrap::DateTime,
        column: column.into(),
        alias: None,
    }
}

/// Verbatim select expression.
pub fn raw_column(raw: Raw) -> Statement {
    Statement::ColumnRaw(raw)
}
