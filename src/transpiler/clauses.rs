//! Clause compilers: column list, joins, GROUP BY, ORDER BY and LIMIT.

use crate::ast::{GroupBy, Join, Limits, OrderBy, Statement, Value};
use crate::error::SqlResult;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::Context;
use crate::transpiler::statements::{compile_group_by, compile_join, compile_statement};

/// Select list joined with `,`; empty when no column was selected.
pub fn columns_clause(ctx: &Context<'_>, columns: &[Statement]) -> SqlResult<Fragment> {
    let parts = columns
        .iter()
        .map(|column| compile_statement(ctx, column))
        .collect::<SqlResult<Vec<_>>>()?;
    Ok(Fragment::join(parts, ","))
}

/// Joins separated by a single space.
pub fn join_clause(ctx: &Context<'_>, joins: &[Join]) -> Fragment {
    Fragment::join(joins.iter().map(|join| compile_join(ctx, join)), " ")
}

/// `GROUP BY a,b` or nothing.
pub fn group_by_clause(ctx: &Context<'_>, groups: &[GroupBy]) -> Fragment {
    let items = Fragment::join(groups.iter().map(|group| compile_group_by(ctx, group)), ",");
    if items.is_empty() {
        return items;
    }
    let mut fragment = Fragment::text("GROUP BY ");
    fragment.append(items);
    fragment
}

/// ` ORDER BY ? ?` with the column and direction bound.
pub fn order_by_clause(ctx: &Context<'_>, sort: Option<&OrderBy>) -> Fragment {
    let Some(sort) = sort else {
        return Fragment::empty();
    };
    let mut fragment = Fragment::text(" ORDER BY ");
    fragment.push_bind(ctx.placeholder(), Value::String(sort.column.clone()));
    fragment.push_str(" ");
    fragment.push_bind(ctx.placeholder(), Value::String(sort.order.as_sql().to_string()));
    fragment
}

/// ` LIMIT ?[ OFFSET ?]`.
///
/// An offset without a limit renders the dialect's max row count as LIMIT.
pub fn limit_clause(ctx: &Context<'_>, limits: Limits) -> Fragment {
    let mut fragment = Fragment::empty();
    if limits.limit > 0 {
        fragment.push_str(" LIMIT ");
        fragment.push_bind(ctx.placeholder(), Value::UInt(limits.limit));
    } else if limits.offset > 0 {
        fragment.push_str(&format!(" LIMIT {}", ctx.generator.max_limit()));
    }
    if limits.offset > 0 {
        fragment.push_str(" OFFSET ");
        fragment.push_bind(ctx.placeholder(), Value::UInt(limits.offset));
    }
    fragment
}
