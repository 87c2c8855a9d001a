//! Statement compilers for column, raw, join and group-by nodes.
//!
//! Predicate variants are forwarded to [`crate::transpiler::conditions`].

use crate::ast::{ColumnMethod, ColumnRef, GroupBy, Join, Raw, Statement};
use crate::error::SqlResult;
use crate::transpiler::conditions;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::Context;

/// Compile one AST node.
pub fn compile_statement(ctx: &Context<'_>, statement: &Statement) -> SqlResult<Fragment> {
    let fragment = match statement {
        Statement::Raw(raw) | Statement::ColumnRaw(raw) => compile_raw(raw),
        Statement::Column { column, alias } => compile_column(ctx, column, alias.as_deref()),
        Statement::ColumnMethod {
            method,
            column,
            alias,
        } => compile_column_method(ctx, *method, column, alias.as_deref()),
        Statement::DateWrap {
            wrap,
            column,
            alias,
        } => {
            let inner = format!("{}({})", wrap, ctx.column(column));
            Fragment::text(ctx.aliased(inner, alias.as_deref()))
        }
        Statement::Comparison { column, op, value } => {
            conditions::compile_comparison(ctx, column, *op, value)?
        }
        Statement::Between {
            column,
            low,
            high,
            negated,
        } => conditions::compile_between(ctx, column, low, high, *negated),
        Statement::In {
            column,
            values,
            negated,
        } => conditions::compile_in(ctx, column, values, *negated),
        Statement::NestedWhere(group) => conditions::compile_nested(ctx, group)?,
        Statement::Exists { query, negated } => conditions::compile_exists(ctx, query, *negated)?,
    };
    Ok(fragment)
}

/// Verbatim text with its own bindings.
pub fn compile_raw(raw: &Raw) -> Fragment {
    Fragment::new(raw.query.clone(), raw.bindings.clone())
}

fn compile_column(ctx: &Context<'_>, column: &ColumnRef, alias: Option<&str>) -> Fragment {
    Fragment::text(ctx.aliased(ctx.column(column), alias))
}

fn compile_column_method(
    ctx: &Context<'_>,
    method: ColumnMethod,
    column: &ColumnRef,
    alias: Option<&str>,
) -> Fragment {
    let inner = if column.is_wildcard() {
        "*".to_string()
    } else {
        ctx.column(column)
    };
    Fragment::text(ctx.aliased(format!("{}({})", method, inner), alias))
}

/// `METHOD `table` [as `alias`] ON primary = foreign`, or `METHOD <raw>`.
pub fn compile_join(ctx: &Context<'_>, join: &Join) -> Fragment {
    match join {
        Join::Table {
            method,
            table,
            alias,
            primary_key,
            foreign_key,
        } => {
            let table = ctx.aliased(ctx.quote(table), alias.as_deref());
            Fragment::text(format!(
                "{} {} ON {} = {}",
                method,
                table,
                ctx.column_own(primary_key),
                ctx.column_own(foreign_key)
            ))
        }
        Join::Raw { method, query } => {
            let mut fragment = Fragment::text(format!("{} ", method));
            fragment.append(compile_raw(query));
            fragment
        }
    }
}

pub fn compile_group_by(ctx: &Context<'_>, group: &GroupBy) -> Fragment {
    match group {
        GroupBy::Column(column) => Fragment::text(ctx.column(column)),
        GroupBy::Raw(raw) => compile_raw(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{col_as, count, star};
    use crate::ast::{JoinMethod, Value};
    use crate::transpiler::sql::MysqlGenerator;

    #[test]
    fn test_column_nodes() {
        let generator = MysqlGenerator::new();
        let ctx = Context::new(&generator);
        assert_eq!(
            compile_statement(&ctx, &col_as("foo", "f")).unwrap().expression,
            "`foo` as `f`"
        );
        assert_eq!(compile_statement(&ctx, &count("*")).unwrap().expression, "COUNT(*)");

        let aliased = ctx.with_alias(Some("u"));
        assert_eq!(compile_statement(&aliased, &star()).unwrap().expression, "`u`.*");
    }

    #[test]
    fn test_raw_join_forwards_bindings() {
        let generator = MysqlGenerator::new();
        let ctx = Context::new(&generator);
        let join = Join::Raw {
            method: JoinMethod::Left,
            query: Raw::with_bindings("client ON client.id = ?", [5]),
        };
        let fragment = compile_join(&ctx, &join);
        assert_eq!(fragment.expression, "LEFT JOIN client ON client.id = ?");
        assert_eq!(fragment.bindings, vec![Value::Int(5)]);
    }
}
