//! Predicate compilers and the WHERE clause compiler.

use crate::ast::{ColumnRef, Operator, SelectQuery, Value, WhereGroup};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::dml::select::SelectCompiler;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::Context;
use crate::transpiler::statements::compile_statement;

/// `col` OP ?; nullability operators take no placeholder.
///
/// `IS` / `IS NOT` only accept literals: booleans render `IS TRUE` /
/// `IS FALSE`, null renders `IS NULL`.
pub fn compile_comparison(
    ctx: &Context<'_>,
    column: &ColumnRef,
    op: Operator,
    value: &Value,
) -> SqlResult<Fragment> {
    let mut fragment = Fragment::text(format!("{} {}", ctx.column(column), op.sql_symbol()));
    if matches!(op, Operator::Is | Operator::IsNot) {
        let literal = match value {
            Value::Bool(true) => "TRUE",
            Value::Bool(false) => "FALSE",
            Value::Null => "NULL",
            other => {
                return Err(SqlError::invalid(format!(
                    "{} on '{}' needs a boolean or null, got {}",
                    op.sql_symbol(),
                    column.name,
                    other
                )));
            }
        };
        fragment.push_str(" ");
        fragment.push_str(literal);
    } else if !op.is_nullability() {
        fragment.push_str(" ");
        fragment.push_bind(ctx.placeholder(), value.clone());
    }
    Ok(fragment)
}

/// `col` [NOT ]BETWEEN ? AND ?
pub fn compile_between(
    ctx: &Context<'_>,
    column: &ColumnRef,
    low: &Value,
    high: &Value,
    negated: bool,
) -> Fragment {
    let not = if negated { "NOT " } else { "" };
    let mut fragment = Fragment::text(format!("{} {}BETWEEN ", ctx.column(column), not));
    fragment.push_bind(ctx.placeholder(), low.clone());
    fragment.push_str(" AND ");
    fragment.push_bind(ctx.placeholder(), high.clone());
    fragment
}

/// `col` [NOT ]IN (?,?,...)
pub fn compile_in(ctx: &Context<'_>, column: &ColumnRef, values: &[Value], negated: bool) -> Fragment {
    let not = if negated { "NOT " } else { "" };
    let placeholders = vec![ctx.placeholder(); values.len()].join(",");
    Fragment::new(
        format!("{} {}IN ({})", ctx.column(column), not, placeholders),
        values.to_vec(),
    )
}

/// `( child predicates )`, or nothing for an empty group.
pub fn compile_nested(ctx: &Context<'_>, group: &WhereGroup) -> SqlResult<Fragment> {
    let inner = compile_where(ctx, group)?;
    if inner.is_empty() {
        return Ok(inner);
    }
    let mut fragment = Fragment::text("( ");
    fragment.append(inner);
    fragment.push_str(" )");
    Ok(fragment)
}

/// `[NOT ]EXISTS ( subquery )`
pub fn compile_exists(ctx: &Context<'_>, query: &SelectQuery, negated: bool) -> SqlResult<Fragment> {
    let subquery = SelectCompiler::new(query)?.compile(ctx.generator)?;
    let not = if negated { "NOT " } else { "" };
    let mut fragment = Fragment::text(format!("{}EXISTS ( ", not));
    fragment.append(subquery);
    fragment.push_str(" )");
    Ok(fragment)
}

/// Join a group's predicates with its logical operator.
///
/// Returns an empty fragment (and no WHERE keyword is emitted by callers)
/// when the group has no renderable predicate.
pub fn compile_where(ctx: &Context<'_>, group: &WhereGroup) -> SqlResult<Fragment> {
    let parts = group
        .statements
        .iter()
        .map(|statement| compile_statement(ctx, statement))
        .collect::<SqlResult<Vec<_>>>()?;
    let separator = format!(" {} ", group.op.as_sql());
    Ok(Fragment::join(parts, &separator))
}

/// ` WHERE <predicates>` or nothing.
pub fn where_clause(ctx: &Context<'_>, group: &WhereGroup) -> SqlResult<Fragment> {
    let predicates = compile_where(ctx, group)?;
    if predicates.is_empty() {
        return Ok(predicates);
    }
    let mut fragment = Fragment::text(" WHERE ");
    fragment.append(predicates);
    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{between, eq, is_in, not_between, raw};
    use crate::ast::{LogicalOp, Raw, WhereBuilder};
    use crate::transpiler::sql::MysqlGenerator;

    fn render(group: &WhereGroup) -> Fragment {
        let generator = MysqlGenerator::new();
        compile_where(&Context::new(&generator), group).unwrap()
    }

    #[test]
    fn test_in_and_between() {
        let group = WhereGroup {
            statements: vec![is_in("id", [1, 2, 3])],
            op: LogicalOp::And,
        };
        let fragment = render(&group);
        assert_eq!(fragment.expression, "`id` IN (?,?,?)");
        assert_eq!(fragment.bindings, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

        let group = WhereGroup::new().filter("id", Operator::Eq, 0).clear_where();
        assert!(render(&group).is_empty());

        let group = WhereGroup {
            statements: vec![not_between("id", 1, 2), between("age", 18, 30)],
            op: LogicalOp::And,
        };
        let fragment = render(&group);
        assert_eq!(
            fragment.expression,
            "`id` NOT BETWEEN ? AND ? AND `age` BETWEEN ? AND ?"
        );
        assert_eq!(fragment.placeholder_count(), fragment.bindings.len());
    }

    #[test]
    fn test_empty_in_list() {
        let group = WhereGroup::new().where_in("id", Vec::<i64>::new());
        let fragment = render(&group);
        assert_eq!(fragment.expression, "`id` IN ()");
        assert!(fragment.bindings.is_empty());
    }

    #[test]
    fn test_null_comparison_has_no_placeholder() {
        let group = WhereGroup::new().where_eq("Id", Value::Null);
        let fragment = render(&group);
        assert_eq!(fragment.expression, "`Id` IS NULL");
        assert!(fragment.bindings.is_empty());
    }

    #[test]
    fn test_is_takes_boolean_literals() {
        let group = WhereGroup::new()
            .filter("active", Operator::Is, true)
            .filter("deleted", Operator::IsNot, false);
        let fragment = render(&group);
        assert_eq!(fragment.expression, "`active` IS TRUE AND `deleted` IS NOT FALSE");
        assert!(fragment.bindings.is_empty());

        let group = WhereGroup::new().filter("active", Operator::Is, 1);
        let generator = MysqlGenerator::new();
        assert!(matches!(
            compile_where(&Context::new(&generator), &group),
            Err(crate::error::SqlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_nested_group_is_skipped() {
        let group = WhereGroup::new()
            .where_group(|g| g)
            .where_eq("a", 1)
            .where_raw(Raw::new("foo = bar"));
        let fragment = render(&group);
        assert_eq!(fragment.expression, "`a` = ? AND foo = bar");
    }

    #[test]
    fn test_raw_predicate_bindings() {
        let group = WhereGroup {
            statements: vec![eq("a", 1), raw(Raw::with_bindings("b > ?", [2]))],
            op: LogicalOp::Or,
        };
        let fragment = render(&group);
        assert_eq!(fragment.expression, "`a` = ? OR b > ?");
        assert_eq!(fragment.bindings, vec![Value::Int(1), Value::Int(2)]);
    }
}
