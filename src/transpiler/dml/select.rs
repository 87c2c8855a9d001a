//! SELECT SQL generation.

use crate::ast::{SelectQuery, Statement};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::clauses::{columns_clause, group_by_clause, join_clause, limit_clause, order_by_clause};
use crate::transpiler::conditions::where_clause;
use crate::transpiler::dml::cte::RecursiveCompiler;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::{Context, TableRef};
use crate::transpiler::traits::SqlGenerator;

/// Compiles a [`SelectQuery`].
#[derive(Debug)]
pub struct SelectCompiler<'q> {
    query: &'q SelectQuery,
    table: TableRef<'q>,
}

impl<'q> SelectCompiler<'q> {
    pub fn new(query: &'q SelectQuery) -> SqlResult<Self> {
        let table = TableRef::resolve(
            query.table.as_deref(),
            query.schema.as_deref(),
            query.table_alias.as_deref(),
        )?;
        if query.distinct && !has_explicit_columns(&query.columns) {
            return Err(SqlError::invalid(
                "DISTINCT requires at least one explicit, non-wildcard column",
            ));
        }
        Ok(Self { query, table })
    }

    /// Generate SELECT SQL.
    pub fn compile(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        if let Some(recursive) = &self.query.recursive {
            return RecursiveCompiler::new(self.query, recursive)?.compile(generator);
        }

        tracing::debug!("compiling SELECT for table '{}'", self.table.table);
        let ctx = Context::new(generator).with_alias(self.table.alias);
        let query = self.query;

        let mut sql = Fragment::text(if query.distinct {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        });

        let columns = columns_clause(&ctx, &query.columns)?;
        if columns.is_empty() {
            sql.push_str("*");
        } else {
            sql.append(columns);
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.table.name_aliased(generator));

        let joins = join_clause(&ctx, &query.joins);
        if !joins.is_empty() {
            sql.push_str(" ");
            sql.append(joins);
        }

        sql.append(where_clause(&ctx, &query.filter)?);

        let groups = group_by_clause(&ctx, &query.group_by);
        if !groups.is_empty() {
            sql.push_str(" ");
            sql.append(groups);
        }

        sql.append(limit_clause(&ctx, query.limits));
        sql.append(order_by_clause(&ctx, query.sort.as_ref()));

        tracing::trace!("SELECT compiled: {} ({} bindings)", sql.expression, sql.bindings.len());
        Ok(sql)
    }
}

fn has_explicit_columns(columns: &[Statement]) -> bool {
    !columns.is_empty()
        && !columns
            .iter()
            .any(|c| matches!(c, Statement::Column { column, .. } if column.is_wildcard()))
}
