//! UPDATE SQL generation.

use crate::ast::UpdateQuery;
use crate::error::{SqlError, SqlResult};
use crate::transpiler::conditions::where_clause;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::{Context, TableRef};
use crate::transpiler::traits::SqlGenerator;

/// Compiles an [`UpdateQuery`].
#[derive(Debug)]
pub struct UpdateCompiler<'q> {
    query: &'q UpdateQuery,
    table: TableRef<'q>,
}

impl<'q> UpdateCompiler<'q> {
    pub fn new(query: &'q UpdateQuery) -> SqlResult<Self> {
        let table = TableRef::resolve(
            query.table.as_deref(),
            query.schema.as_deref(),
            query.table_alias.as_deref(),
        )?;
        if query.values.is_empty() {
            return Err(SqlError::invalid("UPDATE requires at least one SET value"));
        }
        Ok(Self { query, table })
    }

    /// `UPDATE t SET `a` = ?,`b` = ?[ WHERE ...]`
    ///
    /// No WHERE keyword is emitted when there are no predicates.
    pub fn compile(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        tracing::debug!("compiling UPDATE for table '{}'", self.table.table);
        let ctx = Context::new(generator).with_alias(self.table.alias);

        let mut sql = Fragment::text(format!("UPDATE {} SET ", self.table.name_aliased(generator)));
        let assignments = self.query.values.iter().map(|(column, value)| {
            let mut item = Fragment::text(format!("{} = ", ctx.quote(column)));
            item.push_bind(ctx.placeholder(), value.clone());
            item
        });
        sql.append(Fragment::join(assignments, ","));
        sql.append(where_clause(&ctx, &self.query.filter)?);

        tracing::trace!("UPDATE compiled: {} ({} bindings)", sql.expression, sql.bindings.len());
        Ok(sql)
    }
}
