//! DELETE / TRUNCATE SQL generation.

use crate::ast::{DeleteQuery, Value};
use crate::error::SqlResult;
use crate::transpiler::conditions::where_clause;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::{Context, TableRef};
use crate::transpiler::traits::SqlGenerator;

/// Compiles a [`DeleteQuery`].
#[derive(Debug)]
pub struct DeleteCompiler<'q> {
    query: &'q DeleteQuery,
    table: TableRef<'q>,
}

impl<'q> DeleteCompiler<'q> {
    pub fn new(query: &'q DeleteQuery) -> SqlResult<Self> {
        let table = TableRef::resolve(
            query.table.as_deref(),
            query.schema.as_deref(),
            query.table_alias.as_deref(),
        )?;
        Ok(Self { query, table })
    }

    pub fn compile(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        if self.query.truncate {
            tracing::debug!("compiling TRUNCATE for table '{}'", self.table.table);
            return Ok(Fragment::text(format!("TRUNCATE TABLE {}", self.table.name(generator))));
        }

        tracing::debug!("compiling DELETE for table '{}'", self.table.table);
        let ctx = Context::new(generator).with_alias(self.table.alias);

        let mut sql = Fragment::text(format!("DELETE FROM {}", self.table.name_aliased(generator)));
        sql.append(where_clause(&ctx, &self.query.filter)?);
        if self.query.limits.limit > 0 {
            sql.push_str(" LIMIT ");
            sql.push_bind(ctx.placeholder(), Value::UInt(self.query.limits.limit));
        }

        tracing::trace!("DELETE compiled: {} ({} bindings)", sql.expression, sql.bindings.len());
        Ok(sql)
    }
}
