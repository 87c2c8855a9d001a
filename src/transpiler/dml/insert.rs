//! INSERT SQL generation, including ON DUPLICATE KEY UPDATE.

use crate::ast::{DuplicateColumn, InsertQuery, InsertValue, OnDuplicate};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::{Context, TableRef};
use crate::transpiler::statements::compile_raw;
use crate::transpiler::traits::SqlGenerator;

/// Compiles an [`InsertQuery`].
#[derive(Debug)]
pub struct InsertCompiler<'q> {
    query: &'q InsertQuery,
    table: TableRef<'q>,
    columns: Vec<&'q str>,
}

impl<'q> InsertCompiler<'q> {
    pub fn new(query: &'q InsertQuery) -> SqlResult<Self> {
        let table = TableRef::resolve(query.table.as_deref(), query.schema.as_deref(), None)?;
        if query.rows.is_empty() {
            return Err(SqlError::invalid("INSERT requires at least one row"));
        }
        let columns = query.column_names();
        if columns.is_empty() {
            return Err(SqlError::invalid("INSERT requires at least one column"));
        }
        Ok(Self { query, table, columns })
    }

    /// `INSERT [IGNORE ]INTO t (`a`,`b`) VALUES (?,DEFAULT),(...)[ ON DUPLICATE KEY UPDATE ...]`
    pub fn compile(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        tracing::debug!(
            "compiling INSERT for table '{}' ({} rows)",
            self.table.table,
            self.query.rows.len()
        );
        let ctx = Context::new(generator);

        let ignore = if self.query.ignore { "IGNORE " } else { "" };
        let column_list = self
            .columns
            .iter()
            .map(|c| ctx.quote(c))
            .collect::<Vec<_>>()
            .join(",");
        let mut sql = Fragment::text(format!(
            "INSERT {}INTO {} ({}) VALUES ",
            ignore,
            self.table.name(generator),
            column_list
        ));

        let rows = self.query.rows.iter().map(|row| {
            let fields = self.columns.iter().map(|column| match row.get(column) {
                Some(InsertValue::Value(value)) => Fragment::new(ctx.placeholder(), vec![value.clone()]),
                Some(InsertValue::Default) | None => Fragment::text("DEFAULT"),
            });
            let mut tuple = Fragment::text("(");
            tuple.append(Fragment::join(fields, ","));
            tuple.push_str(")");
            tuple
        });
        sql.append(Fragment::join(rows, ","));

        if let Some(on_duplicate) = &self.query.on_duplicate {
            let clause = self.on_duplicate_clause(&ctx, on_duplicate)?;
            if !clause.is_empty() {
                sql.push_str(" ");
                sql.append(clause);
            }
        }

        tracing::trace!("INSERT compiled: {} ({} bindings)", sql.expression, sql.bindings.len());
        Ok(sql)
    }

    /// Column items are bound to the value inserted by the first row.
    fn on_duplicate_clause(&self, ctx: &Context<'_>, on_duplicate: &OnDuplicate) -> SqlResult<Fragment> {
        let first_row = self.query.rows.first();
        let items = on_duplicate
            .columns
            .iter()
            .map(|item| match item {
                DuplicateColumn::Column(column) => {
                    if !self.columns.contains(&column.as_str()) {
                        return Err(SqlError::invalid(format!(
                            "ON DUPLICATE KEY column '{}' is not inserted",
                            column
                        )));
                    }
                    let mut fragment = Fragment::text(format!("{} = ", ctx.quote(column)));
                    match first_row.and_then(|row| row.get(column)) {
                        Some(InsertValue::Value(value)) => fragment.push_bind(ctx.placeholder(), value.clone()),
                        Some(InsertValue::Default) | None => fragment.push_str("DEFAULT"),
                    }
                    Ok(fragment)
                }
                DuplicateColumn::Raw(raw) => Ok(compile_raw(raw)),
            })
            .collect::<SqlResult<Vec<_>>>()?;

        let items = Fragment::join(items, ",");
        if items.is_empty() {
            return Ok(items);
        }
        let mut fragment = Fragment::text("ON DUPLICATE KEY UPDATE ");
        fragment.append(items);
        Ok(fragment)
    }
}
