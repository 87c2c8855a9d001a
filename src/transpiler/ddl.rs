//! DDL SQL generation: column definitions, foreign keys, CREATE TABLE and CREATE INDEX.

use crate::ast::{ColumnDefinition, ColumnType, DefaultValue, ForeignKeyDefinition, IndexQuery, TableQuery};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::fragment::Fragment;
use crate::transpiler::naming::TableRef;
use crate::transpiler::traits::{SqlGenerator, quote_literal};

const DEFAULT_VARCHAR_LENGTH: u32 = 255;
const DEFAULT_PRECISION: u32 = 8;
const DEFAULT_SCALE: u32 = 2;

/// Compiles one [`ColumnDefinition`].
#[derive(Debug)]
pub struct ColumnCompiler<'q> {
    column: &'q ColumnDefinition,
}

impl<'q> ColumnCompiler<'q> {
    pub fn new(column: &'q ColumnDefinition) -> SqlResult<Self> {
        if column.name.trim().is_empty() {
            return Err(SqlError::invalid("column name cannot be empty"));
        }
        if matches!(column.column_type, ColumnType::Set | ColumnType::Enum) && column.values.is_empty() {
            return Err(SqlError::invalid(format!(
                "column '{}' of type {} needs at least one member",
                column.name,
                column.column_type.keyword()
            )));
        }
        Ok(Self { column })
    }

    /// `` `name` TYPE [UNSIGNED] [CHARACTER SET 'x'] [COLLATE 'x'] [NOT NULL] [DEFAULT ..] [AUTO_INCREMENT] [COMMENT 'x'] ``
    pub fn compile(&self, generator: &dyn SqlGenerator) -> Fragment {
        let column = self.column;
        let mut parts = vec![generator.quote_identifier(&column.name), type_sql(column)];

        if column.unsigned {
            parts.push("UNSIGNED".to_string());
        }
        if let Some(charset) = non_blank(&column.charset) {
            parts.push(format!("CHARACTER SET {}", quote_literal(charset)));
        }
        if let Some(collation) = non_blank(&column.collation) {
            parts.push(format!("COLLATE {}", quote_literal(collation)));
        }
        if column.not_null {
            parts.push("NOT NULL".to_string());
        }
        if let Some(default) = column.default.as_ref().and_then(default_sql) {
            parts.push(default);
        }
        if column.auto_increment {
            parts.push("AUTO_INCREMENT".to_string());
        }
        if let Some(comment) = non_blank(&column.comment) {
            parts.push(format!("COMMENT {}", quote_literal(comment)));
        }

        Fragment::text(parts.join(" "))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn type_sql(column: &ColumnDefinition) -> String {
    let arg = |i: usize, fallback: u32| column.args.get(i).copied().filter(|a| *a > 0).unwrap_or(fallback);
    let keyword = column.column_type.keyword();
    match column.column_type {
        ColumnType::String => format!("{}({})", keyword, arg(0, DEFAULT_VARCHAR_LENGTH)),
        ColumnType::Boolean => format!("{}(1)", keyword),
        ColumnType::Float | ColumnType::Double | ColumnType::Decimal => format!(
            "{}({},{})",
            keyword,
            arg(0, DEFAULT_PRECISION),
            arg(1, DEFAULT_SCALE)
        ),
        ColumnType::Set | ColumnType::Enum => {
            let members = column
                .values
                .iter()
                .map(|v| quote_literal(v))
                .collect::<Vec<_>>()
                .join(",");
            format!("{}({})", keyword, members)
        }
        _ => keyword.to_string(),
    }
}

/// `DEFAULT ...`; blank text and raw defaults render nothing.
fn default_sql(default: &DefaultValue) -> Option<String> {
    match default {
        DefaultValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(format!("DEFAULT {}", quote_literal(text)))
            }
        }
        DefaultValue::Int(n) => Some(format!("DEFAULT {}", n)),
        DefaultValue::Float(n) => Some(format!("DEFAULT {}", n)),
        DefaultValue::Raw(raw) if raw.query.trim().is_empty() => None,
        DefaultValue::Raw(raw) => Some(format!("DEFAULT {}", raw.query)),
    }
}

/// `FOREIGN KEY (`col`) REFERENCES `table`(`ref`) ON DELETE .. ON UPDATE ..`
pub fn compile_foreign_key(generator: &dyn SqlGenerator, key: &ForeignKeyDefinition) -> SqlResult<Fragment> {
    if key.column.trim().is_empty()
        || key.referenced_table.trim().is_empty()
        || key.referenced_column.trim().is_empty()
    {
        return Err(SqlError::invalid(format!(
            "foreign key on '{}' needs a column and a referenced table and column",
            key.column
        )));
    }
    Ok(Fragment::text(format!(
        "FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {} ON UPDATE {}",
        generator.quote_identifier(&key.column),
        generator.quote_identifier(&key.referenced_table),
        generator.quote_identifier(&key.referenced_column),
        key.on_delete,
        key.on_update
    )))
}

/// Compiles a [`TableQuery`] into CREATE TABLE.
#[derive(Debug)]
pub struct TableCompiler<'q> {
    query: &'q TableQuery,
    table: TableRef<'q>,
    columns: Vec<ColumnCompiler<'q>>,
}

impl<'q> TableCompiler<'q> {
    pub fn new(query: &'q TableQuery) -> SqlResult<Self> {
        let table = TableRef::resolve(query.table.as_deref(), query.schema.as_deref(), None)?;
        if query.columns.is_empty() {
            return Err(SqlError::invalid("CREATE TABLE requires at least one column"));
        }
        let columns = query
            .columns
            .iter()
            .map(ColumnCompiler::new)
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(Self { query, table, columns })
    }

    /// `CREATE TABLE t (<columns> , PRIMARY KEY (..),FOREIGN KEY ..)`
    pub fn compile(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        tracing::debug!("compiling CREATE TABLE for table '{}'", self.table.table);

        let columns = self
            .columns
            .iter()
            .map(|c| c.compile(generator).expression)
            .collect::<Vec<_>>()
            .join(",");

        let mut keys = Vec::new();
        let primary = self
            .query
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| generator.quote_identifier(&c.name))
            .collect::<Vec<_>>();
        if !primary.is_empty() {
            keys.push(format!("PRIMARY KEY ({})", primary.join(",")));
        }
        for key in &self.query.foreign_keys {
            keys.push(compile_foreign_key(generator, key)?.expression);
        }

        let body = if keys.is_empty() {
            columns
        } else {
            format!("{} , {}", columns, keys.join(","))
        };
        Ok(Fragment::text(format!("CREATE TABLE {} ({})", self.table.name(generator), body)))
    }
}

/// Compiles an [`IndexQuery`] into CREATE INDEX.
#[derive(Debug)]
pub struct IndexCompiler<'q> {
    query: &'q IndexQuery,
    table: TableRef<'q>,
}

impl<'q> IndexCompiler<'q> {
    pub fn new(query: &'q IndexQuery) -> SqlResult<Self> {
        let table = TableRef::resolve(query.table.as_deref(), query.schema.as_deref(), None)?;
        if query.name.trim().is_empty() {
            return Err(SqlError::invalid("index name cannot be empty"));
        }
        if query.columns.is_empty() {
            return Err(SqlError::invalid("CREATE INDEX requires at least one column"));
        }
        Ok(Self { query, table })
    }

    /// `CREATE [UNIQUE ]INDEX `name` ON t (`a`,`b`)`
    pub fn compile(&self, generator: &dyn SqlGenerator) -> Fragment {
        tracing::debug!("compiling CREATE INDEX '{}' on '{}'", self.query.name, self.table.table);
        let unique = if self.query.unique { "UNIQUE " } else { "" };
        let columns = self
            .query
            .columns
            .iter()
            .map(|c| generator.quote_identifier(c))
            .collect::<Vec<_>>()
            .join(",");
        Fragment::text(format!(
            "CREATE {}INDEX {} ON {} ({})",
            unique,
            generator.quote_identifier(&self.query.name),
            self.table.name(generator),
            columns
        ))
    }
}
