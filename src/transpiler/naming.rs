//! Table and column naming shared by every compiler.

use crate::ast::ColumnRef;
use crate::error::{SqlError, SqlResult};
use crate::transpiler::traits::SqlGenerator;

/// Compile context threaded through every compiler call.
///
/// `table_alias` is the alias of the builder being compiled; columns
/// without their own alias are qualified with it.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub generator: &'a dyn SqlGenerator,
    pub table_alias: Option<&'a str>,
}

impl<'a> Context<'a> {
    pub fn new(generator: &'a dyn SqlGenerator) -> Self {
        Self {
            generator,
            table_alias: None,
        }
    }

    pub fn with_alias(self, table_alias: Option<&'a str>) -> Self {
        Self {
            generator: self.generator,
            table_alias,
        }
    }

    pub fn quote(&self, name: &str) -> String {
        self.generator.quote_identifier(name)
    }

    pub fn placeholder(&self) -> &'static str {
        self.generator.placeholder()
    }

    /// Render a column, qualified by its own alias or else the ambient one.
    pub fn column(&self, column: &ColumnRef) -> String {
        let alias = column.table_alias.as_deref().or(self.table_alias);
        self.generator.qualified(alias, &column.name)
    }

    /// Render a column qualified only by its own alias.
    pub fn column_own(&self, column: &ColumnRef) -> String {
        self.generator.qualified(column.table_alias.as_deref(), &column.name)
    }

    /// `col` as `alias` when an alias is set.
    pub fn aliased(&self, expression: String, alias: Option<&str>) -> String {
        match alias {
            Some(alias) => format!("{} as {}", expression, self.quote(alias)),
            None => expression,
        }
    }
}

/// Validated table reference of a builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRef<'q> {
    pub table: &'q str,
    pub schema: Option<&'q str>,
    pub alias: Option<&'q str>,
}

impl<'q> TableRef<'q> {
    /// Check that a builder names a non-blank table (and schema, when set).
    pub fn resolve(
        table: Option<&'q str>,
        schema: Option<&'q str>,
        alias: Option<&'q str>,
    ) -> SqlResult<Self> {
        let table = table.ok_or_else(|| SqlError::construction("query has no table"))?;
        if table.trim().is_empty() {
            return Err(SqlError::invalid("table name cannot be empty"));
        }
        if schema.is_some_and(|s| s.trim().is_empty()) {
            return Err(SqlError::invalid("schema name cannot be empty"));
        }
        if alias.is_some_and(|a| a.trim().is_empty()) {
            return Err(SqlError::invalid("table alias cannot be empty"));
        }
        Ok(Self { table, schema, alias })
    }

    /// `schema`.`table`
    pub fn name(&self, generator: &dyn SqlGenerator) -> String {
        match self.schema {
            Some(schema) => format!(
                "{}.{}",
                generator.quote_identifier(schema),
                generator.quote_identifier(self.table)
            ),
            None => generator.quote_identifier(self.table),
        }
    }

    /// `schema`.`table` as `alias`
    pub fn name_aliased(&self, generator: &dyn SqlGenerator) -> String {
        match self.alias {
            Some(alias) => format!("{} as {}", self.name(generator), generator.quote_identifier(alias)),
            None => self.name(generator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::sql::MysqlGenerator;

    #[test]
    fn test_table_naming() {
        let generator = MysqlGenerator::new();
        let table = TableRef::resolve(Some("users"), Some("spine"), Some("u")).unwrap();
        assert_eq!(table.name(&generator), "`spine`.`users`");
        assert_eq!(table.name_aliased(&generator), "`spine`.`users` as `u`");
    }

    #[test]
    fn test_table_validation() {
        assert!(matches!(
            TableRef::resolve(None, None, None),
            Err(SqlError::Construction(_))
        ));
        assert!(matches!(
            TableRef::resolve(Some("  "), None, None),
            Err(SqlError::InvalidArgument(_))
        ));
        assert!(matches!(
            TableRef::resolve(Some("users"), Some(""), None),
            Err(SqlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_column_qualification() {
        let generator = MysqlGenerator::new();
        let ctx = Context::new(&generator).with_alias(Some("u"));
        assert_eq!(ctx.column(&ColumnRef::new("id")), "`u`.`id`");
        assert_eq!(ctx.column(&ColumnRef::qualified("id", "a")), "`a`.`id`");
        assert_eq!(ctx.column_own(&ColumnRef::new("id")), "`id`");
    }
}
