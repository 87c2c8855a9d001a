//! SQL compiler for the query builder AST.
//!
//! Converts builder state into a parameterized [`Fragment`]: SQL text with
//! `?` placeholders plus the values bound to them, in order.

pub mod clauses;
pub mod conditions;
pub mod ddl;
pub mod dml;
pub mod fragment;
pub mod naming;
pub mod sql;
pub mod statements;
pub mod traits;

#[cfg(test)]
mod tests;

use crate::ast::{
    ColumnDefinition, DeleteQuery, ForeignKeyDefinition, IndexQuery, InsertQuery, Query, SelectQuery,
    TableQuery, UpdateQuery,
};
use crate::error::SqlResult;

pub use ddl::{ColumnCompiler, IndexCompiler, TableCompiler};
pub use dml::{DeleteCompiler, InsertCompiler, RecursiveCompiler, SelectCompiler, UpdateCompiler};
pub use fragment::Fragment;
pub use naming::Context;
pub use sql::MysqlGenerator;
pub use traits::{SqlGenerator, escape_identifier, quote_literal};

/// Trait for compiling builder state to SQL.
pub trait ToSql {
    /// Compile with the default (MySQL) generator.
    fn to_sql(&self) -> SqlResult<Fragment> {
        self.to_sql_with(&MysqlGenerator)
    }

    /// Compile with a specific generator.
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment>;
}

impl ToSql for SelectQuery {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        SelectCompiler::new(self)?.compile(generator)
    }
}

impl ToSql for InsertQuery {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        InsertCompiler::new(self)?.compile(generator)
    }
}

impl ToSql for UpdateQuery {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        UpdateCompiler::new(self)?.compile(generator)
    }
}

impl ToSql for DeleteQuery {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        DeleteCompiler::new(self)?.compile(generator)
    }
}

impl ToSql for TableQuery {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        TableCompiler::new(self)?.compile(generator)
    }
}

impl ToSql for IndexQuery {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        Ok(IndexCompiler::new(self)?.compile(generator))
    }
}

impl ToSql for ColumnDefinition {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        Ok(ColumnCompiler::new(self)?.compile(generator))
    }
}

impl ToSql for ForeignKeyDefinition {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        ddl::compile_foreign_key(generator, self)
    }
}

impl ToSql for Query {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        match self {
            Query::Select(q) => q.to_sql_with(generator),
            Query::Insert(q) => q.to_sql_with(generator),
            Query::Update(q) => q.to_sql_with(generator),
            Query::Delete(q) => q.to_sql_with(generator),
            Query::CreateTable(q) => q.to_sql_with(generator),
            Query::CreateIndex(q) => q.to_sql_with(generator),
        }
    }
}
