//! Recursive CTE SQL generation.
//!
//! A query with a recursive spec unrolls into
//! `WITH RECURSIVE recursive_cte AS ( <initial> UNION ALL <member> ) SELECT * FROM recursive_cte`:
//! the initial query is the base without joins, the member query re-selects
//! the same table (aliased `$recursive$`) joined to the CTE on
//! `recursive_key = anchor_key`. With no explicit columns the member selects
//! `` `$recursive$`.* `` so both arms have the same shape.

use crate::ast::builders::columns;
use crate::ast::{ColumnRef, Join, JoinMethod, Limits, RecursiveCte, SelectQuery, WhereGroup};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::dml::select::SelectCompiler;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::traits::SqlGenerator;

pub const CTE_NAME: &str = "recursive_cte";
pub const MEMBER_ALIAS: &str = "$recursive$";
pub const CTE_ALIAS: &str = "$recursive_cte$";

/// Compiles a [`SelectQuery`] carrying a [`RecursiveCte`] spec.
#[derive(Debug)]
pub struct RecursiveCompiler {
    initial: SelectQuery,
    member: SelectQuery,
}

impl RecursiveCompiler {
    pub fn new(base: &SelectQuery, recursive: &RecursiveCte) -> SqlResult<Self> {
        if recursive.recursive_key.trim().is_empty() || recursive.anchor_key.trim().is_empty() {
            return Err(SqlError::invalid("recursive CTE keys cannot be empty"));
        }

        let mut initial = base.clone();
        initial.joins.clear();
        initial.recursive = None;

        let mut member = base.clone();
        member.filter = WhereGroup::new();
        member.joins.clear();
        member.limits = Limits::default();
        member.sort = None;
        member.recursive = None;
        member.table_alias = Some(MEMBER_ALIAS.to_string());
        if member.columns.is_empty() {
            member.columns.push(columns::star());
        }
        member.joins.push(Join::Table {
            method: JoinMethod::Inner,
            table: CTE_NAME.to_string(),
            alias: Some(CTE_ALIAS.to_string()),
            primary_key: ColumnRef::qualified(recursive.recursive_key.as_str(), MEMBER_ALIAS),
            foreign_key: ColumnRef::qualified(recursive.anchor_key.as_str(), CTE_ALIAS),
        });

        Ok(Self { initial, member })
    }

    pub fn compile(&self, generator: &dyn SqlGenerator) -> SqlResult<Fragment> {
        tracing::debug!(
            "compiling recursive CTE for table '{}'",
            self.initial.table.as_deref().unwrap_or_default()
        );
        let initial = SelectCompiler::new(&self.initial)?.compile(generator)?;
        let member = SelectCompiler::new(&self.member)?.compile(generator)?;

        let mut sql = Fragment::text(format!("WITH RECURSIVE {} AS ( ", CTE_NAME));
        sql.append(initial);
        sql.push_str(" UNION ALL ");
        sql.append(member);
        sql.push_str(&format!(" ) SELECT * FROM {}", CTE_NAME));
        Ok(sql)
    }
}
