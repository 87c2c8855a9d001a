use serde::{Deserialize, Serialize};

use crate::ast::{ColumnMethod, DateWrap, JoinMethod, LogicalOp, Operator, SelectQuery, SortOrder, Value};

/// A column name, optionally qualified by a table alias.
///
/// The name `*` denotes the wildcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub name: String,
    #[serde(default)]
    pub table_alias: Option<String>,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_alias: None,
        }
    }

    pub fn qualified(name: impl Into<String>, table_alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_alias: Some(table_alias.into()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.name == "*"
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::new(name)
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::new(name)
    }
}

/// Verbatim SQL carrying its own bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raw {
    pub query: String,
    #[serde(default)]
    pub bindings: Vec<Value>,
}

impl Raw {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            bindings: vec![],
        }
    }

    pub fn with_bindings<I, V>(query: impl Into<String>, bindings: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            query: query.into(),
            bindings: bindings.into_iter().map(Into::into).collect(),
        }
    }
}

/// Column and predicate nodes.
///
/// Column lists and WHERE groups are both `Vec<Statement>`; each variant has
/// exactly one compiler in `transpiler::statements` / `transpiler::conditions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Verbatim predicate, e.g. `foo = bar AND zar.id = tar.id`
    Raw(Raw),
    /// `col`, `col` as `alias`, `t`.*
    Column {
        column: ColumnRef,
        #[serde(default)]
        alias: Option<String>,
    },
    /// MIN(`col`), COUNT(*) ...
    ColumnMethod {
        method: ColumnMethod,
        column: ColumnRef,
        #[serde(default)]
        alias: Option<String>,
    },
    /// Verbatim select expression, e.g. LENGTH(`name`) as `len`
    ColumnRaw(Raw),
    /// DATE(`col`) / DATETIME(`col`)
    DateWrap {
        wrap: DateWrap,
        column: ColumnRef,
        #[serde(default)]
        alias: Option<String>,
    },
    /// `col` OP ?
    Comparison {
        column: ColumnRef,
        op: Operator,
        #[serde(default = "null_value")]
        value: Value,
    },
    /// `col` [NOT ]BETWEEN ? AND ?
    Between {
        column: ColumnRef,
        low: Value,
        high: Value,
        #[serde(default)]
        negated: bool,
    },
    /// `col` [NOT ]IN (?,?,...)
    In {
        column: ColumnRef,
        values: Vec<Value>,
        #[serde(default)]
        negated: bool,
    },
    /// ( child predicates )
    NestedWhere(WhereGroup),
    /// [NOT ]EXISTS ( subquery )
    Exists {
        query: Box<SelectQuery>,
        #[serde(default)]
        negated: bool,
    },
}

fn null_value() -> Value {
    Value::Null
}

/// A list of predicates combined with one logical operator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WhereGroup {
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub op: LogicalOp,
}

impl WhereGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A join definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Join {
    /// `METHOD `table` [as `alias`] ON primary = foreign`
    Table {
        method: JoinMethod,
        table: String,
        #[serde(default)]
        alias: Option<String>,
        primary_key: ColumnRef,
        foreign_key: ColumnRef,
    },
    /// `METHOD <raw>`
    Raw { method: JoinMethod, query: Raw },
}

/// A GROUP BY item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Column(ColumnRef),
    Raw(Raw),
}

/// ORDER BY specification. Both parts are sent as bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    #[serde(default)]
    pub order: SortOrder,
}

/// LIMIT / OFFSET pair. Zero means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Self-referencing hierarchy walk over the query's table.
///
/// Each member row joins the CTE on `recursive_key = anchor_key`,
/// e.g. `parent_id = id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecursiveCte {
    pub recursive_key: String,
    pub anchor_key: String,
}
