use serde::{Deserialize, Serialize};

use crate::ast::builders::{columns, filters::WhereBuilder};
use crate::ast::{
    ColumnDefinition, ColumnMethod, ColumnRef, DateWrap, ForeignKeyDefinition, GroupBy, Join, JoinMethod,
    Limits, OrderBy, Raw, RecursiveCte, SortOrder, Statement, Value, WhereGroup,
};

/// SELECT query state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectQuery {
    /// Target table; `None` until `from` is called.
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub table_alias: Option<String>,
    #[serde(default)]
    pub distinct: bool,
    /// Select list; empty renders `*`.
    #[serde(default)]
    pub columns: Vec<Statement>,
    #[serde(default, rename = "where")]
    pub filter: WhereGroup,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub group_by: Vec<GroupBy>,
    #[serde(default)]
    pub sort: Option<OrderBy>,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub recursive: Option<RecursiveCte>,
}

impl SelectQuery {
    /// Create a new SELECT for the given table.
    ///
    /// # Example
    /// ```
    /// use orm_sql::prelude::*;
    /// let sql = SelectQuery::from("users").to_sql().unwrap();
    /// assert_eq!(sql.expression, "SELECT * FROM `users`");
    /// ```
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    /// Create a new SELECT with a table alias; unqualified columns get the alias.
    pub fn from_as(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::from(table).alias(alias)
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = Some(alias.into());
        self
    }

    /// Add a column to the select list; `*` selects everything.
    pub fn select(mut self, column: impl Into<ColumnRef>) -> Self {
        self.columns.push(columns::col(column));
        self
    }

    pub fn select_as(mut self, column: impl Into<ColumnRef>, alias: impl Into<String>) -> Self {
        self.columns.push(columns::col_as(column, alias));
        self
    }

    pub fn select_raw(mut self, raw: Raw) -> Self {
        self.columns.push(columns::raw_column(raw));
        self
    }

    /// Push an arbitrary column node (aggregate, DATE wrap, ...).
    pub fn column(mut self, column: Statement) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnRef>,
    {
        self.columns.extend(cols.into_iter().map(columns::col));
        self
    }

    pub fn clear_columns(mut self) -> Self {
        self.columns.clear();
        self
    }

    fn method(mut self, method: ColumnMethod, column: &str, alias: Option<&str>) -> Self {
        self.columns
            .push(columns::aggregate(method, column, alias.map(str::to_string)));
        self
    }

    pub fn count(self, column: &str, alias: Option<&str>) -> Self {
        self.method(ColumnMethod::Count, column, alias)
    }

    pub fn sum(self, column: &str, alias: Option<&str>) -> Self {
        self.method(ColumnMethod::Sum, column, alias)
    }

    pub fn avg(self, column: &str, alias: Option<&str>) -> Self {
        self.method(ColumnMethod::Avg, column, alias)
    }

    pub fn min(self, column: &str, alias: Option<&str>) -> Self {
        self.method(ColumnMethod::Min, column, alias)
    }

    pub fn max(self, column: &str, alias: Option<&str>) -> Self {
        self.method(ColumnMethod::Max, column, alias)
    }

    /// DATE(`col`)
    pub fn select_date(mut self, column: impl Into<ColumnRef>, alias: Option<&str>) -> Self {
        self.columns.push(date_wrap(DateWrap::Date, column, alias));
        self
    }

    /// DATETIME(`col`)
    pub fn select_datetime(mut self, column: impl Into<ColumnRef>, alias: Option<&str>) -> Self {
        self.columns.push(date_wrap(DateWrap::DateTime, column, alias));
        self
    }

    /// DISTINCT requires an explicit, non-wildcard select list at compile time.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn group_by(mut self, column: impl Into<ColumnRef>) -> Self {
        self.group_by.push(GroupBy::Column(column.into()));
        self
    }

    pub fn group_by_raw(mut self, raw: Raw) -> Self {
        self.group_by.push(GroupBy::Raw(raw));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.sort = Some(OrderBy {
            column: column.into(),
            order: SortOrder::Asc,
        });
        self
    }

    pub fn order_by_descending(mut self, column: impl Into<String>) -> Self {
        self.sort = Some(OrderBy {
            column: column.into(),
            order: SortOrder::Desc,
        });
        self
    }

    /// LIMIT; zero means no limit.
    pub fn take(mut self, n: u64) -> Self {
        self.limits.limit = n;
        self
    }

    /// OFFSET; zero means no offset.
    pub fn skip(mut self, n: u64) -> Self {
        self.limits.offset = n;
        self
    }

    /// Shorthand for `take(1)`.
    pub fn first(self) -> Self {
        self.take(1)
    }

    /// Walk a self-referencing hierarchy: member rows join on
    /// `recursive_key = anchor_key` (e.g. `parent_id`, `id`).
    pub fn with_recursive(mut self, recursive_key: impl Into<String>, anchor_key: impl Into<String>) -> Self {
        self.recursive = Some(RecursiveCte {
            recursive_key: recursive_key.into(),
            anchor_key: anchor_key.into(),
        });
        self
    }

    /// Add a join. `foreign_key` is qualified by this query's alias,
    /// `primary_key` by the joined table's alias.
    pub fn join_as(
        mut self,
        method: JoinMethod,
        table: impl Into<String>,
        alias: Option<String>,
        foreign_key: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> Self {
        let primary_key = ColumnRef {
            name: primary_key.into(),
            table_alias: alias.clone(),
        };
        let foreign_key = ColumnRef {
            name: foreign_key.into(),
            table_alias: self.table_alias.clone(),
        };
        self.joins.push(Join::Table {
            method,
            table: table.into(),
            alias,
            primary_key,
            foreign_key,
        });
        self
    }

    fn join_method(self, method: JoinMethod, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_as(method, table, None, foreign_key, primary_key)
    }

    pub fn left_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::Left, table, foreign_key, primary_key)
    }

    pub fn left_outer_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::LeftOuter, table, foreign_key, primary_key)
    }

    pub fn right_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::Right, table, foreign_key, primary_key)
    }

    pub fn right_outer_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::RightOuter, table, foreign_key, primary_key)
    }

    pub fn inner_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::Inner, table, foreign_key, primary_key)
    }

    pub fn full_outer_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::FullOuter, table, foreign_key, primary_key)
    }

    pub fn cross_join(self, table: impl Into<String>, foreign_key: impl Into<String>, primary_key: impl Into<String>) -> Self {
        self.join_method(JoinMethod::Cross, table, foreign_key, primary_key)
    }

    /// `METHOD <raw>`, e.g. `LEFT JOIN client ON foo=bar`.
    pub fn join_raw(mut self, method: JoinMethod, raw: Raw) -> Self {
        self.joins.push(Join::Raw { method, query: raw });
        self
    }

    pub fn clear_joins(mut self) -> Self {
        self.joins.clear();
        self
    }
}

fn date_wrap(wrap: DateWrap, column: impl Into<ColumnRef>, alias: Option<&str>) -> Statement {
    Statement::DateWrap {
        wrap,
        column: column.into(),
        alias: alias.map(str::to_string),
    }
}

impl WhereBuilder for SelectQuery {
    fn where_group_mut(&mut self) -> &mut WhereGroup {
        &mut self.filter
    }
}

/// UPDATE query state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateQuery {
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub table_alias: Option<String>,
    /// SET pairs in insertion order.
    #[serde(default)]
    pub values: Vec<(String, Value)>,
    #[serde(default, rename = "where")]
    pub filter: WhereGroup,
}

impl UpdateQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Alias the target table; unqualified columns get the alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = Some(alias.into());
        self
    }

    /// Set a column; setting the same column twice replaces its value.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        let value = value.into();
        match self.values.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.values.push((column, value)),
        }
        self
    }
}

impl WhereBuilder for UpdateQuery {
    fn where_group_mut(&mut self) -> &mut WhereGroup {
        &mut self.filter
    }
}

/// DELETE / TRUNCATE query state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub table_alias: Option<String>,
    #[serde(default, rename = "where")]
    pub filter: WhereGroup,
    /// Only the limit half is rendered for DELETE.
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub truncate: bool,
}

impl DeleteQuery {
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = Some(alias.into());
        self
    }

    pub fn take(mut self, n: u64) -> Self {
        self.limits.limit = n;
        self
    }

    /// Render `TRUNCATE TABLE` instead; predicates and limit are ignored.
    pub fn truncate(mut self) -> Self {
        self.truncate = true;
        self
    }
}

impl WhereBuilder for DeleteQuery {
    fn where_group_mut(&mut self) -> &mut WhereGroup {
        &mut self.filter
    }
}

/// One field of an INSERT row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertValue {
    /// Rendered as DEFAULT, no binding.
    Default,
    Value(Value),
}

/// One INSERT row, fields keyed by column name in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub fields: Vec<(String, InsertValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((column.into(), InsertValue::Value(value.into())));
        self
    }

    /// Leave the column to its DEFAULT.
    pub fn set_default(mut self, column: impl Into<String>) -> Self {
        self.fields.push((column.into(), InsertValue::Default));
        self
    }

    pub fn get(&self, column: &str) -> Option<&InsertValue> {
        self.fields.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }
}

/// Column to refresh in ON DUPLICATE KEY UPDATE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateColumn {
    /// `col` = ? bound to the inserted value
    Column(String),
    Raw(Raw),
}

/// ON DUPLICATE KEY UPDATE specification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OnDuplicate {
    pub columns: Vec<DuplicateColumn>,
}

impl OnDuplicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the given columns from the inserted row.
    pub fn update<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns
            .extend(columns.into_iter().map(|c| DuplicateColumn::Column(c.into())));
        self
    }

    pub fn update_raw(mut self, raw: Raw) -> Self {
        self.columns.push(DuplicateColumn::Raw(raw));
        self
    }
}

/// INSERT query state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsertQuery {
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub on_duplicate: Option<OnDuplicate>,
}

impl InsertQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn values(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn values_many(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn on_duplicate(mut self, on_duplicate: OnDuplicate) -> Self {
        self.on_duplicate = Some(on_duplicate);
        self
    }

    /// Union of all row columns in first-appearance order.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (column, _) in self.rows.iter().flat_map(|r| r.fields.iter()) {
            if !names.contains(&column.as_str()) {
                names.push(column);
            }
        }
        names
    }
}

/// CREATE TABLE query state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

impl TableQuery {
    pub fn create(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKeyDefinition) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }
}

/// CREATE INDEX query state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl IndexQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// Any compilable query, as loaded from a JSON query document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Select(SelectQuery),
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
    CreateTable(TableQuery),
    CreateIndex(IndexQuery),
}

impl Query {
    /// Statement kind, for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Select(_) => "SELECT",
            Query::Insert(_) => "INSERT",
            Query::Update(_) => "UPDATE",
            Query::Delete(q) if q.truncate => "TRUNCATE",
            Query::Delete(_) => "DELETE",
            Query::CreateTable(_) => "CREATE TABLE",
            Query::CreateIndex(_) => "CREATE INDEX",
        }
    }

    pub fn table(&self) -> Option<&str> {
        match self {
            Query::Select(q) => q.table.as_deref(),
            Query::Insert(q) => q.table.as_deref(),
            Query::Update(q) => q.table.as_deref(),
            Query::Delete(q) => q.table.as_deref(),
            Query::CreateTable(q) => q.table.as_deref(),
            Query::CreateIndex(q) => q.table.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_column_union_keeps_first_appearance() {
        let query = InsertQuery::table("users")
            .values(Row::new().set("id", 1).set_default("active"))
            .values(Row::new().set("email", "a@b.c").set("id", 2));
        assert_eq!(query.column_names(), vec!["id", "active", "email"]);
    }

    #[test]
    fn test_update_set_replaces() {
        let query = UpdateQuery::table("t").set("x", 1).set("y", 2).set("x", 3);
        assert_eq!(
            query.values,
            vec![("x".to_string(), Value::Int(3)), ("y".to_string(), Value::Int(2))]
        );
    }

    #[test]
    fn test_join_keys_take_aliases() {
        let query = SelectQuery::from_as("users", "u").join_as(
            JoinMethod::Left,
            "addresses",
            Some("a".to_string()),
            "address_id",
            "id",
        );
        match &query.joins[0] {
            Join::Table { primary_key, foreign_key, .. } => {
                assert_eq!(primary_key, &ColumnRef::qualified("id", "a"));
                assert_eq!(foreign_key, &ColumnRef::qualified("address_id", "u"));
            }
            other => panic!("unexpected join {:?}", other),
        }
    }

    #[test]
    fn test_query_document_deserializes() {
        let query: Query = serde_json::from_str(
            r#"{"select": {"table": "users", "where": {"statements": [
                {"in": {"column": {"name": "id"}, "values": [1, 2, 3]}}
            ]}}}"#,
        )
        .unwrap();
        assert_eq!(query.kind(), "SELECT");
        assert_eq!(query.table(), Some("users"));
    }
}
