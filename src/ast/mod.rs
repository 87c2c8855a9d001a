pub mod builders;
pub mod ddl;
pub mod operators;
pub mod query;
pub mod statements;
pub mod values;

pub use self::builders::WhereBuilder;
pub use self::ddl::{ColumnDefinition, ColumnType, DefaultValue, ForeignKeyDefinition, ReferentialAction};
pub use self::operators::{ColumnMethod, DateWrap, JoinMethod, LogicalOp, Operator, SortOrder};
pub use self::query::{
    DeleteQuery, DuplicateColumn, IndexQuery, InsertQuery, InsertValue, OnDuplicate, Query, Row,
    SelectQuery, TableQuery, UpdateQuery,
};
pub use self::statements::{
    ColumnRef, GroupBy, Join, Limits, OrderBy, Raw, RecursiveCte, Statement, WhereGroup,
};
pub use self::values::Value;
