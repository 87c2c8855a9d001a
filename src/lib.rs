//! # orm-sql — SQL generation for a query builder
//!
//! Turns query builder state into a parameterized MySQL statement: SQL text
//! with `?` placeholders plus the values bound to them, in order.
//!
//! ## Quick Example
//!
//! ```rust
//! use orm_sql::prelude::*;
//!
//! let query = SelectQuery::from("users")
//!     .select("id")
//!     .select_as("email", "mail")
//!     .where_in("id", [1, 2, 3])
//!     .take(10);
//!
//! let sql = query.to_sql().unwrap();
//! assert_eq!(
//!     sql.expression,
//!     "SELECT `id`,`email` as `mail` FROM `users` WHERE `id` IN (?,?,?) LIMIT ?"
//! );
//! assert_eq!(sql.bindings.len(), 4);
//! ```
//!
//! ## Statements
//!
//! | Builder        | SQL                                   |
//! |----------------|---------------------------------------|
//! | `SelectQuery`  | SELECT, `WITH RECURSIVE` hierarchies  |
//! | `InsertQuery`  | INSERT [IGNORE], ON DUPLICATE KEY     |
//! | `UpdateQuery`  | UPDATE                                |
//! | `DeleteQuery`  | DELETE, TRUNCATE TABLE                |
//! | `TableQuery`   | CREATE TABLE                          |
//! | `IndexQuery`   | CREATE [UNIQUE] INDEX                 |

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::builders::{columns, conditions};
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::transpiler::{Fragment, MysqlGenerator, SqlGenerator, ToSql};
}

/// Load a JSON query document (`{"select": {...}}`, `{"insert": {...}}`, ...).
///
/// # Example
///
/// ```
/// use orm_sql::prelude::*;
///
/// let query = orm_sql::parse_query(r#"{"delete": {"table": "t", "truncate": true}}"#).unwrap();
/// assert_eq!(query.to_sql().unwrap().expression, "TRUNCATE TABLE `t`");
/// ```
pub fn parse_query(input: &str) -> error::SqlResult<ast::Query> {
    Ok(serde_json::from_str(input)?)
}
