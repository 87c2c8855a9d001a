//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `select`: SELECT columns, joins, predicates, grouping, limits, ordering
//! - `dml`: INSERT, UPDATE, DELETE and TRUNCATE
//! - `ddl`: column definitions, CREATE TABLE, CREATE INDEX
//! - `cte`: recursive hierarchy queries

mod ddl;
