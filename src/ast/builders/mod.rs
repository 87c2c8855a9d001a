//! Fluent builders for query nodes.
//!
//! - `conditions`: predicate constructors (`eq`, `is_in`, `between`, ...)
//! - `columns`: select list constructors (`col`, `count`, `date`, ...)
//! - `filters`: the [`WhereBuilder`] trait shared by every query with a WHERE clause

pub mod columns;
pub mod conditions;
pub mod filters;

pub use columns::*;
pub use conditions::*;
pub use filters::WhereBuilder;
