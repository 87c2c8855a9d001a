//! Dialect generators.

pub mod mysql;

pub use mysql::MysqlGenerator;
