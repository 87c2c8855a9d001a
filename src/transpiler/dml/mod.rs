//! DML (Data Manipulation Language) SQL generation.
//!
//! One compiler per statement kind. Each validates its builder in `new`
//! and renders in `compile`.

pub mod cte;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use cte::RecursiveCompiler;
pub use delete::DeleteCompiler;
pub use insert::InsertCompiler;
pub use select::SelectCompiler;
pub use update::UpdateCompiler;
