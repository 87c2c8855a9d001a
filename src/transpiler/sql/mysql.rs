use crate::transpiler::traits::{SqlGenerator, escape_identifier};

/// MySQL Generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlGenerator;

impl MysqlGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for MysqlGenerator {
    fn quote_identifier(&self, name: &str) -> String {
        format!("`{}`", escape_identifier(name, '`'))
    }

    fn placeholder(&self) -> &'static str {
        "?"
    }

    fn max_limit(&self) -> u64 {
        // no unbounded LIMIT keyword in MySQL
        u64::MAX
    }
}
