//! Dialect seam and identifier helpers.

/// Escape an identifier for embedding between `quote` characters by
/// doubling any embedded quote.
pub fn escape_identifier(name: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    name.replace(quote, &doubled)
}

/// Single-quote a string literal, doubling embedded quotes.
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Trait for dialect-specific SQL generation.
pub trait SqlGenerator: Send + Sync {
    /// Quote an identifier (table, column or alias name).
    fn quote_identifier(&self, name: &str) -> String;

    /// Positional parameter placeholder.
    fn placeholder(&self) -> &'static str;

    /// Row count rendered as LIMIT when only an OFFSET is set.
    fn max_limit(&self) -> u64;

    /// `ident` or `alias`.`ident`; a `*` name is never quoted.
    fn qualified(&self, alias: Option<&str>, name: &str) -> String {
        let column = if name == "*" {
            name.to_string()
        } else {
            self.quote_identifier(name)
        };
        match alias {
            Some(alias) => format!("{}.{}", self.quote_identifier(alias), column),
            None => column,
        }
    }
}
