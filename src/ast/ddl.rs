use serde::{Deserialize, Serialize};

use crate::ast::Raw;

/// Column data types understood by the DDL compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Tinyint,
    Smallint,
    Mediumint,
    Int,
    Bigint,
    Tinytext,
    Mediumtext,
    Longtext,
    Text,
    /// VARCHAR(len), len defaults to 255
    String,
    /// FLOAT(precision,scale)
    Float,
    /// DOUBLE(precision,scale)
    Double,
    /// DECIMAL(precision,scale)
    Decimal,
    /// TINYINT(1)
    Boolean,
    Bit,
    Binary,
    Blob,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    /// SET('a','b',...)
    Set,
    /// ENUM('a','b',...)
    Enum,
}

impl ColumnType {
    /// Upper-cased SQL keyword for the type.
    pub fn keyword(&self) -> &'static str {
        match self {
            ColumnType::Tinyint => "TINYINT",
            ColumnType::Smallint => "SMALLINT",
            ColumnType::Mediumint => "MEDIUMINT",
            ColumnType::Int => "INT",
            ColumnType::Bigint => "BIGINT",
            ColumnType::Tinytext => "TINYTEXT",
            ColumnType::Mediumtext => "MEDIUMTEXT",
            ColumnType::Longtext => "LONGTEXT",
            ColumnType::Text => "TEXT",
            ColumnType::String => "VARCHAR",
            ColumnType::Float => "FLOAT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Decimal => "DECIMAL",
            ColumnType::Boolean => "TINYINT",
            ColumnType::Bit => "BIT",
            ColumnType::Binary => "BINARY",
            ColumnType::Blob => "BLOB",
            ColumnType::Date => "DATE",
            ColumnType::Time => "TIME",
            ColumnType::DateTime => "DATETIME",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Json => "JSON",
            ColumnType::Set => "SET",
            ColumnType::Enum => "ENUM",
        }
    }
}

/// Column DEFAULT value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// Quoted and trimmed; blank strings render nothing.
    Text(String),
    Int(i64),
    Float(f64),
    /// Rendered verbatim, e.g. CURRENT_TIMESTAMP
    Raw(Raw),
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        DefaultValue::Text(s.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        DefaultValue::Text(s)
    }
}

impl From<i32> for DefaultValue {
    fn from(n: i32) -> Self {
        DefaultValue::Int(n as i64)
    }
}

impl From<i64> for DefaultValue {
    fn from(n: i64) -> Self {
        DefaultValue::Int(n)
    }
}

impl From<f64> for DefaultValue {
    fn from(n: f64) -> Self {
        DefaultValue::Float(n)
    }
}

impl From<Raw> for DefaultValue {
    fn from(raw: Raw) -> Self {
        DefaultValue::Raw(raw)
    }
}

/// A column definition for CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Length for strings, precision and scale for float types.
    #[serde(default)]
    pub args: Vec<u32>,
    /// Members of SET / ENUM columns.
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub default: Option<DefaultValue>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub collation: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            args: vec![],
            values: vec![],
            unsigned: false,
            not_null: false,
            primary_key: false,
            auto_increment: false,
            default: None,
            charset: None,
            collation: None,
            comment: None,
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Int)
    }

    pub fn bigint(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Bigint)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::String)
    }

    /// VARCHAR with an explicit length.
    pub fn string_len(name: impl Into<String>, length: u32) -> Self {
        Self::new(name, ColumnType::String).args([length])
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Boolean)
    }

    pub fn decimal(name: impl Into<String>, precision: u32, scale: u32) -> Self {
        Self::new(name, ColumnType::Decimal).args([precision, scale])
    }

    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Timestamp)
    }

    pub fn set<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut col = Self::new(name, ColumnType::Set);
        col.values = values.into_iter().map(Into::into).collect();
        col
    }

    pub fn enumeration<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut col = Self::set(name, values);
        col.column_type = ColumnType::Enum;
        col
    }

    pub fn args(mut self, args: impl IntoIterator<Item = u32>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// ON DELETE / ON UPDATE action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    Restrict,
    #[default]
    NoAction,
    SetDefault,
}

impl std::fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferentialAction::Cascade => write!(f, "CASCADE"),
            ReferentialAction::SetNull => write!(f, "SET NULL"),
            ReferentialAction::Restrict => write!(f, "RESTRICT"),
            ReferentialAction::NoAction => write!(f, "NO ACTION"),
            ReferentialAction::SetDefault => write!(f, "SET DEFAULT"),
        }
    }
}

/// FOREIGN KEY constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
    #[serde(default)]
    pub on_delete: ReferentialAction,
    #[serde(default)]
    pub on_update: ReferentialAction,
}

impl ForeignKeyDefinition {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            referenced_table: String::new(),
            referenced_column: String::new(),
            on_delete: ReferentialAction::default(),
            on_update: ReferentialAction::default(),
        }
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.referenced_table = table.into();
        self.referenced_column = column.into();
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }
}
