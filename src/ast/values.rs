use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A value bound to a `?` placeholder.
///
/// Deserializes untagged so query documents can use plain JSON scalars.
/// Dates are tagged (`{"date": "2024-02-29"}`, `{"datetime": "..."}`) and
/// strings are never reinterpreted. JSON has one integer type: any
/// integer that fits `i64` loads as `Int`, so `UInt(7)` reloads as `Int(7)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer (limits, offsets)
    UInt(u64),
    /// Float
    Float(f64),
    /// Timestamp without timezone
    DateTime(#[serde(with = "tagged_datetime")] NaiveDateTime),
    /// Calendar date
    Date(#[serde(with = "tagged_date")] NaiveDate),
    /// String
    String(String),
    /// SET column members; bound as one comma-joined string.
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The value as sent to the driver: lists collapse to `"a,b,c"`.
    pub fn into_binding(self) -> Value {
        match self {
            Value::List(items) => Value::String(join_members(&items)),
            other => other,
        }
    }

    /// Split a SET column read back from the database into its members.
    pub fn from_set(text: &str) -> Value {
        if text.is_empty() {
            return Value::List(vec![]);
        }
        Value::List(text.split(',').map(Value::from).collect())
    }

    fn member_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::String(s) => s.clone(),
            Value::List(items) => join_members(items),
            other => other.to_string(),
        }
    }
}

fn join_members(items: &[Value]) -> String {
    items.iter().map(Value::member_text).collect::<Vec<_>>().join(",")
}

mod tagged_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Tagged {
        date: NaiveDate,
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged { date: *date }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        Tagged::deserialize(deserializer).map(|t| t.date)
    }
}

mod tagged_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Tagged {
        datetime: NaiveDateTime,
    }

    pub fn serialize<S: Serializer>(datetime: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged { datetime: *datetime }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        Tagged::deserialize(deserializer).map(|t| t.datetime)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::DateTime(dt) => write!(f, "'{}'", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::Date(d) => write!(f, "'{}'", d.format("%Y-%m-%d")),
            Value::String(s) => write!(f, "'{}'", s),
            Value::List(items) => write!(f, "'{}'", join_members(items)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
