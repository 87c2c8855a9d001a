use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{multispace0, multispace1},
    combinator::{all_consuming, value},
    sequence::{delimited, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::{SqlError, SqlResult};

/// Comparison operators accepted by `where` predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Not equal (<>)
    LtGt,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// IS (bound boolean / unknown)
    Is,
    /// IS NOT (bound boolean / unknown)
    IsNot,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
}

impl Operator {
    /// Parse an operator token such as `>=`, `like` or `is not null`.
    ///
    /// Keywords are case-insensitive; anything outside the fixed set fails
    /// with [`SqlError::UnsupportedOperator`].
    pub fn parse(token: &str) -> SqlResult<Self> {
        match all_consuming(delimited(multispace0, parse_operator, multispace0))(token) {
            Ok((_, op)) => Ok(op),
            Err(_) => Err(SqlError::UnsupportedOperator(token.to_string())),
        }
    }

    /// Returns the upper-cased SQL text for this operator.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::LtGt => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Is => "IS",
            Operator::IsNot => "IS NOT",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }

    /// IS NULL and IS NOT NULL take no placeholder and no binding.
    pub fn is_nullability(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }
}

impl std::str::FromStr for Operator {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s)
    }
}

fn parse_operator(input: &str) -> IResult<&str, Operator> {
    alt((
        value(
            Operator::IsNotNull,
            tuple((
                tag_no_case("is"),
                multispace1,
                tag_no_case("not"),
                multispace1,
                tag_no_case("null"),
            )),
        ),
        value(
            Operator::IsNull,
            tuple((tag_no_case("is"), multispace1, tag_no_case("null"))),
        ),
        value(
            Operator::IsNot,
            tuple((tag_no_case("is"), multispace1, tag_no_case("not"))),
        ),
        value(Operator::Is, tag_no_case("is")),
        value(
            Operator::NotLike,
            tuple((tag_no_case("not"), multispace1, tag_no_case("like"))),
        ),
        value(Operator::Like, tag_no_case("like")),
        value(Operator::Gte, tag(">=")),
        value(Operator::Lte, tag("<=")),
        value(Operator::LtGt, tag("<>")),
        value(Operator::Ne, tag("!=")),
        value(Operator::Eq, tag("=")),
        value(Operator::Gt, tag(">")),
        value(Operator::Lt, tag("<")),
    ))(input)
}

/// Logical operator between predicates of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Join method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMethod {
    Left,
    LeftOuter,
    Right,
    RightOuter,
    Inner,
    FullOuter,
    Cross,
}

impl std::fmt::Display for JoinMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinMethod::Left => write!(f, "LEFT JOIN"),
            JoinMethod::LeftOuter => write!(f, "LEFT OUTER JOIN"),
            JoinMethod::Right => write!(f, "RIGHT JOIN"),
            JoinMethod::RightOuter => write!(f, "RIGHT OUTER JOIN"),
            JoinMethod::Inner => write!(f, "INNER JOIN"),
            JoinMethod::FullOuter => write!(f, "FULL OUTER JOIN"),
            JoinMethod::Cross => write!(f, "CROSS JOIN"),
        }
    }
}

/// Aggregate functions usable as select columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnMethod {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl std::fmt::Display for ColumnMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnMethod::Count => write!(f, "COUNT"),
            ColumnMethod::Sum => write!(f, "SUM"),
            ColumnMethod::Avg => write!(f, "AVG"),
            ColumnMethod::Min => write!(f, "MIN"),
            ColumnMethod::Max => write!(f, "MAX"),
        }
    }
}

/// Date wrapper applied to a column (`DATE(col)`, `DATETIME(col)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWrap {
    Date,
    DateTime,
}

impl std::fmt::Display for DateWrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateWrap::Date => write!(f, "DATE"),
            DateWrap::DateTime => write!(f, "DATETIME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!(Operator::parse("=").unwrap(), Operator::Eq);
        assert_eq!(Operator::parse(">=").unwrap(), Operator::Gte);
        assert_eq!(Operator::parse("<>").unwrap(), Operator::LtGt);
        assert_eq!(Operator::parse(" < ").unwrap(), Operator::Lt);
    }

    #[test]
    fn test_parse_keywords_case_insensitive() {
        assert_eq!(Operator::parse("like").unwrap(), Operator::Like);
        assert_eq!(Operator::parse("NOT like").unwrap(), Operator::NotLike);
        assert_eq!(Operator::parse("is not null").unwrap(), Operator::IsNotNull);
        assert_eq!(Operator::parse("IS  NULL").unwrap(), Operator::IsNull);
        assert_eq!(Operator::parse("is not").unwrap(), Operator::IsNot);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for token in [">==", "==", "isnull", "between", ""] {
            let err = Operator::parse(token).unwrap_err();
            assert!(matches!(err, SqlError::UnsupportedOperator(t) if t == token));
        }
    }

    #[test]
    fn test_nullability() {
        assert!(Operator::IsNull.is_nullability());
        assert!(Operator::IsNotNull.is_nullability());
        assert!(!Operator::Is.is_nullability());
    }
}
