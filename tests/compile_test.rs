//! End-to-end compilation through the public API.

use chrono::NaiveDate;
use orm_sql::prelude::*;
use pretty_assertions::assert_eq;

fn sample_queries() -> Vec<Query> {
    vec![
        Query::Select(
            SelectQuery::from_as("users", "u")
                .select("id")
                .count("*", Some("n"))
                .inner_join("orders", "id", "user_id")
                .where_in("status", ["new", "paid"])
                .or_where_group(|g| g.where_between("age", 18, 30).where_not_null("email"))
                .group_by("id")
                .skip(20)
                .order_by_descending("id"),
        ),
        Query::Insert(
            InsertQuery::table("users")
                .values(Row::new().set("id", 1).set_default("active"))
                .values(Row::new().set("id", 2).set("email", "x@y.z"))
                .on_duplicate(OnDuplicate::new().update(["id"])),
        ),
        Query::Update(UpdateQuery::table("users").set("active", false).where_eq("id", 3)),
        Query::Delete(DeleteQuery::from("users").where_not_in("id", [1, 2]).take(100)),
        Query::CreateTable(
            TableQuery::create("users")
                .column(ColumnDefinition::int("id").not_null().primary_key().auto_increment())
                .column(ColumnDefinition::string("email").not_null()),
        ),
        Query::CreateIndex(IndexQuery::table("users").name("email_idx").columns(["email"])),
        Query::Select(
            SelectQuery::from("roles")
                .with_recursive("parent_id", "id")
                .where_eq("id", 1)
                .take(5),
        ),
        Query::Select(
            SelectQuery::from("events")
                .where_in("day", [Value::from("2024-02-29"), Value::Date(leap_day())])
                .where_eq("at", Value::DateTime(leap_day().and_hms_opt(8, 0, 0).unwrap())),
        ),
        Query::Update(UpdateQuery::table("users").set("roles", vec!["read", "write"])),
    ]
}

fn leap_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

#[test]
fn placeholder_count_matches_bindings() {
    for query in sample_queries() {
        let sql = query.to_sql().unwrap();
        assert_eq!(
            sql.placeholder_count(),
            sql.bindings.len(),
            "{} -> {}",
            query.kind(),
            sql.expression
        );
    }
}

#[test]
fn compiling_twice_is_identical() {
    for query in sample_queries() {
        assert_eq!(query.to_sql().unwrap(), query.to_sql().unwrap());
    }
}

#[test]
fn query_documents_round_trip_through_json() {
    for query in sample_queries() {
        let json = serde_json::to_string(&query).unwrap();
        let loaded = orm_sql::parse_query(&json).unwrap();
        assert_eq!(loaded.to_sql().unwrap(), query.to_sql().unwrap());
    }
}

#[test]
fn unsigned_bindings_reload_as_signed() {
    let query = SelectQuery::from("t").where_in("n", [Value::UInt(7), Value::from("2024-02-29")]);
    let json = serde_json::to_string(&Query::Select(query)).unwrap();
    let sql = orm_sql::parse_query(&json).unwrap().to_sql().unwrap();
    assert_eq!(sql.bindings, vec![Value::Int(7), Value::from("2024-02-29")]);
}

#[test]
fn hand_written_document() {
    let query = orm_sql::parse_query(
        r#"{
            "update": {
                "table": "t",
                "values": [["x", 1]],
                "where": {
                    "statements": [
                        {"comparison": {"column": {"name": "id"}, "op": "eq", "value": 5}}
                    ]
                }
            }
        }"#,
    )
    .unwrap();
    let sql = query.to_sql().unwrap();
    assert_eq!(sql.expression, "UPDATE `t` SET `x` = ? WHERE `id` = ?");
    assert_eq!(sql.bindings, vec![Value::Int(1), Value::Int(5)]);
}

#[test]
fn invalid_document_is_json_error() {
    let err = orm_sql::parse_query(r#"{"select": 42}"#).unwrap_err();
    assert!(matches!(err, SqlError::Json(_)));
}
