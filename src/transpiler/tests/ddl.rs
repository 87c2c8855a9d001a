//! Column DDL, CREATE TABLE and CREATE INDEX tests.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::error::SqlError;
use crate::transpiler::ToSql;

fn column_sql(column: ColumnDefinition) -> String {
    column.to_sql().unwrap().expression
}

fn id_column() -> ColumnDefinition {
    ColumnDefinition::int("foo").not_null().primary_key().auto_increment()
}

#[test]
fn test_table_with_foreign_key() {
    let sql = TableQuery::create("users")
        .column(id_column())
        .foreign_key(
            ForeignKeyDefinition::new("parent_id")
                .references("group", "id")
                .on_delete(ReferentialAction::Cascade)
                .on_update(ReferentialAction::Cascade),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql.expression,
        "CREATE TABLE `users` (`foo` INT NOT NULL AUTO_INCREMENT , PRIMARY KEY (`foo`),FOREIGN KEY (`parent_id`) REFERENCES `group`(`id`) ON DELETE CASCADE ON UPDATE CASCADE)"
    );
    assert!(sql.bindings.is_empty());
}

#[test]
fn test_table_with_default_referential_action() {
    let sql = TableQuery::create("users")
        .column(id_column())
        .foreign_key(ForeignKeyDefinition::new("parent_id").references("group", "id"))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql.expression,
        "CREATE TABLE `users` (`foo` INT NOT NULL AUTO_INCREMENT , PRIMARY KEY (`foo`),FOREIGN KEY (`parent_id`) REFERENCES `group`(`id`) ON DELETE NO ACTION ON UPDATE NO ACTION)"
    );
}

#[test]
fn test_primary_keys() {
    let sql = TableQuery::create("users").column(id_column()).to_sql().unwrap();
    assert_eq!(
        sql.expression,
        "CREATE TABLE `users` (`foo` INT NOT NULL AUTO_INCREMENT , PRIMARY KEY (`foo`))"
    );

    let sql = TableQuery::create("users")
        .column(id_column())
        .column(ColumnDefinition::int("bar").not_null().primary_key().auto_increment())
        .to_sql()
        .unwrap();
    assert_eq!(
        sql.expression,
        "CREATE TABLE `users` (`foo` INT NOT NULL AUTO_INCREMENT,`bar` INT NOT NULL AUTO_INCREMENT , PRIMARY KEY (`foo`,`bar`))"
    );
}

#[test]
fn test_table_without_keys() {
    let sql = TableQuery::create("t")
        .schema("spine")
        .column(ColumnDefinition::string("name"))
        .to_sql()
        .unwrap();
    assert_eq!(sql.expression, "CREATE TABLE `spine`.`t` (`name` VARCHAR(255))");

    let sql = TableQuery::create("t")
        .column(ColumnDefinition::int("parent_id"))
        .foreign_key(
            ForeignKeyDefinition::new("parent_id")
                .references("t", "id")
                .on_delete(ReferentialAction::SetNull),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql.expression,
        "CREATE TABLE `t` (`parent_id` INT , FOREIGN KEY (`parent_id`) REFERENCES `t`(`id`) ON DELETE SET NULL ON UPDATE NO ACTION)"
    );
}

#[test]
fn test_table_invalid_arguments() {
    let err = TableQuery::create("t").to_sql().unwrap_err();
    assert!(matches!(err, SqlError::InvalidArgument(_)));

    let err = TableQuery::create("t")
        .column(ColumnDefinition::int("a"))
        .foreign_key(ForeignKeyDefinition::new("a"))
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, SqlError::InvalidArgument(_)));

    let err = TableQuery::default()
        .column(ColumnDefinition::int("a"))
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, SqlError::Construction(_)));
}

#[test]
fn test_column_modifiers() {
    assert_eq!(
        column_sql(ColumnDefinition::string("foo").charset("utf8")),
        "`foo` VARCHAR(255) CHARACTER SET 'utf8'"
    );
    assert_eq!(
        column_sql(ColumnDefinition::string("foo").collation("utf8_bin")),
        "`foo` VARCHAR(255) COLLATE 'utf8_bin'"
    );
    assert_eq!(
        column_sql(ColumnDefinition::int("foo").unsigned().auto_increment()),
        "`foo` INT UNSIGNED AUTO_INCREMENT"
    );
    assert_eq!(
        column_sql(ColumnDefinition::text("foo").comment("spine comment")),
        "`foo` TEXT COMMENT 'spine comment'"
    );
    assert_eq!(column_sql(ColumnDefinition::text("foo").not_null()), "`foo` TEXT NOT NULL");
}

#[test]
fn test_column_modifier_order() {
    let column = ColumnDefinition::string_len("name", 64)
        .comment("c")
        .default("x")
        .not_null()
        .collation("utf8mb4_bin")
        .charset("utf8mb4");
    assert_eq!(
        column_sql(column),
        "`name` VARCHAR(64) CHARACTER SET 'utf8mb4' COLLATE 'utf8mb4_bin' NOT NULL DEFAULT 'x' COMMENT 'c'"
    );
}

#[test]
fn test_column_defaults() {
    assert_eq!(
        column_sql(ColumnDefinition::int("foo").unsigned().default(1)),
        "`foo` INT UNSIGNED DEFAULT 1"
    );
    assert_eq!(
        column_sql(ColumnDefinition::string("foo").default("abc")),
        "`foo` VARCHAR(255) DEFAULT 'abc'"
    );
    assert_eq!(
        column_sql(ColumnDefinition::string("foo").default("  it's  ")),
        "`foo` VARCHAR(255) DEFAULT 'it''s'"
    );
    assert_eq!(column_sql(ColumnDefinition::string("foo").default("   ")), "`foo` VARCHAR(255)");
    assert_eq!(
        column_sql(ColumnDefinition::timestamp("foo").default(Raw::new("CURRENT_TIMESTAMP"))),
        "`foo` TIMESTAMP DEFAULT CURRENT_TIMESTAMP"
    );
}

#[test]
fn test_blank_modifiers_are_omitted() {
    let column = ColumnDefinition::string("foo")
        .charset("")
        .collation(" ")
        .comment("")
        .default(Raw::new(""));
    assert_eq!(column_sql(column), "`foo` VARCHAR(255)");

    let column = ColumnDefinition::int("foo").not_null().default(Raw::new("  ")).comment("id");
    assert_eq!(column_sql(column), "`foo` INT NOT NULL COMMENT 'id'");
}

#[test]
fn test_column_types() {
    let cases = [
        (ColumnType::Smallint, "`foo` SMALLINT"),
        (ColumnType::Tinyint, "`foo` TINYINT"),
        (ColumnType::Mediumint, "`foo` MEDIUMINT"),
        (ColumnType::Int, "`foo` INT"),
        (ColumnType::Bigint, "`foo` BIGINT"),
        (ColumnType::Tinytext, "`foo` TINYTEXT"),
        (ColumnType::Mediumtext, "`foo` MEDIUMTEXT"),
        (ColumnType::Longtext, "`foo` LONGTEXT"),
        (ColumnType::Text, "`foo` TEXT"),
        (ColumnType::String, "`foo` VARCHAR(255)"),
        (ColumnType::Float, "`foo` FLOAT(8,2)"),
        (ColumnType::Decimal, "`foo` DECIMAL(8,2)"),
        (ColumnType::Boolean, "`foo` TINYINT(1)"),
        (ColumnType::Bit, "`foo` BIT"),
        (ColumnType::Double, "`foo` DOUBLE(8,2)"),
        (ColumnType::Date, "`foo` DATE"),
        (ColumnType::Time, "`foo` TIME"),
        (ColumnType::DateTime, "`foo` DATETIME"),
        (ColumnType::Timestamp, "`foo` TIMESTAMP"),
        (ColumnType::Json, "`foo` JSON"),
        (ColumnType::Binary, "`foo` BINARY"),
        (ColumnType::Blob, "`foo` BLOB"),
    ];
    for (column_type, expected) in cases {
        assert_eq!(column_sql(ColumnDefinition::new("foo", column_type)), expected);
    }

    assert_eq!(column_sql(ColumnDefinition::decimal("foo", 10, 4)), "`foo` DECIMAL(10,4)");
    assert_eq!(
        column_sql(ColumnDefinition::set("foo", ["bar", "baz"])),
        "`foo` SET('bar','baz')"
    );
    assert_eq!(
        column_sql(ColumnDefinition::enumeration("foo", ["on", "off"])),
        "`foo` ENUM('on','off')"
    );

    let err = ColumnDefinition::set("foo", Vec::<String>::new()).to_sql().unwrap_err();
    assert!(matches!(err, SqlError::InvalidArgument(_)));
}

#[test]
fn test_create_index() {
    let sql = IndexQuery::table("metadata")
        .unique()
        .name("metadata_owners_idx")
        .columns(["OwnerId", "Key"])
        .to_sql()
        .unwrap();
    assert_eq!(
        sql.expression,
        "CREATE UNIQUE INDEX `metadata_owners_idx` ON `metadata` (`OwnerId`,`Key`)"
    );

    let sql = IndexQuery::table("users").name("users_email_idx").columns(["email"]).to_sql().unwrap();
    assert_eq!(sql.expression, "CREATE INDEX `users_email_idx` ON `users` (`email`)");
}

#[test]
fn test_create_index_invalid_arguments() {
    let err = IndexQuery::table("users").columns(["email"]).to_sql().unwrap_err();
    assert!(matches!(err, SqlError::InvalidArgument(_)));

    let err = IndexQuery::table("users").name("idx").to_sql().unwrap_err();
    assert!(matches!(err, SqlError::InvalidArgument(_)));
}
