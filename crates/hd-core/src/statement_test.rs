use super::*;

#[test]
fn test_split_without_separator_yields_whole_input() {
    assert_eq!(split_statements("SHOW TABLES"), vec!["SHOW TABLES"]);
}

#[test]
fn test_split_empty_input() {
    assert_eq!(split_statements(""), vec![""]);
}

#[test]
fn test_split_trailing_separator_leaves_empty_statement() {
    let parts = split_statements("CREATE VIEW v AS SELECT 1;");
    assert_eq!(parts, vec!["CREATE VIEW v AS SELECT 1", ""]);
}

#[test]
fn test_split_normalizes_newlines() {
    let parts = split_statements("CREATE TABLE `t`(\n  `a` int)\r\nLOCATION\n  'x';\nDROP TABLE t;");
    assert_eq!(parts[0], "CREATE TABLE `t`(   `a` int) LOCATION   'x'");
    assert_eq!(parts[1], " DROP TABLE t");
    assert_eq!(parts[2], "");
}

#[test]
fn test_split_ignores_separator_in_string_literal() {
    let ddl = "CREATE TABLE t (a int)\nWITH SERDEPROPERTIES (\n  'field.delim'=';');\nCREATE VIEW v AS SELECT 1;";
    let parts = split_statements(ddl);
    assert_eq!(parts.len(), 3);
    assert!(parts[0].contains("'field.delim'=';'"));
    assert!(parts[1].contains("CREATE VIEW v"));
}

#[test]
fn test_split_honors_backslash_escape_in_literal() {
    let parts = split_statements(r"COMMENT 'it\'s;fine'; next");
    assert_eq!(parts, vec![r"COMMENT 'it\'s;fine'", " next"]);
}

#[test]
fn test_parse_create_table() {
    let stmt = Statement::parse("CREATE TABLE `t`(   `a` int)");
    assert_eq!(stmt.kind, StatementKind::CreateTable);
    assert_eq!(stmt.name.as_deref(), Some("`t`"));
    assert_eq!(stmt.bare_name().as_deref(), Some("t"));
    assert!(!stmt.is_external);
}

#[test]
fn test_parse_external_table_with_leading_space() {
    let stmt = Statement::parse("  CREATE EXTERNAL TABLE db.events (id int)");
    assert_eq!(stmt.kind, StatementKind::CreateTable);
    assert_eq!(stmt.name.as_deref(), Some("db.events"));
    assert!(stmt.is_external);
}

#[test]
fn test_parse_view() {
    let stmt = Statement::parse("CREATE VIEW v AS SELECT 1");
    assert_eq!(stmt.kind, StatementKind::CreateView);
    assert_eq!(stmt.name.as_deref(), Some("v"));
}

#[test]
fn test_parse_skips_if_not_exists() {
    let stmt = Statement::parse("CREATE TABLE IF NOT EXISTS `t`(a int)");
    assert_eq!(stmt.name.as_deref(), Some("`t`"));
}

#[test]
fn test_parse_other_statements() {
    let stmt = Statement::parse("DROP TABLE t");
    assert_eq!(stmt.kind, StatementKind::Other);
    assert_eq!(stmt.name, None);
    assert!(!stmt.is_unrecognized_create());
}

#[test]
fn test_malformed_create_is_other_and_flagged() {
    let stmt = Statement::parse("CREATE TABLE (a int)");
    assert_eq!(stmt.kind, StatementKind::Other);
    assert!(stmt.is_unrecognized_create());

    let materialized = Statement::parse("CREATE MATERIALIZED VIEW mv AS SELECT 1");
    assert!(materialized.is_unrecognized_create());
}

#[test]
fn test_keywords_are_case_sensitive() {
    let stmt = Statement::parse("create table t (a int)");
    assert_eq!(stmt.kind, StatementKind::Other);
}

#[test]
fn test_partitioned_detection() {
    let partitioned = Statement::parse("CREATE TABLE `t`( `a` int) PARTITIONED BY ( `ds` string)");
    assert!(partitioned.is_partitioned_table());

    let plain = Statement::parse("CREATE TABLE `t`( `a` int)");
    assert!(!plain.is_partitioned_table());

    let view = Statement::parse("CREATE VIEW v AS SELECT * FROM t PARTITIONED BY");
    assert!(!view.is_partitioned_table());
}

#[test]
fn test_parse_statements_skips_blanks() {
    let stmts = parse_statements("DROP TABLE t;\n\nCREATE TABLE t (a int);\n");
    assert_eq!(stmts.len(), 2);
    assert_eq!(stmts[1].kind, StatementKind::CreateTable);
}

#[test]
fn test_split_drops_line_comments() {
    let parts = split_statements("CREATE VIEW `v` AS SELECT 1 -- don't\n;\nDROP TABLE t;");
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "CREATE VIEW `v` AS SELECT 1  ");
    assert_eq!(parts[1], " DROP TABLE t");
}

#[test]
fn test_split_keeps_dashes_inside_literals() {
    let parts = split_statements("SELECT '--;' AS x; next");
    assert_eq!(parts, vec!["SELECT '--;' AS x", " next"]);
}

#[test]
fn test_partitioned_by_in_comment_literal_not_detected() {
    let stmt = Statement::parse("CREATE TABLE `u`( `a` int COMMENT 'PARTITIONED BY day upstream')");
    assert_eq!(stmt.kind, StatementKind::CreateTable);
    assert!(!stmt.is_partitioned_table());

    let quoted = Statement::parse(
        "CREATE TABLE `t`( `a` int COMMENT 'it\\'s PARTITIONED BY hour') PARTITIONED BY ( `ds` string)",
    );
    assert!(quoted.is_partitioned_table());
}
