use super::*;

#[test]
fn test_escape_columns_and_partition_keys() {
    let input = "CREATE TABLE `t` (\n  a INT,\n  b STRING)\n PARTITIONED BY (\n  ds STRING);";
    assert_eq!(
        escape_columns(input),
        "CREATE TABLE `t` (\n  `a` INT,\n  `b` STRING)\n PARTITIONED BY (\n  `ds` STRING);"
    );
}

#[test]
fn test_escape_external_table() {
    let input = "CREATE EXTERNAL TABLE logs(\n\tlevel string,\n\tmsg string)\nLOCATION\n  'hdfs://x'";
    assert_eq!(
        escape_columns(input),
        "CREATE EXTERNAL TABLE logs(\n\t`level` string,\n\t`msg` string)\nLOCATION\n  'hdfs://x'"
    );
}

#[test]
fn test_escape_stops_at_unindented_line() {
    let input = "CREATE TABLE t (\n  a int)\nCOMMENT 'x'\n  not_a_column string";
    assert_eq!(
        escape_columns(input),
        "CREATE TABLE t (\n  `a` int)\nCOMMENT 'x'\n  not_a_column string"
    );
}

#[test]
fn test_escape_leaves_quoted_names_alone() {
    let input = "CREATE TABLE `t`(\n  `a` int,\n  `select` string)";
    assert_eq!(escape_columns(input), input);
}

#[test]
fn test_escape_is_idempotent() {
    let input = "CREATE TABLE t (\n  a INT,\n  b STRING)\nPARTITIONED BY (\n  ds STRING)";
    let once = escape_columns(input);
    assert_eq!(escape_columns(&once), once);
}

#[test]
fn test_escape_skips_non_identifier_tokens() {
    let input = "CREATE TABLE t (\n  a int\n  )";
    assert_eq!(escape_columns(input), "CREATE TABLE t (\n  `a` int\n  )");
}

#[test]
fn test_escape_ignores_views() {
    let input = "CREATE VIEW v AS\n  SELECT a\n  FROM t";
    assert_eq!(escape_columns(input), input);
}

#[test]
fn test_escape_multiple_tables() {
    let input = "CREATE TABLE a (\n  x int);\nCREATE TABLE b (\n  y int);\n";
    assert_eq!(
        escape_columns(input),
        "CREATE TABLE a (\n  `x` int);\nCREATE TABLE b (\n  `y` int);\n"
    );
}

#[test]
fn test_escape_keeps_rest_of_line_byte_for_byte() {
    let input = "CREATE TABLE t (\n    amount   decimal(10,2)   COMMENT 'a, b',  ";
    assert_eq!(
        escape_columns(input),
        "CREATE TABLE t (\n    `amount`   decimal(10,2)   COMMENT 'a, b',  "
    );
}

#[test]
fn test_escape_after_if_not_exists_header() {
    let input = "CREATE TABLE IF NOT EXISTS t (\n  a int)";
    assert_eq!(escape_columns(input), "CREATE TABLE IF NOT EXISTS t (\n  `a` int)");
}
