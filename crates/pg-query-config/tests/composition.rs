//! End-to-end composition through the public API.

use pg_query_config::placeholder::placeholders;
use pg_query_config::{Bind, ComposeError, QueryConfig, QueryOptions, RowMode, query_config};
use serde_json::{Value, json};

fn cfg(text: &str, values: Vec<Value>) -> QueryConfig<Value> {
    QueryConfig::from_parts(text, values)
}

#[test]
fn scenario_append_text() {
    let mut q = cfg("SELECT 1", vec![]);
    q.append_text("FROM users");
    assert_eq!(q, cfg("SELECT 1 FROM users", vec![]));
}

#[test]
fn scenario_bind_value() {
    let mut q = cfg("WHERE id =", vec![]);
    q.bind_value(json!(42));
    assert_eq!(q, cfg("WHERE id =$1", vec![json!(42)]));
}

#[test]
fn scenario_append_query_config() {
    let mut source = cfg("SELECT * FROM t WHERE a=$1", vec![json!("x")]);
    source.append_query_config(&cfg("AND b=$1", vec![json!("y")]));
    assert_eq!(
        source,
        cfg("SELECT * FROM t WHERE a=$1 AND b=$2", vec![json!("x"), json!("y")])
    );
}

#[test]
fn scenario_merge() {
    let source = cfg("SELECT 1", vec![]);
    let ext = cfg("UNION SELECT $1", vec![json!(2)]);
    let merged = source.merge(&ext);

    assert_eq!(merged, cfg("SELECT 1 UNION SELECT $1", vec![json!(2)]));
    assert_eq!(source, cfg("SELECT 1", vec![]));
    assert_eq!(ext, cfg("UNION SELECT $1", vec![json!(2)]));
}

#[test]
fn scenario_bind_values() {
    let mut q = cfg("IN (", vec![json!("a")]);
    q.bind_values_separated([json!(10), json!(20)], ", ");
    assert!(q.text.ends_with("$2, $3"));
    assert_eq!(q.values, vec![json!("a"), json!(10), json!(20)]);
}

#[test]
fn schema_qualified_identifier() {
    let mut q = QueryConfig::<Value>::empty();
    q.append_identifier("public.users").unwrap();
    assert_eq!(q.text, "\"public\".\"users\"");
}

#[test]
fn null_and_default_bind_nothing() {
    let mut q = cfg("", vec![json!(1)]);
    q.bind_value(Bind::Null);
    assert_eq!(q.text, "NULL");
    q.bind_value(Bind::Default);
    assert_eq!(q.text, "NULLDEFAULT");
    assert_eq!(q.values, vec![json!(1)]);
}

#[test]
fn append_query_config_shifts_every_placeholder() {
    for k in 0..4 {
        for m in 0..4 {
            let mut source = QueryConfig::<Value>::empty();
            source.bind_values((0..k).map(|i| json!(i)));

            let mut ext = cfg("x IN (", vec![]);
            ext.bind_values((0..m).map(|i| json!(100 + i)));
            let before: Vec<usize> = placeholders(&ext.text).collect();

            source.append_query_config(&ext);

            assert_eq!(source.values.len(), k + m);
            let after: Vec<usize> = placeholders(&source.text).skip(k).collect();
            let expected: Vec<usize> = before.iter().map(|n| n + k).collect();
            assert_eq!(after, expected, "k={k} m={m}");
            assert!(source.validate().is_ok());
        }
    }
}

#[test]
fn merge_leaves_inputs_identical() {
    let mut source = cfg("SELECT * FROM t WHERE a =", vec![]);
    source.append_raw(" ").bind_value(json!("x"));
    let mut ext = cfg("AND b IN (", vec![]);
    ext.bind_values([json!(1), Value::Null]).append_raw(")");

    let (source_before, ext_before) = (source.clone(), ext.clone());
    let merged = source.merge(&ext);

    assert_eq!(source, source_before);
    assert_eq!(ext, ext_before);
    assert_eq!(merged.text, "SELECT * FROM t WHERE a = $1 AND b IN ($2, $3)");
    assert_eq!(merged.values.len(), 3);
}

#[test]
fn nested_composition_stays_contiguous() {
    let mut inner = cfg("SELECT id FROM orgs WHERE region =", vec![]);
    inner.append_raw(" ").bind_value(json!("eu"));

    let mut filter = cfg("status =", vec![]);
    filter.append_raw(" ").bind_value(json!("active"));
    filter.append_text("AND org_id IN").open_brackets();
    filter.append_query_config(&inner).close_brackets();

    let mut q = cfg("SELECT * FROM users WHERE tenant =", vec![]);
    q.append_raw(" ").bind_value(json!(7));
    q.append_text("AND").append_query_config(&filter);

    assert_eq!(
        q.text,
        "SELECT * FROM users WHERE tenant = $1 AND status = $2 AND org_id IN ( SELECT id FROM orgs WHERE region = $3 )"
    );
    assert_eq!(q.values, vec![json!(7), json!("active"), json!("eu")]);
    assert!(q.validate().is_ok());
}

#[test]
fn literal_dollar_digits_are_renumbered() {
    let mut source = cfg("SELECT $1", vec![json!(1)]);
    source.append_query_config(&cfg("WHERE note = 'costs $5'", vec![]));
    assert_eq!(source.text, "SELECT $1 WHERE note = 'costs $6'");
}

#[test]
fn escape_failure_is_reported() {
    let mut q = cfg("SELECT", vec![]);
    let err = q.append_literal("a\0b").unwrap_err();
    assert!(err.is_escape_error());
    assert!(matches!(err, ComposeError::InvalidLiteral(_)));
}

#[test]
fn merge_with_driver_options() {
    let source = cfg("SELECT 1", vec![])
        .with_name("one")
        .with_extra(QueryOptions::new());
    let ext = cfg("UNION SELECT 2", vec![]).with_extra(QueryOptions::new().row_mode(RowMode::Array));

    let merged = source.merge(&ext);
    assert_eq!(merged.name.as_deref(), Some("one"));
    assert_eq!(merged.extra.row_mode, Some(RowMode::Array));
}

#[test]
fn driver_params_line_up_with_placeholders() {
    let mut q = query_config("INSERT INTO users (name, age, bio) VALUES");
    q.open_brackets();
    q.push_bind("alice").append_raw(", ");
    q.push_bind(30_i32).append_raw(", ");
    q.push_bind_opt(None::<String>);
    q.append_raw(")");

    assert_eq!(q.text, "INSERT INTO users (name, age, bio) VALUES ($1, $2, NULL)");
    assert_eq!(q.params_ref().len(), 2);
    assert!(q.validate().is_ok());
}
