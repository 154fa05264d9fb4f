//! Build a filtered query from reusable fragments and print what would be
//! handed to the driver.

use pg_query_config::{ComposeResult, QueryConfig, query_config};

fn status_filter(status: Option<&str>) -> QueryConfig {
    let mut q = query_config("status =");
    q.append_raw(" ").push_bind_opt(status.map(str::to_string));
    q
}

fn id_filter(ids: &[i64]) -> QueryConfig {
    let mut q = query_config("id IN");
    q.open_brackets()
        .bind_values(ids.iter().copied().map(pg_query_config::Param::new))
        .append_raw(")");
    q
}

fn main() -> ComposeResult<()> {
    let mut active = query_config("SELECT id, username FROM");
    active.append_identifier("public.users")?;
    active.append_text("WHERE").append_query_config(&status_filter(Some("active")));
    active.append_text("AND").append_query_config(&id_filter(&[3, 5, 8]));

    let mut archived = query_config("SELECT id, username FROM");
    archived.append_identifier("archive.users")?;
    archived.append_text("WHERE").append_query_config(&id_filter(&[13]));

    let mut union = active.merge(query_config("UNION ALL").append_query_config(&archived));
    union.append_text("ORDER BY");
    union.append_identifier("username")?;
    union.validate()?;

    println!("sql:    {union}");
    println!("params: {}", union.params_ref().len());
    Ok(())
}
