use portal_lib::Envelope;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

pub fn print_envelope(envelope: &Envelope, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(envelope),
        OutputFormat::Table => println!("{}", build_table(envelope)),
        OutputFormat::Markdown => {
            let mut table = build_table(envelope);
            table.with(Style::markdown());
            println!("{}", table);
        }
    }
}

// -- Row builders --

/// Picks the part of the envelope worth tabulating: a top-level `data`
/// field when present, else the whole body.
fn table_source(envelope: &Envelope) -> &Value {
    match envelope.get("data") {
        Some(data) if data.is_array() || data.is_object() => data,
        _ => envelope,
    }
}

/// Header and rows for `value`. Arrays of objects get one column per key,
/// in first-seen order; a single object becomes Field/Value pairs.
fn build_rows(value: &Value) -> (Vec<String>, Vec<Vec<String>>) {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let mut columns: Vec<String> = Vec::new();
            for item in items {
                if let Value::Object(map) = item {
                    for key in map.keys() {
                        if !columns.contains(key) {
                            columns.push(key.clone());
                        }
                    }
                }
            }
            let rows = items
                .iter()
                .map(|item| {
                    columns
                        .iter()
                        .map(|c| item.get(c).map(format_cell).unwrap_or_default())
                        .collect()
                })
                .collect();
            (columns, rows)
        }
        Value::Array(items) => (
            vec!["Value".to_string()],
            items.iter().map(|v| vec![format_cell(v)]).collect(),
        ),
        Value::Object(map) => (
            vec!["Field".to_string(), "Value".to_string()],
            map.iter()
                .map(|(k, v)| vec![k.clone(), format_cell(v)])
                .collect(),
        ),
        other => (vec!["Value".to_string()], vec![vec![format_cell(other)]]),
    }
}

fn build_table(envelope: &Envelope) -> Table {
    let (header, rows) = build_rows(table_source(envelope));
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    builder.build()
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
