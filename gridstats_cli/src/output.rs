use anyhow::Result;
use serde_json::{Map, Value};
use tabled::{Table, Tabled};

use gridstats_lib::GameRecord;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn build_field_rows(record: &GameRecord) -> Vec<FieldRow> {
    record
        .columns
        .iter()
        .zip(record.values.iter())
        .map(|(column, value)| FieldRow {
            field: column.clone(),
            value: value.clone(),
        })
        .collect()
}

fn record_to_json(record: &GameRecord) -> Value {
    let mut map = Map::new();
    map.insert("game_id".to_string(), Value::from(record.game_id));
    for (column, value) in record.columns.iter().zip(record.values.iter()) {
        map.insert(column.clone(), Value::String(value.clone()));
    }
    Value::Object(map)
}

// -- Table output --

pub fn print_record_table(record: &GameRecord) {
    println!("{}", Table::new(build_field_rows(record)));
}

// -- JSON output --

pub fn print_record_json(record: &GameRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&record_to_json(record))?);
    Ok(())
}
