use serde_json::json;

use super::Row;
use crate::commands::helpers::LoadedInput;
use graphtrace_core::error::Result;

/// Output the comparison as a JSON document
pub fn output_compare_json(input: &LoadedInput, rows: &[Row]) -> Result<()> {
    let results: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| -> Result<serde_json::Value> {
            let mut value = serde_json::to_value(&row.summary)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("found".to_string(), json!(row.trace.found()));
                obj.insert("path".to_string(), json!(row.trace.path()));
            }
            Ok(value)
        })
        .collect::<Result<_>>()?;

    let output = json!({
        "graph": {
            "file": input.path.display().to_string(),
            "directed": input.graph.directed(),
            "vertices": input.graph.vertex_count(),
            "edges": input.graph.edge_count(),
        },
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
