use crate::errors::{invalid_input, Result};
use botcmd_core::CommandTable;
use serde::Serialize;
use serde_json::Value;

const LINE_KEY: &str = "responseLine1";

/// One command read from a legacy document, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEntry {
    pub name: String,
    pub lines: Vec<String>,
}

#[derive(Serialize)]
struct LegacyLine<'a> {
    #[serde(rename = "responseLine1")]
    line: &'a str,
}

/// Parse a legacy document, keeping document order
///
/// Each value is either a list of `{"responseLine1": ...}` objects or a bare
/// string (single-line command). List items that are not objects are skipped;
/// objects without the key contribute an empty line, which the save filter
/// later drops.
pub fn parse_document(text: &str) -> Result<Vec<LegacyEntry>> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| invalid_input("parse_legacy", format!("malformed JSON: {}", e)))?;

    let Value::Object(map) = doc else {
        return Err(invalid_input(
            "parse_legacy",
            "expected a JSON object mapping command names to responses",
        ));
    };

    map.into_iter()
        .map(|(name, value)| {
            let lines = match value {
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|item| {
                        item.get(LINE_KEY)
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string()
                    })
                    .collect(),
                Value::String(line) => vec![line],
                other => {
                    return Err(invalid_input(
                        "parse_legacy",
                        format!("unsupported response value {}", other),
                    )
                    .with_command(name))
                }
            };
            Ok(LegacyEntry { name, lines })
        })
        .collect()
}

/// Render a table as a legacy document, 4-space indented
pub fn render_document(table: &CommandTable) -> Result<Vec<u8>> {
    let mut doc = serde_json::Map::new();
    for command in table {
        let lines: Vec<LegacyLine<'_>> = command
            .responses()
            .iter()
            .map(|line| LegacyLine { line })
            .collect();
        let value = serde_json::to_value(lines)
            .map_err(|e| invalid_input("render_legacy", e.to_string()))?;
        doc.insert(command.name().to_string(), value);
    }

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    Value::Object(doc)
        .serialize(&mut serializer)
        .map_err(|e| invalid_input("render_legacy", e.to_string()))?;
    out.push(b'\n');

    Ok(out)
}
