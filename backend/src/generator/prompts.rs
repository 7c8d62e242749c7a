use serde_json::{json, Value};

pub fn prize_prompt(theme: &str, count: usize) -> String {
    format!(
        "Generate a list of exactly {} short, creative, and fun items (in Chinese) for a 'Spin the Wheel' game based on the theme: \"{}\". Keep texts concise (under 10 Chinese characters).",
        count,
        theme.replace('"', "'"),
    )
}

/// Structured-output schema: `{ "prizes": [string] }`.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "prizes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of generated prize names"
            }
        },
        "required": ["prizes"]
    })
}
