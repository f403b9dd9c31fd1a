// Conversion from plain JSON Schema to the OpenAPI subset Gemini accepts in
// `generationConfig.responseSchema`.

use serde_json::{Map, Value};

/// Returns a copy of `schema` with every `type` keyword upper-cased
/// (`"object"` → `"OBJECT"`), recursing through `properties` and `items`.
/// Keys Gemini ignores are passed through untouched.
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                let converted = match (key.as_str(), value) {
                    ("type", Value::String(t)) => Value::String(t.to_ascii_uppercase()),
                    // `required` and `enum` are lists of names, not schemas
                    ("required", Value::Array(_)) | ("enum", Value::Array(_)) => value.clone(),
                    _ => to_gemini_schema(value),
                };
                out.insert(key.clone(), converted);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_types_are_uppercased_at_every_depth() {
        let schema = json!({
            "type": "object",
            "properties": {
                "tags": { "type": "array", "items": { "type": "string" } },
                "count": { "type": "integer", "description": "how many" }
            },
            "required": ["tags"]
        });

        let converted = to_gemini_schema(&schema);
        assert_eq!(converted["type"], "OBJECT");
        assert_eq!(converted["properties"]["tags"]["type"], "ARRAY");
        assert_eq!(converted["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(converted["properties"]["count"]["type"], "INTEGER");
        assert_eq!(converted["properties"]["count"]["description"], "how many");
        assert_eq!(converted["required"], json!(["tags"]));
    }

    #[test]
    fn test_property_named_type_is_treated_as_a_schema() {
        let schema = json!({
            "type": "object",
            "properties": { "type": { "type": "string" } }
        });
        let converted = to_gemini_schema(&schema);
        assert_eq!(converted["properties"]["type"]["type"], "STRING");
    }

    #[test]
    fn test_enum_values_keep_their_case() {
        let schema = json!({ "type": "string", "enum": ["low", "high"] });
        let converted = to_gemini_schema(&schema);
        assert_eq!(converted["enum"], json!(["low", "high"]));
    }

    #[test]
    fn test_property_named_required_is_treated_as_a_schema() {
        let schema = json!({
            "type": "object",
            "properties": {
                "required": { "type": "boolean" },
                "enum": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["required"]
        });
        let converted = to_gemini_schema(&schema);
        assert_eq!(converted["properties"]["required"]["type"], "BOOLEAN");
        assert_eq!(converted["properties"]["enum"]["type"], "ARRAY");
        assert_eq!(converted["properties"]["enum"]["items"]["type"], "STRING");
        assert_eq!(converted["required"], json!(["required"]));
    }
}
