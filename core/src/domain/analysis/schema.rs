use serde_json::json;

/// JSON response schema handed to the vision model so its verdict
/// arrives in the same shape the local engine produces.
pub fn get_vision_verdict_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "status": {
                "type": "string",
                "enum": ["RED", "YELLOW", "GREEN", "UNKNOWN"]
            },
            "found": {
                "type": "array",
                "items": { "type": "string" }
            },
            "message": { "type": "string" },
            "confidence": {
                "type": "number",
                "minimum": 0,
                "maximum": 1
            }
        },
        "required": ["status", "found", "message"]
    })
}
