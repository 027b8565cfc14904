/// Success response envelopes
///
/// Every success body is a JSON object with `status: "success"` plus the
/// action-specific payload fields. The project surface's list actions are
/// the one exception: they return bare arrays, straight from the handler.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// `{"status": "success", "message": ...}`
pub fn message(msg: &str) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": msg,
    }))
}

/// `{"status": "success", "message": ..., "id": ...}`
///
/// Used by create actions that report the generated row id.
pub fn created(msg: &str, id: i64) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": msg,
        "id": id,
    }))
}

/// `{"status": "success", "<key>": <payload>}`
pub fn payload<T: Serialize>(key: &str, value: T) -> Json<Value> {
    let mut body = serde_json::Map::new();
    body.insert("status".to_string(), json!("success"));
    body.insert(key.to_string(), json!(value));
    Json(Value::Object(body))
}
