use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// `{ success, message, data }` body shared by every booking endpoint.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success<M: Into<String>>(message: M, data: T) -> Json<Self> {
        Json(Envelope {
            success: true,
            message: message.into(),
            data,
        })
    }
}

impl Envelope<Value> {
    pub fn failure<M: Into<String>>(message: M) -> Self {
        Envelope {
            success: false,
            message: message.into(),
            data: Value::Array(Vec::new()),
        }
    }

    pub fn empty<M: Into<String>>(message: M) -> Json<Self> {
        Envelope::success(message, Value::Array(Vec::new()))
    }
}
